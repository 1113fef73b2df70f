//! Property tests for record construction, setters and lock round trips

use autodep_package::PackageRecord;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn package_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_.-]{0,15}/[A-Za-z][A-Za-z0-9_.-]{0,15}"
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ -~]{0,24}")
}

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[ -~]{0,12}".prop_map(Value::String),
    ]
}

/// Nested plugin-style blocks: keys mapping to leaves, lists or sub-maps
fn json_object() -> impl Strategy<Value = Map<String, Value>> {
    let nested = json_leaf().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z-]{1,8}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    });
    prop::collection::btree_map("[a-z/-]{1,12}", nested, 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn name_is_lower_cased_pretty_name(name in package_name(), version in optional_text()) {
        let record = PackageRecord::new(name.clone(), version.as_deref());
        prop_assert_eq!(record.pretty_name(), name.as_str());
        prop_assert_eq!(record.name(), name.to_lowercase());
        prop_assert_eq!(record.pretty_version(), version.as_deref());
    }

    #[test]
    fn setters_store_values_unchanged(
        parent in optional_text(),
        package_type in optional_text(),
        url in optional_text(),
        operation in optional_text(),
        is_dev in any::<bool>(),
    ) {
        let mut record = PackageRecord::new("acme/pkg", None);
        record
            .set_parent_name(parent.clone())
            .set_type(package_type.clone())
            .set_url(url.clone())
            .set_operation(operation.clone())
            .set_is_dev(is_dev);

        prop_assert_eq!(record.parent_name(), parent.as_deref());
        prop_assert_eq!(record.package_type(), package_type.as_deref());
        prop_assert_eq!(record.url(), url.as_deref());
        prop_assert_eq!(record.operation(), operation.as_deref());
        prop_assert_eq!(record.is_dev(), is_dev);
    }

    #[test]
    fn lock_round_trip(
        name in package_name(),
        version in optional_text(),
        parent in optional_text(),
        package_type in optional_text(),
        url in optional_text(),
        operation in optional_text(),
        requires in prop::collection::hash_map("[a-z]{1,8}/[a-z]{1,8}", "[\\^~]?[0-9]\\.[0-9]", 0..4),
        configs in json_object(),
        autoload in json_object(),
        is_dev in any::<bool>(),
        created in "[ -~]{0,32}",
    ) {
        let mut original = PackageRecord::new(name, version.as_deref());
        original
            .set_parent_name(parent)
            .set_type(package_type)
            .set_url(url)
            .set_operation(operation)
            .set_requires(requires)
            .set_config(configs)
            .set_autoload(autoload)
            .set_is_dev(is_dev)
            .set_time(created);

        let restored =
            PackageRecord::create_from_lock(original.pretty_name(), &original.to_lock_map()).unwrap();
        prop_assert_eq!(restored, original);
    }

    #[test]
    fn has_config_false_for_scalar_block(key in "[a-z]{1,10}", name in "[a-z]{1,10}", scalar in any::<i64>()) {
        let mut configs = Map::new();
        configs.insert(key.clone(), json!(scalar));

        let mut record = PackageRecord::new("acme/pkg", None);
        record.set_config(configs);

        prop_assert!(record.has_config(&key, None));
        prop_assert!(!record.has_config(&key, Some(&name)));
        prop_assert_eq!(record.get_config(&key, Some(&name)), None::<&Value>);
    }
}
