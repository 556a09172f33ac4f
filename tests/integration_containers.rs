//! End-to-end behavior of container stacks: contract coupling between
//! `has` and `get`, decorator edge cases, and multi-layer pipelines.

use keystack::{
    AliasingContainer, CachingContainer, CompositeContainer, Container, ContainerExt,
    ContainerRef, DeprefixingContainer, Dictionary, HierarchyContainer, MappingContainer,
    MaskingContainer, NoOpContainer, PathContainer, PrefixingContainer, SegmentingContainer,
    Value,
};
use serde_json::json;
use std::rc::Rc;

/// The base contract: `has(k) == false` implies `get(k)` is not-found.
#[test]
fn test_has_false_implies_get_not_found_across_components() {
    let flat = Dictionary::from_iter([("present", Value::from(1))]);
    let components: Vec<ContainerRef> = vec![
        Rc::new(Dictionary::default()),
        Rc::new(NoOpContainer::new()),
        Rc::new(AliasingContainer::new(flat.clone(), [("alias", "present")])),
        Rc::new(PrefixingContainer::new(flat.clone(), "app.", true)),
        Rc::new(DeprefixingContainer::new(flat.clone(), "app.", false)),
        Rc::new(MaskingContainer::new(flat.clone(), false, [("present", true)])),
        Rc::new(CachingContainer::new(flat.clone())),
        Rc::new(CompositeContainer::new([Rc::new(flat) as ContainerRef])),
        Rc::new(HierarchyContainer::from_json(json!({"present": 1})).unwrap()),
    ];
    for (i, container) in components.iter().enumerate() {
        assert!(
            !container.has("definitely-absent").unwrap(),
            "component {i} claims the key"
        );
        let err = container.get("definitely-absent").unwrap_err();
        assert!(err.is_not_found(), "component {i} failed with the wrong kind: {err}");
    }
}

#[test]
fn test_dictionary_functional_update_round_trip() {
    let d = Dictionary::default();
    assert_eq!(d.with_added_mappings([("a", Value::from(1))]).get("a").unwrap().as_int(), Some(1));
    assert!(
        !Dictionary::from_iter([("a", Value::from(1))])
            .without_keys(["a"])
            .has("a")
            .unwrap()
    );
    // The original is unchanged after both calls.
    assert!(d.is_empty());
}

#[test]
fn test_path_container_over_nested_dictionaries() {
    let leaf = Dictionary::from_iter([("c", Value::from(42))]);
    let mid = Dictionary::from_iter([("b", Value::Container(Rc::new(leaf)))]);
    let root = Dictionary::from_iter([("a", Value::Container(Rc::new(mid)))]);
    let paths = PathContainer::new(root, ".");

    assert_eq!(paths.get("a.b.c").unwrap().as_int(), Some(42));

    let err = paths.get("a.x.c").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("'x'"));

    let err = paths.get("").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("path is empty"));
}

#[test]
fn test_segmenting_container_descends_flat_keys() {
    let flat = Dictionary::from_iter([("config.db.host", Value::from("localhost"))]);
    let tree = SegmentingContainer::new(Rc::new(flat), ".");

    let config = tree.get("config").unwrap();
    let db = config.as_container().unwrap().get("db").unwrap();
    let host = db.as_container().unwrap().get("host").unwrap();
    assert_eq!(host.as_str(), Some("localhost"));
}

#[test]
fn test_prefixing_non_strict_fallback_property() {
    let inner = Dictionary::from_iter([("x", Value::from("inner-x"))]);
    let prefixed = PrefixingContainer::new(inner, "app.", false);
    assert_eq!(prefixed.get("x").unwrap().as_str(), Some("inner-x"));
}

#[test]
fn test_caching_container_pins_first_resolution() {
    use std::cell::Cell;

    struct Ticking(Cell<i64>);
    impl Container for Ticking {
        fn has(&self, _key: &str) -> keystack::Result<bool> {
            Ok(true)
        }
        fn get(&self, _key: &str) -> keystack::Result<Value> {
            self.0.set(self.0.get() + 1);
            Ok(Value::from(self.0.get()))
        }
    }

    let cached = CachingContainer::new(Ticking(Cell::new(0)));
    let first = cached.get("k").unwrap();
    let second = cached.get("k").unwrap();
    assert_eq!(first, second);
}

/// A realistic layered configuration pipeline: aliasing over a cached
/// composite of a masked override layer and a hierarchical defaults tree.
#[test]
fn test_layered_configuration_pipeline() {
    let defaults = HierarchyContainer::from_json(json!({
        "db": {"host": "localhost", "port": 5432},
        "debug": false,
    }))
    .unwrap();
    let paths = PathContainer::new(Rc::new(defaults) as ContainerRef, ".");

    let overrides = Dictionary::from_iter([
        ("db.host", Value::from("db.internal")),
        ("secret", Value::from("hunter2")),
    ]);
    let safe_overrides = MaskingContainer::new(overrides, true, [("secret", false)]);

    let merged = CompositeContainer::new([
        Rc::new(safe_overrides) as ContainerRef,
        Rc::new(paths) as ContainerRef,
    ]);
    let cached = CachingContainer::new(merged);
    let config = AliasingContainer::new(cached, [("database", "db.host")]);

    // Override wins, and the alias reaches it.
    assert_eq!(config.get("database").unwrap().as_str(), Some("db.internal"));
    // Fallback walks the hierarchy through the path decorator.
    assert_eq!(config.get("db.port").unwrap().as_int(), Some(5432));
    // The masked key behaves as absent all the way up the stack.
    assert!(!config.has("secret").unwrap());
    assert!(config.get("secret").unwrap_err().is_not_found());
    // Defaults are applied only for misses.
    assert_eq!(config.get_or("debug", Value::from(true)).unwrap().as_bool(), Some(false));
    assert_eq!(config.get_or("missing", Value::from("dflt")).unwrap().as_str(), Some("dflt"));
}

/// Mapping decorators post-process whatever the stack below resolves.
#[test]
fn test_mapping_over_composite_stack() {
    let values = Dictionary::from_iter([("path", Value::from("/usr/local"))]);
    let merged = CompositeContainer::new([Rc::new(values) as ContainerRef]);
    let expanded = MappingContainer::new(merged, |value, key, _c| {
        Ok(match value.as_str() {
            Some(s) => Value::from(format!("{key}:{s}")),
            None => value,
        })
    });
    assert_eq!(expanded.get("path").unwrap().as_str(), Some("path:/usr/local"));
}
