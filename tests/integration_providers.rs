//! End-to-end behavior of the service-provider model: provider merging,
//! delegated resolution, circular wiring through proxies, and the flash
//! container lifecycle.

use keystack::{
    CachingContainer, CompositeCachingServiceProvider, Container, ContainerRef,
    DelegatingContainer, Dictionary, FlashContainer, MemoryStore, MutableContainer,
    ProxyContainer, ServiceProvider, StaticProvider, Value,
};
use std::rc::Rc;

/// The merge property from the provider contract: later factories override,
/// same-key extensions compose earlier-then-later on the overriding
/// factory's value.
#[test]
fn test_merged_provider_override_and_extension_order() {
    let provider_a = StaticProvider::new()
        .with_factory("svc", |_| Ok(Value::from("f1")))
        .with_extension("svc", |_, prev| {
            Ok(Value::from(format!("{}+e1", prev.as_str().unwrap_or_default())))
        });
    let provider_b = StaticProvider::new()
        .with_factory("svc", |_| Ok(Value::from("f2")))
        .with_extension("svc", |_, prev| {
            Ok(Value::from(format!("{}+e2", prev.as_str().unwrap_or_default())))
        });

    let merged = CompositeCachingServiceProvider::new([
        Rc::new(provider_a) as Rc<dyn ServiceProvider>,
        Rc::new(provider_b) as Rc<dyn ServiceProvider>,
    ]);

    let services = DelegatingContainer::new(Rc::new(merged));
    assert_eq!(services.get("svc").unwrap().as_str(), Some("f2+e1+e2"));
}

#[test]
fn test_providers_extend_each_others_definitions() {
    // One provider defines the service, another only extends it.
    let definer = StaticProvider::new().with_factory("greeting", |_| Ok(Value::from("hello")));
    let extender = StaticProvider::new().with_extension("greeting", |base, prev| {
        let name = base.get("name")?;
        Ok(Value::from(format!(
            "{}, {}",
            prev.as_str().unwrap_or_default(),
            name.as_str().unwrap_or_default()
        )))
    });
    let names = StaticProvider::new().with_factory("name", |_| Ok(Value::from("world")));

    let merged = CompositeCachingServiceProvider::new([
        Rc::new(definer) as Rc<dyn ServiceProvider>,
        Rc::new(extender) as Rc<dyn ServiceProvider>,
        Rc::new(names) as Rc<dyn ServiceProvider>,
    ]);
    let services = DelegatingContainer::new(Rc::new(merged));
    assert_eq!(services.get("greeting").unwrap().as_str(), Some("hello, world"));
}

/// Factories are invoked per request; wrapping the delegating container in
/// a caching decorator is what memoizes services.
#[test]
fn test_factories_run_per_request_unless_cached() {
    use std::cell::Cell;

    thread_local! {
        static RUNS: Cell<usize> = const { Cell::new(0) };
    }

    let provider = Rc::new(StaticProvider::new().with_factory("stamp", |_| {
        RUNS.with(|r| r.set(r.get() + 1));
        Ok(Value::from(RUNS.with(Cell::get) as i64))
    }));

    let services = DelegatingContainer::new(provider.clone());
    services.get("stamp").unwrap();
    services.get("stamp").unwrap();
    assert_eq!(RUNS.with(Cell::get), 2);

    let cached = CachingContainer::new(DelegatingContainer::new(provider));
    cached.get("stamp").unwrap();
    cached.get("stamp").unwrap();
    assert_eq!(RUNS.with(Cell::get), 3);
}

/// Two-phase wiring: a factory resolves through a proxy that is bound to
/// the finished container only after construction.
#[test]
fn test_circular_wiring_through_proxy() {
    let proxy = Rc::new(ProxyContainer::new());

    let settings = Rc::new(Dictionary::from_iter([("host", Value::from("localhost"))]));
    let wired = proxy.clone();
    let provider = Rc::new(StaticProvider::new().with_factory("url", move |_| {
        let host = wired.get("host")?;
        Ok(Value::from(format!("http://{}", host.as_str().unwrap_or_default())))
    }));

    let services = DelegatingContainer::with_parent(provider, settings.clone());

    // Before binding, the factory fails fast through the unbound proxy.
    assert!(services.get("url").is_err());

    proxy.set_inner_container(settings);
    assert_eq!(services.get("url").unwrap().as_str(), Some("http://localhost"));
}

#[test]
fn test_delegating_container_as_composite_member() {
    let provider = Rc::new(
        StaticProvider::new().with_factory("computed", |_| Ok(Value::from("from-factory"))),
    );
    let services = DelegatingContainer::new(provider);
    let literals = Dictionary::from_iter([("literal", Value::from("from-dict"))]);

    let stack = keystack::CompositeContainer::new([
        Rc::new(literals) as ContainerRef,
        Rc::new(services) as ContainerRef,
    ]);
    assert_eq!(stack.get("literal").unwrap().as_str(), Some("from-dict"));
    assert_eq!(stack.get("computed").unwrap().as_str(), Some("from-factory"));
}

/// Flash data written in one cycle is visible to exactly one later cycle.
#[test]
fn test_flash_container_one_shot_lifecycle() {
    let store = Rc::new(MemoryStore::new());

    // Cycle 1: write a notice.
    let flash = FlashContainer::new(store.clone(), "flash");
    flash.init().unwrap();
    flash.set("notice", Value::from("saved!")).unwrap();

    // Cycle 2: the notice is there, and init wiped the slot.
    let flash = FlashContainer::new(store.clone(), "flash");
    flash.init().unwrap();
    assert_eq!(flash.get("notice").unwrap().as_str(), Some("saved!"));

    // Cycle 3: gone.
    let flash = FlashContainer::new(store, "flash");
    flash.init().unwrap();
    assert!(!flash.has("notice").unwrap());
    assert!(flash.get("notice").unwrap_err().is_not_found());
}
