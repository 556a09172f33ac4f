//! Provider aggregation with memoized merge.

use super::{ExtensionChain, ExtensionMap, FactoryMap, ServiceProvider};
use std::cell::OnceCell;
use std::rc::Rc;
use tracing::debug;

struct Merged {
    factories: FactoryMap,
    extensions: ExtensionMap,
}

/// Merges many providers into one, computing the merge at most once.
///
/// Merge rules are deterministic in provider registration order:
///
/// - **Factories**: later providers override earlier ones for the same id
///   (last wins).
/// - **Extensions**: same-id chains concatenate, so an earlier provider's
///   extension runs first and feeds its output to the later one.
///
/// The merged maps are computed lazily on the first accessor call and are
/// stable afterward; subsequent calls never re-index the underlying
/// providers.
pub struct CompositeCachingServiceProvider {
    providers: Vec<Rc<dyn ServiceProvider>>,
    merged: OnceCell<Merged>,
}

impl CompositeCachingServiceProvider {
    /// Creates a composite over the given providers, in merge order.
    #[must_use]
    pub fn new(providers: impl IntoIterator<Item = Rc<dyn ServiceProvider>>) -> Self {
        Self { providers: providers.into_iter().collect(), merged: OnceCell::new() }
    }

    fn merged(&self) -> &Merged {
        self.merged.get_or_init(|| {
            let mut factories = FactoryMap::new();
            let mut extensions = ExtensionMap::new();
            for provider in &self.providers {
                for (id, factory) in provider.factories() {
                    factories.insert(id.clone(), factory.clone());
                }
                for (id, chain) in provider.extensions() {
                    extensions
                        .entry(id.clone())
                        .or_insert_with(ExtensionChain::new)
                        .append_chain(chain);
                }
            }
            debug!(
                providers = self.providers.len(),
                factories = factories.len(),
                extensions = extensions.len(),
                "merged service providers"
            );
            Merged { factories, extensions }
        })
    }
}

impl ServiceProvider for CompositeCachingServiceProvider {
    fn factories(&self) -> &FactoryMap {
        &self.merged().factories
    }

    fn extensions(&self) -> &ExtensionMap {
        &self.merged().extensions
    }
}
