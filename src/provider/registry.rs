use std::sync::Arc;

use dashmap::{mapref::entry::Entry, DashMap};
use tracing::{debug, instrument};

use crate::config::ProviderConfig;

use super::{
    library::LibraryProvider,
    list::ListProvider,
    providers::{ExampleLibraryProvider, ExampleListProvider},
    types::{ProviderError, ProviderResult},
};

/// Constructor for a registered library provider.
pub type LibraryProviderCtor = fn(ProviderConfig) -> ProviderResult<Arc<dyn LibraryProvider>>;

/// Constructor for a registered list provider.
pub type ListProviderCtor = fn(ProviderConfig) -> ProviderResult<Arc<dyn ListProvider>>;

/// Explicit name-to-constructor table for provider plugins.
///
/// The host builds one registry at startup and registers every provider it
/// ships; providers are later instantiated from configuration by
/// namespace. Instantiated providers are kept until [`shutdown`] closes
/// them.
///
/// [`shutdown`]: ProviderRegistry::shutdown
#[derive(Default)]
pub struct ProviderRegistry {
    library_ctors: DashMap<String, LibraryProviderCtor>,
    list_ctors: DashMap<String, ListProviderCtor>,
    library_instances: DashMap<String, Arc<dyn LibraryProvider>>,
    list_instances: DashMap<String, Arc<dyn ListProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with both example providers already registered.
    pub fn with_builtin_providers() -> Self {
        let registry = Self::new();
        registry.library_ctors.insert(
            ExampleLibraryProvider::NAMESPACE.to_string(),
            example_library_ctor,
        );
        registry
            .list_ctors
            .insert(ExampleListProvider::NAMESPACE.to_string(), example_list_ctor);
        registry
    }

    /// Register a library provider constructor under `namespace`.
    pub fn register_library(
        &self,
        namespace: &str,
        ctor: LibraryProviderCtor,
    ) -> ProviderResult<()> {
        match self.library_ctors.entry(namespace.to_string()) {
            Entry::Occupied(_) => Err(ProviderError::AlreadyRegistered(namespace.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(ctor);
                debug!("registered library provider: {}", namespace);
                Ok(())
            }
        }
    }

    /// Register a list provider constructor under `namespace`.
    pub fn register_list(&self, namespace: &str, ctor: ListProviderCtor) -> ProviderResult<()> {
        match self.list_ctors.entry(namespace.to_string()) {
            Entry::Occupied(_) => Err(ProviderError::AlreadyRegistered(namespace.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(ctor);
                debug!("registered list provider: {}", namespace);
                Ok(())
            }
        }
    }

    /// Instantiate and initialize the library provider registered under
    /// `namespace`.
    #[instrument(level = "debug", skip(self, config))]
    pub async fn create_library(
        &self,
        namespace: &str,
        config: ProviderConfig,
    ) -> ProviderResult<Arc<dyn LibraryProvider>> {
        let ctor = self
            .library_ctors
            .get(namespace)
            .map(|entry| *entry.value())
            .ok_or_else(|| ProviderError::NotFound(namespace.to_string()))?;
        let provider = ctor(config)?;
        provider.initialize().await?;
        self.library_instances
            .insert(namespace.to_string(), provider.clone());
        debug!("created library provider: {}", namespace);
        Ok(provider)
    }

    /// Instantiate and initialize the list provider registered under
    /// `namespace`.
    #[instrument(level = "debug", skip(self, config))]
    pub async fn create_list(
        &self,
        namespace: &str,
        config: ProviderConfig,
    ) -> ProviderResult<Arc<dyn ListProvider>> {
        let ctor = self
            .list_ctors
            .get(namespace)
            .map(|entry| *entry.value())
            .ok_or_else(|| ProviderError::NotFound(namespace.to_string()))?;
        let provider = ctor(config)?;
        provider.initialize().await?;
        self.list_instances
            .insert(namespace.to_string(), provider.clone());
        debug!("created list provider: {}", namespace);
        Ok(provider)
    }

    /// Look up an instantiated library provider.
    pub fn library(&self, namespace: &str) -> ProviderResult<Arc<dyn LibraryProvider>> {
        self.library_instances
            .get(namespace)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ProviderError::NotFound(namespace.to_string()))
    }

    /// Look up an instantiated list provider.
    pub fn list(&self, namespace: &str) -> ProviderResult<Arc<dyn ListProvider>> {
        self.list_instances
            .get(namespace)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ProviderError::NotFound(namespace.to_string()))
    }

    /// Close and drop every instantiated provider.
    #[instrument(level = "debug", skip(self))]
    pub async fn shutdown(&self) -> ProviderResult<()> {
        let names = self
            .library_instances
            .iter()
            .map(|entry| entry.key().clone())
            .collect::<Vec<_>>();
        for name in names {
            debug!("shutdown start: {}", name);
            if let Some((_, provider)) = self.library_instances.remove(&name) {
                provider.close().await?;
            }
        }

        let names = self
            .list_instances
            .iter()
            .map(|entry| entry.key().clone())
            .collect::<Vec<_>>();
        for name in names {
            debug!("shutdown start: {}", name);
            if let Some((_, provider)) = self.list_instances.remove(&name) {
                provider.close().await?;
            }
        }

        Ok(())
    }
}

fn example_library_ctor(config: ProviderConfig) -> ProviderResult<Arc<dyn LibraryProvider>> {
    Ok(Arc::new(ExampleLibraryProvider::new(config)))
}

fn example_list_ctor(config: ProviderConfig) -> ProviderResult<Arc<dyn ListProvider>> {
    Ok(Arc::new(ExampleListProvider::new(config)))
}
