//! Example providers for the WatchBridge plugin interface.
//!
//! Two in-memory reference implementations, intended purely as
//! documentation-by-example for plugin authors:
//!
//! - [`ExampleLibraryProvider`] serves one fixed movie section through the
//!   [`LibraryProvider`](provider::library::LibraryProvider) contract.
//! - [`ExampleListProvider`] serves a fixed tracked watch list through the
//!   [`ListProvider`](provider::list::ListProvider) contract.
//!
//! Providers are wired up by explicit registration at startup:
//!
//! ```
//! use watchbridge_example_provider::{LibraryProvider, ProviderConfig, ProviderRegistry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let registry = ProviderRegistry::with_builtin_providers();
//! let library = registry
//!     .create_library("example-library", ProviderConfig::default())
//!     .await
//!     .unwrap();
//! let sections = library.get_sections().await.unwrap();
//! assert_eq!(sections[0].title, "Demo Movies");
//! # }
//! ```

pub mod config;
pub mod provider;

// Re-exports
pub use config::ProviderConfig;
pub use provider::library::LibraryProvider;
pub use provider::list::ListProvider;
pub use provider::providers::{ExampleLibraryProvider, ExampleListProvider};
pub use provider::registry::ProviderRegistry;
pub use provider::types::{ProviderError, ProviderResult};
