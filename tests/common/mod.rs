use tracing_subscriber::{EnvFilter, FmtSubscriber};
use watchbridge_example_provider::{
    ExampleLibraryProvider, ExampleListProvider, LibraryProvider, ListProvider, ProviderConfig,
};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// A library provider that has run its initialize hook.
#[allow(dead_code)]
pub async fn initialized_library_provider() -> ExampleLibraryProvider {
    let provider = ExampleLibraryProvider::new(ProviderConfig::default());
    provider
        .initialize()
        .await
        .expect("initialize hook is a no-op");
    provider
}

/// A list provider that has run its initialize hook.
#[allow(dead_code)]
pub async fn initialized_list_provider() -> ExampleListProvider {
    let provider = ExampleListProvider::new(ProviderConfig::default());
    provider
        .initialize()
        .await
        .expect("initialize hook is a no-op");
    provider
}
