use thiserror::Error;

/// Errors surfaced by provider implementations and the registry.
///
/// The host treats [`ProviderError::NotSupported`] as "capability not
/// offered" and reports it instead of crashing; everything else is a real
/// provider failure.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Capability not supported: {0}")]
    NotSupported(String),

    #[error("Provider not found: {0}")]
    NotFound(String),

    #[error("Provider already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Backup serialization error: {0}")]
    Backup(#[from] serde_json::Error),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
