use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::ProviderResult;

/// Kind of media a library section holds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

/// Static descriptor for the account a library provider is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryUser {
    pub key: String,
    pub title: String,
}

/// Identifier for the same media item in an external catalog,
/// e.g. `anilist:513` or `imdb:tt0085213`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalId {
    pub namespace: String,
    pub value: String,
}

impl ExternalId {
    pub fn new(namespace: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            value: value.into(),
        }
    }
}

/// One recorded playback of a library item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub library_key: String,
    pub viewed_at: DateTime<Utc>,
}

/// A named grouping of library items, e.g. a movie library.
///
/// `provider` holds the namespace of the owning provider; resolve it back
/// to an instance through the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibrarySection {
    pub key: String,
    pub title: String,
    pub media_kind: MediaKind,
    pub provider: String,
}

impl LibrarySection {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        media_kind: MediaKind,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            media_kind,
            provider: provider.into(),
        }
    }
}

/// A movie tracked by a library provider, immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryMovie {
    pub key: String,
    pub title: String,
    pub media_kind: MediaKind,
    pub section_key: String,
    pub provider: String,
    pub last_modified: DateTime<Utc>,
    pub poster_image: Option<String>,
    /// User rating normalized to 0-100.
    pub user_rating: Option<u8>,
    pub view_count: u32,
    pub history: Vec<HistoryEntry>,
    pub ids: Vec<ExternalId>,
    pub review: Option<String>,
    pub on_watching: bool,
    pub on_watchlist: bool,
}

impl LibraryMovie {
    /// A movie belonging to `section` with every optional field empty.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        section: &LibrarySection,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            media_kind: section.media_kind,
            section_key: section.key.clone(),
            provider: section.provider.clone(),
            last_modified,
            poster_image: None,
            user_rating: None,
            view_count: 0,
            history: Vec::new(),
            ids: Vec::new(),
            review: None,
            on_watching: false,
            on_watchlist: false,
        }
    }
}

/// Filters for [`LibraryProvider::list_items`]. All filters compose with
/// logical AND.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Keep items modified at or after this cutoff.
    pub min_last_modified: Option<DateTime<Utc>>,
    /// Keep items with a view count above zero.
    pub require_watched: bool,
    /// Keep only items whose key appears in this set.
    pub keys: Option<Vec<String>>,
}

/// Framework-neutral view of an incoming webhook request.
#[derive(Debug, Clone, Default)]
pub struct WebhookRequest {
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Result of webhook parsing: whether the request was handled, and the
/// library keys it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookOutcome {
    pub handled: bool,
    pub keys: Vec<String>,
}

/// Contract for plugins exposing a user's locally-tracked media library.
///
/// The host awaits calls sequentially; implementations must still be
/// `Send + Sync` because they are shared behind `Arc` trait objects.
#[async_trait]
pub trait LibraryProvider: Send + Sync {
    /// Stable identifier this provider registers under.
    fn namespace(&self) -> &str;

    /// Static descriptor of the library account, if the provider has one.
    fn user(&self) -> Option<LibraryUser>;

    /// All sections the library exposes.
    async fn get_sections(&self) -> ProviderResult<Vec<LibrarySection>>;

    /// Items belonging to `section`, narrowed by `filter`.
    ///
    /// An unknown section yields an empty list, not an error.
    async fn list_items(
        &self,
        section: &LibrarySection,
        filter: ItemFilter,
    ) -> ProviderResult<Vec<LibraryMovie>>;

    /// Map an incoming webhook request onto the library keys it affects.
    ///
    /// Providers without webhook ingestion return
    /// [`ProviderError::NotSupported`](super::types::ProviderError::NotSupported).
    async fn parse_webhook(&self, request: WebhookRequest) -> ProviderResult<WebhookOutcome>;

    async fn initialize(&self) -> ProviderResult<()>;

    async fn clear_cache(&self) -> ProviderResult<()>;

    async fn close(&self) -> ProviderResult<()>;
}
