use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::ProviderResult;

/// Media type of a tracked-list item.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListMediaType {
    #[default]
    Tv,
    Movie,
    Ova,
    Ona,
    Special,
    Music,
}

/// Where an entry sits in the user's watch lifecycle.
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
pub enum ListStatus {
    Planning,
    Watching,
    Completed,
    Paused,
    Dropped,
    Repeating,
}

/// Static descriptor for the account a list provider is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUser {
    pub key: String,
    pub title: String,
}

/// The media item an entry tracks, immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMedia {
    pub key: String,
    pub title: String,
    pub media_type: ListMediaType,
    pub poster_image: Option<String>,
    /// Total consumable units, e.g. the episode count.
    pub total_units: Option<u32>,
    pub provider: String,
}

impl ListMedia {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        media_type: ListMediaType,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            media_type,
            poster_image: None,
            total_units: None,
            provider: provider.into(),
        }
    }
}

/// A user's tracked-list record for one media item.
///
/// Entries are keyed by their media key inside the provider's mapping;
/// everything except `key`, `title` and `media` is mutable tracking state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub key: String,
    pub title: String,
    pub media: ListMedia,
    /// Units consumed so far.
    pub progress: Option<u32>,
    pub repeats: Option<u32>,
    pub review: Option<String>,
    pub status: Option<ListStatus>,
    /// User rating normalized to 0-100.
    pub user_rating: Option<u8>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ListEntry {
    /// An entry shell for `media` with no tracking state yet.
    pub fn new(media: ListMedia) -> Self {
        Self {
            key: media.key.clone(),
            title: media.title.clone(),
            media,
            progress: None,
            repeats: None,
            review: None,
            status: None,
            user_rating: None,
            started_at: None,
            finished_at: None,
        }
    }

    /// Mirrors the total units recorded on the media object.
    pub fn total_units(&self) -> Option<u32> {
        self.media.total_units
    }

    /// Namespace of the provider that owns this entry, via its media.
    pub fn provider(&self) -> &str {
        &self.media.provider
    }
}

/// Contract for plugins exposing a user's tracked watch/progress list.
#[async_trait]
pub trait ListProvider: Send + Sync {
    /// Stable identifier this provider registers under.
    fn namespace(&self) -> &str;

    /// Static descriptor of the list account, if the provider has one.
    fn user(&self) -> Option<ListUser>;

    /// A fresh, not-yet-stored entry for `key`, ready for the host to fill
    /// in and pass to [`update_entry`](Self::update_entry).
    async fn build_entry(&self, key: &str) -> ProviderResult<ListEntry>;

    /// The stored entry for `key`, if any.
    async fn get_entry(&self, key: &str) -> ProviderResult<Option<ListEntry>>;

    /// Retrieve multiple entries by their media keys.
    ///
    /// The default delegates to [`get_entry`](Self::get_entry) per key;
    /// providers backed by a network API should override this with a real
    /// batch call.
    async fn get_entries_batch(&self, keys: &[String]) -> ProviderResult<Vec<Option<ListEntry>>> {
        let mut entries = Vec::with_capacity(keys.len());
        for key in keys {
            entries.push(self.get_entry(key).await?);
        }
        Ok(entries)
    }

    /// Upsert `entry` under `key` and return the stored entry.
    async fn update_entry(&self, key: &str, entry: ListEntry) -> ProviderResult<ListEntry>;

    /// Store multiple entries, keyed by their media keys.
    ///
    /// The default delegates to [`update_entry`](Self::update_entry) per
    /// entry; override for providers with a real batch call.
    async fn update_entries_batch(
        &self,
        entries: Vec<ListEntry>,
    ) -> ProviderResult<Vec<ListEntry>> {
        let mut updated = Vec::with_capacity(entries.len());
        for entry in entries {
            let key = entry.media.key.clone();
            updated.push(self.update_entry(&key, entry).await?);
        }
        Ok(updated)
    }

    /// Remove the entry for `key`; absent keys are a no-op.
    async fn delete_entry(&self, key: &str) -> ProviderResult<()>;

    /// Entries whose titles contain `query`, case-insensitively, in mapping
    /// iteration order.
    async fn search(&self, query: &str) -> ProviderResult<Vec<ListEntry>>;

    /// Serialize the user key plus all entries into a JSON document.
    async fn backup_list(&self) -> ProviderResult<String>;

    /// Restore entries from a backup produced by
    /// [`backup_list`](Self::backup_list).
    ///
    /// Whether restore is additive or destructive is a provider decision;
    /// providers without restore return
    /// [`ProviderError::NotSupported`](super::types::ProviderError::NotSupported).
    async fn restore_list(&self, backup: &str) -> ProviderResult<()>;

    async fn initialize(&self) -> ProviderResult<()>;

    async fn clear_cache(&self) -> ProviderResult<()>;

    async fn close(&self) -> ProviderResult<()>;
}
