use async_trait::async_trait;
use chrono::{Duration, Utc};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::ProviderConfig;

use super::super::{
    backup::{EntryRecord, ListBackup},
    list::{ListEntry, ListMedia, ListMediaType, ListProvider, ListStatus, ListUser},
    types::{ProviderError, ProviderResult},
};

/// List provider storing two tracked entries in memory.
///
/// Entries live in an insertion-ordered map keyed by media key, which is
/// what gives `search` its stable result order.
pub struct ExampleListProvider {
    config: ProviderConfig,
    user: ListUser,
    entries: RwLock<IndexMap<String, ListEntry>>,
}

impl ExampleListProvider {
    pub const NAMESPACE: &'static str = "example-list";

    pub fn new(config: ProviderConfig) -> Self {
        let user = ListUser {
            key: config.str_or("user_key", "demo-user"),
            title: config.str_or("user_title", "Demo List User"),
        };
        let entries = Self::build_fixtures();
        Self {
            config,
            user,
            entries: RwLock::new(entries),
        }
    }

    fn build_fixtures() -> IndexMap<String, ListEntry> {
        let now = Utc::now();
        let bebop_media = ListMedia {
            poster_image: Some("https://example.invalid/bebop.jpg".to_string()),
            total_units: Some(26),
            ..ListMedia::new("cowboy-bebop", "Cowboy Bebop", ListMediaType::Tv, Self::NAMESPACE)
        };
        let bebop = ListEntry {
            progress: Some(26),
            status: Some(ListStatus::Completed),
            user_rating: Some(95),
            started_at: Some(now - Duration::days(60)),
            finished_at: Some(now - Duration::days(33)),
            ..ListEntry::new(bebop_media)
        };
        let your_name_media = ListMedia {
            poster_image: Some("https://example.invalid/your-name.jpg".to_string()),
            total_units: Some(1),
            ..ListMedia::new("your-name", "Your Name", ListMediaType::Movie, Self::NAMESPACE)
        };
        let your_name = ListEntry {
            status: Some(ListStatus::Planning),
            ..ListEntry::new(your_name_media)
        };
        IndexMap::from([
            (bebop.key.clone(), bebop),
            (your_name.key.clone(), your_name),
        ])
    }

    /// Rebuild a list entry from its serialized backup record.
    ///
    /// `restore_list` stays unimplemented on purpose; a real provider would
    /// call this per record after settling on a restore policy (additive
    /// upsert vs replace-all).
    pub fn decode_entry(&self, record: &EntryRecord) -> ListEntry {
        let title = record
            .title
            .clone()
            .unwrap_or_else(|| record.key.clone());
        let media = ListMedia {
            total_units: record.total_units,
            ..ListMedia::new(record.key.as_str(), title, record.media_type, Self::NAMESPACE)
        };
        ListEntry {
            progress: record.progress,
            repeats: record.repeats,
            review: record.review.clone(),
            status: record.status,
            user_rating: record.user_rating,
            started_at: record.started_at,
            finished_at: record.finished_at,
            ..ListEntry::new(media)
        }
    }

    fn default_title(&self, key: &str) -> String {
        match self.config.get_str("default_title") {
            Some(title) => title.to_string(),
            None => title_case(&key.replace('-', " ")),
        }
    }
}

impl Default for ExampleListProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

/// Capitalize the first letter of each space-separated word.
fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl ListProvider for ExampleListProvider {
    fn namespace(&self) -> &str {
        Self::NAMESPACE
    }

    fn user(&self) -> Option<ListUser> {
        Some(self.user.clone())
    }

    async fn build_entry(&self, key: &str) -> ProviderResult<ListEntry> {
        let media = ListMedia::new(key, self.default_title(key), ListMediaType::Tv, Self::NAMESPACE);
        Ok(ListEntry::new(media))
    }

    async fn get_entry(&self, key: &str) -> ProviderResult<Option<ListEntry>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn update_entry(&self, key: &str, entry: ListEntry) -> ProviderResult<ListEntry> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), entry.clone());
        debug!("stored list entry: {}", key);
        Ok(entry)
    }

    async fn delete_entry(&self, key: &str) -> ProviderResult<()> {
        self.entries.write().await.shift_remove(key);
        Ok(())
    }

    async fn search(&self, query: &str) -> ProviderResult<Vec<ListEntry>> {
        let needle = query.to_lowercase();
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn backup_list(&self) -> ProviderResult<String> {
        let entries = self.entries.read().await;
        let backup = ListBackup {
            user: self.user.key.clone(),
            entries: entries.values().map(EntryRecord::from).collect(),
        };
        Ok(serde_json::to_string(&backup)?)
    }

    async fn restore_list(&self, _backup: &str) -> ProviderResult<()> {
        Err(ProviderError::NotSupported(
            "List restore not implemented for this provider".to_string(),
        ))
    }

    // The hooks below have nothing to do for an in-memory provider.

    async fn initialize(&self) -> ProviderResult<()> {
        Ok(())
    }

    async fn clear_cache(&self) -> ProviderResult<()> {
        Ok(())
    }

    async fn close(&self) -> ProviderResult<()> {
        Ok(())
    }
}
