use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;

use crate::config::ProviderConfig;

use super::super::{
    library::{
        ExternalId, HistoryEntry, ItemFilter, LibraryMovie, LibraryProvider, LibrarySection,
        LibraryUser, MediaKind, WebhookOutcome, WebhookRequest,
    },
    types::{ProviderError, ProviderResult},
};

/// Library provider serving two hard-coded movies from memory.
///
/// Exists purely as documentation-by-example for plugin authors: it shows
/// the full [`LibraryProvider`] surface with the smallest possible state.
pub struct ExampleLibraryProvider {
    user: LibraryUser,
    sections: Vec<LibrarySection>,
    items: Vec<LibraryMovie>,
}

impl ExampleLibraryProvider {
    pub const NAMESPACE: &'static str = "example-library";

    pub fn new(config: ProviderConfig) -> Self {
        let user = LibraryUser {
            key: config.str_or("user_key", "demo-user"),
            title: config.str_or("user_title", "Demo Library User"),
        };
        let (sections, items) = Self::build_fixtures();
        Self {
            user,
            sections,
            items,
        }
    }

    fn build_fixtures() -> (Vec<LibrarySection>, Vec<LibraryMovie>) {
        let movies =
            LibrarySection::new("movies", "Demo Movies", MediaKind::Movie, Self::NAMESPACE);
        let now = Utc::now();
        let castle = LibraryMovie {
            poster_image: Some("https://example.invalid/castle.jpg".to_string()),
            user_rating: Some(90),
            view_count: 2,
            history: vec![HistoryEntry {
                library_key: "castle-in-the-sky".to_string(),
                viewed_at: now - Duration::days(10),
            }],
            ids: vec![ExternalId::new("anilist", "513")],
            review: Some("Still magical on every rewatch.".to_string()),
            ..LibraryMovie::new(
                "castle-in-the-sky",
                "Castle in the Sky",
                &movies,
                now - Duration::days(3),
            )
        };
        let nausicaa = LibraryMovie {
            poster_image: Some("https://example.invalid/nausicaa.jpg".to_string()),
            ids: vec![ExternalId::new("imdb", "tt0085213")],
            on_watchlist: true,
            ..LibraryMovie::new(
                "nausicaa",
                "Nausicaä of the Valley of the Wind",
                &movies,
                now - Duration::days(1),
            )
        };
        (vec![movies], vec![castle, nausicaa])
    }
}

impl Default for ExampleLibraryProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

#[async_trait]
impl LibraryProvider for ExampleLibraryProvider {
    fn namespace(&self) -> &str {
        Self::NAMESPACE
    }

    fn user(&self) -> Option<LibraryUser> {
        Some(self.user.clone())
    }

    async fn get_sections(&self) -> ProviderResult<Vec<LibrarySection>> {
        Ok(self.sections.clone())
    }

    async fn list_items(
        &self,
        section: &LibrarySection,
        filter: ItemFilter,
    ) -> ProviderResult<Vec<LibraryMovie>> {
        if !self.sections.iter().any(|sec| sec.key == section.key) {
            return Ok(Vec::new());
        }

        let mut items: Vec<LibraryMovie> = self
            .items
            .iter()
            .filter(|item| item.section_key == section.key)
            .cloned()
            .collect();

        if let Some(cutoff) = filter.min_last_modified {
            items.retain(|item| item.last_modified >= cutoff);
        }

        if filter.require_watched {
            items.retain(|item| item.view_count > 0);
        }

        if let Some(keys) = &filter.keys {
            items.retain(|item| keys.contains(&item.key));
        }

        debug!("listed {} items for section: {}", items.len(), section.key);
        Ok(items)
    }

    async fn parse_webhook(&self, _request: WebhookRequest) -> ProviderResult<WebhookOutcome> {
        Err(ProviderError::NotSupported(
            "Webhooks are not supported by the example provider".to_string(),
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
