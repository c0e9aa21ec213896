mod common;

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use watchbridge_example_provider::provider::library::{
    ItemFilter, LibrarySection, MediaKind, WebhookRequest,
};
use watchbridge_example_provider::{LibraryProvider, ProviderConfig, ProviderError};

use common::initialized_library_provider;

#[tokio::test]
async fn test_get_sections_returns_single_demo_section() {
    let provider = initialized_library_provider().await;

    let sections = provider.get_sections().await.unwrap();
    assert_eq!(sections.len(), 1);

    let section = &sections[0];
    assert_eq!(section.title, "Demo Movies");
    assert_eq!(section.media_kind, MediaKind::Movie);
    assert_eq!(section.provider, "example-library");
}

#[tokio::test]
async fn test_list_items_supports_common_filters() {
    let provider = initialized_library_provider().await;
    let section = provider.get_sections().await.unwrap().remove(0);

    let cutoff = Utc::now() - Duration::days(2);
    let recent = provider
        .list_items(
            &section,
            ItemFilter {
                min_last_modified: Some(cutoff),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let keys: Vec<&str> = recent.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(keys, vec!["nausicaa"]);

    let watched_only = provider
        .list_items(
            &section,
            ItemFilter {
                require_watched: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let keys: Vec<&str> = watched_only.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(keys, vec!["castle-in-the-sky"]);

    let subset = provider
        .list_items(
            &section,
            ItemFilter {
                keys: Some(vec!["castle-in-the-sky".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let keys: Vec<&str> = subset.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(keys, vec!["castle-in-the-sky"]);
}

#[tokio::test]
async fn test_list_items_filters_compose_with_and() {
    let provider = initialized_library_provider().await;
    let section = provider.get_sections().await.unwrap().remove(0);

    // Only nausicaa is recent, only castle-in-the-sky is watched; the
    // conjunction matches nothing.
    let items = provider
        .list_items(
            &section,
            ItemFilter {
                min_last_modified: Some(Utc::now() - Duration::days(2)),
                require_watched: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_unknown_section_is_empty() {
    let provider = initialized_library_provider().await;

    let elsewhere = LibrarySection::new("shows", "Shows", MediaKind::Series, "example-library");
    let items = provider
        .list_items(&elsewhere, ItemFilter::default())
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_without_filters_returns_all_fixtures() {
    let provider = initialized_library_provider().await;
    let section = provider.get_sections().await.unwrap().remove(0);

    let items = provider
        .list_items(&section, ItemFilter::default())
        .await
        .unwrap();
    assert_eq!(items.len(), 2);

    let castle = items
        .iter()
        .find(|item| item.key == "castle-in-the-sky")
        .unwrap();
    assert_eq!(castle.user_rating, Some(90));
    assert_eq!(castle.view_count, 2);
    assert_eq!(castle.history.len(), 1);
    assert_eq!(castle.ids[0].namespace, "anilist");
    assert_eq!(castle.review.as_deref(), Some("Still magical on every rewatch."));

    let nausicaa = items.iter().find(|item| item.key == "nausicaa").unwrap();
    assert!(nausicaa.on_watchlist);
    assert_eq!(nausicaa.user_rating, None);
    assert!(nausicaa.history.is_empty());
}

#[tokio::test]
async fn test_parse_webhook_is_not_supported() {
    let provider = initialized_library_provider().await;

    let err = provider
        .parse_webhook(WebhookRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotSupported(_)));
}

#[tokio::test]
async fn test_user_descriptor_defaults_and_overrides() {
    let provider = initialized_library_provider().await;
    let user = provider.user().unwrap();
    assert_eq!(user.key, "demo-user");
    assert_eq!(user.title, "Demo Library User");

    let config: ProviderConfig =
        serde_json::from_str(r#"{"user_key": "plex-admin", "user_title": "Plex Admin"}"#).unwrap();
    let provider = watchbridge_example_provider::ExampleLibraryProvider::new(config);
    let user = provider.user().unwrap();
    assert_eq!(user.key, "plex-admin");
    assert_eq!(user.title, "Plex Admin");
}

#[tokio::test]
async fn test_lifecycle_hooks_are_no_ops() {
    let provider = initialized_library_provider().await;
    provider.clear_cache().await.unwrap();
    provider.close().await.unwrap();
}
