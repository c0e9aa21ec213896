use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::list::{ListEntry, ListMediaType, ListStatus};

/// Serialized snapshot of all list entries for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBackup {
    pub user: String,
    pub entries: Vec<EntryRecord>,
}

/// Wire form of a single entry inside a backup document.
///
/// Absent optionals are written as explicit nulls so every record carries
/// the full field set; on decode, a missing `title` falls back to the key
/// and a missing `media_type` falls back to TV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    pub status: Option<ListStatus>,
    pub progress: Option<u32>,
    pub repeats: Option<u32>,
    pub review: Option<String>,
    pub user_rating: Option<u8>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub media_type: ListMediaType,
    #[serde(default)]
    pub total_units: Option<u32>,
}

impl From<&ListEntry> for EntryRecord {
    fn from(entry: &ListEntry) -> Self {
        Self {
            key: entry.key.clone(),
            title: Some(entry.title.clone()),
            status: entry.status,
            progress: entry.progress,
            repeats: entry.repeats,
            review: entry.review.clone(),
            user_rating: entry.user_rating,
            started_at: entry.started_at,
            finished_at: entry.finished_at,
            media_type: entry.media.media_type,
            total_units: entry.total_units(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::provider::list::ListMedia;

    fn sample_entry() -> ListEntry {
        let media = ListMedia {
            total_units: Some(26),
            ..ListMedia::new("cowboy-bebop", "Cowboy Bebop", ListMediaType::Tv, "example-list")
        };
        ListEntry {
            progress: Some(26),
            status: Some(ListStatus::Completed),
            user_rating: Some(95),
            started_at: Some(Utc::now() - Duration::days(60)),
            ..ListEntry::new(media)
        }
    }

    #[test]
    fn test_record_captures_entry_fields() {
        let entry = sample_entry();
        let record = EntryRecord::from(&entry);
        assert_eq!(record.key, "cowboy-bebop");
        assert_eq!(record.title.as_deref(), Some("Cowboy Bebop"));
        assert_eq!(record.status, Some(ListStatus::Completed));
        assert_eq!(record.progress, Some(26));
        assert_eq!(record.media_type, ListMediaType::Tv);
        assert_eq!(record.total_units, Some(26));
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = EntryRecord::from(&sample_entry());
        let blob = serde_json::to_string(&record).unwrap();
        let decoded: EntryRecord = serde_json::from_str(&blob).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_absent_optionals_serialize_as_nulls() {
        let media = ListMedia::new("your-name", "Your Name", ListMediaType::Movie, "example-list");
        let record = EntryRecord::from(&ListEntry::new(media));
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("progress").unwrap().is_null());
        assert!(value.get("review").unwrap().is_null());
        assert_eq!(value.get("media_type").unwrap(), "movie");
    }

    #[test]
    fn test_decode_defaults_media_type_to_tv() {
        let record: EntryRecord = serde_json::from_str(
            r#"{
                "key": "cowboy-bebop",
                "status": null,
                "progress": 12,
                "repeats": null,
                "review": null,
                "user_rating": null,
                "started_at": null,
                "finished_at": null
            }"#,
        )
        .unwrap();
        assert_eq!(record.media_type, ListMediaType::Tv);
        assert_eq!(record.title, None);
        assert_eq!(record.progress, Some(12));
    }

    #[test]
    fn test_timestamps_encode_as_iso_8601() {
        let record = EntryRecord::from(&sample_entry());
        let value = serde_json::to_value(&record).unwrap();
        let started = value.get("started_at").unwrap().as_str().unwrap();
        assert!(started.contains('T'));
        assert!(started.parse::<DateTime<Utc>>().is_ok());
    }
}
