use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tags::{CategoryTag, DurationTag, EnergyTag, LocationTag, PlayerTag, Season};

/// The six multi-valued tag facets of an activity.
///
/// Every facet is a set: no duplicates, order irrelevant. An empty set on a
/// facet means the curator gave the activity no tags there — such an
/// activity is excluded by any active filter on that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTags {
    #[serde(default)]
    pub location: BTreeSet<LocationTag>,
    #[serde(default)]
    pub players: BTreeSet<PlayerTag>,
    #[serde(default)]
    pub energy: BTreeSet<EnergyTag>,
    #[serde(default)]
    pub duration: BTreeSet<DurationTag>,
    #[serde(default)]
    pub season: BTreeSet<Season>,
    /// Absent on legacy records. `None` is semantically distinct from
    /// `Some(empty)`: a record without the field is rejected by any
    /// non-empty category selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BTreeSet<CategoryTag>>,
}

/// One curated activity from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Assigned by the store at creation, immutable thereafter.
    pub id: String,
    pub name: String,
    /// Opaque reference to an external image resource.
    pub image: String,
    pub tags: ActivityTags,
    /// Free text ("Salon", "Jardin", ...), not part of the filter vocabulary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an activity. The store assigns `id` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub tags: ActivityTags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_location: Option<String>,
}

/// Partial update. `id` and `createdAt` are never patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<ActivityTags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_roundtrips_through_camel_case_json() {
        let json = r#"{
            "id": "1700000000000",
            "name": "Cache-cache",
            "image": "/images/cache-cache.jpg",
            "tags": {
                "location": ["indoor", "outdoor"],
                "players": ["multiple"],
                "energy": ["active"],
                "duration": ["10-30"],
                "season": ["summer", "spring"],
                "category": ["autre"]
            },
            "houseLocation": "Jardin",
            "createdAt": "2023-11-14T22:13:20Z"
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.name, "Cache-cache");
        assert_eq!(activity.house_location.as_deref(), Some("Jardin"));
        assert!(activity.tags.location.contains(&LocationTag::Indoor));
        assert!(activity.tags.location.contains(&LocationTag::Outdoor));
        assert_eq!(activity.tags.season.len(), 2);

        let back = serde_json::to_value(&activity).unwrap();
        assert_eq!(back["houseLocation"], "Jardin");
        assert_eq!(back["tags"]["duration"][0], "10-30");
    }

    #[test]
    fn sets_deduplicate_on_deserialize() {
        let json = r#"{"location": ["indoor", "indoor"], "players": [], "energy": [], "duration": [], "season": []}"#;
        let tags: ActivityTags = serde_json::from_str(json).unwrap();
        assert_eq!(tags.location.len(), 1);
    }

    #[test]
    fn absent_category_deserializes_to_none() {
        let json = r#"{"location": [], "players": [], "energy": [], "duration": [], "season": []}"#;
        let tags: ActivityTags = serde_json::from_str(json).unwrap();
        assert!(tags.category.is_none());
    }

    #[test]
    fn empty_category_is_distinct_from_absent() {
        let json = r#"{"location": [], "players": [], "energy": [], "duration": [], "season": [], "category": []}"#;
        let tags: ActivityTags = serde_json::from_str(json).unwrap();
        assert_eq!(tags.category, Some(BTreeSet::new()));
    }

    #[test]
    fn none_category_is_omitted_on_serialize() {
        let tags = ActivityTags::default();
        let json = serde_json::to_value(&tags).unwrap();
        assert!(json.get("category").is_none());
    }
}
