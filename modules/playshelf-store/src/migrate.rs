//! Legacy-shape normalization at the data-ingestion boundary.
//!
//! Early revisions of the data file stored one value per facet, with the
//! sentinel values `both` (location) and `mix` (energy) standing in for
//! two-valued sets. Everything is normalized here on load; the evaluator
//! and the rest of the codebase only ever see canonical multi-valued sets.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use playshelf_common::{
    Activity, ActivityTags, CategoryTag, DurationTag, EnergyTag, LocationTag, PlayerTag, Season,
};

/// Legacy ternary location value.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyLocation {
    Indoor,
    Outdoor,
    Both,
}

/// Legacy ternary energy value.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyEnergy {
    Calm,
    Active,
    Mix,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LocationField {
    Multi(BTreeSet<LocationTag>),
    Single(LegacyLocation),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EnergyField {
    Multi(BTreeSet<EnergyTag>),
    Single(LegacyEnergy),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlayersField {
    Multi(BTreeSet<PlayerTag>),
    Single(PlayerTag),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    Multi(BTreeSet<DurationTag>),
    Single(DurationTag),
}

/// Tags as they may appear on disk: canonical arrays or legacy scalars.
#[derive(Debug, Deserialize)]
pub struct RawTags {
    pub location: LocationField,
    pub players: PlayersField,
    pub energy: EnergyField,
    pub duration: DurationField,
    /// Season postdates the scalar era, so it is only ever an array.
    #[serde(default)]
    pub season: BTreeSet<Season>,
    /// Absent on legacy records; absence survives normalization.
    #[serde(default)]
    pub category: Option<BTreeSet<CategoryTag>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActivity {
    pub id: String,
    pub name: String,
    pub image: String,
    pub tags: RawTags,
    #[serde(default)]
    pub house_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RawActivity {
    pub fn into_canonical(self) -> Activity {
        Activity {
            id: self.id,
            name: self.name,
            image: self.image,
            tags: self.tags.into_canonical(),
            house_location: self.house_location,
            created_at: self.created_at,
        }
    }
}

impl RawTags {
    pub fn into_canonical(self) -> ActivityTags {
        ActivityTags {
            location: match self.location {
                LocationField::Multi(set) => set,
                LocationField::Single(LegacyLocation::Indoor) => {
                    BTreeSet::from([LocationTag::Indoor])
                }
                LocationField::Single(LegacyLocation::Outdoor) => {
                    BTreeSet::from([LocationTag::Outdoor])
                }
                LocationField::Single(LegacyLocation::Both) => {
                    BTreeSet::from([LocationTag::Indoor, LocationTag::Outdoor])
                }
            },
            players: match self.players {
                PlayersField::Multi(set) => set,
                PlayersField::Single(tag) => BTreeSet::from([tag]),
            },
            energy: match self.energy {
                EnergyField::Multi(set) => set,
                EnergyField::Single(LegacyEnergy::Calm) => BTreeSet::from([EnergyTag::Calm]),
                EnergyField::Single(LegacyEnergy::Active) => BTreeSet::from([EnergyTag::Active]),
                EnergyField::Single(LegacyEnergy::Mix) => {
                    BTreeSet::from([EnergyTag::Calm, EnergyTag::Active])
                }
            },
            duration: match self.duration {
                DurationField::Multi(set) => set,
                DurationField::Single(tag) => BTreeSet::from([tag]),
            },
            season: self.season,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_tags_normalize_to_singleton_sets() {
        let json = r#"{
            "location": "indoor",
            "players": "solo",
            "energy": "calm",
            "duration": "5-10"
        }"#;
        let raw: RawTags = serde_json::from_str(json).unwrap();
        let tags = raw.into_canonical();
        assert_eq!(tags.location, BTreeSet::from([LocationTag::Indoor]));
        assert_eq!(tags.players, BTreeSet::from([PlayerTag::Solo]));
        assert_eq!(tags.energy, BTreeSet::from([EnergyTag::Calm]));
        assert_eq!(tags.duration, BTreeSet::from([DurationTag::Short]));
        assert!(tags.season.is_empty());
        assert!(tags.category.is_none());
    }

    #[test]
    fn both_expands_to_indoor_and_outdoor() {
        let json = r#"{"location": "both", "players": "duo", "energy": "active", "duration": "30+"}"#;
        let tags = serde_json::from_str::<RawTags>(json).unwrap().into_canonical();
        assert_eq!(
            tags.location,
            BTreeSet::from([LocationTag::Indoor, LocationTag::Outdoor])
        );
    }

    #[test]
    fn mix_expands_to_calm_and_active() {
        let json = r#"{"location": "indoor", "players": "duo", "energy": "mix", "duration": "30+"}"#;
        let tags = serde_json::from_str::<RawTags>(json).unwrap().into_canonical();
        assert_eq!(
            tags.energy,
            BTreeSet::from([EnergyTag::Calm, EnergyTag::Active])
        );
    }

    #[test]
    fn canonical_arrays_pass_through_unchanged() {
        let json = r#"{
            "location": ["indoor", "outdoor"],
            "players": ["solo", "multiple"],
            "energy": ["active"],
            "duration": ["10-30", "30+"],
            "season": ["winter"],
            "category": ["lego"]
        }"#;
        let tags = serde_json::from_str::<RawTags>(json).unwrap().into_canonical();
        assert_eq!(tags.location.len(), 2);
        assert_eq!(tags.players.len(), 2);
        assert_eq!(tags.duration.len(), 2);
        assert_eq!(tags.season, BTreeSet::from([Season::Winter]));
        assert_eq!(
            tags.category,
            Some(BTreeSet::from([CategoryTag::new("lego")]))
        );
    }

    #[test]
    fn empty_arrays_stay_empty_not_absent() {
        let json = r#"{"location": [], "players": [], "energy": [], "duration": [], "category": []}"#;
        let tags = serde_json::from_str::<RawTags>(json).unwrap().into_canonical();
        assert!(tags.location.is_empty());
        assert_eq!(tags.category, Some(BTreeSet::new()));
    }

    #[test]
    fn legacy_record_normalizes_end_to_end() {
        let json = r#"{
            "id": "1700000000000",
            "name": "Vélo",
            "image": "/images/velo.jpg",
            "tags": {"location": "outdoor", "players": "solo", "energy": "active", "duration": "30+"},
            "houseLocation": "Jardin",
            "createdAt": "2023-11-14T22:13:20.000Z"
        }"#;
        let activity = serde_json::from_str::<RawActivity>(json)
            .unwrap()
            .into_canonical();
        assert_eq!(activity.id, "1700000000000");
        assert_eq!(activity.tags.location, BTreeSet::from([LocationTag::Outdoor]));
        assert!(activity.tags.category.is_none());
    }
}
