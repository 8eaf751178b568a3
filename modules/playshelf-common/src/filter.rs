use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::activity::Activity;
use crate::season::season_for_date;
use crate::tags::{CategoryTag, DurationTag, EnergyTag, LocationTag, PlayerTag, Season};

/// The user's current multi-select filter choices, one set per facet.
///
/// An empty set means "no restriction on this facet". Season is the
/// exception: it starts as (and clears back to) the singleton current
/// season, never the empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub location: BTreeSet<LocationTag>,
    pub players: BTreeSet<PlayerTag>,
    pub energy: BTreeSet<EnergyTag>,
    pub duration: BTreeSet<DurationTag>,
    pub season: BTreeSet<Season>,
    pub category: BTreeSet<CategoryTag>,
    pub show_favorites_only: bool,
}

impl FilterState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            location: BTreeSet::new(),
            players: BTreeSet::new(),
            energy: BTreeSet::new(),
            duration: BTreeSet::new(),
            season: BTreeSet::from([season_for_date(today)]),
            category: BTreeSet::new(),
            show_favorites_only: false,
        }
    }

    /// "Effacer": reset every facet to no restriction — except season,
    /// which snaps back to the current season rather than clearing. That
    /// asymmetry is intentional.
    pub fn clear(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn toggle_location(&mut self, tag: LocationTag) {
        toggle(&mut self.location, tag);
    }

    pub fn toggle_players(&mut self, tag: PlayerTag) {
        toggle(&mut self.players, tag);
    }

    pub fn toggle_energy(&mut self, tag: EnergyTag) {
        toggle(&mut self.energy, tag);
    }

    pub fn toggle_duration(&mut self, tag: DurationTag) {
        toggle(&mut self.duration, tag);
    }

    pub fn toggle_season(&mut self, tag: Season) {
        toggle(&mut self.season, tag);
    }

    pub fn toggle_category(&mut self, tag: CategoryTag) {
        toggle(&mut self.category, tag);
    }

    pub fn toggle_favorites_only(&mut self) {
        self.show_favorites_only = !self.show_favorites_only;
    }

    /// Whether anything beyond the season default restricts the list
    /// (drives the "Effacer" affordance).
    pub fn has_active_filters(&self) -> bool {
        !self.location.is_empty()
            || !self.players.is_empty()
            || !self.energy.is_empty()
            || !self.duration.is_empty()
            || !self.category.is_empty()
            || self.show_favorites_only
    }
}

/// Symmetric difference on one facet: add the tag if absent, drop it if
/// present. Toggling twice is the identity.
fn toggle<T: Ord>(set: &mut BTreeSet<T>, tag: T) {
    if !set.remove(&tag) {
        set.insert(tag);
    }
}

/// Evaluate the filters against a snapshot of the collection.
///
/// Facets combine conjunctively; within a facet the selected tags combine
/// disjunctively (any overlap passes). Survivors come back sorted by name
/// under French collation.
pub fn filter_activities<'a>(
    activities: &'a [Activity],
    filters: &FilterState,
    favorites: &HashSet<String>,
) -> Vec<&'a Activity> {
    let mut survivors: Vec<&Activity> = activities
        .iter()
        .filter(|activity| matches_filters(activity, filters, favorites))
        .collect();
    survivors.sort_by_cached_key(|activity| collation_key(&activity.name));
    survivors
}

fn matches_filters(activity: &Activity, filters: &FilterState, favorites: &HashSet<String>) -> bool {
    if filters.show_favorites_only && !favorites.contains(&activity.id) {
        return false;
    }

    let tags = &activity.tags;
    if !selection_matches(&filters.location, &tags.location)
        || !selection_matches(&filters.players, &tags.players)
        || !selection_matches(&filters.energy, &tags.energy)
        || !selection_matches(&filters.duration, &tags.duration)
    {
        return false;
    }

    // The season gate only applies to activities that can happen outdoors;
    // indoor-only activities pass it regardless of the selection.
    if tags.location.contains(&LocationTag::Outdoor)
        && !selection_matches(&filters.season, &tags.season)
    {
        return false;
    }

    // Category diverges from the other facets when the field is absent:
    // a record with no category field at all fails any non-empty selection.
    if !filters.category.is_empty() {
        match &tags.category {
            Some(set) => {
                if filters.category.is_disjoint(set) {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

/// Empty selection restricts nothing; otherwise the activity needs at least
/// one tag in common. An activity with an empty tag set on the facet can
/// never satisfy a non-empty selection.
fn selection_matches<T: Ord>(selection: &BTreeSet<T>, tags: &BTreeSet<T>) -> bool {
    selection.is_empty() || !selection.is_disjoint(tags)
}

/// Sort key approximating French collation: case-insensitive, accented
/// letters fold to their base letter, ligatures expand. "Âne" sorts before
/// "Zèbre".
pub fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'â' | 'ä' | 'á' => key.push('a'),
            'é' | 'è' | 'ê' | 'ë' => key.push('e'),
            'î' | 'ï' | 'í' => key.push('i'),
            'ô' | 'ö' | 'ó' => key.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => key.push('u'),
            'ÿ' => key.push('y'),
            'ç' => key.push('c'),
            'ñ' => key.push('n'),
            'œ' => key.push_str("oe"),
            'æ' => key.push_str("ae"),
            other => key.push(other),
        }
    }
    key
}
