use chrono::{Datelike, NaiveDate};

use crate::tags::Season;

/// Map a calendar date to its season, Northern-Hemisphere convention:
/// Dec/Jan/Feb → winter, Mar/Apr/May → spring, Jun/Jul/Aug → summer,
/// Sep/Oct/Nov → fall.
///
/// The date is an explicit parameter so callers stay deterministic; anyone
/// wanting "the season right now" passes today's local date.
pub fn season_for_date(date: NaiveDate) -> Season {
    match date.month() {
        12 | 1 | 2 => Season::Winter,
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        _ => Season::Fall,
    }
}
