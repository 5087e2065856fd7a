//! Static calendar metadata: unit lists, display windows, era tables.
//!
//! Everything here is constructed once as `static`/`const` data and never
//! mutated, which is the entire concurrency story of this crate.

use crate::CalendarId;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A temporal granularity, ordered coarsest to finest within each family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
    #[display(fmt = "beat")]
    Beat,
    #[display(fmt = "centibeat")]
    Centibeat,
    #[display(fmt = "decimal_hour")]
    DecimalHour,
    #[display(fmt = "decimal_minute")]
    DecimalMinute,
    #[display(fmt = "decimal_second")]
    DecimalSecond,
}

impl Unit {
    /// True for sub-day units, in any of the three time encodings.
    pub const fn is_time_unit(self) -> bool {
        !matches!(self, Self::Year | Self::Month | Self::Day)
    }
}

/// One entry of an era table: a named epoch at which year counting
/// restarts from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Start date in absolute standard solar (year, month, day).
    pub start: (i32, u8, u8),
}

/// Era table of the era-based solar calendar, ordered oldest to newest.
static ERAS: [Era; 5] = [
    Era { name: "Meiji", symbol: "M", start: (1868, 10, 23) },
    Era { name: "Taisho", symbol: "T", start: (1912, 7, 30) },
    Era { name: "Showa", symbol: "S", start: (1926, 12, 25) },
    Era { name: "Heisei", symbol: "H", start: (1989, 1, 8) },
    Era { name: "Reiwa", symbol: "R", start: (2019, 5, 1) },
];

/// The full era table, oldest first.
pub fn era_table() -> &'static [Era] {
    &ERAS
}

/// Finds an era by name or symbol, case-insensitively.
pub fn find_era(identifier: &str) -> Option<&'static Era> {
    ERAS.iter().find(|e| {
        e.name.eq_ignore_ascii_case(identifier) || e.symbol.eq_ignore_ascii_case(identifier)
    })
}

/// Static per-calendar metadata. Instances for the built-in calendars live
/// in this module; UIs juxtaposing calendars may build their own (e.g. to
/// disable one) since all fields are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDefinition {
    pub id: CalendarId,
    /// Every unit the calendar recognizes, coarsest to finest.
    pub units: &'static [Unit],
    /// Units excluded from display even when inside the window.
    pub excluded_units: &'static [Unit],
    /// Coarsest displayed unit.
    pub max_unit: Unit,
    /// Finest displayed unit.
    pub min_unit: Unit,
    /// Era table; empty for calendars without eras.
    pub eras: &'static [Era],
    /// Disabled calendars are skipped by the consistency checker.
    pub enabled: bool,
}

use Unit::{
    Beat, Centibeat, Day, DecimalHour, DecimalMinute, DecimalSecond, Hour, Millisecond, Minute,
    Month, Second, Year,
};

static STANDARD_SOLAR: CalendarDefinition = CalendarDefinition {
    id: CalendarId::StandardSolar,
    units: &[Year, Month, Day, Hour, Minute, Second, Millisecond],
    excluded_units: &[Millisecond],
    max_unit: Year,
    min_unit: Millisecond,
    eras: &[],
    enabled: true,
};

static STANDARD_SOLAR_WITH_BEATS: CalendarDefinition = CalendarDefinition {
    id: CalendarId::StandardSolarWithBeats,
    units: &[Year, Month, Day, Beat, Centibeat],
    excluded_units: &[],
    max_unit: Year,
    min_unit: Centibeat,
    eras: &[],
    enabled: true,
};

static LUNISOLAR_APPROX: CalendarDefinition = CalendarDefinition {
    id: CalendarId::LunisolarApprox,
    units: &[Year, Month, Day],
    excluded_units: &[],
    max_unit: Year,
    min_unit: Day,
    eras: &[],
    enabled: true,
};

static ERA_BASED_SOLAR: CalendarDefinition = CalendarDefinition {
    id: CalendarId::EraBasedSolar,
    units: &[Year, Month, Day, Hour, Minute, Second],
    excluded_units: &[],
    max_unit: Year,
    min_unit: Second,
    eras: &ERAS,
    enabled: true,
};

static PURE_LUNAR: CalendarDefinition = CalendarDefinition {
    id: CalendarId::PureLunar,
    units: &[Year, Month, Day],
    excluded_units: &[],
    max_unit: Year,
    min_unit: Day,
    eras: &[],
    enabled: true,
};

static JULIAN_OFFSET_SOLAR: CalendarDefinition = CalendarDefinition {
    id: CalendarId::JulianOffsetSolar,
    units: &[Year, Month, Day],
    excluded_units: &[],
    max_unit: Year,
    min_unit: Day,
    eras: &[],
    enabled: true,
};

static DECIMAL_SOLAR: CalendarDefinition = CalendarDefinition {
    id: CalendarId::DecimalSolar,
    units: &[Year, Month, Day, DecimalHour, DecimalMinute, DecimalSecond],
    excluded_units: &[],
    max_unit: Year,
    min_unit: DecimalSecond,
    eras: &[],
    enabled: true,
};

/// Looks up the static definition of a calendar.
pub fn get_calendar_definition(id: CalendarId) -> &'static CalendarDefinition {
    match id {
        CalendarId::StandardSolar => &STANDARD_SOLAR,
        CalendarId::StandardSolarWithBeats => &STANDARD_SOLAR_WITH_BEATS,
        CalendarId::LunisolarApprox => &LUNISOLAR_APPROX,
        CalendarId::EraBasedSolar => &ERA_BASED_SOLAR,
        CalendarId::PureLunar => &PURE_LUNAR,
        CalendarId::JulianOffsetSolar => &JULIAN_OFFSET_SOLAR,
        CalendarId::DecimalSolar => &DECIMAL_SOLAR,
    }
}

/// The units a calendar actually displays: the declared list windowed to
/// the inclusive `max_unit..min_unit` index range, minus the excluded set.
pub fn active_units(def: &CalendarDefinition) -> Vec<Unit> {
    let hi = def.units.iter().position(|u| *u == def.max_unit).unwrap_or(0);
    let lo = def
        .units
        .iter()
        .position(|u| *u == def.min_unit)
        .unwrap_or(def.units.len().saturating_sub(1));
    def.units
        .get(hi..=lo)
        .unwrap_or_default()
        .iter()
        .copied()
        .filter(|u| !def.excluded_units.contains(u))
        .collect()
}

/// What two juxtaposed calendars disagree about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// One calendar displays time-of-day units, the other does not.
    #[display(fmt = "time_mismatch")]
    TimeMismatch,
    /// One calendar displays date units, the other does not.
    #[display(fmt = "date_mismatch")]
    DateMismatch,
}

/// A pairwise warning produced by [`check_consistency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{kind} between {first} and {second}")]
pub struct ConsistencyWarning {
    pub first: CalendarId,
    pub second: CalendarId,
    pub kind: MismatchKind,
}

/// Pairwise-compares every two enabled calendars in the set and flags the
/// pairs where one side displays time (or date) units the other lacks.
/// A UI showing such calendars side by side can then warn that comparisons
/// will be date-only (or time-only).
pub fn check_consistency(definitions: &[&CalendarDefinition]) -> Vec<ConsistencyWarning> {
    let enabled: Vec<&CalendarDefinition> =
        definitions.iter().copied().filter(|d| d.enabled).collect();
    let mut warnings = Vec::new();
    for (i, a) in enabled.iter().enumerate() {
        let a_units = active_units(a);
        let a_time = a_units.iter().any(|u| u.is_time_unit());
        let a_date = a_units.iter().any(|u| !u.is_time_unit());
        for b in &enabled[i + 1..] {
            let b_units = active_units(b);
            let b_time = b_units.iter().any(|u| u.is_time_unit());
            let b_date = b_units.iter().any(|u| !u.is_time_unit());
            if a_time != b_time {
                warnings.push(ConsistencyWarning {
                    first: a.id,
                    second: b.id,
                    kind: MismatchKind::TimeMismatch,
                });
            }
            if a_date != b_date {
                warnings.push(ConsistencyWarning {
                    first: a.id,
                    second: b.id,
                    kind: MismatchKind::DateMismatch,
                });
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_units_window_and_exclusion() {
        // millisecond sits inside the window but is excluded
        let units = active_units(get_calendar_definition(CalendarId::StandardSolar));
        assert_eq!(units, [Year, Month, Day, Hour, Minute, Second]);
        // date-only calendar
        let units = active_units(get_calendar_definition(CalendarId::PureLunar));
        assert_eq!(units, [Year, Month, Day]);
    }

    #[test]
    fn active_units_respects_a_narrowed_window() {
        let def = CalendarDefinition {
            min_unit: Day,
            max_unit: Month,
            ..*get_calendar_definition(CalendarId::StandardSolar)
        };
        assert_eq!(active_units(&def), [Month, Day]);
    }

    #[test]
    fn consistency_flags_one_time_mismatch() {
        let a = get_calendar_definition(CalendarId::StandardSolar);
        let b = get_calendar_definition(CalendarId::PureLunar);
        let warnings = check_consistency(&[a, b]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, MismatchKind::TimeMismatch);
        assert_eq!(warnings[0].first, CalendarId::StandardSolar);
        assert_eq!(warnings[0].second, CalendarId::PureLunar);
    }

    #[test]
    fn consistency_is_quiet_for_matching_calendars() {
        let a = get_calendar_definition(CalendarId::StandardSolar);
        let b = get_calendar_definition(CalendarId::EraBasedSolar);
        assert!(check_consistency(&[a, b]).is_empty());
        let a = get_calendar_definition(CalendarId::PureLunar);
        let b = get_calendar_definition(CalendarId::JulianOffsetSolar);
        assert!(check_consistency(&[a, b]).is_empty());
    }

    #[test]
    fn consistency_skips_disabled_calendars() {
        let lunar = CalendarDefinition {
            enabled: false,
            ..*get_calendar_definition(CalendarId::PureLunar)
        };
        let solar = get_calendar_definition(CalendarId::StandardSolar);
        assert!(check_consistency(&[solar, &lunar]).is_empty());
    }

    #[test]
    fn consistency_checks_every_pair() {
        let defs = [
            get_calendar_definition(CalendarId::StandardSolar),
            get_calendar_definition(CalendarId::PureLunar),
            get_calendar_definition(CalendarId::JulianOffsetSolar),
        ];
        // solar/lunar and solar/julian-offset mismatch; lunar/julian-offset agree
        let warnings = check_consistency(&defs);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.kind == MismatchKind::TimeMismatch));
    }

    #[test]
    fn era_lookup_by_name_and_symbol() {
        assert_eq!(find_era("Reiwa").map(|e| e.start), Some((2019, 5, 1)));
        assert_eq!(find_era("reiwa").map(|e| e.symbol), Some("R"));
        assert_eq!(find_era("H").map(|e| e.name), Some("Heisei"));
        assert!(find_era("no-such-era").is_none());
    }

    #[test]
    fn era_table_is_ordered_oldest_first() {
        let starts: Vec<_> = era_table().iter().map(|e| e.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn warning_display_names_both_calendars() {
        let w = ConsistencyWarning {
            first: CalendarId::StandardSolar,
            second: CalendarId::PureLunar,
            kind: MismatchKind::TimeMismatch,
        };
        assert_eq!(w.to_string(), "time_mismatch between standard-solar and pure-lunar");
    }
}
