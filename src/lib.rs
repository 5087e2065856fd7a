//! polycal is a multi-calendar date/time algebra: pure conversions between
//! date components expressed in solar, lunar, lunisolar, era-based and
//! decimal calendar systems, through one shared linear day-number axis.
//!
//! Every calendar gets a codec pair to and from the axis; converting
//! between two calendars decodes on one side and re-encodes on the other.
//! Sub-day time rides along as a day fraction in one of three encodings
//! (wall clock, Swatch beats, decimal time). Validation and formatting are
//! read-only consumers of the same component shape.
//!
//! The whole crate is synchronous, allocation-light and side-effect-free;
//! all registry tables are immutable statics, so everything is safe to
//! call from any number of threads without coordination.
//!
//! ```
//! use polycal::{CalendarId, DateComponents, convert_between_calendars};
//!
//! let date = DateComponents::from_ymd(CalendarId::StandardSolar, 2023, 7, 19);
//! let lunar = convert_between_calendars(
//!     CalendarId::StandardSolar,
//!     CalendarId::PureLunar,
//!     &date,
//! );
//! assert_eq!(lunar.year(), 1445);
//! assert_eq!(lunar.month(), Some(1));
//! assert_eq!(lunar.day(), Some(1));
//! ```

mod codec;
mod consts;
mod format;
mod i18n;
mod prelude;
mod registry;
mod time;
mod types;
mod validate;

pub use consts::*;
pub use format::format_calendar_date;
pub use i18n::{
    DEFAULT_LANGUAGES, calendar_description, complementary_day_names, month_names, weekday_names,
    zodiac_names,
};
pub use registry::{
    CalendarDefinition, ConsistencyWarning, Era, MismatchKind, Unit, active_units,
    check_consistency, era_table, find_era, get_calendar_definition,
};
pub use time::{
    beat_time_to_fraction, beats_to_beat_time, beats_to_clock, clock_to_beat_time, clock_to_beats,
    clock_to_decimal, clock_to_fraction, decimal_to_clock, decimal_to_fraction,
    fraction_to_beat_time, fraction_to_clock, fraction_to_decimal,
};
pub use types::{BeatTime, ClockTime, DateComponents, DecimalTime};
pub use validate::validate_date_components;

pub use codec::{days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A day number on the shared linear axis (Julian day number convention:
/// the integer labels a fixed reference instant). Totally orders all
/// dates across every supported calendar.
pub type DayNumber = i64;

/// The closed set of supported calendars. The identifier drives which
/// codec pair, unit list and name tables apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarId {
    /// Proleptic Gregorian with wall-clock time.
    #[display(fmt = "standard-solar")]
    StandardSolar,
    /// Proleptic Gregorian carrying Swatch Internet Time.
    #[display(fmt = "standard-solar-with-beats")]
    StandardSolarWithBeats,
    /// Fixed-year-offset approximation of a lunisolar calendar.
    #[display(fmt = "lunisolar-approx")]
    LunisolarApprox,
    /// Solar calendar with era-relative year counting.
    #[display(fmt = "era-based-solar")]
    EraBasedSolar,
    /// Tabular lunar calendar on a fixed 30-year cycle.
    #[display(fmt = "pure-lunar")]
    PureLunar,
    /// Julian calendar shifted by a fixed 584-year civil epoch.
    #[display(fmt = "julian-offset-solar")]
    JulianOffsetSolar,
    /// Twelve 30-day months plus complementary days, with decimal time.
    #[display(fmt = "decimal-solar")]
    DecimalSolar,
}

impl CalendarId {
    /// Every supported calendar, in registry order.
    pub const ALL: [Self; 7] = [
        Self::StandardSolar,
        Self::StandardSolarWithBeats,
        Self::LunisolarApprox,
        Self::EraBasedSolar,
        Self::PureLunar,
        Self::JulianOffsetSolar,
        Self::DecimalSolar,
    ];

    /// Parses an identifier under an explicit unknown-identifier policy.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownCalendar` only under
    /// [`UnknownCalendarPolicy::Reject`]; the fallback policy always
    /// succeeds.
    pub fn resolve(s: &str, policy: UnknownCalendarPolicy) -> Result<Self, CalendarError> {
        match s.parse() {
            Ok(id) => Ok(id),
            Err(e) => match policy {
                UnknownCalendarPolicy::FallbackToStandardSolar => Ok(Self::StandardSolar),
                UnknownCalendarPolicy::Reject => Err(e),
            },
        }
    }
}

impl FromStr for CalendarId {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard-solar" => Ok(Self::StandardSolar),
            "standard-solar-with-beats" => Ok(Self::StandardSolarWithBeats),
            "lunisolar-approx" => Ok(Self::LunisolarApprox),
            "era-based-solar" => Ok(Self::EraBasedSolar),
            "pure-lunar" => Ok(Self::PureLunar),
            "julian-offset-solar" => Ok(Self::JulianOffsetSolar),
            "decimal-solar" => Ok(Self::DecimalSolar),
            other => Err(CalendarError::UnknownCalendar(other.to_owned())),
        }
    }
}

/// Error type for structural problems. Semantically invalid but
/// well-formed input (month 13, day 30 in February) is never an error;
/// that is [`validate_date_components`]'s output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The string names no supported calendar.
    #[error("Unknown calendar identifier: {0}")]
    UnknownCalendar(String),
}

/// What to do when a string identifier names no supported calendar.
/// This crate is display-oriented, so falling back to the standard solar
/// calendar is a deliberate, named policy rather than an implicit default
/// branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownCalendarPolicy {
    /// Resolve unknown identifiers to [`CalendarId::StandardSolar`].
    FallbackToStandardSolar,
    /// Surface unknown identifiers as errors.
    Reject,
}

/// Encodes date components onto the day-number axis using the codec of
/// `id`. Fields are read positionally from the components, so the caller
/// can reinterpret one calendar's year/month/day through another codec;
/// missing month/day resolve to 1. Out-of-range fields are the caller's
/// responsibility to have validated first.
pub fn calendar_to_axis(id: CalendarId, components: &DateComponents) -> DayNumber {
    codec::to_axis(id, components)
}

/// Decodes a day number into date components of the given calendar.
/// The result carries no time value.
pub fn axis_to_calendar(id: CalendarId, day: DayNumber) -> DateComponents {
    codec::from_axis(id, day)
}

/// Converts components between two calendars by decoding on the `from`
/// codec and re-encoding on the `to` codec. A time value present on the
/// input is carried across as a day fraction and re-expressed in the
/// target calendar's time encoding; calendars without sub-day units drop
/// it (see [`check_consistency`] for warning about such pairs).
pub fn convert_between_calendars(
    from: CalendarId,
    to: CalendarId,
    components: &DateComponents,
) -> DateComponents {
    let day = codec::to_axis(from, components);
    let mut converted = codec::from_axis(to, day);
    if let Some(fraction) = time_fraction(components) {
        attach_time(&mut converted, fraction);
    }
    converted
}

/// Combines a date's day number and its time-of-day fraction into one
/// real number, enabling arithmetic comparison and interpolation of
/// instants expressed in different calendars. The fraction's scale is the
/// calendar's own time encoding (millisecond, centibeat or decimal
/// second); a missing time contributes zero.
pub fn date_to_numeric_value(id: CalendarId, components: &DateComponents) -> f64 {
    codec::to_axis(id, components) as f64 + time_fraction(components).unwrap_or(0.0)
}

/// Splits a numeric date value back into components: the floor becomes
/// the day number, the remainder the time of day in the calendar's own
/// encoding. Inverse of [`date_to_numeric_value`] modulo the encoding's
/// rounding unit (1 ms, 1 centibeat or 1 decimal second). Calendars
/// without sub-day units drop the fraction.
pub fn numeric_value_to_date(id: CalendarId, value: f64) -> DateComponents {
    let day = value.floor() as DayNumber;
    let fraction = value - value.floor();
    let mut components = codec::from_axis(id, day);
    attach_time(&mut components, fraction);
    components
}

/// ISO day of week of a day number: 1 (Monday) through 7 (Sunday).
pub fn day_of_week(day: DayNumber) -> u8 {
    (day.rem_euclid(7) + 1) as u8
}

/// The time-of-day fraction of a components value in its own encoding,
/// if it carries one.
fn time_fraction(components: &DateComponents) -> Option<f64> {
    match components {
        DateComponents::StandardSolar { time, .. }
        | DateComponents::EraBasedSolar { time, .. } => time.map(time::clock_to_fraction),
        DateComponents::StandardSolarWithBeats { time, .. } => {
            time.map(time::beat_time_to_fraction)
        }
        DateComponents::DecimalSolar { time, .. } => time.map(time::decimal_to_fraction),
        DateComponents::LunisolarApprox { .. }
        | DateComponents::PureLunar { .. }
        | DateComponents::JulianOffsetSolar { .. } => None,
    }
}

/// Writes a day fraction into a components value using its own time
/// encoding. Date-only calendars ignore the fraction.
fn attach_time(components: &mut DateComponents, fraction: f64) {
    match components {
        DateComponents::StandardSolar { time: t, .. }
        | DateComponents::EraBasedSolar { time: t, .. } => {
            *t = Some(time::fraction_to_clock(fraction));
        }
        DateComponents::StandardSolarWithBeats { time: t, .. } => {
            *t = Some(time::fraction_to_beat_time(fraction));
        }
        DateComponents::DecimalSolar { time: t, .. } => {
            *t = Some(time::fraction_to_decimal(fraction));
        }
        DateComponents::LunisolarApprox { .. }
        | DateComponents::PureLunar { .. }
        | DateComponents::JulianOffsetSolar { .. } => {}
    }
}
