use crate::CalendarId;
use crate::consts::{MIN_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Standard wall-clock time of day: hour/minute/second/millisecond.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:02}:{:02}:{:02}.{:03}", hour, minute, second, millisecond)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl ClockTime {
    /// Creates a clock time; fields are range-checked by the validator,
    /// not here.
    pub const fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self { hour, minute, second, millisecond }
    }

    /// Milliseconds elapsed since the start of the day.
    pub const fn millis_of_day(self) -> i64 {
        self.hour as i64 * MS_PER_HOUR
            + self.minute as i64 * MS_PER_MINUTE
            + self.second as i64 * MS_PER_SECOND
            + self.millisecond as i64
    }
}

/// Swatch Internet Time: 1 day = 1000 beats = 100000 centibeats,
/// referenced to the fixed UTC+1 Biel Mean Time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "@{:03}.{:02}", beat, centibeat)]
pub struct BeatTime {
    pub beat: u16,
    pub centibeat: u8,
}

impl BeatTime {
    pub const fn new(beat: u16, centibeat: u8) -> Self {
        Self { beat, centibeat }
    }

    /// Centibeats elapsed since the start of the day.
    pub const fn centibeats_of_day(self) -> i64 {
        self.beat as i64 * 100 + self.centibeat as i64
    }
}

/// French decimal time: 10 hours x 100 minutes x 100 seconds per day.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}:{:02}:{:02}", hour, minute, second)]
pub struct DecimalTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DecimalTime {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second }
    }

    /// Decimal seconds elapsed since the start of the day.
    pub const fn decimal_seconds_of_day(self) -> i64 {
        self.hour as i64 * 10_000 + self.minute as i64 * 100 + self.second as i64
    }
}

/// Date components tagged by the calendar they belong to.
///
/// One variant exists per calendar field shape, so illegal combinations
/// (beats on a wall-clock calendar, an era on the lunar calendar) are
/// unrepresentable. The `year` is always present; `month` and `day` may be
/// absent to represent partial dates. Field ranges are calendar-specific
/// and checked by [`crate::validate_date_components`], never by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calendar", rename_all = "kebab-case")]
pub enum DateComponents {
    /// Proleptic Gregorian date with an optional wall clock.
    StandardSolar {
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<ClockTime>,
    },
    /// Proleptic Gregorian date carrying Swatch beats instead of a clock.
    StandardSolarWithBeats {
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<BeatTime>,
    },
    /// Fixed-year-offset relabeling of the standard solar calendar.
    /// Date-only; the approximation carries no sub-day precision.
    LunisolarApprox {
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
    },
    /// Standard solar day arithmetic with era-relative year counting.
    /// `era` names an entry of the era table; `None` (or an unknown name)
    /// means `year` is an absolute solar year.
    EraBasedSolar {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        era: Option<String>,
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<ClockTime>,
    },
    /// Tabular lunar date (30-year cycle). Date-only.
    PureLunar {
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
    },
    /// Julian calendar shifted by a fixed 584-year epoch. Date-only.
    JulianOffsetSolar {
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
    },
    /// Decimal calendar: twelve 30-day months plus complementary days,
    /// with optional decimal time. `complementary` marks the 5-6 extra
    /// days after the twelfth month (also representable as month 13).
    DecimalSolar {
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
        #[serde(default)]
        complementary: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<DecimalTime>,
    },
}

impl DateComponents {
    /// Builds a date-only value of the given calendar's shape. The era
    /// field stays empty and the complementary flag is derived from the
    /// month where applicable.
    pub fn from_ymd(id: CalendarId, year: i32, month: u8, day: u8) -> Self {
        let (month, day) = (Some(month), Some(day));
        match id {
            CalendarId::StandardSolar => Self::StandardSolar { year, month, day, time: None },
            CalendarId::StandardSolarWithBeats => {
                Self::StandardSolarWithBeats { year, month, day, time: None }
            }
            CalendarId::LunisolarApprox => Self::LunisolarApprox { year, month, day },
            CalendarId::EraBasedSolar => {
                Self::EraBasedSolar { era: None, year, month, day, time: None }
            }
            CalendarId::PureLunar => Self::PureLunar { year, month, day },
            CalendarId::JulianOffsetSolar => Self::JulianOffsetSolar { year, month, day },
            CalendarId::DecimalSolar => Self::DecimalSolar {
                year,
                month,
                day,
                complementary: month > Some(crate::consts::MAX_MONTH),
                time: None,
            },
        }
    }

    /// The calendar this value belongs to.
    pub const fn calendar(&self) -> CalendarId {
        match self {
            Self::StandardSolar { .. } => CalendarId::StandardSolar,
            Self::StandardSolarWithBeats { .. } => CalendarId::StandardSolarWithBeats,
            Self::LunisolarApprox { .. } => CalendarId::LunisolarApprox,
            Self::EraBasedSolar { .. } => CalendarId::EraBasedSolar,
            Self::PureLunar { .. } => CalendarId::PureLunar,
            Self::JulianOffsetSolar { .. } => CalendarId::JulianOffsetSolar,
            Self::DecimalSolar { .. } => CalendarId::DecimalSolar,
        }
    }

    /// Returns the year component (always present).
    pub const fn year(&self) -> i32 {
        match *self {
            Self::StandardSolar { year, .. }
            | Self::StandardSolarWithBeats { year, .. }
            | Self::LunisolarApprox { year, .. }
            | Self::EraBasedSolar { year, .. }
            | Self::PureLunar { year, .. }
            | Self::JulianOffsetSolar { year, .. }
            | Self::DecimalSolar { year, .. } => year,
        }
    }

    /// Returns the month component if present.
    pub const fn month(&self) -> Option<u8> {
        match *self {
            Self::StandardSolar { month, .. }
            | Self::StandardSolarWithBeats { month, .. }
            | Self::LunisolarApprox { month, .. }
            | Self::EraBasedSolar { month, .. }
            | Self::PureLunar { month, .. }
            | Self::JulianOffsetSolar { month, .. }
            | Self::DecimalSolar { month, .. } => month,
        }
    }

    /// Returns the day component if present.
    pub const fn day(&self) -> Option<u8> {
        match *self {
            Self::StandardSolar { day, .. }
            | Self::StandardSolarWithBeats { day, .. }
            | Self::LunisolarApprox { day, .. }
            | Self::EraBasedSolar { day, .. }
            | Self::PureLunar { day, .. }
            | Self::JulianOffsetSolar { day, .. }
            | Self::DecimalSolar { day, .. } => day,
        }
    }

    /// Returns the era name for the era-based calendar.
    pub fn era(&self) -> Option<&str> {
        match self {
            Self::EraBasedSolar { era, .. } => era.as_deref(),
            _ => None,
        }
    }

    /// True when this value sits in the decimal calendar's
    /// complementary-day block.
    pub const fn is_complementary(&self) -> bool {
        matches!(self, Self::DecimalSolar { complementary: true, .. })
    }

    /// Earliest concrete (year, month, day) represented by this value;
    /// absent fields resolve to their minimum.
    pub fn concrete_ymd(&self) -> (i32, u8, u8) {
        (
            self.year(),
            self.month().unwrap_or(MIN_DAY),
            self.day().unwrap_or(MIN_DAY),
        )
    }
}
