/// Maximum valid month for the 12-month calendars
pub const MAX_MONTH: u8 = 12;

/// Month number of the decimal calendar's complementary-day block
pub const COMPLEMENTARY_MONTH: u8 = 13;

/// First day of month, used when a partial date needs a concrete day
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each standard solar month (index 0 is unused, months are
/// 1-indexed). February shows 28 days (non-leap year default).
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by the leap-year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

// --- sub-day scales ---

/// Milliseconds in a standard day
pub const MS_PER_DAY: i64 = 86_400_000;
/// Milliseconds in an hour
pub const MS_PER_HOUR: i64 = 3_600_000;
/// Milliseconds in a minute
pub const MS_PER_MINUTE: i64 = 60_000;
/// Milliseconds in a second
pub const MS_PER_SECOND: i64 = 1_000;
/// Standard seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Swatch beats in a day
pub const BEATS_PER_DAY: i64 = 1_000;
/// Centibeats in a day
pub const CENTIBEATS_PER_DAY: i64 = 100_000;
/// Standard seconds covered by one Swatch beat (86400 / 1000)
pub const SECONDS_PER_BEAT: f64 = 86.4;
/// The Biel Mean Time reference is fixed at UTC+1; encoding wall-clock
/// hours as beats always shifts by this one hour.
pub const BIEL_HOUR_OFFSET: i32 = 1;

/// Decimal seconds in a day (10 hours x 100 minutes x 100 seconds)
pub const DECIMAL_SECONDS_PER_DAY: i64 = 100_000;
/// Decimal seconds in a decimal hour
pub const DECIMAL_SECONDS_PER_HOUR: i64 = 10_000;
/// Decimal seconds in a decimal minute
pub const DECIMAL_SECONDS_PER_MINUTE: i64 = 100;

// --- per-calendar epochs and cycle tables ---

/// Additive constant of the tabular lunar `to_axis` formula, chosen so
/// that lunar 1-01-01 lands on day number 1948440.
pub const LUNAR_EPOCH_CONSTANT: i64 = 1_948_440 - 385;

/// Day-number origin used by the tabular lunar `from_axis` inversion.
pub const LUNAR_INVERSE_ORIGIN: i64 = 1_948_440;

/// Year remainders (mod 30) that are leap years in the tabular lunar
/// 30-year cycle. Exactly 11 per cycle.
pub const LUNAR_LEAP_REMAINDERS: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Days in a common lunar year
pub const LUNAR_COMMON_YEAR_DAYS: i64 = 354;

/// Day number of the day before decimal year 1, month 1, day 1
/// (the decimal epoch fell on 1792-09-22 in the standard solar calendar).
pub const DECIMAL_EPOCH: i64 = 2_375_839;

/// Decimal calendar leap years declared by decree rather than computed.
/// Applies to years up to [`DECIMAL_DECREE_LIMIT`]; later years use the
/// standard Gregorian rule.
pub const DECIMAL_DECREED_LEAP_YEARS: [i32; 3] = [3, 7, 11];
/// Last year covered by the decreed leap-year list
pub const DECIMAL_DECREE_LIMIT: i32 = 14;

/// Days in one regular decimal month
pub const DECIMAL_MONTH_DAYS: u8 = 30;
/// Days covered by the twelve regular decimal months
pub const DECIMAL_REGULAR_DAYS: i64 = 360;

/// Fixed year shift of the julian-offset civil calendar: civil year + 584
/// is the plain julian year.
pub const JULIAN_OFFSET_YEARS: i32 = 584;

/// Fixed year shift of the lunisolar approximation: lunisolar year - 2697
/// is the standard solar year. This is a relabeling, not an astronomical
/// computation; see the codec documentation.
pub const LUNISOLAR_YEAR_OFFSET: i32 = 2697;
