//! Per-calendar day-number codecs.
//!
//! Each calendar gets a pure pair of functions between its components and
//! the shared day-number axis, plus leap-year and month-length helpers.
//! Codecs assume structurally valid input; out-of-range fields are the
//! validator's business, not theirs.

use crate::consts::{
    CENTURY_CYCLE, COMPLEMENTARY_MONTH, DAYS_IN_MONTH, DECIMAL_DECREED_LEAP_YEARS,
    DECIMAL_DECREE_LIMIT, DECIMAL_EPOCH, DECIMAL_MONTH_DAYS, DECIMAL_REGULAR_DAYS, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JULIAN_OFFSET_YEARS, LEAP_YEAR_CYCLE,
    LUNAR_COMMON_YEAR_DAYS, LUNAR_EPOCH_CONSTANT, LUNAR_INVERSE_ORIGIN, LUNAR_LEAP_REMAINDERS,
    LUNISOLAR_YEAR_OFFSET, MAX_MONTH,
};
use crate::registry;
use crate::types::DateComponents;
use crate::{CalendarId, DayNumber};

/// Encodes components onto the day-number axis using the codec selected by
/// `id`. The year/month/day fields are read positionally from whatever
/// variant was passed; missing month/day resolve to 1. Era and
/// complementary information is honored when the selected codec uses it.
pub(crate) fn to_axis(id: CalendarId, components: &DateComponents) -> DayNumber {
    let (year, month, day) = components.concrete_ymd();
    match id {
        CalendarId::StandardSolar | CalendarId::StandardSolarWithBeats => {
            solar_to_day(year, month, day)
        }
        CalendarId::JulianOffsetSolar => julian_to_day(year + JULIAN_OFFSET_YEARS, month, day),
        CalendarId::PureLunar => lunar_to_day(year, month, day),
        CalendarId::LunisolarApprox => lunisolar_to_day(year, month, day),
        CalendarId::EraBasedSolar => era_to_day(components.era(), year, month, day),
        CalendarId::DecimalSolar => decimal_to_day(year, month, day),
    }
}

/// Decodes a day number into date components of the given calendar.
/// The result never carries a time value; sub-day handling lives in the
/// numeric value codec.
pub(crate) fn from_axis(id: CalendarId, day: DayNumber) -> DateComponents {
    match id {
        CalendarId::StandardSolar | CalendarId::StandardSolarWithBeats => {
            let (y, m, d) = day_to_solar(day);
            DateComponents::from_ymd(id, y, m, d)
        }
        CalendarId::JulianOffsetSolar => {
            let (y, m, d) = day_to_julian(day);
            DateComponents::from_ymd(id, y - JULIAN_OFFSET_YEARS, m, d)
        }
        CalendarId::PureLunar => {
            let (y, m, d) = day_to_lunar(day);
            DateComponents::from_ymd(id, y, m, d)
        }
        CalendarId::LunisolarApprox => {
            let (y, m, d) = day_to_solar(day);
            DateComponents::from_ymd(id, y + LUNISOLAR_YEAR_OFFSET, m, d)
        }
        CalendarId::EraBasedSolar => {
            let (y, m, d) = day_to_solar(day);
            let (era, era_year) = resolve_era(y, m, d);
            DateComponents::EraBasedSolar {
                era,
                year: era_year,
                month: Some(m),
                day: Some(d),
                time: None,
            }
        }
        CalendarId::DecimalSolar => {
            let (y, m, d) = day_to_decimal(day);
            DateComponents::from_ymd(id, y, m, d)
        }
    }
}

/// Leap-year predicate of the given calendar. For the era-based calendar
/// `year` must be an absolute solar year (resolve the era first).
pub fn is_leap_year(id: CalendarId, year: i32) -> bool {
    match id {
        CalendarId::StandardSolar
        | CalendarId::StandardSolarWithBeats
        | CalendarId::EraBasedSolar => is_gregorian_leap(year),
        CalendarId::JulianOffsetSolar => (year + JULIAN_OFFSET_YEARS) % LEAP_YEAR_CYCLE == 0,
        CalendarId::PureLunar => LUNAR_LEAP_REMAINDERS.contains(&year.rem_euclid(30)),
        CalendarId::LunisolarApprox => is_gregorian_leap(year - LUNISOLAR_YEAR_OFFSET),
        CalendarId::DecimalSolar => is_decimal_leap(year),
    }
}

/// Number of days in the given month of the given calendar and year.
/// Months the calendar does not have yield 0.
pub fn days_in_month(id: CalendarId, year: i32, month: u8) -> u8 {
    match id {
        CalendarId::StandardSolar
        | CalendarId::StandardSolarWithBeats
        | CalendarId::EraBasedSolar
        | CalendarId::LunisolarApprox
        | CalendarId::JulianOffsetSolar => {
            if month == 0 || month > MAX_MONTH {
                0
            } else if month == FEBRUARY && is_leap_year(id, year) {
                FEBRUARY_DAYS_LEAP
            } else {
                DAYS_IN_MONTH[month as usize]
            }
        }
        CalendarId::PureLunar => match month {
            1..=11 if month % 2 == 1 => 30,
            1..=11 => 29,
            12 if is_leap_year(id, year) => 30,
            12 => 29,
            _ => 0,
        },
        CalendarId::DecimalSolar => match month {
            1..=MAX_MONTH => DECIMAL_MONTH_DAYS,
            COMPLEMENTARY_MONTH => 5 + u8::from(is_leap_year(id, year)),
            _ => 0,
        },
    }
}

/// Number of days in the given year of the given calendar.
pub fn days_in_year(id: CalendarId, year: i32) -> i64 {
    let leap = i64::from(is_leap_year(id, year));
    match id {
        CalendarId::PureLunar => LUNAR_COMMON_YEAR_DAYS + leap,
        _ => 365 + leap,
    }
}

// --- standard solar (proleptic Gregorian) ---

fn is_gregorian_leap(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
}

fn solar_to_day(year: i32, month: u8, day: u8) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

#[allow(clippy::many_single_char_names)]
fn day_to_solar(day: i64) -> (i32, u8, u8) {
    let a = day + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let dom = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u8, dom as u8)
}

// --- julian and the fixed-offset civil calendar on top of it ---

fn julian_to_day(year: i32, month: u8, day: u8) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
}

#[allow(clippy::many_single_char_names)]
fn day_to_julian(day: i64) -> (i32, u8, u8) {
    let c = day + 32082;
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let dom = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = d - 4800 + m.div_euclid(10);
    (year as i32, month as u8, dom as u8)
}

// --- tabular lunar, fixed 30-year cycle ---

fn lunar_to_day(year: i32, month: u8, day: u8) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    (11 * y + 3).div_euclid(30) + 354 * y + 30 * m - (m - 1).div_euclid(2) + d
        + LUNAR_EPOCH_CONSTANT
}

/// Inverts the tabular scheme. The intermediate variables and the
/// truncating division order follow the published tabular algorithm;
/// reordering the divisions shifts results near month boundaries.
fn day_to_lunar(day: i64) -> (i32, u8, u8) {
    let l = day - LUNAR_INVERSE_ORIGIN + 10_632;
    let n = (l - 1) / 10_631;
    let l2 = l - 10_631 * n + 354;
    let j = ((10_985 - l2) / 5316) * ((50 * l2) / 17_719)
        + (l2 / 5670) * ((43 * l2) / 15_238);
    let l3 = l2 - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
    let month = (24 * l3) / 709;
    let dom = l3 - (709 * month) / 24;
    let year = 30 * n + j - 30;
    (year as i32, month as u8, dom as u8)
}

// --- lunisolar approximation ---

/// Fixed-year-offset relabeling of the standard solar calendar. This is
/// knowingly NOT a lunisolar computation: there is no new-moon arithmetic
/// and no leap-month insertion. Month and day are capped at the solar
/// ranges, so zodiac-cycle dates come out solar-shaped with relabeled
/// years only.
fn lunisolar_to_day(year: i32, month: u8, day: u8) -> i64 {
    let solar_year = year - LUNISOLAR_YEAR_OFFSET;
    let month = month.clamp(1, MAX_MONTH);
    let day = day.clamp(1, days_in_month(CalendarId::StandardSolar, solar_year, month));
    solar_to_day(solar_year, month, day)
}

// --- era-based solar ---

fn era_to_day(era: Option<&str>, year: i32, month: u8, day: u8) -> i64 {
    // Unknown era identifiers fall back to treating `year` as absolute.
    let absolute = era
        .and_then(registry::find_era)
        .map_or(year, |e| e.start.0 + year - 1);
    solar_to_day(absolute, month, day)
}

fn resolve_era(year: i32, month: u8, day: u8) -> (Option<String>, i32) {
    for era in registry::era_table().iter().rev() {
        if era.start <= (year, month, day) {
            return (Some(era.name.to_owned()), year - era.start.0 + 1);
        }
    }
    (None, year)
}

// --- decimal solar ---

fn is_decimal_leap(year: i32) -> bool {
    if year <= DECIMAL_DECREE_LIMIT {
        // Early leap years were declared by decree, not computed. Keep the
        // two regimes separate.
        DECIMAL_DECREED_LEAP_YEARS.contains(&year)
    } else {
        is_gregorian_leap(year)
    }
}

fn decimal_to_day(year: i32, month: u8, day: u8) -> i64 {
    let mut total = DECIMAL_EPOCH;
    let mut y = 1;
    while y < year {
        total += days_in_year(CalendarId::DecimalSolar, y);
        y += 1;
    }
    while y > year {
        y -= 1;
        total -= days_in_year(CalendarId::DecimalSolar, y);
    }
    total + i64::from(month - 1) * i64::from(DECIMAL_MONTH_DAYS) + i64::from(day)
}

fn day_to_decimal(day: i64) -> (i32, u8, u8) {
    let mut remaining = day - DECIMAL_EPOCH;
    let mut year = 1;
    while remaining > days_in_year(CalendarId::DecimalSolar, year) {
        remaining -= days_in_year(CalendarId::DecimalSolar, year);
        year += 1;
    }
    while remaining <= 0 {
        year -= 1;
        remaining += days_in_year(CalendarId::DecimalSolar, year);
    }
    if remaining <= DECIMAL_REGULAR_DAYS {
        let month = ((remaining - 1) / i64::from(DECIMAL_MONTH_DAYS)) as u8 + 1;
        let dom = ((remaining - 1) % i64::from(DECIMAL_MONTH_DAYS)) as u8 + 1;
        (year, month, dom)
    } else {
        // Days 361+ sit outside the month structure: complementary days.
        (year, COMPLEMENTARY_MONTH, (remaining - DECIMAL_REGULAR_DAYS) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(id: CalendarId, y: i32, m: u8, d: u8) -> DateComponents {
        DateComponents::from_ymd(id, y, m, d)
    }

    #[test]
    fn solar_known_anchors() {
        assert_eq!(solar_to_day(2000, 1, 1), 2_451_545);
        assert_eq!(solar_to_day(1970, 1, 1), 2_440_588);
        assert_eq!(solar_to_day(1792, 9, 22), 2_375_840);
        assert_eq!(day_to_solar(2_451_545), (2000, 1, 1));
        assert_eq!(day_to_solar(2_440_588), (1970, 1, 1));
    }

    #[test]
    fn solar_round_trip_across_leap_boundaries() {
        for (y, m, d) in [
            (2000, 2, 29),
            (1900, 2, 28),
            (2024, 12, 31),
            (2023, 3, 1),
            (1, 1, 1),
            (1582, 10, 15),
        ] {
            let day = solar_to_day(y, m, d);
            assert_eq!(day_to_solar(day), (y, m, d), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn julian_is_thirteen_days_behind_in_2000() {
        // Julian 2000-01-01 fell on standard solar 2000-01-14.
        let day = julian_to_day(2000, 1, 1);
        assert_eq!(day, 2_451_558);
        assert_eq!(day_to_solar(day), (2000, 1, 14));
        assert_eq!(day_to_julian(day), (2000, 1, 1));
    }

    #[test]
    fn julian_offset_applies_fixed_shift() {
        // Civil year 1440 is plain julian year 2024.
        let c = ymd(CalendarId::JulianOffsetSolar, 1440, 1, 1);
        let day = to_axis(CalendarId::JulianOffsetSolar, &c);
        assert_eq!(day, julian_to_day(2024, 1, 1));
        assert_eq!(from_axis(CalendarId::JulianOffsetSolar, day), c);
    }

    #[test]
    fn lunar_epoch_anchor() {
        assert_eq!(lunar_to_day(1, 1, 1), 1_948_440);
        assert_eq!(day_to_lunar(1_948_440), (1, 1, 1));
    }

    #[test]
    fn lunar_year_1445_starts_on_solar_2023_07_19() {
        let day = lunar_to_day(1445, 1, 1);
        assert_eq!(day, 2_460_145);
        assert_eq!(day_to_solar(day), (2023, 7, 19));
    }

    #[test]
    fn lunar_round_trip_near_month_boundaries() {
        for (y, m, d) in [
            (1445, 1, 1),
            (1445, 1, 30),
            (1445, 2, 1),
            (1445, 2, 29),
            (1445, 12, 29),
            (1447, 12, 30), // 1447 % 30 == 7, a leap year with a 30-day 12th month
            (1, 12, 29),
            (30, 6, 15),
        ] {
            let day = lunar_to_day(y, m, d);
            assert_eq!(day_to_lunar(day), (y, m, d), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn lunar_leap_years_follow_the_remainder_set() {
        assert!(is_leap_year(CalendarId::PureLunar, 2));
        assert!(is_leap_year(CalendarId::PureLunar, 1447)); // 1447 % 30 == 7
        assert!(is_leap_year(CalendarId::PureLunar, 1445)); // 1445 % 30 == 5
        assert!(!is_leap_year(CalendarId::PureLunar, 1446)); // 1446 % 30 == 6
        assert!(!is_leap_year(CalendarId::PureLunar, 1));
        assert!(!is_leap_year(CalendarId::PureLunar, 30));
        assert_eq!(days_in_month(CalendarId::PureLunar, 1447, 12), 30);
        assert_eq!(days_in_month(CalendarId::PureLunar, 1446, 12), 29);
    }

    #[test]
    fn lunar_year_lengths() {
        assert_eq!(days_in_year(CalendarId::PureLunar, 1), 354);
        assert_eq!(days_in_year(CalendarId::PureLunar, 2), 355);
        // consecutive new years differ by the year length
        for y in 1..60 {
            let diff = lunar_to_day(y + 1, 1, 1) - lunar_to_day(y, 1, 1);
            assert_eq!(diff, days_in_year(CalendarId::PureLunar, y), "year {y}");
        }
    }

    #[test]
    fn lunisolar_is_a_relabeled_solar_calendar() {
        let c = ymd(CalendarId::LunisolarApprox, 2697 + 2024, 2, 29);
        let day = to_axis(CalendarId::LunisolarApprox, &c);
        assert_eq!(day, solar_to_day(2024, 2, 29));
        assert_eq!(from_axis(CalendarId::LunisolarApprox, day), c);
    }

    #[test]
    fn lunisolar_caps_month_and_day_at_solar_ranges() {
        // February 30 of a non-leap solar year collapses to February 28.
        let c = ymd(CalendarId::LunisolarApprox, 2697 + 2023, 2, 30);
        let day = to_axis(CalendarId::LunisolarApprox, &c);
        assert_eq!(day, solar_to_day(2023, 2, 28));
    }

    #[test]
    fn era_resolution_scans_newest_first() {
        // 2019-05-01 opened a new era; the day before still belongs to the
        // previous one.
        let c = from_axis(CalendarId::EraBasedSolar, solar_to_day(2019, 5, 1));
        assert_eq!(c.era(), Some("Reiwa"));
        assert_eq!(c.year(), 1);
        let c = from_axis(CalendarId::EraBasedSolar, solar_to_day(2019, 4, 30));
        assert_eq!(c.era(), Some("Heisei"));
        assert_eq!(c.year(), 31);
    }

    #[test]
    fn era_year_encodes_through_the_table() {
        let c = DateComponents::EraBasedSolar {
            era: Some("Reiwa".to_owned()),
            year: 6,
            month: Some(1),
            day: Some(1),
            time: None,
        };
        assert_eq!(to_axis(CalendarId::EraBasedSolar, &c), solar_to_day(2024, 1, 1));
        // symbols resolve too, case-insensitively
        let c = DateComponents::EraBasedSolar {
            era: Some("r".to_owned()),
            year: 6,
            month: Some(1),
            day: Some(1),
            time: None,
        };
        assert_eq!(to_axis(CalendarId::EraBasedSolar, &c), solar_to_day(2024, 1, 1));
    }

    #[test]
    fn unknown_era_treats_year_as_absolute() {
        let c = DateComponents::EraBasedSolar {
            era: Some("no-such-era".to_owned()),
            year: 2024,
            month: Some(1),
            day: Some(1),
            time: None,
        };
        assert_eq!(to_axis(CalendarId::EraBasedSolar, &c), solar_to_day(2024, 1, 1));
    }

    #[test]
    fn dates_before_the_oldest_era_have_no_era() {
        let c = from_axis(CalendarId::EraBasedSolar, solar_to_day(1867, 1, 1));
        assert_eq!(c.era(), None);
        assert_eq!(c.year(), 1867);
    }

    #[test]
    fn decimal_epoch_anchor() {
        // Decimal 1-01-01 fell on standard solar 1792-09-22.
        assert_eq!(decimal_to_day(1, 1, 1), 2_375_840);
        assert_eq!(day_to_solar(2_375_840), (1792, 9, 22));
        assert_eq!(day_to_decimal(2_375_840), (1, 1, 1));
    }

    #[test]
    fn decimal_brumaire_coup_anchor() {
        // Decimal 8-02-18 fell on standard solar 1799-11-09.
        let day = decimal_to_day(8, 2, 18);
        assert_eq!(day_to_solar(day), (1799, 11, 9));
        assert_eq!(day_to_decimal(day), (8, 2, 18));
    }

    #[test]
    fn decimal_leap_years_use_two_regimes() {
        // decreed list for early years
        assert!(is_leap_year(CalendarId::DecimalSolar, 3));
        assert!(is_leap_year(CalendarId::DecimalSolar, 7));
        assert!(is_leap_year(CalendarId::DecimalSolar, 11));
        assert!(!is_leap_year(CalendarId::DecimalSolar, 4));
        assert!(!is_leap_year(CalendarId::DecimalSolar, 14));
        // standard rule beyond the decree limit
        assert!(is_leap_year(CalendarId::DecimalSolar, 16));
        assert!(!is_leap_year(CalendarId::DecimalSolar, 100));
        assert!(is_leap_year(CalendarId::DecimalSolar, 400));
    }

    #[test]
    fn decimal_complementary_days_round_trip() {
        // day 361 of a common year is the first complementary day
        let day = decimal_to_day(2, 13, 1);
        let c = from_axis(CalendarId::DecimalSolar, day);
        assert!(c.is_complementary());
        assert_eq!((c.year(), c.month(), c.day()), (2, Some(13), Some(1)));
        // leap year 3 has a sixth complementary day
        let day = decimal_to_day(3, 13, 6);
        assert_eq!(day_to_decimal(day), (3, 13, 6));
        // the next day is 4-01-01
        assert_eq!(day_to_decimal(day + 1), (4, 1, 1));
    }

    #[test]
    fn decimal_round_trip_over_a_span_of_years() {
        for y in [1, 2, 3, 8, 14, 15, 100, 230] {
            for (m, d) in [(1, 1), (5, 30), (12, 30)] {
                let day = decimal_to_day(y, m, d);
                assert_eq!(day_to_decimal(day), (y, m, d), "{y}-{m}-{d}");
            }
        }
    }

    #[test]
    fn gregorian_leap_oracle() {
        assert!(is_leap_year(CalendarId::StandardSolar, 2000));
        assert!(!is_leap_year(CalendarId::StandardSolar, 1900));
        assert!(is_leap_year(CalendarId::StandardSolar, 2024));
    }

    #[test]
    fn days_in_month_tables() {
        assert_eq!(days_in_month(CalendarId::StandardSolar, 2024, 2), 29);
        assert_eq!(days_in_month(CalendarId::StandardSolar, 2023, 2), 28);
        assert_eq!(days_in_month(CalendarId::StandardSolar, 2023, 1), 31);
        assert_eq!(days_in_month(CalendarId::StandardSolar, 2023, 13), 0);
        assert_eq!(days_in_month(CalendarId::PureLunar, 1445, 1), 30);
        assert_eq!(days_in_month(CalendarId::PureLunar, 1445, 2), 29);
        assert_eq!(days_in_month(CalendarId::DecimalSolar, 2, 12), 30);
        assert_eq!(days_in_month(CalendarId::DecimalSolar, 2, 13), 5);
        assert_eq!(days_in_month(CalendarId::DecimalSolar, 3, 13), 6);
    }

    #[test]
    fn partial_components_encode_from_their_lower_bound() {
        let c = DateComponents::StandardSolar {
            year: 2024,
            month: None,
            day: None,
            time: None,
        };
        assert_eq!(to_axis(CalendarId::StandardSolar, &c), solar_to_day(2024, 1, 1));
    }
}
