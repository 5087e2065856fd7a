//! Structural and range validation of date components.
//!
//! Expected-invalid input is a list of localized strings, never an error
//! or a panic. Only fields that are present get checked; partial dates
//! are valid by construction.

use crate::codec::{days_in_month, is_leap_year};
use crate::consts::{COMPLEMENTARY_MONTH, FEBRUARY, MAX_MONTH};
use crate::i18n;
use crate::registry;
use crate::types::{BeatTime, ClockTime, DateComponents, DecimalTime};
use crate::CalendarId;

/// Validates the present fields of `components` against its calendar's
/// ranges, returning one localized description per violated constraint.
/// An empty vector means the value is safe to feed to the codecs.
pub fn validate_date_components(components: &DateComponents, lang: &str) -> Vec<String> {
    let mut problems = Vec::new();
    let id = components.calendar();
    let year = absolute_year(components);

    let max_month = match id {
        CalendarId::DecimalSolar => COMPLEMENTARY_MONTH,
        _ => MAX_MONTH,
    };
    if let Some(month) = components.month() {
        if month < 1 || month > max_month {
            problems.push(i18n::render(
                "month-out-of-range",
                lang,
                &[("month", month.to_string()), ("max", max_month.to_string())],
            ));
        }
    }
    if let Some(day) = components.day() {
        check_day(&mut problems, components, id, year, day, lang);
    }
    if let DateComponents::DecimalSolar { complementary: true, month: Some(month), .. } =
        components
    {
        if *month != COMPLEMENTARY_MONTH {
            problems.push(i18n::render(
                "complementary-flag-mismatch",
                lang,
                &[("month", month.to_string())],
            ));
        }
    }
    check_time(&mut problems, components, lang);
    problems
}

/// Resolves the era-based calendar's year to an absolute solar year so
/// leap-dependent bounds come out right; other calendars use the year as
/// given.
fn absolute_year(components: &DateComponents) -> i32 {
    match components.era().and_then(registry::find_era) {
        Some(era) => era.start.0 + components.year() - 1,
        None => components.year(),
    }
}

fn check_day(
    problems: &mut Vec<String>,
    components: &DateComponents,
    id: CalendarId,
    year: i32,
    day: u8,
    lang: &str,
) {
    match components.month() {
        Some(month) if month >= 1 && days_in_month(id, year, month) > 0 => {
            let max = days_in_month(id, year, month);
            if day >= 1 && day <= max {
                return;
            }
            if id == CalendarId::DecimalSolar && month == COMPLEMENTARY_MONTH {
                problems.push(i18n::render(
                    "complementary-day-out-of-range",
                    lang,
                    &[
                        ("day", day.to_string()),
                        ("max", max.to_string()),
                        ("year", components.year().to_string()),
                    ],
                ));
            } else if month == FEBRUARY && day == 29 && !is_leap_year(id, year) {
                // The classic boundary case gets its own message naming
                // the offending year.
                problems.push(i18n::render(
                    "not-leap-year",
                    lang,
                    &[("year", year.to_string())],
                ));
            } else {
                problems.push(i18n::render(
                    "day-out-of-range",
                    lang,
                    &[
                        ("day", day.to_string()),
                        ("max", max.to_string()),
                        ("month", month.to_string()),
                    ],
                ));
            }
        }
        // No usable month: bound by the longest month the calendar has.
        _ => {
            let max = (1..=COMPLEMENTARY_MONTH)
                .map(|m| days_in_month(id, year, m))
                .max()
                .unwrap_or(31);
            if day < 1 || day > max {
                problems.push(i18n::render(
                    "day-out-of-range-no-month",
                    lang,
                    &[("day", day.to_string()), ("max", max.to_string())],
                ));
            }
        }
    }
}

fn check_time(problems: &mut Vec<String>, components: &DateComponents, lang: &str) {
    match components {
        DateComponents::StandardSolar { time: Some(t), .. }
        | DateComponents::EraBasedSolar { time: Some(t), .. } => check_clock(problems, *t, lang),
        DateComponents::StandardSolarWithBeats { time: Some(t), .. } => {
            check_beats(problems, *t, lang);
        }
        DateComponents::DecimalSolar { time: Some(t), .. } => check_decimal(problems, *t, lang),
        _ => {}
    }
}

fn push_time_problem(problems: &mut Vec<String>, lang: &str, field: &str, value: u32, max: u32) {
    if value > max {
        problems.push(i18n::render(
            "time-field-out-of-range",
            lang,
            &[
                ("field", field.to_owned()),
                ("value", value.to_string()),
                ("max", max.to_string()),
            ],
        ));
    }
}

fn check_clock(problems: &mut Vec<String>, t: ClockTime, lang: &str) {
    push_time_problem(problems, lang, "hour", u32::from(t.hour), 23);
    push_time_problem(problems, lang, "minute", u32::from(t.minute), 59);
    push_time_problem(problems, lang, "second", u32::from(t.second), 59);
    push_time_problem(problems, lang, "millisecond", u32::from(t.millisecond), 999);
}

fn check_beats(problems: &mut Vec<String>, t: BeatTime, lang: &str) {
    push_time_problem(problems, lang, "beat", u32::from(t.beat), 999);
    push_time_problem(problems, lang, "centibeat", u32::from(t.centibeat), 99);
}

fn check_decimal(problems: &mut Vec<String>, t: DecimalTime, lang: &str) {
    push_time_problem(problems, lang, "decimal_hour", u32::from(t.hour), 9);
    push_time_problem(problems, lang, "decimal_minute", u32::from(t.minute), 99);
    push_time_problem(problems, lang, "decimal_second", u32::from(t.second), 99);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(id: CalendarId, y: i32, m: u8, d: u8) -> DateComponents {
        DateComponents::from_ymd(id, y, m, d)
    }

    #[test]
    fn february_29_boundary() {
        let errors =
            validate_date_components(&ymd(CalendarId::StandardSolar, 2023, 2, 29), "en");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "2023 is not a leap year, so February has only 28 days");

        let errors =
            validate_date_components(&ymd(CalendarId::StandardSolar, 2024, 2, 29), "en");
        assert!(errors.is_empty());
    }

    #[test]
    fn month_thirteen_is_invalid_except_for_the_decimal_calendar() {
        let errors =
            validate_date_components(&ymd(CalendarId::StandardSolar, 2024, 13, 1), "en");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("month 13"), "{}", errors[0]);

        let errors = validate_date_components(&ymd(CalendarId::DecimalSolar, 3, 13, 6), "en");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn complementary_day_bounds_follow_the_leap_status() {
        // year 2 is common: 5 complementary days only
        let errors = validate_date_components(&ymd(CalendarId::DecimalSolar, 2, 13, 6), "en");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("complementary day 6"), "{}", errors[0]);
    }

    #[test]
    fn complementary_flag_requires_month_thirteen() {
        let c = DateComponents::DecimalSolar {
            year: 3,
            month: Some(5),
            day: Some(1),
            complementary: true,
            time: None,
        };
        let errors = validate_date_components(&c, "en");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("month 13"), "{}", errors[0]);
    }

    #[test]
    fn lunar_month_lengths_are_enforced() {
        // month 2 has 29 days
        let errors = validate_date_components(&ymd(CalendarId::PureLunar, 1445, 2, 30), "en");
        assert_eq!(errors.len(), 1);
        // month 12 has 30 days in the leap year 1447
        let errors = validate_date_components(&ymd(CalendarId::PureLunar, 1447, 12, 30), "en");
        assert!(errors.is_empty());
        let errors = validate_date_components(&ymd(CalendarId::PureLunar, 1446, 12, 30), "en");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn era_year_resolves_before_leap_checks() {
        // Reiwa 6 is 2024, a leap year
        let c = DateComponents::EraBasedSolar {
            era: Some("Reiwa".to_owned()),
            year: 6,
            month: Some(2),
            day: Some(29),
            time: None,
        };
        assert!(validate_date_components(&c, "en").is_empty());
        // Reiwa 5 is 2023
        let c = DateComponents::EraBasedSolar {
            era: Some("Reiwa".to_owned()),
            year: 5,
            month: Some(2),
            day: Some(29),
            time: None,
        };
        let errors = validate_date_components(&c, "en");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("2023"), "{}", errors[0]);
    }

    #[test]
    fn absent_fields_are_never_flagged() {
        let c = DateComponents::StandardSolar {
            year: 2024,
            month: None,
            day: None,
            time: None,
        };
        assert!(validate_date_components(&c, "en").is_empty());
    }

    #[test]
    fn day_without_month_is_bounded_by_the_longest_month() {
        let c = DateComponents::StandardSolar {
            year: 2024,
            month: None,
            day: Some(31),
            time: None,
        };
        assert!(validate_date_components(&c, "en").is_empty());
        let c = DateComponents::StandardSolar {
            year: 2024,
            month: None,
            day: Some(32),
            time: None,
        };
        assert_eq!(validate_date_components(&c, "en").len(), 1);
    }

    #[test]
    fn time_fields_are_range_checked_per_encoding() {
        let c = DateComponents::StandardSolar {
            year: 2024,
            month: Some(1),
            day: Some(1),
            time: Some(ClockTime::new(24, 60, 0, 0)),
        };
        let errors = validate_date_components(&c, "en");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("hour 24"), "{}", errors[0]);
        assert!(errors[1].contains("minute 60"), "{}", errors[1]);

        let c = DateComponents::StandardSolarWithBeats {
            year: 2024,
            month: Some(1),
            day: Some(1),
            time: Some(BeatTime::new(1000, 0)),
        };
        assert_eq!(validate_date_components(&c, "en").len(), 1);

        let c = DateComponents::DecimalSolar {
            year: 3,
            month: Some(1),
            day: Some(1),
            complementary: false,
            time: Some(DecimalTime::new(10, 0, 0)),
        };
        let errors = validate_date_components(&c, "en");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("decimal_hour 10"), "{}", errors[0]);
    }

    #[test]
    fn messages_localize_and_fall_back() {
        let errors =
            validate_date_components(&ymd(CalendarId::StandardSolar, 2023, 2, 29), "tr");
        assert!(errors[0].contains("artik"), "{}", errors[0]);
        // unknown language tag falls back to English
        let errors =
            validate_date_components(&ymd(CalendarId::StandardSolar, 2023, 2, 29), "zz");
        assert!(errors[0].contains("not a leap year"), "{}", errors[0]);
    }

    #[test]
    fn multiple_problems_are_all_reported() {
        let c = DateComponents::StandardSolar {
            year: 2024,
            month: Some(13),
            day: Some(40),
            time: Some(ClockTime::new(25, 0, 0, 0)),
        };
        let errors = validate_date_components(&c, "en");
        assert_eq!(errors.len(), 3);
    }
}
