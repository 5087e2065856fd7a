//! Calendar-aware display rendering.
//!
//! Renders already-validated components into a human-readable string with
//! localized month, era, zodiac and complementary-day names. Partial dates
//! render only the fields that are present.

use crate::consts::COMPLEMENTARY_MONTH;
use crate::i18n;
use crate::types::DateComponents;
use crate::CalendarId;

/// Formats date components for display in the given language. Fields the
/// formatter cannot name (out-of-table months, unknown eras) fall back to
/// their numeric form rather than failing.
pub fn format_calendar_date(components: &DateComponents, lang: &str) -> String {
    match components {
        DateComponents::StandardSolar { year, month, day, time } => {
            let mut s = named_month_date(components.calendar(), *year, *month, *day, lang);
            if let Some(t) = time {
                s = format!("{s} {t}");
            }
            s
        }
        DateComponents::StandardSolarWithBeats { year, month, day, time } => {
            let mut s = named_month_date(components.calendar(), *year, *month, *day, lang);
            if let Some(t) = time {
                s = format!("{s} {t}");
            }
            s
        }
        DateComponents::JulianOffsetSolar { year, month, day }
        | DateComponents::PureLunar { year, month, day } => {
            named_month_date(components.calendar(), *year, *month, *day, lang)
        }
        DateComponents::LunisolarApprox { year, month, day } => {
            let zodiac = i18n::zodiac_names(lang)[(year - 1).rem_euclid(12) as usize];
            format!("{} ({zodiac})", numeric_date(*year, *month, *day))
        }
        DateComponents::EraBasedSolar { era, year, month, day, time } => {
            let mut s = match era {
                Some(name) => format!("{name} {}", numeric_date(*year, *month, *day)),
                None => numeric_date(*year, *month, *day),
            };
            if let Some(t) = time {
                s = format!("{s} {t}");
            }
            s
        }
        DateComponents::DecimalSolar { year, month, day, complementary, time } => {
            let mut s = decimal_date(*year, *month, *day, *complementary, lang);
            if let Some(t) = time {
                s = format!("{s} {t}");
            }
            s
        }
    }
}

fn numeric_date(year: i32, month: Option<u8>, day: Option<u8>) -> String {
    match (month, day) {
        (Some(m), Some(d)) => format!("{year}-{m:02}-{d:02}"),
        (Some(m), None) => format!("{year}-{m:02}"),
        _ => format!("{year}"),
    }
}

fn named_month_date(
    id: CalendarId,
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
    lang: &str,
) -> String {
    let name = month
        .filter(|m| (1..=12).contains(m))
        .and_then(|m| i18n::month_names(id, lang).map(|names| names[m as usize - 1]));
    match (name, day) {
        (Some(name), Some(d)) => format!("{d} {name} {year}"),
        (Some(name), None) => format!("{name} {year}"),
        _ => numeric_date(year, month, day),
    }
}

fn decimal_date(
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
    complementary: bool,
    lang: &str,
) -> String {
    let year_part = if lang == "fr" {
        format!("an {year}")
    } else {
        format!("year {year}")
    };
    let in_complement = complementary || month == Some(COMPLEMENTARY_MONTH);
    if in_complement {
        if let Some(d @ 1..=6) = day {
            let name = i18n::complementary_day_names(lang)[d as usize - 1];
            return format!("{name}, {year_part}");
        }
        return year_part;
    }
    let name = month
        .filter(|m| (1..=12).contains(m))
        .and_then(|m| i18n::month_names(CalendarId::DecimalSolar, lang).map(|n| n[m as usize - 1]));
    match (name, day) {
        (Some(name), Some(d)) => format!("{d} {name}, {year_part}"),
        (Some(name), None) => format!("{name}, {year_part}"),
        _ => year_part,
    }
}
