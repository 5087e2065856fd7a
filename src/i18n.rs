//! Localized message and name tables.
//!
//! All tables are static and keyed by stable ids. Lookups fall back
//! through [`DEFAULT_LANGUAGES`] and finally to the id itself, so an
//! unknown language tag degrades to readable English, never to a panic.

use crate::CalendarId;

/// Languages tried, in order, when the requested one has no entry.
pub const DEFAULT_LANGUAGES: [&str; 1] = ["en"];

struct Message {
    id: &'static str,
    translations: &'static [(&'static str, &'static str)],
}

static MESSAGES: &[Message] = &[
    Message {
        id: "month-out-of-range",
        translations: &[
            ("en", "month {month} is out of range 1-{max}"),
            ("tr", "{month}. ay 1-{max} araliginin disinda"),
            ("fr", "le mois {month} est hors de l'intervalle 1-{max}"),
        ],
    },
    Message {
        id: "day-out-of-range",
        translations: &[
            ("en", "day {day} is out of range 1-{max} for month {month}"),
            ("tr", "{day}. gun {month}. ay icin 1-{max} araliginin disinda"),
            ("fr", "le jour {day} est hors de l'intervalle 1-{max} pour le mois {month}"),
        ],
    },
    Message {
        id: "day-out-of-range-no-month",
        translations: &[
            ("en", "day {day} is out of range 1-{max}"),
            ("tr", "{day}. gun 1-{max} araliginin disinda"),
            ("fr", "le jour {day} est hors de l'intervalle 1-{max}"),
        ],
    },
    Message {
        id: "not-leap-year",
        translations: &[
            ("en", "{year} is not a leap year, so February has only 28 days"),
            ("tr", "{year} artik yil degildir, Subat yalnizca 28 gun ceker"),
            ("fr", "{year} n'est pas bissextile, fevrier n'a que 28 jours"),
        ],
    },
    Message {
        id: "complementary-day-out-of-range",
        translations: &[
            ("en", "complementary day {day} is out of range 1-{max} in year {year}"),
            ("tr", "{day}. tamamlayici gun {year} yilinda 1-{max} araliginin disinda"),
            ("fr", "le jour complementaire {day} est hors de l'intervalle 1-{max} en l'an {year}"),
        ],
    },
    Message {
        id: "complementary-flag-mismatch",
        translations: &[
            ("en", "the complementary flag requires month 13, found month {month}"),
            ("tr", "tamamlayici gun isareti 13. ayi gerektirir, {month}. ay bulundu"),
            ("fr", "le marqueur complementaire exige le mois 13, mois {month} trouve"),
        ],
    },
    Message {
        id: "time-field-out-of-range",
        translations: &[
            ("en", "{field} {value} is out of range 0-{max}"),
            ("tr", "{field} {value} 0-{max} araliginin disinda"),
            ("fr", "{field} {value} est hors de l'intervalle 0-{max}"),
        ],
    },
];

/// Renders a message by id in the requested language, interpolating the
/// named placeholders. Unknown ids come back verbatim so the caller still
/// sees something identifiable.
pub(crate) fn render(id: &str, lang: &str, args: &[(&str, String)]) -> String {
    let template = MESSAGES
        .iter()
        .find(|m| m.id == id)
        .and_then(|m| lookup_translation(m.translations, lang))
        .unwrap_or(id);
    interpolate(template, args)
}

fn lookup_translation(
    translations: &[(&'static str, &'static str)],
    lang: &str,
) -> Option<&'static str> {
    let find = |l: &str| translations.iter().find(|(tag, _)| *tag == l).map(|(_, t)| *t);
    find(lang).or_else(|| DEFAULT_LANGUAGES.iter().find_map(|l| find(l)))
}

fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = template.to_owned();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

// --- name tables ---

static SOLAR_MONTHS: &[(&str, [&str; 12])] = &[
    (
        "en",
        [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
    ),
    (
        "tr",
        [
            "Ocak", "Subat", "Mart", "Nisan", "Mayis", "Haziran", "Temmuz", "Agustos", "Eylul",
            "Ekim", "Kasim", "Aralik",
        ],
    ),
    (
        "fr",
        [
            "janvier", "fevrier", "mars", "avril", "mai", "juin", "juillet", "aout",
            "septembre", "octobre", "novembre", "decembre",
        ],
    ),
];

static LUNAR_MONTHS: &[(&str, [&str; 12])] = &[
    (
        "en",
        [
            "Muharram", "Safar", "Rabi al-Awwal", "Rabi al-Thani", "Jumada al-Ula",
            "Jumada al-Thani", "Rajab", "Shaban", "Ramadan", "Shawwal", "Dhu al-Qadah",
            "Dhu al-Hijjah",
        ],
    ),
    (
        "tr",
        [
            "Muharrem", "Safer", "Rebiulevvel", "Rebiulahir", "Cemaziyelevvel",
            "Cemaziyelahir", "Recep", "Saban", "Ramazan", "Sevval", "Zilkade", "Zilhicce",
        ],
    ),
];

static DECIMAL_MONTHS: &[(&str, [&str; 12])] = &[
    (
        "fr",
        [
            "Vendemiaire", "Brumaire", "Frimaire", "Nivose", "Pluviose", "Ventose",
            "Germinal", "Floreal", "Prairial", "Messidor", "Thermidor", "Fructidor",
        ],
    ),
    (
        "en",
        [
            "Vendemiaire", "Brumaire", "Frimaire", "Nivose", "Pluviose", "Ventose",
            "Germinal", "Floreal", "Prairial", "Messidor", "Thermidor", "Fructidor",
        ],
    ),
];

static COMPLEMENTARY_DAYS: &[(&str, [&str; 6])] = &[
    (
        "fr",
        [
            "Jour de la vertu", "Jour du genie", "Jour du travail", "Jour de l'opinion",
            "Jour des recompenses", "Jour de la revolution",
        ],
    ),
    (
        "en",
        [
            "Day of Virtue", "Day of Genius", "Day of Labour", "Day of Opinion",
            "Day of Rewards", "Day of the Revolution",
        ],
    ),
];

static ZODIAC: &[(&str, [&str; 12])] = &[
    (
        "en",
        [
            "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey",
            "Rooster", "Dog", "Pig",
        ],
    ),
    (
        "tr",
        [
            "Sican", "Okuz", "Kaplan", "Tavsan", "Ejderha", "Yilan", "At", "Keci", "Maymun",
            "Horoz", "Kopek", "Domuz",
        ],
    ),
];

static WEEKDAYS: &[(&str, [&str; 7])] = &[
    (
        "en",
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
    ),
    (
        "tr",
        ["Pazartesi", "Sali", "Carsamba", "Persembe", "Cuma", "Cumartesi", "Pazar"],
    ),
    (
        "fr",
        ["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"],
    ),
];

fn pick<'a, const N: usize>(
    table: &'a [(&'static str, [&'static str; N])],
    lang: &str,
) -> &'a [&'static str; N] {
    let find = |l: &str| table.iter().find(|(tag, _)| *tag == l).map(|(_, names)| names);
    find(lang)
        .or_else(|| DEFAULT_LANGUAGES.iter().find_map(|l| find(l)))
        .unwrap_or(&table[0].1)
}

/// Localized month names for a calendar, or `None` for calendars that
/// format months numerically.
pub fn month_names(id: CalendarId, lang: &str) -> Option<&'static [&'static str; 12]> {
    match id {
        CalendarId::StandardSolar
        | CalendarId::StandardSolarWithBeats
        | CalendarId::JulianOffsetSolar => Some(pick(SOLAR_MONTHS, lang)),
        CalendarId::PureLunar => Some(pick(LUNAR_MONTHS, lang)),
        CalendarId::DecimalSolar => Some(pick(DECIMAL_MONTHS, lang)),
        CalendarId::EraBasedSolar | CalendarId::LunisolarApprox => None,
    }
}

/// Localized names of the 5-6 complementary days of the decimal calendar.
pub fn complementary_day_names(lang: &str) -> &'static [&'static str; 6] {
    pick(COMPLEMENTARY_DAYS, lang)
}

/// Localized names of the twelve-animal zodiac cycle used by the
/// lunisolar calendar's year labels.
pub fn zodiac_names(lang: &str) -> &'static [&'static str; 12] {
    pick(ZODIAC, lang)
}

/// Localized weekday names, Monday first (ISO numbering).
pub fn weekday_names(lang: &str) -> &'static [&'static str; 7] {
    pick(WEEKDAYS, lang)
}

static DESCRIPTIONS: &[Message] = &[
    Message {
        id: "standard-solar",
        translations: &[
            ("en", "Standard solar calendar (proleptic Gregorian) with wall-clock time"),
            ("tr", "Standart gunes takvimi (proleptik Gregoryen), duvar saatiyle"),
        ],
    },
    Message {
        id: "standard-solar-with-beats",
        translations: &[
            ("en", "Standard solar calendar carrying Swatch Internet Time beats"),
            ("tr", "Swatch beat birimiyle standart gunes takvimi"),
        ],
    },
    Message {
        id: "lunisolar-approx",
        translations: &[
            (
                "en",
                "Lunisolar calendar, approximated by a fixed year offset onto the solar \
                 calendar; no astronomical new-moon or leap-month computation",
            ),
            (
                "tr",
                "Ay-gunes takvimi, gunes takvimine sabit yil kaymasiyla yaklasik; yeni ay \
                 ve artik ay hesabi yoktur",
            ),
        ],
    },
    Message {
        id: "era-based-solar",
        translations: &[
            ("en", "Solar calendar counting years from named historical eras"),
            ("tr", "Yillari adlandirilmis tarihsel donemlerden sayan gunes takvimi"),
        ],
    },
    Message {
        id: "pure-lunar",
        translations: &[
            ("en", "Tabular lunar calendar with a fixed 30-year leap cycle"),
            ("tr", "Sabit 30 yillik artik donguli cetvelsel ay takvimi"),
        ],
    },
    Message {
        id: "julian-offset-solar",
        translations: &[
            ("en", "Julian calendar shifted by a fixed 584-year civil epoch"),
            ("tr", "Sabit 584 yillik sivil kaymali Julyen takvimi"),
        ],
    },
    Message {
        id: "decimal-solar",
        translations: &[
            ("en", "Decimal calendar of twelve 30-day months plus complementary days"),
            ("tr", "On iki 30 gunluk ay ve tamamlayici gunlerden olusan ondalik takvim"),
        ],
    },
];

/// A one-line localized description of a calendar.
pub fn calendar_description(id: CalendarId, lang: &str) -> &'static str {
    let key = id.to_string();
    DESCRIPTIONS
        .iter()
        .find(|m| m.id == key)
        .and_then(|m| lookup_translation(m.translations, lang))
        .unwrap_or("")
}
