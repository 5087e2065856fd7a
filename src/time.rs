//! Time-of-day codecs.
//!
//! Three independent encodings of a sub-day instant as a day fraction in
//! [0, 1): the standard wall clock, Swatch beats (fixed UTC+1 Biel Mean
//! Time reference) and French decimal time. None of them care which date
//! calendar is in use.

use crate::consts::{
    BEATS_PER_DAY, BIEL_HOUR_OFFSET, CENTIBEATS_PER_DAY, DECIMAL_SECONDS_PER_DAY,
    DECIMAL_SECONDS_PER_HOUR, DECIMAL_SECONDS_PER_MINUTE, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND, SECONDS_PER_BEAT, SECONDS_PER_DAY,
};
use crate::types::{BeatTime, ClockTime, DecimalTime};

// --- standard clock ---

/// Encodes a wall-clock time as a day fraction at millisecond scale.
pub fn clock_to_fraction(time: ClockTime) -> f64 {
    time.millis_of_day() as f64 / MS_PER_DAY as f64
}

/// Decodes a day fraction into a wall-clock time, rounding to the nearest
/// millisecond. Fractions outside [0, 1) wrap around the day.
pub fn fraction_to_clock(fraction: f64) -> ClockTime {
    let ms = ((fraction * MS_PER_DAY as f64).round() as i64).rem_euclid(MS_PER_DAY);
    ClockTime {
        hour: (ms / MS_PER_HOUR) as u8,
        minute: (ms % MS_PER_HOUR / MS_PER_MINUTE) as u8,
        second: (ms % MS_PER_MINUTE / MS_PER_SECOND) as u8,
        millisecond: (ms % MS_PER_SECOND) as u16,
    }
}

// --- Swatch beats ---

/// Encodes a wall-clock instant as Swatch beats in [0, 1000).
///
/// `utc_offset` is the caller's zone as a plain hour offset; the extra
/// fixed hour moves the instant onto the UTC+1 Biel Mean Time reference.
pub fn clock_to_beats(time: ClockTime, utc_offset: i32) -> f64 {
    let biel_hours = f64::from(time.hour) + f64::from(utc_offset) + f64::from(BIEL_HOUR_OFFSET);
    let biel_seconds =
        biel_hours * 3600.0 + f64::from(time.minute) * 60.0 + f64::from(time.second);
    (biel_seconds / SECONDS_PER_BEAT).rem_euclid(BEATS_PER_DAY as f64)
}

/// Decodes beats back to a wall-clock time in the caller's reference,
/// rounding to the nearest second.
pub fn beats_to_clock(beats: f64, utc_offset: i32) -> ClockTime {
    let biel_seconds = (beats * SECONDS_PER_BEAT).round() as i64;
    let hour = biel_seconds.div_euclid(3600);
    let minute = biel_seconds.rem_euclid(3600) / 60;
    let second = biel_seconds.rem_euclid(60);
    let local_hour =
        (hour - i64::from(BIEL_HOUR_OFFSET) - i64::from(utc_offset)).rem_euclid(24);
    ClockTime {
        hour: local_hour as u8,
        minute: minute as u8,
        second: second as u8,
        millisecond: 0,
    }
}

/// Splits fractional beats into a beat/centibeat pair. The centibeat is
/// beats x 100 truncated into [0, 99].
pub fn beats_to_beat_time(beats: f64) -> BeatTime {
    let beats = beats.rem_euclid(BEATS_PER_DAY as f64);
    BeatTime {
        beat: beats.trunc() as u16,
        centibeat: ((beats * 100.0).trunc() as i64 % 100) as u8,
    }
}

/// Encodes a wall-clock instant directly into a beat/centibeat pair.
pub fn clock_to_beat_time(time: ClockTime, utc_offset: i32) -> BeatTime {
    beats_to_beat_time(clock_to_beats(time, utc_offset))
}

/// Encodes a beat/centibeat pair as a day fraction at centibeat scale.
pub fn beat_time_to_fraction(time: BeatTime) -> f64 {
    time.centibeats_of_day() as f64 / CENTIBEATS_PER_DAY as f64
}

/// Decodes a day fraction into a beat/centibeat pair, rounding to the
/// nearest centibeat.
pub fn fraction_to_beat_time(fraction: f64) -> BeatTime {
    let centibeats =
        ((fraction * CENTIBEATS_PER_DAY as f64).round() as i64).rem_euclid(CENTIBEATS_PER_DAY);
    BeatTime {
        beat: (centibeats / 100) as u16,
        centibeat: (centibeats % 100) as u8,
    }
}

// --- decimal time ---

/// Converts a wall-clock instant to decimal time (10 x 100 x 100),
/// rounding to the nearest decimal second.
pub fn clock_to_decimal(time: ClockTime) -> DecimalTime {
    let standard_seconds =
        i64::from(time.hour) * 3600 + i64::from(time.minute) * 60 + i64::from(time.second);
    let decimal_seconds = (standard_seconds as f64 / SECONDS_PER_DAY as f64
        * DECIMAL_SECONDS_PER_DAY as f64)
        .round() as i64;
    split_decimal_seconds(decimal_seconds)
}

/// Converts decimal time back to a wall-clock instant, rounding to the
/// nearest standard second.
pub fn decimal_to_clock(time: DecimalTime) -> ClockTime {
    let standard_seconds = (time.decimal_seconds_of_day() as f64
        / DECIMAL_SECONDS_PER_DAY as f64
        * SECONDS_PER_DAY as f64)
        .round() as i64;
    ClockTime {
        hour: (standard_seconds / 3600) as u8,
        minute: (standard_seconds % 3600 / 60) as u8,
        second: (standard_seconds % 60) as u8,
        millisecond: 0,
    }
}

/// Encodes decimal time as a day fraction at decimal-second scale.
pub fn decimal_to_fraction(time: DecimalTime) -> f64 {
    time.decimal_seconds_of_day() as f64 / DECIMAL_SECONDS_PER_DAY as f64
}

/// Decodes a day fraction into decimal time, rounding to the nearest
/// decimal second.
pub fn fraction_to_decimal(fraction: f64) -> DecimalTime {
    let decimal_seconds = ((fraction * DECIMAL_SECONDS_PER_DAY as f64).round() as i64)
        .rem_euclid(DECIMAL_SECONDS_PER_DAY);
    split_decimal_seconds(decimal_seconds)
}

fn split_decimal_seconds(decimal_seconds: i64) -> DecimalTime {
    let decimal_seconds = decimal_seconds.rem_euclid(DECIMAL_SECONDS_PER_DAY);
    DecimalTime {
        hour: (decimal_seconds / DECIMAL_SECONDS_PER_HOUR) as u8,
        minute: (decimal_seconds % DECIMAL_SECONDS_PER_HOUR / DECIMAL_SECONDS_PER_MINUTE) as u8,
        second: (decimal_seconds % DECIMAL_SECONDS_PER_MINUTE) as u8,
    }
}
