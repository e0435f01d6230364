//! Time string codec over the integer week-minute timeline.
//!
//! Every instant is a minute offset from Monday 00:00 UTC of the weekly
//! cycle. Parsing subtracts the `+TZ` hour offset carried by the string, so
//! instants compare and subtract directly regardless of the timezone they
//! were written in. Values stay linear through all computation (they may be
//! negative or exceed one week); only [`format_week_minute`] folds them back
//! into `[0, MINUTES_PER_WEEK)`.

use crate::error::{HuddleError, Result};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Minutes in one weekly cycle.
pub const MINUTES_PER_WEEK: i32 = 7 * MINUTES_PER_DAY;

/// Weekday codes, Monday first. Case-sensitive, exactly as they appear in
/// input strings and formatted output.
pub const DAY_CODES: [&str; 7] = ["ПН", "ВТ", "СР", "ЧТ", "ПТ", "СБ", "ВС"];

/// Minutes since Monday 00:00 UTC of the weekly cycle.
pub type WeekMinute = i32;

/// A day-less wall-clock time with its UTC offset, e.g. `"10:00+5"`.
///
/// Venue opening hours use this form because they repeat across weekdays.
/// `minute` is already UTC-normalized and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClockTime {
    pub minute: i32,
    pub tz_hours: i32,
}

/// Parse `"<day> HH:MM+TZ"` into a UTC-normalized week minute.
///
/// The day code must be one of [`DAY_CODES`], `HH:MM` is zero-padded
/// 24-hour local time, and `TZ` is an unsigned UTC offset of one or two
/// digits (the domain has no negative offsets). Computation:
/// `day*1440 + hh*60 + mm - tz*60`. Anything that deviates from the grammar
/// fails with [`HuddleError::MalformedTime`]; there is no partial-success
/// mode.
pub fn parse_week_minute(text: &str) -> Result<WeekMinute> {
    let (code, clock) = text
        .split_once(' ')
        .ok_or_else(|| malformed(text, "expected '<day> HH:MM+TZ'"))?;
    let day = DAY_CODES
        .iter()
        .position(|&d| d == code)
        .ok_or_else(|| malformed(text, "unrecognized day code"))?;
    let (local, tz_hours) = parse_hhmm_tz(text, clock)?;
    Ok(day as i32 * MINUTES_PER_DAY + local - tz_hours * 60)
}

/// Parse a day-less `"HH:MM+TZ"` string.
pub(crate) fn parse_clock(text: &str) -> Result<ClockTime> {
    let (local, tz_hours) = parse_hhmm_tz(text, text)?;
    Ok(ClockTime {
        minute: local - tz_hours * 60,
        tz_hours,
    })
}

/// Render a week minute through `template` in the given timezone.
///
/// Adds `tz_hours * 60`, wraps positively into `[0, MINUTES_PER_WEEK)`, then
/// substitutes `%DD` (day code), `%HH`, and `%MM` (zero-padded), each at
/// most once (first occurrence only). Tokens the template does not contain,
/// and anything else it does contain, pass through unchanged.
pub fn format_week_minute(instant: WeekMinute, template: &str, tz_hours: i32) -> String {
    let local = (instant + tz_hours * 60).rem_euclid(MINUTES_PER_WEEK);
    let day = (local / MINUTES_PER_DAY) as usize;
    let hh = (local % MINUTES_PER_DAY) / 60;
    let mm = local % 60;
    template
        .replacen("%DD", DAY_CODES[day], 1)
        .replacen("%HH", &format!("{:02}", hh), 1)
        .replacen("%MM", &format!("{:02}", mm), 1)
}

/// Parse the `HH:MM+TZ` tail shared by both string forms.
///
/// `full` is the complete input, kept only for error reporting. Returns the
/// local minute of day and the offset hours.
fn parse_hhmm_tz(full: &str, clock: &str) -> Result<(i32, i32)> {
    let b = clock.as_bytes();
    if b.len() < 7 || b.len() > 8 || b[2] != b':' || b[5] != b'+' {
        return Err(malformed(full, "expected HH:MM+TZ"));
    }
    let hh = two_digits(full, b[0], b[1])?;
    let mm = two_digits(full, b[3], b[4])?;
    if hh > 23 {
        return Err(malformed(full, "hour out of range"));
    }
    if mm > 59 {
        return Err(malformed(full, "minute out of range"));
    }
    let tz_digits = &b[6..];
    if !tz_digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed(full, "offset must be one or two digits"));
    }
    let tz_hours = tz_digits
        .iter()
        .fold(0i32, |acc, d| acc * 10 + i32::from(d - b'0'));
    Ok((hh * 60 + mm, tz_hours))
}

fn two_digits(full: &str, tens: u8, ones: u8) -> Result<i32> {
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return Err(malformed(full, "expected two digits"));
    }
    Ok(i32::from(tens - b'0') * 10 + i32::from(ones - b'0'))
}

fn malformed(text: &str, reason: &str) -> HuddleError {
    HuddleError::MalformedTime {
        text: text.to_string(),
        reason: reason.to_string(),
    }
}
