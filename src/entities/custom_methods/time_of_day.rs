//! `HH:MM` wall-clock strings as used by store hours.
//!
//! Hours may be written with one or two digits. A trailing `:SS` part is
//! accepted and ignored, which is how some backends render time columns.

use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Malformed time string: {0:?}")]
    Malformed(String),
    #[error("Time out of range: {0:?}")]
    OutOfRange(String),
}

/// Parses `HH:MM` into `(hour, minute)`.
pub fn parse_hour_minute(time: &str) -> Result<(u32, u32), TimeParseError> {
    let malformed = || TimeParseError::Malformed(time.to_string());

    let mut parts = time.trim().split(':');
    let hour = parse_part(parts.next(), 1..=2).ok_or_else(malformed)?;
    let minute = parse_part(parts.next(), 2..=2).ok_or_else(malformed)?;
    if let Some(second) = parts.next() {
        match parse_part(Some(second), 2..=2) {
            Some(second) if second < 60 => {}
            Some(_) => return Err(TimeParseError::OutOfRange(time.to_string())),
            None => return Err(malformed()),
        }
    }
    if parts.next().is_some() {
        return Err(malformed());
    }

    if hour > 23 || minute > 59 {
        return Err(TimeParseError::OutOfRange(time.to_string()));
    }
    Ok((hour, minute))
}

/// Minutes since midnight, in `[0, 1439]`.
pub fn minutes_since_midnight(time: &str) -> Result<u32, TimeParseError> {
    let (hour, minute) = parse_hour_minute(time)?;
    Ok(hour * 60 + minute)
}

pub fn format_hour_minute(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

fn parse_part(part: Option<&str>, digits: std::ops::RangeInclusive<usize>) -> Option<u32> {
    let part = part?;
    if !digits.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
