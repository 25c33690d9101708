//! Time-limit field parsing
//!
//! Players enter the length of a round in whole minutes. This module turns
//! that text into a duration, rejecting anything the game cannot use.

use std::{num::IntErrorKind, time::Duration};

use thiserror::Error;

use crate::constants::game_mode::{MAX_TIME_LIMIT_SECONDS, SECONDS_PER_MINUTE};

/// Reasons the time-limit field cannot be used
///
/// The `Display` text is the message shown to the player.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The field is blank or does not hold a whole number
    #[error("Time limit must be set.")]
    Empty,
    /// The entered minutes exceed the longest allowed round
    #[error("Max time limit exceeded.")]
    ExceedsMaximum,
    /// The entered minutes are zero or negative
    #[error("Time limit too short.")]
    NonPositive,
}

/// Parses the minutes typed into the time-limit field
///
/// Checks are applied in order: blank or non-numeric text, then the upper
/// bound, then the lower bound. The upper bound is inclusive.
///
/// # Errors
///
/// Returns the first [`Error`] the text fails.
pub fn parse(text: &str) -> Result<Duration, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::Empty);
    }

    let minutes = text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => Error::ExceedsMaximum,
        IntErrorKind::NegOverflow => Error::NonPositive,
        _ => Error::Empty,
    })?;

    let seconds = minutes.saturating_mul(i64::from(SECONDS_PER_MINUTE));
    if seconds > i64::from(MAX_TIME_LIMIT_SECONDS) {
        return Err(Error::ExceedsMaximum);
    }

    let seconds = u64::try_from(seconds)
        .ok()
        .filter(|&seconds| seconds > 0)
        .ok_or(Error::NonPositive)?;

    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const MAX_MINUTES: u32 = MAX_TIME_LIMIT_SECONDS / SECONDS_PER_MINUTE;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse("3"), Ok(Duration::from_secs(180)));
        assert_eq!(parse("1"), Ok(Duration::from_secs(60)));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(parse(" 5\n"), Ok(Duration::from_secs(300)));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse(""), Err(Error::Empty));
        assert_eq!(parse("   "), Err(Error::Empty));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(parse("abc"), Err(Error::Empty));
        assert_eq!(parse("2.5"), Err(Error::Empty));
        assert_eq!(parse("3 minutes"), Err(Error::Empty));
    }

    #[test]
    fn test_parse_maximum_is_inclusive() {
        assert_eq!(
            parse(&MAX_MINUTES.to_string()),
            Ok(Duration::from_secs(u64::from(MAX_TIME_LIMIT_SECONDS)))
        );
        assert_eq!(
            parse(&(MAX_MINUTES + 1).to_string()),
            Err(Error::ExceedsMaximum)
        );
    }

    #[test]
    fn test_parse_overflowing_input_exceeds_maximum() {
        assert_eq!(parse(&i64::MAX.to_string()), Err(Error::ExceedsMaximum));
        assert_eq!(
            parse("99999999999999999999999999"),
            Err(Error::ExceedsMaximum)
        );
    }

    #[test]
    fn test_parse_non_positive() {
        assert_eq!(parse("0"), Err(Error::NonPositive));
        assert_eq!(parse("-0"), Err(Error::NonPositive));
        assert_eq!(parse("-5"), Err(Error::NonPositive));
        assert_eq!(parse(&i64::MIN.to_string()), Err(Error::NonPositive));
        assert_eq!(
            parse("-99999999999999999999999999"),
            Err(Error::NonPositive)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::Empty.to_string(), "Time limit must be set.");
        assert_eq!(Error::ExceedsMaximum.to_string(), "Max time limit exceeded.");
        assert_eq!(Error::NonPositive.to_string(), "Time limit too short.");
    }
}
