//! Conversion of raw text tokens into typed record fields.
//!
//! None of these functions fail. A token that does not match the expected
//! shape resolves to the field's sentinel: `None` for integers,
//! [`Duration::ZERO`] for durations and [`ClosedSet::FALLBACK`] for
//! enumerations.

use log::debug;

use crate::models::{ClosedSet, Duration};

const DURATION_STR_LENGTH: usize = 5;
const DURATION_SEPARATOR: u8 = b':';

/// Parse a non-empty string of ASCII digits.
///
/// Returns `None` for empty input, any non-digit character, or a value that
/// does not fit in a `u64`.
pub fn parse_non_negative_integer(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    for byte in text.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(byte - b'0'))?;
    }

    Some(value)
}

/// Parse a publication year. Values outside `u32` are invalid.
pub fn parse_year(text: &str) -> Option<u32> {
    let year = parse_non_negative_integer(text).and_then(|v| u32::try_from(v).ok());
    if year.is_none() {
        debug!("Invalid year {:?}, using sentinel", text);
    }
    year
}

/// Parse a `MM:SS` duration. Minutes and seconds are not range checked.
pub fn parse_duration(text: &str) -> Duration {
    let bytes = text.as_bytes();
    if bytes.len() != DURATION_STR_LENGTH {
        debug!("Duration {:?} is not {} characters long", text, DURATION_STR_LENGTH);
        return Duration::ZERO;
    }

    let well_formed = bytes.iter().enumerate().all(|(i, &b)| {
        if i == 2 {
            b == DURATION_SEPARATOR
        } else {
            b.is_ascii_digit()
        }
    });
    if !well_formed {
        debug!("Duration {:?} does not match DD:DD", text);
        return Duration::ZERO;
    }

    let digit = |i: usize| u32::from(bytes[i] - b'0');
    Duration::new(digit(0) * 10 + digit(1), digit(3) * 10 + digit(4))
}

/// Match `text` exactly (case-sensitive) against the variant names of `E`.
pub fn parse_enum<E: ClosedSet>(text: &str) -> E {
    match E::ALL.iter().copied().find(|v| v.name() == text) {
        Some(value) => value,
        None => {
            debug!("Unknown name {:?}, using {:?}", text, E::FALLBACK);
            E::FALLBACK
        }
    }
}
