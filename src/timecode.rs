//! Timecode normalization for interview fields.
//!
//! Input is reformatted on every keystroke, so the function is total: any
//! string maps to a canonical `HH:MM:SS,mmm` value.

/// The canonical zero timecode.
pub const ZERO_TIMECODE: &str = "00:00:00,000";

/// Number of digits in a canonical timecode.
pub const DIGITS: usize = 9;

/// Normalize raw input into `HH:MM:SS,mmm`.
///
/// Non-digits are dropped. The remaining digits fill the fields left to
/// right, padded with trailing zeros; anything past the ninth digit is
/// ignored. No digits at all yields [`ZERO_TIMECODE`].
pub fn format(raw: &str) -> String {
    let mut digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(DIGITS)
        .collect();

    if digits.is_empty() {
        return ZERO_TIMECODE.to_string();
    }

    while digits.len() < DIGITS {
        digits.push('0');
    }

    format!(
        "{}:{}:{},{}",
        &digits[0..2],
        &digits[2..4],
        &digits[4..6],
        &digits[6..9]
    )
}

/// The digits someone would have typed to produce `timecode`.
///
/// Trailing zeros are padding from [`format`], so they are dropped:
/// `01:30:15,250` gives `01301525`. Feeding the result back through
/// [`format`] reproduces the timecode.
pub fn typed_digits(timecode: &str) -> String {
    let digits: String = timecode
        .chars()
        .filter(char::is_ascii_digit)
        .take(DIGITS)
        .collect();
    digits.trim_end_matches('0').to_string()
}
