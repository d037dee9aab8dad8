//! Reading-time estimates for block text.

use std::iter::Sum;
use std::ops::Add;

use crate::locale::Locale;

/// Fixed reading rate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Word count and estimated minutes to read it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: f64,
}

/// Estimate how long `text` takes to read.
///
/// Absent or empty text reads in zero time. Otherwise words are the
/// whitespace-separated tokens of the trimmed text, and text that trims to
/// nothing still counts as one word.
pub fn estimate<'a>(text: impl Into<Option<&'a str>>) -> ReadingTime {
    let Some(text) = text.into().filter(|t| !t.is_empty()) else {
        return ReadingTime::default();
    };
    ReadingTime::from_words(text.split_whitespace().count().max(1))
}

impl ReadingTime {
    #[allow(clippy::cast_precision_loss)] // Word counts stay far below 2^52.
    pub fn from_words(words: usize) -> Self {
        Self {
            words,
            minutes: words as f64 / WORDS_PER_MINUTE,
        }
    }

    /// `"{duration} ({words} words)"`, as shown under a block.
    pub fn summary(&self, locale: Locale) -> String {
        format!(
            "{} ({} {})",
            format_duration(self.minutes, locale),
            self.words,
            locale.words_unit()
        )
    }
}

impl Add for ReadingTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_words(self.words + other.words)
    }
}

impl Sum for ReadingTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Render minutes as text.
///
/// Under a minute rounds seconds up. From one minute on, whole minutes are
/// floored and the remainder rounded to the nearest second; a zero remainder
/// is omitted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(minutes: f64, locale: Locale) -> String {
    if minutes < 1.0 {
        let seconds = (minutes * 60.0).ceil() as u64;
        return format!("{seconds} {}", locale.seconds_unit());
    }

    let whole = minutes.floor();
    let seconds = ((minutes - whole) * 60.0).round() as u64;
    let whole = whole as u64;
    if seconds == 0 {
        format!("{whole} {}", locale.minutes_unit())
    } else {
        format!(
            "{whole} {} {seconds} {}",
            locale.minutes_unit(),
            locale.seconds_unit()
        )
    }
}
