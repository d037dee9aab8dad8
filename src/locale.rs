//! Display language for labels, durations, and edit stamps.
//!
//! The board itself never looks at these strings; they exist for whoever
//! renders it.

use std::fmt;
use std::str::FromStr;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

/// Language used for user-facing labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

/// Thai abbreviated month names, January first.
const THAI_MONTHS: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.",
    "ธ.ค.",
];

impl Locale {
    /// Unit label for whole minutes.
    pub fn minutes_unit(self) -> &'static str {
        match self {
            Self::En => "minutes",
            Self::Th => "นาที",
        }
    }

    /// Unit label for seconds.
    pub fn seconds_unit(self) -> &'static str {
        match self {
            Self::En => "seconds",
            Self::Th => "วินาที",
        }
    }

    /// Unit label for a word count.
    pub fn words_unit(self) -> &'static str {
        match self {
            Self::En => "words",
            Self::Th => "คำ",
        }
    }

    /// Unit label for a block count.
    pub fn blocks_unit(self) -> &'static str {
        match self {
            Self::En => "blocks",
            Self::Th => "บล็อก",
        }
    }

    /// Shown in place of the list when the board has no blocks.
    pub fn empty_board_hint(self) -> &'static str {
        match self {
            Self::En => "No blocks yet. Press a to add one.",
            Self::Th => "ยังไม่มีบล็อก กด a เพื่อเพิ่ม",
        }
    }

    /// Prefix shown before the reading-time footer of a block.
    pub fn reading_time_label(self) -> &'static str {
        match self {
            Self::En => "Reading time",
            Self::Th => "เวลาในการอ่าน",
        }
    }

    /// Prefix shown before a block's last-edited stamp.
    pub fn last_edited_label(self) -> &'static str {
        match self {
            Self::En => "Last edited",
            Self::Th => "แก้ไขล่าสุด",
        }
    }

    /// Render a last-edited stamp as `{day} {month} {HH:MM}`.
    pub fn edited_stamp(self, at: &Zoned) -> String {
        let time = at.strftime("%H:%M");
        match self {
            Self::En => format!("{} {time}", at.strftime("%-d %b")),
            Self::Th => {
                let month = usize::try_from(at.month() - 1).unwrap_or(0);
                format!("{} {} {time}", at.day(), THAI_MONTHS[month])
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Th => "th",
        })
    }
}

/// Error for an unrecognized locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale `{0}` (expected `en` or `th`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "th" => Ok(Self::Th),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;
    use jiff::tz::TimeZone;

    fn sample_time() -> Zoned {
        date(2024, 3, 7)
            .at(9, 5, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" TH ".parse::<Locale>().unwrap(), Locale::Th);
    }

    #[test]
    fn rejects_unknown_code() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err, UnknownLocale("fr".into()));
    }

    #[test]
    fn english_stamp() {
        assert_eq!(Locale::En.edited_stamp(&sample_time()), "7 Mar 09:05");
    }

    #[test]
    fn thai_stamp_uses_thai_month() {
        assert_eq!(Locale::Th.edited_stamp(&sample_time()), "7 มี.ค. 09:05");
    }
}
