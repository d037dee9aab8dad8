//! Block kinds and their display labels.

use std::fmt;

use crate::locale::Locale;

/// The kind of a block, which fixes the shape of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A section heading.
    Heading,

    /// Narration read by the presenter.
    Narrative,

    /// An interview segment: who, in what role, where on the tape.
    Interview,

    /// A production cue (cut, roll, music).
    Command,

    /// An editorial note that is not read on air.
    Comment,
}

impl BlockKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Heading,
        Self::Narrative,
        Self::Interview,
        Self::Command,
        Self::Comment,
    ];

    /// The label shown for this kind.
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Heading) => "Heading",
            (Locale::En, Self::Narrative) => "Narrative",
            (Locale::En, Self::Interview) => "Interview",
            (Locale::En, Self::Command) => "Special command",
            (Locale::En, Self::Comment) => "Comment",
            (Locale::Th, Self::Heading) => "หัวข้อ",
            (Locale::Th, Self::Narrative) => "บทบรรยาย",
            (Locale::Th, Self::Interview) => "สัมภาษณ์",
            (Locale::Th, Self::Command) => "คำสั่งพิเศษ",
            (Locale::Th, Self::Comment) => "ความเห็น",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heading => "heading",
            Self::Narrative => "narrative",
            Self::Interview => "interview",
            Self::Command => "command",
            Self::Comment => "comment",
        })
    }
}
