//! Block content: one shape per block kind.

use super::BlockKind;
use crate::timecode::ZERO_TIMECODE;

/// What a block holds.
///
/// Four kinds carry plain text; interviews carry a record. The variant must
/// agree with the owning block's kind (see [`Content::fits`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Heading, narrative, command, and comment text.
    Text(String),

    /// Interview details.
    Interview(InterviewContent),
}

/// Details of an interview segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewContent {
    pub full_name: String,
    pub position: String,

    /// Canonical `HH:MM:SS,mmm` timecode into the interview recording.
    pub interview_timecode: String,

    /// Free text about the segment. The only field that counts toward
    /// reading time.
    pub additional_info: String,
}

impl Default for InterviewContent {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            position: String::new(),
            interview_timecode: ZERO_TIMECODE.to_string(),
            additional_info: String::new(),
        }
    }
}

impl Content {
    /// The content a freshly added block of `kind` starts with.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Interview => Self::Interview(InterviewContent::default()),
            BlockKind::Heading | BlockKind::Narrative | BlockKind::Command | BlockKind::Comment => {
                Self::Text(String::new())
            }
        }
    }

    /// Whether this content has the shape `kind` requires.
    pub fn fits(&self, kind: BlockKind) -> bool {
        matches!(
            (self, kind),
            (Self::Interview(_), BlockKind::Interview)
                | (
                    Self::Text(_),
                    BlockKind::Heading
                        | BlockKind::Narrative
                        | BlockKind::Command
                        | BlockKind::Comment
                )
        )
    }

    /// This content if it fits `kind`, otherwise the kind's default.
    pub fn coerced(&self, kind: BlockKind) -> Self {
        if self.fits(kind) {
            self.clone()
        } else {
            Self::default_for(kind)
        }
    }

    /// The text that reading time is measured on.
    pub fn reading_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Interview(interview) => &interview.additional_info,
        }
    }
}
