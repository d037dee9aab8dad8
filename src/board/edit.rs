//! Edit sessions: uncommitted drafts of block content.

use crate::model::{BlockId, Content};
use crate::timecode;

/// A field of a draft that can be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// The whole text of a heading, narrative, command, or comment.
    Body,
    FullName,
    Position,
    InterviewTimecode,
    AdditionalInfo,
}

impl DraftField {
    /// The fields an interview draft is edited through, in form order.
    pub const INTERVIEW: [Self; 4] = [
        Self::FullName,
        Self::Position,
        Self::InterviewTimecode,
        Self::AdditionalInfo,
    ];

    /// Whether the field accepts more than one line.
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Body | Self::AdditionalInfo)
    }
}

/// An edit in progress on one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub block_id: BlockId,
    pub draft: Content,
}

impl EditSession {
    pub fn new(block_id: BlockId, draft: Content) -> Self {
        Self { block_id, draft }
    }

    /// Current value of `field`, or `None` if the draft has no such field.
    pub fn field(&self, field: DraftField) -> Option<&str> {
        match (&self.draft, field) {
            (Content::Text(text), DraftField::Body) => Some(text.as_str()),
            (Content::Interview(interview), DraftField::FullName) => {
                Some(interview.full_name.as_str())
            }
            (Content::Interview(interview), DraftField::Position) => {
                Some(interview.position.as_str())
            }
            (Content::Interview(interview), DraftField::InterviewTimecode) => {
                Some(interview.interview_timecode.as_str())
            }
            (Content::Interview(interview), DraftField::AdditionalInfo) => {
                Some(interview.additional_info.as_str())
            }
            _ => None,
        }
    }

    /// Stores `value` into `field`. Timecodes are normalized first.
    ///
    /// Returns `false` if the field does not belong to this draft's shape.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> bool {
        let slot = match (&mut self.draft, field) {
            (Content::Text(text), DraftField::Body) => text,
            (Content::Interview(interview), DraftField::FullName) => &mut interview.full_name,
            (Content::Interview(interview), DraftField::Position) => &mut interview.position,
            (Content::Interview(interview), DraftField::InterviewTimecode) => {
                interview.interview_timecode = timecode::format(value);
                return true;
            }
            (Content::Interview(interview), DraftField::AdditionalInfo) => {
                &mut interview.additional_info
            }
            _ => return false,
        };
        value.clone_into(slot);
        true
    }
}
