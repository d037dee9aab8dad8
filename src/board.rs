//! The board: user-facing commands over the block store.
//!
//! Every command is total. A command that cannot apply (unknown id, index
//! out of range, no drag in progress) leaves the board exactly as it was and
//! reports [`Outcome::Skipped`] with the reason. Callers treat a skip as
//! success with no effect.

mod drag;
mod edit;

use std::collections::HashMap;

use crate::model::{Block, BlockId, BlockKind, Content};
use crate::reading::{self, ReadingTime};
use crate::reorder::ReorderError;
use crate::store::BlockStore;

pub use drag::{DragState, DropPreview};
pub use edit::{DraftField, EditSession};

/// Why a board command had no effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("unknown block: {0}")]
    UnknownBlock(BlockId),

    #[error("index {index} out of range for {len} blocks")]
    InvalidIndex { index: usize, len: usize },

    #[error("block {0} is not being edited")]
    NotEditing(BlockId),

    #[error("{field:?} does not apply to {kind} blocks")]
    FieldMismatch { field: DraftField, kind: BlockKind },

    #[error("no drag in progress")]
    NoActiveDrag,
}

impl From<ReorderError> for BoardError {
    fn from(err: ReorderError) -> Self {
        match err {
            ReorderError::OutOfRange { index, len } => Self::InvalidIndex { index, len },
        }
    }
}

/// Result of a board command.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command changed the board.
    Applied,

    /// The command did nothing.
    Skipped(BoardError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    fn skipped(reason: BoardError) -> Self {
        tracing::debug!(%reason, "command skipped");
        Self::Skipped(reason)
    }
}

/// A script board for one session.
#[derive(Debug, Default)]
pub struct Board {
    store: BlockStore,
    sessions: HashMap<BlockId, EditSession>,
    drag: DragState,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──

    /// All blocks in display order.
    pub fn list_blocks(&self) -> &[Block] {
        self.store.list()
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.store.get(id)
    }

    pub fn is_editing(&self, id: &BlockId) -> bool {
        self.sessions.contains_key(id)
    }

    /// The edit session for `id`, if one is open.
    pub fn session(&self, id: &BlockId) -> Option<&EditSession> {
        self.sessions.get(id)
    }

    /// The draft for `id`, if it is being edited.
    pub fn draft(&self, id: &BlockId) -> Option<&Content> {
        self.session(id).map(|s| &s.draft)
    }

    /// Index recorded by the last drag start, if a drag is in progress.
    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.source()
    }

    /// Reading time of a block: its draft while editing, else its content.
    pub fn reading_time(&self, id: &BlockId) -> Option<ReadingTime> {
        let content = match self.draft(id) {
            Some(draft) => draft,
            None => &self.store.get(id)?.content,
        };
        Some(reading::estimate(content.reading_text()))
    }

    /// Reading time of the committed script, top to bottom.
    pub fn total_reading_time(&self) -> ReadingTime {
        self.store
            .list()
            .iter()
            .map(|b| reading::estimate(b.content.reading_text()))
            .sum()
    }

    // ── Commands ──

    /// Appends a block of `kind` and returns its id.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        self.store.add(kind).id.clone()
    }

    /// Removes block `id`, discarding any draft it had.
    pub fn delete_block(&mut self, id: &BlockId) -> Outcome {
        if self.store.remove(id).is_none() {
            return Outcome::skipped(BoardError::UnknownBlock(id.clone()));
        }
        self.sessions.remove(id);
        Outcome::Applied
    }

    /// Opens an edit session seeded from the block's committed content.
    ///
    /// Content that does not fit the block's kind seeds the kind's default
    /// instead. An open session is kept as is.
    pub fn begin_edit(&mut self, id: &BlockId) -> Outcome {
        let Some(block) = self.store.get(id) else {
            return Outcome::skipped(BoardError::UnknownBlock(id.clone()));
        };
        let draft = block.content.coerced(block.kind);
        self.sessions
            .entry(id.clone())
            .or_insert_with(|| EditSession::new(id.clone(), draft));
        tracing::debug!(%id, "edit started");
        Outcome::Applied
    }

    /// Changes one field of the draft for `id`.
    pub fn change_draft_field(&mut self, id: &BlockId, field: DraftField, value: &str) -> Outcome {
        let Some(kind) = self.store.get(id).map(|b| b.kind) else {
            return Outcome::skipped(BoardError::UnknownBlock(id.clone()));
        };
        let Some(session) = self.sessions.get_mut(id) else {
            return Outcome::skipped(BoardError::NotEditing(id.clone()));
        };
        if !session.set_field(field, value) {
            return Outcome::skipped(BoardError::FieldMismatch { field, kind });
        }
        Outcome::Applied
    }

    /// Commits the draft for `id` and closes its session.
    pub fn commit_edit(&mut self, id: &BlockId) -> Outcome {
        if self.store.get(id).is_none() {
            return Outcome::skipped(BoardError::UnknownBlock(id.clone()));
        }
        let Some(session) = self.sessions.remove(id) else {
            return Outcome::skipped(BoardError::NotEditing(id.clone()));
        };
        self.store.update(id, session.draft);
        tracing::debug!(%id, "edit committed");
        Outcome::Applied
    }

    /// Closes the session for `id` without touching the block.
    pub fn cancel_edit(&mut self, id: &BlockId) -> Outcome {
        if self.sessions.remove(id).is_none() {
            return Outcome::skipped(BoardError::NotEditing(id.clone()));
        }
        tracing::debug!(%id, "edit cancelled");
        Outcome::Applied
    }

    /// Records `index` as the block being dragged.
    pub fn drag_start(&mut self, index: usize) {
        self.drag.start(index);
    }

    /// Preview of dropping the dragged block at `index`. Changes nothing.
    pub fn drag_over(&self, index: usize) -> Option<DropPreview> {
        self.drag.preview(index)
    }

    /// Moves the dragged block to `target` and ends the drag.
    ///
    /// The drag ends whether or not the move succeeds.
    pub fn drop_at(&mut self, target: usize) -> Outcome {
        let Some(source) = self.drag.take() else {
            return Outcome::skipped(BoardError::NoActiveDrag);
        };
        match self.store.move_block(source, target) {
            Ok(()) => Outcome::Applied,
            Err(err) => Outcome::skipped(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::InterviewContent;

    fn ids(board: &Board) -> Vec<String> {
        board.list_blocks().iter().map(|b| b.id.to_string()).collect()
    }

    fn board_with(kinds: &[BlockKind]) -> Board {
        let mut board = Board::new();
        for &kind in kinds {
            board.add_block(kind);
        }
        board
    }

    #[test]
    fn add_then_list() {
        let mut board = Board::new();
        board.add_block(BlockKind::Heading);

        let blocks = board.list_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Heading);
        assert_eq!(blocks[0].content, Content::Text(String::new()));
        assert!(blocks[0].last_edited_at.is_none());
    }

    #[test]
    fn edit_and_commit_text() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Narrative);

        assert!(board.begin_edit(&id).is_applied());
        assert!(board.is_editing(&id));
        assert!(
            board
                .change_draft_field(&id, DraftField::Body, "Tonight's top story.")
                .is_applied()
        );

        // Draft changes stay out of the committed block.
        assert_eq!(
            board.block(&id).unwrap().content,
            Content::Text(String::new())
        );

        assert!(board.commit_edit(&id).is_applied());
        assert!(!board.is_editing(&id));

        let block = board.block(&id).unwrap();
        assert_eq!(block.content, Content::Text("Tonight's top story.".into()));
        assert!(block.last_edited_at.is_some());
    }

    #[test]
    fn commit_always_advances_stamp() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Comment);

        let mut previous = None;
        for text in ["one", "two", "three"] {
            let _ = board.begin_edit(&id);
            let _ = board.change_draft_field(&id, DraftField::Body, text);
            let _ = board.commit_edit(&id);

            let stamp = board.block(&id).unwrap().last_edited_at;
            assert!(stamp > previous, "{stamp:?} <= {previous:?}");
            previous = stamp;
        }
    }

    #[test]
    fn interview_edit_formats_timecode() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Interview);

        let _ = board.begin_edit(&id);
        let _ = board.change_draft_field(&id, DraftField::FullName, "Malee Srisuk");
        let _ = board.change_draft_field(&id, DraftField::Position, "Farmer");
        let _ = board.change_draft_field(&id, DraftField::InterviewTimecode, "0104");
        let _ = board.change_draft_field(&id, DraftField::AdditionalInfo, "On the harvest.");
        let _ = board.commit_edit(&id);

        assert_eq!(
            board.block(&id).unwrap().content,
            Content::Interview(InterviewContent {
                full_name: "Malee Srisuk".into(),
                position: "Farmer".into(),
                interview_timecode: "01:04:00,000".into(),
                additional_info: "On the harvest.".into(),
            })
        );
    }

    #[test]
    fn field_mismatch_is_skipped() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Heading);
        let _ = board.begin_edit(&id);

        let outcome = board.change_draft_field(&id, DraftField::FullName, "Ann");
        assert_eq!(
            outcome,
            Outcome::Skipped(BoardError::FieldMismatch {
                field: DraftField::FullName,
                kind: BlockKind::Heading,
            })
        );
        assert_eq!(board.draft(&id), Some(&Content::Text(String::new())));
    }

    #[test]
    fn change_without_session_is_skipped() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Heading);

        let outcome = board.change_draft_field(&id, DraftField::Body, "x");
        assert_eq!(outcome, Outcome::Skipped(BoardError::NotEditing(id)));
    }

    #[test]
    fn begin_edit_keeps_open_draft() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Narrative);
        let _ = board.begin_edit(&id);
        let _ = board.change_draft_field(&id, DraftField::Body, "work in progress");

        let _ = board.begin_edit(&id);
        assert_eq!(
            board.draft(&id),
            Some(&Content::Text("work in progress".into()))
        );
    }

    #[test]
    fn cancel_discards_draft() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Narrative);
        let _ = board.begin_edit(&id);
        let _ = board.change_draft_field(&id, DraftField::Body, "never mind");

        assert!(board.cancel_edit(&id).is_applied());

        let block = board.block(&id).unwrap();
        assert_eq!(block.content, Content::Text(String::new()));
        assert!(block.last_edited_at.is_none());
        assert!(board.draft(&id).is_none());
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut board = board_with(&[BlockKind::Heading, BlockKind::Comment]);
        let before = board.list_blocks().to_vec();
        let missing = BlockId::from("nonexistent");

        assert!(!board.delete_block(&missing).is_applied());
        assert!(!board.begin_edit(&missing).is_applied());
        assert!(!board.commit_edit(&missing).is_applied());
        assert!(
            !board
                .change_draft_field(&missing, DraftField::Body, "x")
                .is_applied()
        );

        assert_eq!(board.list_blocks(), before.as_slice());
    }

    #[test]
    fn delete_discards_session() {
        let mut board = board_with(&[BlockKind::Heading]);
        let id = board.list_blocks()[0].id.clone();
        let _ = board.begin_edit(&id);

        assert!(board.delete_block(&id).is_applied());
        assert!(board.list_blocks().is_empty());
        assert!(!board.is_editing(&id));
    }

    #[test]
    fn ids_survive_deletes() {
        let mut board = board_with(&[BlockKind::Heading, BlockKind::Narrative]);
        let last = board.list_blocks()[1].id.clone();
        let _ = board.delete_block(&last);

        let fresh = board.add_block(BlockKind::Narrative);
        assert_ne!(fresh, last);
    }

    #[test]
    fn drag_and_drop_moves_block() {
        let mut board = board_with(&[
            BlockKind::Heading,
            BlockKind::Narrative,
            BlockKind::Interview,
        ]);

        board.drag_start(0);
        assert_eq!(board.drag_over(2), Some(DropPreview { from: 0, to: 2 }));
        assert_eq!(ids(&board), ["1", "2", "3"]);

        assert!(board.drop_at(2).is_applied());
        assert_eq!(ids(&board), ["2", "3", "1"]);
        assert_eq!(board.dragged_index(), None);
    }

    #[test]
    fn new_drag_replaces_old() {
        let mut board = board_with(&[
            BlockKind::Heading,
            BlockKind::Narrative,
            BlockKind::Comment,
        ]);

        board.drag_start(0);
        board.drag_start(2);
        let _ = board.drop_at(0);

        assert_eq!(ids(&board), ["3", "1", "2"]);
    }

    #[test]
    fn drop_without_drag_is_noop() {
        let mut board = board_with(&[BlockKind::Heading, BlockKind::Narrative]);

        assert_eq!(board.drop_at(1), Outcome::Skipped(BoardError::NoActiveDrag));
        assert_eq!(ids(&board), ["1", "2"]);
    }

    #[test]
    fn drop_on_same_index_keeps_order() {
        let mut board = board_with(&[BlockKind::Heading, BlockKind::Narrative]);

        board.drag_start(1);
        assert!(board.drop_at(1).is_applied());
        assert_eq!(ids(&board), ["1", "2"]);
    }

    #[test]
    fn invalid_drop_clears_drag() {
        let mut board = board_with(&[BlockKind::Heading, BlockKind::Narrative]);

        board.drag_start(0);
        assert_eq!(
            board.drop_at(7),
            Outcome::Skipped(BoardError::InvalidIndex { index: 7, len: 2 })
        );
        assert_eq!(board.dragged_index(), None);
        assert_eq!(ids(&board), ["1", "2"]);
    }

    #[test]
    fn reorder_keeps_edit_sessions() {
        let mut board = board_with(&[BlockKind::Heading, BlockKind::Narrative]);
        let id = board.list_blocks()[0].id.clone();
        let _ = board.begin_edit(&id);
        let _ = board.change_draft_field(&id, DraftField::Body, "Top");

        board.drag_start(0);
        let _ = board.drop_at(1);
        let _ = board.commit_edit(&id);

        assert_eq!(board.list_blocks()[1].content, Content::Text("Top".into()));
    }

    #[test]
    fn reading_time_follows_draft_while_editing() {
        let mut board = Board::new();
        let id = board.add_block(BlockKind::Interview);
        let _ = board.begin_edit(&id);
        let _ = board.change_draft_field(&id, DraftField::FullName, "many words in a name");
        let _ = board.change_draft_field(&id, DraftField::AdditionalInfo, "two words");

        assert_eq!(board.reading_time(&id).unwrap().words, 2);
        // Not committed yet.
        assert_eq!(board.total_reading_time().words, 0);

        let _ = board.commit_edit(&id);
        assert_eq!(board.total_reading_time().words, 2);
    }

    #[test]
    fn total_reading_time_sums_blocks() {
        let mut board = board_with(&[BlockKind::Heading, BlockKind::Narrative]);
        let ids: Vec<BlockId> = board.list_blocks().iter().map(|b| b.id.clone()).collect();
        for (id, text) in ids.iter().zip(["Headline here", "one two three"]) {
            let _ = board.begin_edit(id);
            let _ = board.change_draft_field(id, DraftField::Body, text);
            let _ = board.commit_edit(id);
        }

        assert_eq!(board.total_reading_time().words, 5);
        assert!(board.reading_time(&BlockId::from("9")).is_none());
    }
}
