//! In-memory block storage for a board session.
//!
//! Blocks are kept in display order. Ids come from a session counter and
//! are never handed out twice, even after the block holding one is removed.

use jiff::{SignedDuration, Timestamp};

use crate::model::{Block, BlockId, BlockKind, Content};
use crate::reorder::{self, ReorderError};

/// The ordered collection of blocks on a board.
#[derive(Debug, Default)]
pub struct BlockStore {
    blocks: Vec<Block>,
    next_id: u64,
}

impl BlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new block of `kind` with default content.
    pub fn add(&mut self, kind: BlockKind) -> &Block {
        self.next_id += 1;
        let block = Block::new(BlockId::from(self.next_id), kind);
        tracing::debug!(id = %block.id, %kind, "block added");
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// Removes the block with `id`, returning it. Unknown ids are ignored.
    pub fn remove(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.position(id)?;
        let block = self.blocks.remove(index);
        tracing::debug!(%id, index, "block removed");
        Some(block)
    }

    /// Replaces the content of block `id` and stamps it as edited now.
    ///
    /// Returns `false` without changing anything if the id is unknown or the
    /// content does not fit the block's kind.
    pub fn update(&mut self, id: &BlockId, content: Content) -> bool {
        self.update_at(id, content, Timestamp::now())
    }

    /// [`update`](Self::update) with an explicit clock reading.
    ///
    /// The stored stamp is always later than the block's previous one, even
    /// when `now` has not moved past it.
    pub fn update_at(&mut self, id: &BlockId, content: Content, now: Timestamp) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| &b.id == id) else {
            return false;
        };
        if !content.fits(block.kind) {
            tracing::warn!(%id, kind = %block.kind, "rejected content of the wrong shape");
            return false;
        }

        let stamp = match block.last_edited_at {
            Some(previous) if now <= previous => previous
                .checked_add(SignedDuration::from_nanos(1))
                .unwrap_or(previous),
            _ => now,
        };
        block.content = content;
        block.last_edited_at = Some(stamp);
        tracing::debug!(%id, "block updated");
        true
    }

    /// Moves the block at `from` to `to`.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<(), ReorderError> {
        reorder::move_item(&mut self.blocks, from, to)?;
        tracing::debug!(from, to, "block moved");
        Ok(())
    }

    /// All blocks in display order.
    pub fn list(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Display index of block `id`.
    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
