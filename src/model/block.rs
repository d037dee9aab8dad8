//! Blocks and their identifiers.

use std::fmt;

use jiff::Timestamp;

use super::{BlockKind, Content};

/// Identifies a block for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(String);

impl BlockId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for BlockId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of script content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub content: Content,

    /// When content was last committed. `None` until the first commit.
    pub last_edited_at: Option<Timestamp>,
}

impl Block {
    /// A new block of `kind` with default content.
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            content: Content::default_for(kind),
            last_edited_at: None,
        }
    }
}
