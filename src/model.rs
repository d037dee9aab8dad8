//! Core data model for the script board.
//!
//! A script is an ordered sequence of blocks. Each block has a kind, and the
//! kind decides the shape of its content.

mod block;
mod content;
mod kind;

pub use block::{Block, BlockId};
pub use content::{Content, InterviewContent};
pub use kind::BlockKind;
