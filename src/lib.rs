//! Scriptboard: assemble a production script out of typed blocks.
//!
//! The [`board::Board`] is the whole state of a session: an ordered list of
//! blocks, open edit sessions, and the drag slot. Everything else here either
//! feeds it (timecode normalization, reading-time estimates) or presents it.

pub mod board;
pub mod cli;
pub mod config;
pub mod locale;
pub mod logging;
pub mod model;
pub mod reading;
pub mod reorder;
pub mod store;
pub mod timecode;
pub mod tui;
