//! Screen rendering and input handling.

mod board;
mod picker;

pub use board::BoardScreen;
pub use picker::KindPicker;
