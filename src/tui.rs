//! Terminal front end for the board.

mod app;
mod screens;

pub use app::run;
