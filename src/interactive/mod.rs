//! Interactive TUI for playing rounds in the terminal

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
