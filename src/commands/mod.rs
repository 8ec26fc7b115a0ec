//! Command implementations

pub mod define;
pub mod simple;

pub use define::define_word;
pub use simple::run_simple;
