//! Output surfaces: CSV export and terminal rendering

pub mod console;
pub mod export;
