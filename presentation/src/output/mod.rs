//! Output formatting for detection results

pub mod console;
pub mod formatter;
