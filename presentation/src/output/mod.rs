//! Console formatting and reply delivery

pub mod clipboard;
pub mod console;
