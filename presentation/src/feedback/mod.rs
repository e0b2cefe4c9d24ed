//! Human feedback input

pub mod console;
