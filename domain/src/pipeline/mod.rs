//! Pipeline domain
//!
//! The drafting pipeline is four fixed turns run in [`Stage::ALL`] order.

pub mod stage;

pub use stage::{Stage, StageVisibility, Turn, TurnLabel};
