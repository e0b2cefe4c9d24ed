//! Progress notification port
//!
//! Defines the interface for reporting what the pipeline and the revision
//! loop are doing.

use crate::ports::reply_sink::Delivery;
use gitgen_domain::{DraftState, TurnLabel};

/// Callback for progress updates during a drafting run
///
/// Implementations live in the presentation layer and decide how to render
/// headers, live echo and notices.
pub trait PipelineProgress: Send + Sync {
    /// Called before a turn's prompt is sent.
    fn on_turn_start(&self, label: &TurnLabel, visible: bool);

    /// Called after every event of a visible turn with the new fragment and
    /// the reply accumulated so far.
    fn on_reply_fragment(&self, _label: &TurnLabel, _fragment: &str, _accumulated: &str) {}

    /// Called once the turn's stream has ended.
    fn on_turn_complete(&self, label: &TurnLabel, visible: bool, reply: &str);

    /// The maintainer left without accepting a draft.
    fn on_exit(&self) {}

    /// The maintainer accepted a draft; `delivery` tells where it went.
    fn on_accepted(&self, _draft: &DraftState, _delivery: Delivery) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PipelineProgress for NoProgress {
    fn on_turn_start(&self, _label: &TurnLabel, _visible: bool) {}
    fn on_turn_complete(&self, _label: &TurnLabel, _visible: bool, _reply: &str) {}
}
