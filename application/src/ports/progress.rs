//! Progress notification port
//!
//! Defines the interface for reporting progress while a draft-then-verify
//! run is waiting on the model.

use verity_domain::Step;

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, nothing at all).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the model call for `step`
    fn on_step_start(&self, step: Step);

    /// Called once the model call for `step` has returned
    fn on_step_complete(&self, step: Step, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: Step) {}
    fn on_step_complete(&self, _step: Step, _success: bool) {}
}
