//! Progress reporting for draft-and-verify runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use verity_application::{NoProgress, ProgressNotifier};
use verity_domain::Step;

/// How progress is shown for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Hidden,
    Spinner,
    Plain,
}

impl ProgressMode {
    /// Spinner on a terminal, plain lines when stderr is redirected.
    pub fn select(show: bool, stderr_is_terminal: bool) -> Self {
        match (show, stderr_is_terminal) {
            (false, _) => ProgressMode::Hidden,
            (true, true) => ProgressMode::Spinner,
            (true, false) => ProgressMode::Plain,
        }
    }

    pub fn notifier(self) -> Box<dyn ProgressNotifier> {
        match self {
            ProgressMode::Hidden => Box::new(NoProgress),
            ProgressMode::Spinner => Box::new(ProgressReporter::new()),
            ProgressMode::Plain => Box::new(SimpleProgress),
        }
    }
}

/// Shows a spinner on stderr while each model call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_step_start(&self, step: Step) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(step.display_name());
        pb.set_message("waiting for model...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_step_complete(&self, step: Step, success: bool) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = spinner.take() {
            let status = if success {
                format!("{} {}", "v".green(), step.display_name())
            } else {
                format!("{} {} (failed)", "x".red(), step.display_name())
            };
            pb.set_prefix("");
            pb.finish_with_message(status);
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout carries only the result.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_step_start(&self, step: Step) {
        eprintln!("{} {}", "->".cyan(), step.display_name().bold());
    }

    fn on_step_complete(&self, step: Step, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), step);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), step);
        }
    }
}
