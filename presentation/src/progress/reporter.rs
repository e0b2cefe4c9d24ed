//! Console progress for pipeline and revision turns

use colored::Colorize;
use gitgen_application::ports::progress::PipelineProgress;
use gitgen_application::ports::reply_sink::Delivery;
use gitgen_domain::{DraftState, Stage, TurnLabel};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Streams visible replies to stdout and spins while hidden turns run
pub struct ConsoleProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// What is printed once a draft is accepted
    fn accepted_lines(draft: &DraftState, delivery: Delivery) -> Vec<String> {
        let mut lines = vec!["Replying to the issue...".to_string()];
        match delivery {
            Delivery::Delivered => lines.push(
                "The suggested response has been copied to your clipboard."
                    .green()
                    .to_string(),
            ),
            Delivery::PrintOnly => lines.push(format!("\n{}", draft.text())),
            Delivery::Failed => {
                lines.push(
                    "The suggested response was not copied to the clipboard:"
                        .yellow()
                        .to_string(),
                );
                lines.push(format!("\n{}", draft.text()));
            }
        }
        lines
    }

    /// Header printed when a turn starts, if the turn has one
    fn header_line(label: &TurnLabel) -> Option<String> {
        let header = label.header()?;
        Some(match label {
            TurnLabel::Stage(Stage::Analyze) => header.bold().to_string(),
            _ => format!("\n{}", header.cyan().bold()),
        })
    }

    fn stop_spinner(&self) {
        let pb = match self.spinner.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

// A turn that fails never reports completion
impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

impl PipelineProgress for ConsoleProgress {
    fn on_turn_start(&self, label: &TurnLabel, visible: bool) {
        if let Some(line) = Self::header_line(label) {
            println!("{}", line);
        }
        if !visible {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message(format!("{} in progress", label));
            pb.enable_steady_tick(Duration::from_millis(100));
            if let Ok(mut guard) = self.spinner.lock() {
                *guard = Some(pb);
            }
        }
    }

    fn on_reply_fragment(&self, _label: &TurnLabel, fragment: &str, _accumulated: &str) {
        print!("{}", fragment);
        let _ = std::io::stdout().flush();
    }

    fn on_turn_complete(&self, _label: &TurnLabel, visible: bool, _reply: &str) {
        self.stop_spinner();
        if visible {
            println!();
        }
    }

    fn on_exit(&self) {
        println!("Exiting...");
    }

    fn on_accepted(&self, draft: &DraftState, delivery: Delivery) {
        for line in Self::accepted_lines(draft, delivery) {
            println!("{}", line);
        }
    }
}
