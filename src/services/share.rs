use base64::Engine;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::Workout;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Destination for exported workout text.
///
/// The terminal clipboard is the default; tests substitute their own sink.
#[cfg_attr(test, mockall::automock)]
pub trait ShareSink {
    fn deliver(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Copies text to the terminal's clipboard via the OSC 52 escape sequence
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl ShareSink for Osc52Clipboard {
    fn deliver(&mut self, text: &str) -> Result<(), ShareError> {
        let payload = base64::engine::general_purpose::STANDARD.encode(text);
        let mut stdout = io::stdout();
        write!(stdout, "\x1b]52;c;{payload}\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Fixed-layout export block for a workout
pub fn share_text(workout: &Workout) -> String {
    format!(
        "TRACK COMMAND WORKOUT\n\n{}\n{} | {}\nIntensity: {}\n\nPLAN:\n{}",
        workout.title.to_uppercase(),
        workout.date,
        workout.group,
        workout.intensity,
        workout.description,
    )
}

/// Hands formatted workouts to a share sink.
///
/// Delivery failures are logged and swallowed; the caller only learns
/// whether to show a confirmation.
pub struct ShareService {
    sink: Box<dyn ShareSink + Send>,
}

impl ShareService {
    pub fn new(sink: Box<dyn ShareSink + Send>) -> Self {
        Self { sink }
    }

    /// Export one workout; returns whether delivery succeeded
    pub fn share_workout(&mut self, workout: &Workout) -> bool {
        let text = share_text(workout);
        match self.sink.deliver(&text) {
            Ok(()) => {
                info!(workout = %workout.title, "workout copied to clipboard");
                true
            }
            Err(e) => {
                warn!(error = %e, "share failed");
                false
            }
        }
    }
}

impl Default for ShareService {
    fn default() -> Self {
        Self::new(Box::new(Osc52Clipboard))
    }
}
