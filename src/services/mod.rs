// Generation client and export services

pub mod generation;
pub mod prompts;
pub mod share;

pub use generation::{GenerationOutcome, GenerationService};
pub use share::{share_text, Osc52Clipboard, ShareService, ShareSink};
