//! Progress and output reporting for codec runs
//!
//! This module provides traits and implementations for reporting progress and
//! results of encode/decode runs. It allows the pipeline to be decoupled from
//! output formatting.

mod console;
mod silent;

pub use console::ConsoleCodecReporter;
pub use silent::SilentCodecReporter;

use crate::domain::Mode;
use crate::pipeline::CodecOutput;

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report general progress with a message and completion percentage
    fn report_progress(&self, message: &str, progress: f64);

    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting encode/decode progress and results
pub trait CodecReporter: Reporter {
    /// Report that a validated batch is about to be processed
    fn report_start(&self, mode: Mode, rows: usize);

    /// Report that a flipped bit was corrected (row is 1-based, position 0-based)
    fn report_correction(&self, row: usize, position: usize);

    /// Report the finished output
    fn report_results(&self, output: &CodecOutput);
}
