//! Silent reporter for codec runs
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{CodecReporter, Reporter};
use crate::domain::Mode;
use crate::pipeline::CodecOutput;

/// Silent implementation for encode/decode runs
#[derive(Default)]
pub struct SilentCodecReporter;

impl SilentCodecReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentCodecReporter {
    fn report_progress(&self, _message: &str, _progress: f64) {}
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl CodecReporter for SilentCodecReporter {
    fn report_start(&self, _mode: Mode, _rows: usize) {}
    fn report_correction(&self, _row: usize, _position: usize) {}
    fn report_results(&self, _output: &CodecOutput) {}
}
