//! Console reporter for codec runs
//!
//! Everything goes to stderr so stdout carries only the output rows.

use super::{CodecReporter, Reporter};
use crate::domain::Mode;
use crate::pipeline::CodecOutput;

/// Console implementation for encode/decode runs
#[derive(Default)]
pub struct ConsoleCodecReporter;

impl ConsoleCodecReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleCodecReporter {
    fn report_progress(&self, message: &str, progress: f64) {
        eprintln!("{} ({:.1}%)", message, progress * 100.0);
    }

    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        eprintln!("{}", message);
    }
}

impl CodecReporter for ConsoleCodecReporter {
    fn report_start(&self, mode: Mode, rows: usize) {
        match mode {
            Mode::Encode => eprintln!("Encoding {} message(s)...", rows),
            Mode::Decode => eprintln!("Decoding {} codeword(s)...", rows),
        }
    }

    fn report_correction(&self, row: usize, position: usize) {
        eprintln!("  line {}: corrected flipped bit {}", row, position + 1);
    }

    fn report_results(&self, output: &CodecOutput) {
        match output {
            CodecOutput::Encoded(rows) => {
                self.report_complete(&format!("Encoded {} message(s).", rows.len()))
            }
            CodecOutput::Decoded(rows) => self.report_complete(&format!(
                "Decoded {} codeword(s), {} corrected.",
                rows.len(),
                output.corrected_count()
            )),
        }
    }
}
