//! End-to-end processing of one text source
//!
//! Reads rows at the width the mode requires, runs the batch driver, and hands
//! progress to a reporter. Validation failures come back before the codec ever
//! sees a row.

use crate::batch::{decode_batch, encode_batch};
use crate::codec::DecodedRow;
use crate::config::CodecConfig;
use crate::domain::{CodewordRow, Mode, CODEWORD_WIDTH, MESSAGE_WIDTH};
use crate::input::{open_source, read_rows, InputResult};
use crate::reporters::CodecReporter;
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// Rows produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecOutput {
    Encoded(Vec<CodewordRow>),
    Decoded(Vec<DecodedRow>),
}

impl CodecOutput {
    pub fn mode(&self) -> Mode {
        match self {
            CodecOutput::Encoded(_) => Mode::Encode,
            CodecOutput::Decoded(_) => Mode::Decode,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CodecOutput::Encoded(rows) => rows.len(),
            CodecOutput::Decoded(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of decoded rows that needed a bit flipped back
    pub fn corrected_count(&self) -> usize {
        match self {
            CodecOutput::Encoded(_) => 0,
            CodecOutput::Decoded(rows) => rows.iter().filter(|r| r.was_corrected()).count(),
        }
    }

    /// Output rows as `0`/`1` strings, in input order
    pub fn rendered_rows(&self) -> Vec<String> {
        match self {
            CodecOutput::Encoded(rows) => rows.iter().map(|r| r.to_bit_string()).collect(),
            CodecOutput::Decoded(rows) => {
                rows.iter().map(|r| r.message.to_bit_string()).collect()
            }
        }
    }
}

/// Process every line of `reader` in the given mode
pub fn run<R: BufRead, P: CodecReporter + ?Sized>(
    mode: Mode,
    reader: R,
    source_name: &str,
    config: &CodecConfig,
    reporter: &P,
) -> InputResult<CodecOutput> {
    debug!(
        "run: mode={} source={} ({} -> {} bits per row)",
        mode,
        source_name,
        mode.input_width(),
        mode.output_width()
    );

    let output = match mode {
        Mode::Encode => {
            let messages = read_rows::<MESSAGE_WIDTH, _>(reader, source_name)?;
            reporter.report_progress(&format!("Validated {}", source_name), 0.5);
            reporter.report_start(mode, messages.len());
            CodecOutput::Encoded(encode_batch(&messages, config))
        }
        Mode::Decode => {
            let codewords = read_rows::<CODEWORD_WIDTH, _>(reader, source_name)?;
            reporter.report_progress(&format!("Validated {}", source_name), 0.5);
            reporter.report_start(mode, codewords.len());
            let decoded = decode_batch(&codewords, config);
            for (row, result) in decoded.iter().enumerate() {
                if let Some(position) = result.corrected_position {
                    reporter.report_correction(row + 1, position);
                }
            }
            CodecOutput::Decoded(decoded)
        }
    };

    reporter.report_results(&output);
    Ok(output)
}

/// Open `path` and process it in the given mode
pub fn run_file<P: AsRef<Path>, R: CodecReporter + ?Sized>(
    mode: Mode,
    path: P,
    config: &CodecConfig,
    reporter: &R,
) -> InputResult<CodecOutput> {
    let path = path.as_ref();
    let reader = open_source(path)?;
    run(mode, reader, &path.display().to_string(), config, reporter)
}
