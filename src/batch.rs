//! Batch encoding and decoding
//!
//! Rows never depend on each other, so a batch is split across a rayon pool
//! with no coordination beyond partitioning. Output order always matches input
//! order and parallel results are identical to sequential ones.

use crate::codec::{decode_row, encode_row, DecodedRow};
use crate::config::CodecConfig;
use crate::domain::{CodewordRow, MessageRow};
use log::{debug, warn};
use rayon::prelude::*;

/// Run `job` on a pool sized by `config`, falling back to the global pool
fn with_pool<T, F>(config: &CodecConfig, job: F) -> T
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let threads = config.effective_threads();
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(job),
        Err(err) => {
            warn!(
                "Could not build a pool with {} threads ({}), using default",
                threads, err
            );
            job()
        }
    }
}

/// Encode a batch of messages according to `config`
pub fn encode_batch(messages: &[MessageRow], config: &CodecConfig) -> Vec<CodewordRow> {
    debug!(
        "encode_batch: {} rows ({})",
        messages.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    if !config.parallel {
        return messages.iter().map(encode_row).collect();
    }

    with_pool(config, || messages.par_iter().map(encode_row).collect())
}

/// Decode a batch of codewords according to `config`, correcting single flips
pub fn decode_batch(codewords: &[CodewordRow], config: &CodecConfig) -> Vec<DecodedRow> {
    debug!(
        "decode_batch: {} rows ({})",
        codewords.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let decoded: Vec<DecodedRow> = if config.parallel {
        with_pool(config, || {
            codewords.par_iter().copied().map(decode_row).collect()
        })
    } else {
        codewords.iter().copied().map(decode_row).collect()
    };

    for (row, result) in decoded.iter().enumerate() {
        if let Some(position) = result.corrected_position {
            debug!("  row {}: flipped bit {} back", row + 1, position);
        }
    }

    decoded
}

/// Decode a batch of codewords and keep only the recovered messages
pub fn correct_batch(codewords: &[CodewordRow], config: &CodecConfig) -> Vec<MessageRow> {
    decode_batch(codewords, config)
        .into_iter()
        .map(|decoded| decoded.message)
        .collect()
}
