//! Syndrome decoding with single-bit error correction
//!
//! The syndrome of a received codeword, read as the little-endian number
//! `s0 + 2*s1 + 4*s2`, is zero for a clean codeword and otherwise one more than
//! the position of the flipped bit. Two or more flips produce a syndrome that
//! is indistinguishable from some other single flip, so the output is only
//! guaranteed when at most one bit per codeword was corrupted.

use super::tables::{DATA_COLUMNS, PARITY_CHECK};
use crate::domain::{BitRow, CodewordRow, MessageRow, SYNDROME_WIDTH};

/// Three-bit syndrome of a received codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syndrome(BitRow<SYNDROME_WIDTH>);

impl Syndrome {
    pub fn bits(&self) -> &BitRow<SYNDROME_WIDTH> {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.count_ones() == 0
    }

    /// Signed wrong-bit index: `s0 + 2*s1 + 4*s2 - 1`, so -1 means no error
    pub fn wrong_bit_index(&self) -> i32 {
        let s = self.0.as_bits();
        i32::from(s[0]) + 2 * i32::from(s[1]) + 4 * i32::from(s[2]) - 1
    }

    /// 0-based codeword position to flip, if any
    pub fn error_position(&self) -> Option<usize> {
        usize::try_from(self.wrong_bit_index()).ok()
    }
}

/// Result of decoding one codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedRow {
    /// Recovered 4-bit message
    pub message: MessageRow,
    /// Codeword position that was flipped back, if a correction was applied
    pub corrected_position: Option<usize>,
}

impl DecodedRow {
    pub fn was_corrected(&self) -> bool {
        self.corrected_position.is_some()
    }
}

/// Compute `H · codeword (mod 2)`
#[inline]
pub fn syndrome(codeword: &CodewordRow) -> Syndrome {
    Syndrome(PARITY_CHECK.mul_vec(codeword))
}

/// Pull the message bits out of a codeword, ignoring parity
#[inline]
pub fn extract_message(codeword: &CodewordRow) -> MessageRow {
    let mut message = MessageRow::zeros();
    for (bit, &column) in DATA_COLUMNS.iter().enumerate() {
        message.set(bit, codeword.get(column));
    }
    message
}

/// Decode one codeword, fixing at most one flipped bit
pub fn decode_row(codeword: CodewordRow) -> DecodedRow {
    let mut working = codeword;
    let corrected_position = syndrome(&working).error_position();
    if let Some(position) = corrected_position {
        working.flip(position);
    }
    DecodedRow {
        message: extract_message(&working),
        corrected_position,
    }
}

/// Decode one codeword and return only the recovered message
#[inline]
pub fn correct_row(codeword: CodewordRow) -> MessageRow {
    decode_row(codeword).message
}

/// Decode every codeword in a batch, keeping correction details
pub fn decode(codewords: &[CodewordRow]) -> Vec<DecodedRow> {
    codewords.iter().copied().map(decode_row).collect()
}

/// Decode every codeword in a batch, preserving order
pub fn correct(codewords: &[CodewordRow]) -> Vec<MessageRow> {
    codewords.iter().copied().map(correct_row).collect()
}
