//! Hamming(7,4) encoding

use super::tables::GENERATOR;
use crate::domain::{CodewordRow, MessageRow};

/// Encode a single 4-bit message into a 7-bit codeword
///
/// Each codeword position is the parity of the message bits selected by the
/// matching row of the generator matrix. The result always has a zero
/// syndrome.
#[inline]
pub fn encode_row(message: &MessageRow) -> CodewordRow {
    GENERATOR.mul_vec(message)
}

/// Encode every message in a batch, preserving order
pub fn encode(messages: &[MessageRow]) -> Vec<CodewordRow> {
    messages.iter().map(encode_row).collect()
}
