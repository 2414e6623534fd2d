//! Hamming(7,4) Codec Module
//!
//! Encodes 4-bit messages into 7-bit codewords with three parity bits, and
//! decodes codewords back into messages while correcting any single flipped
//! bit. Everything here is pure and row-independent; batching across threads
//! lives in [`crate::batch`].

pub mod corrector;
pub mod encoder;
pub mod matrix;
pub mod tables;

pub use corrector::{
    correct, correct_row, decode, decode_row, extract_message, syndrome, DecodedRow, Syndrome,
};
pub use encoder::{encode, encode_row};
pub use matrix::BitMatrix;
pub use tables::{DATA_COLUMNS, GENERATOR, PARITY_CHECK, PARITY_COLUMNS};
