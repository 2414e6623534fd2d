//! Core domain types for Hamming(7,4) operations
//!
//! Rows of bits carry their width in the type, so a batch of messages can never
//! be handed to the corrector and a 7-bit row can never be encoded again by
//! accident.
//!
//! ## Type Safety Benefits
//!
//! - **MessageRow, CodewordRow**: Prevents mixing 4-bit and 7-bit rows at compile time
//! - **Mode**: One place that knows which width each operation reads and writes

use std::fmt;
use std::ops::Index;

/// Number of bits in an unencoded message
pub const MESSAGE_WIDTH: usize = 4;

/// Number of bits in a codeword (message + parity)
pub const CODEWORD_WIDTH: usize = 7;

/// Number of bits in a syndrome (one per parity bit)
pub const SYNDROME_WIDTH: usize = 3;

/// Fixed-width row of bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitRow<const N: usize>([bool; N]);

/// Original, unencoded 4-bit message
pub type MessageRow = BitRow<MESSAGE_WIDTH>;

/// 7-bit codeword: parity at positions 0, 1 and 3, data at 2, 4, 5 and 6
pub type CodewordRow = BitRow<CODEWORD_WIDTH>;

impl<const N: usize> BitRow<N> {
    pub const fn new(bits: [bool; N]) -> Self {
        BitRow(bits)
    }

    /// All-zero row
    pub const fn zeros() -> Self {
        BitRow([false; N])
    }

    pub fn as_bits(&self) -> &[bool; N] {
        &self.0
    }

    #[inline]
    pub const fn get(&self, index: usize) -> bool {
        self.0[index]
    }

    #[inline]
    pub fn set(&mut self, index: usize, bit: bool) {
        self.0[index] = bit;
    }

    /// Complement a single bit in place
    #[inline]
    pub fn flip(&mut self, index: usize) {
        self.0[index] = !self.0[index];
    }

    /// Copy of this row with one bit complemented
    pub fn with_flipped(mut self, index: usize) -> Self {
        self.flip(index);
        self
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&bit| bit).count()
    }

    /// Render as `0`/`1` characters with no separators
    pub fn to_bit_string(&self) -> String {
        self.0.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
    }
}

impl<const N: usize> Default for BitRow<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[bool; N]> for BitRow<N> {
    fn from(bits: [bool; N]) -> Self {
        BitRow::new(bits)
    }
}

impl<const N: usize> From<BitRow<N>> for [bool; N] {
    fn from(row: BitRow<N>) -> Self {
        row.0
    }
}

impl<const N: usize> AsRef<[bool; N]> for BitRow<N> {
    fn as_ref(&self) -> &[bool; N] {
        &self.0
    }
}

impl<const N: usize> PartialEq<[bool; N]> for BitRow<N> {
    fn eq(&self, other: &[bool; N]) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> Index<usize> for BitRow<N> {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl<const N: usize> fmt::Display for BitRow<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Which direction a batch is processed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 4-bit messages in, 7-bit codewords out
    Encode,
    /// 7-bit codewords in, corrected 4-bit messages out
    Decode,
}

impl Mode {
    /// Interpret user text by its first character (`e` or `d`)
    pub fn from_user_input(text: &str) -> Option<Mode> {
        match text.chars().next() {
            Some('e') => Some(Mode::Encode),
            Some('d') => Some(Mode::Decode),
            _ => None,
        }
    }

    /// Width every input line must have
    pub const fn input_width(&self) -> usize {
        match self {
            Mode::Encode => MESSAGE_WIDTH,
            Mode::Decode => CODEWORD_WIDTH,
        }
    }

    /// Width of every rendered output row
    pub const fn output_width(&self) -> usize {
        match self {
            Mode::Encode => CODEWORD_WIDTH,
            Mode::Decode => MESSAGE_WIDTH,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encode => write!(f, "encode"),
            Mode::Decode => write!(f, "decode"),
        }
    }
}
