//! Constant tables for the Hamming(7,4) code
//!
//! Codeword positions 0, 1 and 3 hold parity; positions 2, 4, 5 and 6 hold the
//! message bits in order. The generator and parity-check matrices are chosen
//! so that `H · G ≡ 0 (mod 2)`, and so that the syndrome of a single flipped
//! bit, read as `s0 + 2*s1 + 4*s2`, is one more than that bit's position.

use super::matrix::BitMatrix;
use crate::domain::{CODEWORD_WIDTH, MESSAGE_WIDTH, SYNDROME_WIDTH};

/// Generator matrix G (7x4): codeword = G · message (mod 2)
pub const GENERATOR: BitMatrix<CODEWORD_WIDTH, MESSAGE_WIDTH> = BitMatrix::from_rows([
    [1, 1, 0, 1],
    [1, 0, 1, 1],
    [1, 0, 0, 0],
    [0, 1, 1, 1],
    [0, 1, 0, 0],
    [0, 0, 1, 0],
    [0, 0, 0, 1],
]);

/// Parity-check matrix H (3x7): syndrome = H · codeword (mod 2)
pub const PARITY_CHECK: BitMatrix<SYNDROME_WIDTH, CODEWORD_WIDTH> = BitMatrix::from_rows([
    [1, 0, 1, 0, 1, 0, 1],
    [0, 1, 1, 0, 0, 1, 1],
    [0, 0, 0, 1, 1, 1, 1],
]);

/// Codeword positions holding parity bits
pub const PARITY_COLUMNS: [usize; SYNDROME_WIDTH] = [0, 1, 3];

/// Codeword positions holding message bits, in message order
pub const DATA_COLUMNS: [usize; MESSAGE_WIDTH] = [2, 4, 5, 6];
