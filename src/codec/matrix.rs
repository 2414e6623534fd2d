//! Const-generic bit matrices over GF(2)
//!
//! Dimensions are part of the type, so a product of mismatched shapes fails to
//! compile instead of panicking at runtime. Products are taken over the
//! integers and then reduced modulo 2, which is the same as XOR-ing the
//! selected bits.

use crate::domain::BitRow;

// ============================================================================
// Const Generic Matrix
// ============================================================================

/// Bit matrix with const generic dimensions, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitMatrix<const ROWS: usize, const COLS: usize> {
    data: [[bool; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Default for BitMatrix<ROWS, COLS> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const ROWS: usize, const COLS: usize> BitMatrix<ROWS, COLS> {
    /// Create a new zero matrix
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            data: [[false; COLS]; ROWS],
        }
    }

    /// Build from row-major `0`/`1` values
    ///
    /// Any non-zero entry is treated as a set bit.
    pub const fn from_rows(rows: [[u8; COLS]; ROWS]) -> Self {
        let mut data = [[false; COLS]; ROWS];
        let mut r = 0;
        while r < ROWS {
            let mut c = 0;
            while c < COLS {
                data[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { data }
    }

    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> bool {
        self.data[row][col]
    }

    #[inline]
    pub const fn dimensions() -> (usize, usize) {
        (ROWS, COLS)
    }

    #[inline]
    pub const fn row(&self, row: usize) -> &[bool; COLS] {
        &self.data[row]
    }

    /// True when every entry is zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(|&bit| !bit))
    }

    /// Matrix-vector product, reduced modulo 2
    #[inline]
    pub fn mul_vec(&self, vector: &BitRow<COLS>) -> BitRow<ROWS> {
        let mut out = BitRow::zeros();
        for (r, row) in self.data.iter().enumerate() {
            out.set(r, dot_mod2(row, vector.as_bits()));
        }
        out
    }

    /// Matrix-matrix product, reduced modulo 2
    pub fn mul<const K: usize>(&self, other: &BitMatrix<COLS, K>) -> BitMatrix<ROWS, K> {
        let mut out = BitMatrix::<ROWS, K>::zeros();
        for r in 0..ROWS {
            for k in 0..K {
                let sum: usize = (0..COLS)
                    .filter(|&c| self.data[r][c] && other.data[c][k])
                    .count();
                out.data[r][k] = sum % 2 == 1;
            }
        }
        out
    }
}

/// Integer dot product of two bit slices, reduced modulo 2
#[inline]
fn dot_mod2<const N: usize>(a: &[bool; N], b: &[bool; N]) -> bool {
    let sum: u32 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| u32::from(x) * u32::from(y))
        .sum();
    sum % 2 == 1
}
