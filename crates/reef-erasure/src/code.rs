//! Code construction.
//!
//! A [`Code`] holds the `n x k` systematic encoding matrix: rows `0..k`
//! are the identity (data shares are the message blocks themselves),
//! rows `k..n` are parity rows derived from a Vandermonde precursor.
//! Any `k` rows of the matrix form an invertible `k x k` submatrix,
//! which is what makes decoding from an arbitrary share subset work.

use reef_gf::{Gf, Matrix};
use tracing::debug;

use crate::error::CodeError;

/// A systematic Reed-Solomon code over GF(2^8).
///
/// Built once for a `(k, n)` pair and immutable afterwards; share one
/// instance freely across threads. Per-message state lives entirely in
/// the encode/decode calls.
#[derive(Debug, Clone)]
pub struct Code {
    pub(crate) k: usize,
    pub(crate) n: usize,
    /// `n x k` encoding matrix in standard form.
    pub(crate) encoding: Matrix,
}

impl Code {
    /// Build the code for `k` required shares out of `n` total.
    ///
    /// # Errors
    ///
    /// [`CodeError::InvalidParameters`] unless `0 < k <= n <= 256`
    /// (share indices must fit in one field element).
    pub fn new(k: usize, n: usize) -> Result<Self, CodeError> {
        if k == 0 || k > n || n > 256 {
            return Err(CodeError::InvalidParameters { k, n });
        }

        // Precursor: the row-i polynomial x^i evaluated at the j-th
        // field element. Any k columns are linearly independent, so
        // standardisation always reaches [I_k | P].
        let mut precursor = Matrix::new(k, n);
        for i in 0..k {
            for j in 0..n {
                precursor.set(i, j, Gf(j as u8).pow(i));
            }
        }
        precursor.standardize()?;
        let parity = precursor.parity();

        // Stack the identity on top of the parity rows, transposed into
        // row-per-share form.
        let mut encoding = Matrix::new(n, k);
        for i in 0..k {
            encoding.set(i, i, Gf::ONE);
        }
        for r in 0..n - k {
            for c in 0..k {
                encoding.set(k + r, c, parity.get(r, c));
            }
        }

        debug!(k, n, "constructed systematic encoding matrix");
        Ok(Code { k, n, encoding })
    }

    /// Number of shares required to recover a message (`k`).
    pub fn required(&self) -> usize {
        self.k
    }

    /// Total number of shares produced per message (`n`).
    pub fn total(&self) -> usize {
        self.n
    }
}
