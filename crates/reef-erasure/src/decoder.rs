//! Decoding: any `k` shares back into the message blocks.

use reef_gf::{Matrix, addmul};
use tracing::debug;

use crate::code::Code;
use crate::error::CodeError;

/// One of the `n` outputs of an encoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Position in the coding scheme (`0..k` data, `k..n` parity).
    pub index: u8,
    /// The share payload. All shares of one message share a length.
    pub data: Vec<u8>,
}

impl Code {
    /// Rebuild the message blocks from the given shares, emitting
    /// `(block_index, bytes)` pairs for blocks `0..k` in ascending
    /// order.
    ///
    /// Exactly `k` shares decode by pure erasure recovery. Given more,
    /// the surplus is treated as possibly-corrupt redundancy: shares
    /// are verified and repaired first (see [`Code::correct`]), then
    /// the `k` lowest-indexed ones are used for recovery. The emitted
    /// buffer may be reused between calls; the callback must copy
    /// anything it retains.
    ///
    /// # Errors
    ///
    /// Validation errors ([`CodeError::NotEnoughShares`],
    /// [`CodeError::TooManyShares`], [`CodeError::InvalidShare`],
    /// [`CodeError::LengthMismatch`]) and, when repair fails,
    /// [`CodeError::Unrecoverable`]. Nothing is emitted on error.
    pub fn decode(
        &self,
        shares: &[Share],
        emit: impl FnMut(u8, &[u8]),
    ) -> Result<(), CodeError> {
        self.validate_shares(shares)?;

        if shares.len() == self.k {
            let mut sorted: Vec<&Share> = shares.iter().collect();
            sorted.sort_by_key(|s| s.index);
            return self.rebuild(&sorted, emit);
        }

        // Surplus shares may hide corruption; repair before rebuilding.
        let mut corrected = shares.to_vec();
        self.correct(&mut corrected)?;
        corrected.sort_by_key(|s| s.index);
        corrected.truncate(self.k);
        let sorted: Vec<&Share> = corrected.iter().collect();
        self.rebuild(&sorted, emit)
    }

    /// Erasure recovery over exactly `k` distinct, equal-length shares,
    /// sorted by index.
    fn rebuild(
        &self,
        shares: &[&Share],
        mut emit: impl FnMut(u8, &[u8]),
    ) -> Result<(), CodeError> {
        let k = self.k;
        let block = shares[0].data.len();

        // Invert the k x k submatrix picked out by the received rows.
        let mut sub = Matrix::new(k, k);
        for (r, share) in shares.iter().enumerate() {
            for c in 0..k {
                sub.set(r, c, self.encoding.get(share.index as usize, c));
            }
        }
        let mut inverse = Matrix::identity(k);
        sub.invert_with(&mut inverse)?;

        let mut position = vec![None; k];
        for (j, share) in shares.iter().enumerate() {
            if (share.index as usize) < k {
                position[share.index as usize] = Some(j);
            }
        }

        let mut scratch = vec![0u8; block];
        for m in 0..k {
            match position[m] {
                // A systematic share passes through unchanged.
                Some(j) => emit(m as u8, &shares[j].data),
                None => {
                    scratch.fill(0);
                    for (j, share) in shares.iter().enumerate() {
                        addmul(&mut scratch, &share.data, inverse.get(m, j).0);
                    }
                    emit(m as u8, &scratch);
                }
            }
        }

        debug!(
            k,
            n = self.n,
            block,
            missing = position.iter().filter(|p| p.is_none()).count(),
            "rebuilt message blocks"
        );
        Ok(())
    }

    /// Shared validation for decode and correct: share count, index
    /// range and uniqueness, payload length agreement.
    pub(crate) fn validate_shares(&self, shares: &[Share]) -> Result<(), CodeError> {
        if shares.len() < self.k {
            return Err(CodeError::NotEnoughShares {
                needed: self.k,
                got: shares.len(),
            });
        }
        if shares.len() > self.n {
            return Err(CodeError::TooManyShares {
                got: shares.len(),
                total: self.n,
            });
        }

        let mut seen = [false; 256];
        let expected = shares[0].data.len();
        for share in shares {
            let index = share.index as usize;
            if index >= self.n || seen[index] {
                return Err(CodeError::InvalidShare { index: share.index });
            }
            seen[index] = true;
            if share.data.len() != expected {
                return Err(CodeError::LengthMismatch {
                    expected,
                    got: share.data.len(),
                });
            }
        }
        Ok(())
    }
}
