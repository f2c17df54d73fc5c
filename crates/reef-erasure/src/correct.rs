//! Error correction for over-provisioned decodes.
//!
//! At every byte offset, the share values of a valid encoding are the
//! evaluations of one degree-<k polynomial at the share indices (the
//! encoding matrix is derived from the Vandermonde precursor, so this
//! holds for parity shares too). Given `t > k` shares, that redundancy
//! both detects corruption (via syndrome checks) and repairs up to
//! `⌊(t-k)/2⌋` corrupted shares per offset (Berlekamp-Welch).

use reef_gf::{Gf, Matrix, Poly};
use tracing::debug;

use crate::code::Code;
use crate::decoder::Share;
use crate::error::CodeError;

impl Code {
    /// Verify shares against the code and repair corrupted payloads in
    /// place.
    ///
    /// With `t` shares, up to `⌊(t - required()) / 2⌋` corrupted shares
    /// can be repaired at each byte offset. Exactly `required()` shares
    /// carry no redundancy to check against and pass through untouched.
    ///
    /// # Errors
    ///
    /// The same validation errors as [`Code::decode`], and
    /// [`CodeError::Unrecoverable`] when an offset is inconsistent
    /// beyond the repair budget. On error, payloads at earlier offsets
    /// may already have been repaired.
    pub fn correct(&self, shares: &mut [Share]) -> Result<(), CodeError> {
        self.validate_shares(shares)?;
        if shares.len() == self.k {
            return Ok(());
        }

        let t = shares.len();
        let block = shares[0].data.len();
        let points: Vec<Gf> = shares.iter().map(|s| Gf(s.index)).collect();
        let syndromes = self.syndrome_matrix(&points)?;

        let mut repaired_offsets = 0usize;
        for offset in 0..block {
            let received: Vec<Gf> = shares.iter().map(|s| Gf(s.data[offset])).collect();
            if syndromes_clear(&syndromes, &received) {
                continue;
            }

            let fixed = self.berlekamp_welch(&points, &received)?;
            for (share, value) in shares.iter_mut().zip(&fixed) {
                share.data[offset] = value.0;
            }
            repaired_offsets += 1;
        }

        if repaired_offsets > 0 {
            debug!(
                t,
                k = self.k,
                repaired_offsets,
                "repaired corrupted byte offsets"
            );
        }
        Ok(())
    }

    /// Parity-check matrix for the received evaluation points: every
    /// valid codeword restricted to these points dots to zero with
    /// every row. Built once per correct() call, independent of the
    /// payload bytes.
    fn syndrome_matrix(&self, points: &[Gf]) -> Result<Matrix, CodeError> {
        let k = self.k;
        let mut vand = Matrix::new(k, points.len());
        for i in 0..k {
            for (j, &x) in points.iter().enumerate() {
                vand.set(i, j, x.pow(i));
            }
        }
        vand.standardize()?;
        Ok(vand.parity())
    }

    /// Solve the error equations for one byte offset and return the
    /// corrected value at every point.
    ///
    /// With a monic error locator `E` of degree `e` and `Q = P * E`,
    /// every point contributes one linear equation
    /// `Q(x) + r * (e_0 + e_1 x + ... + e_(e-1) x^(e-1)) = r * x^e`.
    /// A consistent solution with `E` dividing `Q` exactly recovers the
    /// message polynomial `P`.
    fn berlekamp_welch(&self, points: &[Gf], received: &[Gf]) -> Result<Vec<Gf>, CodeError> {
        let k = self.k;
        let t = points.len();
        let e = (t - k) / 2;
        if e == 0 {
            // Inconsistent, with no budget to locate the error.
            return Err(CodeError::Unrecoverable);
        }
        let q_len = k + e;
        let unknowns = q_len + e;

        let mut system = Matrix::new(t, unknowns + 1);
        for (row, (&x, &r)) in points.iter().zip(received).enumerate() {
            for i in 0..q_len {
                system.set(row, i, x.pow(i));
            }
            for i in 0..e {
                system.set(row, q_len + i, r * x.pow(i));
            }
            system.set(row, unknowns, r * x.pow(e));
        }
        let solution = solve(&mut system)?;

        let mut q = Poly::zero(q_len);
        for (i, &coef) in solution[..q_len].iter().enumerate() {
            q.set(i, coef);
        }
        let mut locator = Poly::zero(e + 1);
        locator.set(e, Gf::ONE);
        for (i, &coef) in solution[q_len..].iter().enumerate() {
            locator.set(i, coef);
        }

        let (p, remainder) = q.div(locator)?;
        if !remainder.is_zero() {
            return Err(CodeError::Unrecoverable);
        }

        Ok(points.iter().map(|&x| p.eval(x)).collect())
    }
}

/// Whether every syndrome row dots to zero against the received values.
fn syndromes_clear(syndromes: &Matrix, received: &[Gf]) -> bool {
    (0..syndromes.rows()).all(|r| {
        let mut acc = Gf::ZERO;
        for (c, &v) in received.iter().enumerate() {
            acc += syndromes.get(r, c) * v;
        }
        acc.is_zero()
    })
}

/// Gauss-Jordan over an augmented `rows x (unknowns + 1)` system.
/// Columns without a pivot take the value zero; a leftover row reducing
/// to `0 = r` with `r != 0` means the system has no solution.
fn solve(system: &mut Matrix) -> Result<Vec<Gf>, CodeError> {
    let rows = system.rows();
    let unknowns = system.cols() - 1;

    let mut pivot_row = vec![None; unknowns];
    let mut rank = 0;
    for col in 0..unknowns {
        let Some(found) = (rank..rows).find(|&r| !system.get(r, col).is_zero()) else {
            continue;
        };
        system.swap_rows(rank, found);
        let inv = system.get(rank, col).inv()?;
        system.scale_row(rank, inv);
        for r in 0..rows {
            if r != rank {
                let lead = system.get(r, col);
                system.addmul_rows(rank, r, lead);
            }
        }
        pivot_row[col] = Some(rank);
        rank += 1;
    }

    // Rows below the rank have all-zero coefficients; a non-zero right
    // hand side there is a contradiction.
    for r in rank..rows {
        if !system.get(r, unknowns).is_zero() {
            return Err(CodeError::Unrecoverable);
        }
    }

    Ok(pivot_row
        .iter()
        .map(|p| match p {
            Some(row) => system.get(*row, unknowns),
            None => Gf::ZERO,
        })
        .collect())
}
