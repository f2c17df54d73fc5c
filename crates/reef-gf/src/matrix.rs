//! Dense matrices over GF(2^8).
//!
//! Storage is row-major bytes, and rows are exposed as plain byte
//! slices so the bulk [`addmul`] runs directly on them. Operations that
//! combine two rows take row indices and split the borrow internally,
//! which keeps the in-place Gauss-Jordan passes free of double-borrow
//! gymnastics at the call sites.

use crate::addmul::addmul;
use crate::error::GfError;
use crate::field::Gf;

/// A `rows x cols` matrix of GF(2^8) elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Matrix {
    /// The all-zero matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// The `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut out = Matrix::new(size, size);
        for i in 0..size {
            out.set(i, i, Gf::ONE);
        }
        out
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Gf {
        Gf(self.data[row * self.cols + col])
    }

    /// Write the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Gf) {
        self.data[row * self.cols + col] = value.0;
    }

    /// Row `i` as a byte slice over the shared storage.
    pub fn row(&self, i: usize) -> &[u8] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row `i` as a mutable byte slice over the shared storage.
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Swap rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let cols = self.cols;
        for col in 0..cols {
            self.data.swap(i * cols + col, j * cols + col);
        }
    }

    /// Multiply every element of row `i` by `value`.
    pub fn scale_row(&mut self, i: usize, value: Gf) {
        for byte in self.row_mut(i) {
            *byte = (Gf(*byte) * value).0;
        }
    }

    /// `row[to] ^= c * row[from]`, in place.
    ///
    /// # Panics
    ///
    /// Panics if `from == to`.
    pub fn addmul_rows(&mut self, from: usize, to: usize, c: Gf) {
        assert_ne!(from, to, "addmul_rows requires distinct rows");
        let (src, dst) = self.rows_pair_mut(from, to);
        addmul(dst, src, c.0);
    }

    /// Disjoint `(src, dst)` views of two rows.
    fn rows_pair_mut(&mut self, from: usize, to: usize) -> (&[u8], &mut [u8]) {
        let cols = self.cols;
        if from < to {
            let (head, tail) = self.data.split_at_mut(to * cols);
            (&head[from * cols..from * cols + cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.data.split_at_mut(from * cols);
            (&tail[..cols], &mut head[to * cols..to * cols + cols])
        }
    }

    /// In-place Gauss-Jordan inversion against a companion matrix.
    ///
    /// `companion` must start as the identity. On return `self` has been
    /// reduced to the identity and `companion` holds the inverse of
    /// `self`'s original value. A column with no usable pivot is skipped
    /// (the matrix was singular); submatrices of a valid encoding matrix
    /// are always full rank, so validated inputs never hit that case.
    pub fn invert_with(&mut self, companion: &mut Matrix) -> Result<(), GfError> {
        debug_assert_eq!(self.rows, companion.rows);
        for i in 0..self.rows {
            let Some(pivot) = self.find_pivot(i) else {
                continue;
            };
            if pivot != i {
                self.swap_rows(i, pivot);
                companion.swap_rows(i, pivot);
            }

            let inv = self.get(i, i).inv()?;
            self.scale_row(i, inv);
            companion.scale_row(i, inv);

            for j in i + 1..self.rows {
                let leading = self.get(j, i);
                self.addmul_rows(i, j, leading);
                companion.addmul_rows(i, j, leading);
            }
        }

        for i in (1..self.rows).rev() {
            for j in (0..i).rev() {
                let trailing = self.get(j, i);
                self.addmul_rows(i, j, trailing);
                companion.addmul_rows(i, j, trailing);
            }
        }
        Ok(())
    }

    /// In-place reduction to reduced row-echelon form.
    ///
    /// Same elimination as [`Matrix::invert_with`], applied to a single
    /// (possibly non-square) matrix.
    pub fn standardize(&mut self) -> Result<(), GfError> {
        for i in 0..self.rows {
            let Some(pivot) = self.find_pivot(i) else {
                continue;
            };
            if pivot != i {
                self.swap_rows(i, pivot);
            }

            let inv = self.get(i, i).inv()?;
            self.scale_row(i, inv);

            for j in i + 1..self.rows {
                let leading = self.get(j, i);
                self.addmul_rows(i, j, leading);
            }
        }

        for i in (1..self.rows).rev() {
            for j in (0..i).rev() {
                let trailing = self.get(j, i);
                self.addmul_rows(i, j, trailing);
            }
        }
        Ok(())
    }

    /// First row at or below `i` with a non-zero entry in column `i`.
    fn find_pivot(&self, i: usize) -> Option<usize> {
        (i..self.rows).find(|&j| !self.get(j, i).is_zero())
    }

    /// For a standardised `r x c` matrix `[I_r | P]`, build the
    /// `(c - r) x c` matrix `[P^T | I_(c-r)]`.
    ///
    /// The field has characteristic two, so transposing `P` needs no
    /// sign flip.
    pub fn parity(&self) -> Matrix {
        let r = self.rows;
        let c = self.cols;
        let mut out = Matrix::new(c - r, c);

        for i in 0..c - r {
            out.set(i, i + r, Gf::ONE);
        }
        for i in 0..c - r {
            for j in 0..r {
                out.set(i, j, self.get(j, i + r));
            }
        }
        out
    }
}
