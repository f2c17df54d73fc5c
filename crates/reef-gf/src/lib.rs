//! GF(2^8) algebra for Reed-Solomon erasure coding.
//!
//! This crate provides:
//! - [`Gf`] — scalar field elements over the polynomial `0x11D`.
//! - [`addmul`] — the bulk row operation `dst[i] ^= c * src[i]`, with
//!   SIMD paths on x86_64 and aarch64 and a table-walk fallback.
//! - [`Poly`] — polynomials used by error correction.
//! - [`Matrix`] — dense matrices with Gauss-Jordan inversion,
//!   standardisation and parity extraction.
//!
//! All lookup tables (~66 KiB) are generated at compile time and live
//! in the read-only data section; constructing field elements costs
//! nothing at runtime.

mod addmul;
mod error;
mod field;
mod matrix;
mod poly;
mod tables;

pub use addmul::addmul;
pub use error::GfError;
pub use field::Gf;
pub use matrix::Matrix;
pub use poly::Poly;
pub use tables::{FIELD_GENERATOR, FIELD_POLYNOMIAL};
