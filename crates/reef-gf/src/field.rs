//! Scalar arithmetic in GF(2^8).

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use crate::error::GfError;
use crate::tables::TABLES;

/// An element of GF(2^8): a byte read as a polynomial of degree < 8
/// over GF(2). Addition is XOR; multiplication goes through the
/// compile-time product table.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gf(pub u8);

impl Gf {
    /// The additive identity.
    pub const ZERO: Self = Gf(0);

    /// The multiplicative identity.
    pub const ONE: Self = Gf(1);

    /// Whether this is the zero element.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self / rhs`.
    ///
    /// # Errors
    ///
    /// [`GfError::DivideByZero`] when `rhs` is zero.
    pub fn div(self, rhs: Self) -> Result<Self, GfError> {
        if rhs.0 == 0 {
            return Err(GfError::DivideByZero);
        }
        if self.0 == 0 {
            return Ok(Gf::ZERO);
        }
        let la = TABLES.log[self.0 as usize] as usize;
        let lb = TABLES.log[rhs.0 as usize] as usize;
        // 255 keeps the exponent difference non-negative; the doubled
        // exp table absorbs the wrap.
        Ok(Gf(TABLES.exp[la + 255 - lb]))
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`GfError::InvertZero`] when `self` is zero.
    pub fn inv(self) -> Result<Self, GfError> {
        if self.0 == 0 {
            return Err(GfError::InvertZero);
        }
        Ok(Gf(TABLES.exp[255 - TABLES.log[self.0 as usize] as usize]))
    }

    /// `self` multiplied by itself `n` times. `pow(_, 0)` is one for
    /// every base, including zero.
    pub fn pow(self, n: usize) -> Self {
        let row = &TABLES.mul[self.0 as usize];
        let mut out = Gf::ONE;
        for _ in 0..n {
            out = Gf(row[out.0 as usize]);
        }
        out
    }
}

impl Add for Gf {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Gf(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for Gf {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Gf(TABLES.mul[self.0 as usize][rhs.0 as usize])
    }
}

impl MulAssign for Gf {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<u8> for Gf {
    fn from(value: u8) -> Self {
        Gf(value)
    }
}

impl fmt::Debug for Gf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf(0x{:02x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_xor_with_identity_zero() {
        for a in 0..=255u8 {
            assert_eq!(Gf(a) + Gf::ZERO, Gf(a));
            assert_eq!(Gf(a) + Gf(a), Gf::ZERO, "characteristic two: a + a = 0");
        }
        assert_eq!(Gf(0x53) + Gf(0xCA), Gf(0x53 ^ 0xCA));
    }

    #[test]
    fn test_add_commutative_associative() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(11) {
                assert_eq!(Gf(a) + Gf(b), Gf(b) + Gf(a));
                for c in (0..=255u8).step_by(31) {
                    assert_eq!((Gf(a) + Gf(b)) + Gf(c), Gf(a) + (Gf(b) + Gf(c)));
                }
            }
        }
    }

    #[test]
    fn test_mul_identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(Gf(a) * Gf::ONE, Gf(a));
            assert_eq!(Gf(a) * Gf::ZERO, Gf::ZERO);
            assert_eq!(Gf::ZERO * Gf(a), Gf::ZERO);
        }
    }

    #[test]
    fn test_mul_commutative() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(Gf(a) * Gf(b), Gf(b) * Gf(a));
            }
        }
    }

    #[test]
    fn test_mul_associative_sampled() {
        for a in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(9) {
                for c in (0..=255u8).step_by(13) {
                    assert_eq!((Gf(a) * Gf(b)) * Gf(c), Gf(a) * (Gf(b) * Gf(c)));
                }
            }
        }
    }

    #[test]
    fn test_distributive_sampled() {
        for a in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(9) {
                for c in (0..=255u8).step_by(13) {
                    assert_eq!(Gf(a) * (Gf(b) + Gf(c)), Gf(a) * Gf(b) + Gf(a) * Gf(c));
                }
            }
        }
    }

    #[test]
    fn test_inv_roundtrip_all_nonzero() {
        for a in 1..=255u8 {
            let inv = Gf(a).inv().unwrap();
            assert_eq!(Gf(a) * inv, Gf::ONE, "a * inv(a) != 1 for a = {a}");
        }
    }

    #[test]
    fn test_inv_zero_fails() {
        assert_eq!(Gf::ZERO.inv(), Err(GfError::InvertZero));
    }

    #[test]
    fn test_div_by_zero_fails() {
        assert_eq!(Gf(7).div(Gf::ZERO), Err(GfError::DivideByZero));
        assert_eq!(Gf::ZERO.div(Gf::ZERO), Err(GfError::DivideByZero));
    }

    #[test]
    fn test_div_mul_roundtrip() {
        for a in 0..=255u8 {
            for b in 1..=255u8 {
                let q = Gf(a).div(Gf(b)).unwrap();
                assert_eq!(q * Gf(b), Gf(a), "(a/b)*b != a for a={a}, b={b}");
            }
        }
    }

    #[test]
    fn test_pow_zero_exponent_is_one() {
        for a in 0..=255u8 {
            assert_eq!(Gf(a).pow(0), Gf::ONE);
        }
    }

    #[test]
    fn test_pow_matches_repeated_multiply() {
        for a in (0..=255u8).step_by(3) {
            let mut expect = Gf::ONE;
            for n in 0..20 {
                assert_eq!(Gf(a).pow(n), expect, "pow({a}, {n})");
                expect *= Gf(a);
            }
        }
    }

    #[test]
    fn test_pow_of_zero() {
        assert_eq!(Gf::ZERO.pow(0), Gf::ONE);
        for n in 1..8 {
            assert_eq!(Gf::ZERO.pow(n), Gf::ZERO);
        }
    }
}
