//! Polynomials over GF(2^8).
//!
//! Coefficients are stored most significant first; [`Poly::index`] and
//! [`Poly::set`] take powers and hide the orientation. Polynomials only
//! appear during code setup and error correction, never in the bulk
//! encode path.

use crate::error::GfError;
use crate::field::Gf;

/// A polynomial with coefficients in GF(2^8), most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Poly {
    coefs: Vec<Gf>,
}

impl Poly {
    /// The zero polynomial, stored with `len` explicit zero coefficients.
    pub fn zero(len: usize) -> Self {
        Poly {
            coefs: vec![Gf::ZERO; len],
        }
    }

    /// Whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefs.iter().all(|c| c.is_zero())
    }

    /// The coefficient of `x^power`; zero outside the stored range.
    pub fn index(&self, power: usize) -> Gf {
        if power >= self.coefs.len() {
            return Gf::ZERO;
        }
        self.coefs[self.coefs.len() - 1 - power]
    }

    /// Set the coefficient of `x^power`, left-padding with zeros when
    /// the power exceeds the current degree.
    pub fn set(&mut self, power: usize, coef: Gf) {
        if power >= self.coefs.len() {
            let mut padded = vec![Gf::ZERO; power + 1 - self.coefs.len()];
            padded.append(&mut self.coefs);
            self.coefs = padded;
        }
        let at = self.coefs.len() - 1 - power;
        self.coefs[at] = coef;
    }

    /// Coefficient-wise multiply by a constant.
    pub fn scale(&self, factor: Gf) -> Poly {
        Poly {
            coefs: self.coefs.iter().map(|&c| c * factor).collect(),
        }
    }

    /// Coefficient-wise sum; the result spans the longer operand.
    pub fn add(&self, other: &Poly) -> Poly {
        let len = self.coefs.len().max(other.coefs.len());
        let mut out = Poly::zero(len);
        for power in 0..len {
            out.set(power, self.index(power) + other.index(power));
        }
        out
    }

    /// Long division: returns `(quotient, remainder)`.
    ///
    /// Both operands are sanitised by trimming leading zeros first.
    /// A dividend that trims to nothing yields `(0, 0)`.
    ///
    /// # Errors
    ///
    /// [`GfError::DivideByZero`] when the divisor trims to nothing;
    /// [`GfError::Algebra`] if an elimination step fails to cancel the
    /// leading coefficient.
    pub fn div(mut self, mut b: Poly) -> Result<(Poly, Poly), GfError> {
        b.trim_leading();
        if b.coefs.is_empty() {
            return Err(GfError::DivideByZero);
        }
        self.trim_leading();
        if self.coefs.is_empty() {
            return Ok((Poly::zero(1), Poly::zero(1)));
        }

        let mut quotient = Vec::new();
        while b.coefs.len() <= self.coefs.len() {
            let coef = self.coefs[0].div(b.coefs[0])?;
            quotient.push(coef);

            // Subtract coef * b aligned with our leading term, then drop
            // the cancelled coefficient.
            let scaled = b.scale(coef);
            for (p, s) in self.coefs.iter_mut().zip(&scaled.coefs) {
                *p += *s;
            }
            if !self.coefs[0].is_zero() {
                return Err(GfError::Algebra);
            }
            self.coefs.remove(0);
        }

        while self.coefs.len() > 1 && self.coefs[0].is_zero() {
            self.coefs.remove(0);
        }

        Ok((Poly { coefs: quotient }, self))
    }

    /// Evaluate at `x` by Horner's rule.
    pub fn eval(&self, x: Gf) -> Gf {
        let mut out = Gf::ZERO;
        for &c in &self.coefs {
            out = out * x + c;
        }
        out
    }

    fn trim_leading(&mut self) {
        let zeros = self.coefs.iter().take_while(|c| c.is_zero()).count();
        self.coefs.drain(..zeros);
    }
}
