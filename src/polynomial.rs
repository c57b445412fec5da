use std::fmt;

use crate::rational::Rational;
use num_bigint::BigUint;
use rand::RngCore;

/// A polynomial f(x) = a0 + a1*x + ... + a_{t-1}*x^{t-1} over the rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// Coefficients a0, a1, ..., a_{t-1}
    coeffs: Vec<Rational>,
}

impl Polynomial {
    /// Construct a polynomial from coefficients, lowest degree first.
    pub fn from_coeffs(coeffs: Vec<Rational>) -> Self {
        Polynomial { coeffs }
    }

    /// Construct a polynomial from coefficients, highest degree first, which
    /// is the column order of the Vandermonde system.
    pub fn from_coeffs_high_first(mut coeffs: Vec<Rational>) -> Self {
        coeffs.reverse();
        Polynomial { coeffs }
    }

    /// Coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Coefficients, highest degree first.
    pub fn coeffs_high_first(&self) -> Vec<Rational> {
        self.coeffs.iter().rev().cloned().collect()
    }

    /// Degree of the polynomial (t-1 if threshold is t).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Threshold (number of coefficients).
    pub fn threshold(&self) -> usize {
        self.coeffs.len()
    }

    /// f(0), the shared secret.
    pub fn constant_term(&self) -> Rational {
        self.coeffs.first().cloned().unwrap_or_else(Rational::zero)
    }

    /// Generates a random polynomial of degree t-1 (threshold t) whose
    /// constant term is `secret`. The other coefficients are non-negative
    /// integers of at most `coeff_bytes` random bytes each.
    pub fn random<R: RngCore>(t: usize, secret: &BigUint, coeff_bytes: usize, rng: &mut R) -> Self {
        let mut coeffs = Vec::with_capacity(t);
        coeffs.push(Rational::from(secret));
        for _ in 1..t {
            let mut buf = vec![0u8; coeff_bytes];
            rng.fill_bytes(&mut buf);
            coeffs.push(Rational::from(BigUint::from_bytes_be(&buf)));
        }
        Polynomial { coeffs }
    }

    /// Evaluate the polynomial at x using Horner's method.
    pub fn eval(&self, x: &Rational) -> Rational {
        let mut result = Rational::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .peekable();
        if terms.peek().is_none() {
            return write!(f, "0");
        }
        let mut first = true;
        for (pow, c) in terms {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match pow {
                0 => write!(f, "{c}")?,
                1 => write!(f, "({c})*x")?,
                _ => write!(f, "({c})*x^{pow}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use rand::rng;

    fn int(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn eval_matches_power_sum() {
        // f(x) = 1 + 2x + x^2
        let poly = Polynomial::from_coeffs(vec![int(1), int(2), int(1)]);
        for (x, y) in [(0, 1), (1, 4), (2, 9), (3, 16), (6, 49), (-1, 0)] {
            assert_eq!(poly.eval(&int(x)), int(y));
        }
        let half = Rational::new(BigInt::from(1), BigInt::from(2)).unwrap();
        assert_eq!(poly.eval(&half), Rational::new(BigInt::from(9), BigInt::from(4)).unwrap());
    }

    #[test]
    fn coefficient_orders() {
        let poly = Polynomial::from_coeffs_high_first(vec![int(3), int(2), int(1)]);
        assert_eq!(poly.coeffs(), &[int(1), int(2), int(3)]);
        assert_eq!(poly.coeffs_high_first(), vec![int(3), int(2), int(1)]);
        assert_eq!(poly.constant_term(), int(1));
        assert_eq!(poly.degree(), 2);
        assert_eq!(poly.threshold(), 3);
    }

    #[test]
    fn empty_polynomial() {
        let poly = Polynomial::from_coeffs(vec![]);
        assert_eq!(poly.degree(), 0);
        assert_eq!(poly.constant_term(), Rational::zero());
        assert_eq!(poly.eval(&int(5)), Rational::zero());
        assert_eq!(poly.to_string(), "0");
    }

    #[test]
    fn random_keeps_secret() {
        let mut rng = rng();
        let secret = BigUint::from(123456789u64);
        let poly = Polynomial::random(5, &secret, 16, &mut rng);
        assert_eq!(poly.threshold(), 5);
        assert_eq!(poly.constant_term(), Rational::from(&secret));
        assert_eq!(poly.eval(&Rational::zero()), Rational::from(&secret));
        assert!(poly.coeffs().iter().all(Rational::is_integer));
    }

    #[test]
    fn display() {
        let poly = Polynomial::from_coeffs(vec![int(1), int(0), int(-2)]);
        assert_eq!(poly.to_string(), "(-2)*x^2 + 1");
    }
}
