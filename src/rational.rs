use std::fmt::{self, Debug};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Exact rational number with arbitrary precision numerator and denominator.
///
/// Always kept in lowest terms with a positive denominator, so equality and
/// ordering are exact value comparisons. Division is only offered through
/// [`Rational::checked_div`], which reports a zero divisor instead of panicking.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.0.numer(), self.0.denom())
    }
}

impl Rational {
    /// Construct `numer / denom`, reduced to lowest terms
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(BigRational::new(numer, denom)))
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self(BigRational::from_integer(value))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// The exact integer value, or `None` if the denominator is not 1
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.0.numer().clone())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Exact division; fails with [`Error::DivisionByZero`] if `rhs` is zero
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Raise to a non-negative integer power, `x^0 = 1`
    pub fn pow(&self, exp: u32) -> Self {
        Self(num_traits::pow(self.0.clone(), exp as usize))
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigUint> for Rational {
    fn from(value: BigUint) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl From<&BigUint> for Rational {
    fn from(value: &BigUint) -> Self {
        Self::from_integer(BigInt::from(value.clone()))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;
    fn add(self, rhs: &Self) -> Self {
        Self(self.0 + &rhs.0)
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;
    fn add(self, rhs: &Rational) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;
    fn sub(self, rhs: &Self) -> Self {
        Self(self.0 - &rhs.0)
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;
    fn sub(self, rhs: &Rational) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self {
        Self(self.0 * &rhs.0)
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
