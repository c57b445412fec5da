//! Base-N (2..=36) decoding of share values.

use std::fmt;

use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// A validated radix in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    pub fn new(radix: u32) -> Result<Self> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::InvalidBase(radix.to_string()));
        }
        Ok(Self(radix))
    }

    /// Parse a decimal radix such as `"16"`
    pub fn parse(s: &str) -> Result<Self> {
        let radix = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidBase(s.to_owned()))?;
        Self::new(radix)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode a case-insensitive digit string in the given radix.
///
/// Every character must be an ASCII alphanumeric whose value (`0-9`, then
/// `a-z` as 10..=35) is below the radix. There is no length limit.
pub fn decode(digits: &str, radix: Radix) -> Result<BigUint> {
    if digits.is_empty() {
        return Err(Error::EmptyValue);
    }
    let r = radix.get();
    let mut value = BigUint::zero();
    for (position, c) in digits.chars().enumerate() {
        let digit = c
            .to_digit(MAX_RADIX)
            .filter(|&d| d < r)
            .ok_or(Error::InvalidDigit {
                digit: c,
                position,
                radix: r,
            })?;
        value = value * r + digit;
    }
    Ok(value)
}

/// Encode `value` with lowercase digits; the inverse of [`decode`].
pub fn encode(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(radix.get())
}
