//! Splitting a secret into encoded shares, producing the same records the
//! reconstruction side consumes.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::polynomial::Polynomial;
use crate::radix::{self, Radix};
use crate::rational::Rational;
use crate::share::{Keys, ShareInput, ShareRecord};
use log::debug;
use num_bigint::BigUint;
use rand::RngCore;

/// Split `secret` into `n` shares at x = 1..=n so that any `k` recover it.
///
/// The random coefficients are as wide as the secret itself (at least 16
/// bytes), and every share value is encoded in `radix`.
pub fn split<R: RngCore>(
    secret: &BigUint,
    n: usize,
    k: usize,
    radix: Radix,
    rng: &mut R,
) -> Result<ShareInput> {
    if k == 0 || k > n {
        return Err(Error::InvalidThreshold { k, n });
    }
    let coeff_bytes = secret.to_bytes_be().len().max(16);
    let poly = Polynomial::random(k, secret, coeff_bytes, rng);
    debug!("dealing {n} shares of a degree {} polynomial", poly.degree());

    let mut shares = BTreeMap::new();
    for x in 1..=n as u64 {
        // non-negative integer coefficients at a positive integer
        let y = poly.eval(&Rational::from(x));
        debug_assert!(y.is_integer());
        let value = radix::encode(y.numer().magnitude(), radix);
        shares.insert(x.to_string(), ShareRecord::new(value, radix));
    }
    Ok(ShareInput {
        keys: Keys { n, k },
        shares,
        metadata: BTreeMap::new(),
    })
}
