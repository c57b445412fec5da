use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::rational::Rational;
use num_bigint::BigUint;

/// A decoded share: the share index `x` and the share value `y`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigUint,
    y: BigUint,
}

impl Point {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn x_rational(&self) -> Rational {
        Rational::from(&self.x)
    }

    pub fn y_rational(&self) -> Rational {
        Rational::from(&self.y)
    }
}

impl From<(u64, u64)> for Point {
    fn from((x, y): (u64, u64)) -> Self {
        Self::new(BigUint::from(x), BigUint::from(y))
    }
}

/// Ordered points together with the reconstruction threshold `k`.
///
/// Construction guarantees `1 <= k <= points.len()` and that the first `k`
/// points, the working set, have pairwise distinct abscissas. Points past
/// the first `k` are carried along but never read by the interpolation code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
    threshold: usize,
}

impl PointSet {
    pub fn new(points: Vec<Point>, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold {
                k: threshold,
                n: points.len(),
            });
        }
        if points.len() < threshold {
            return Err(Error::InsufficientPoints {
                needed: threshold,
                available: points.len(),
            });
        }
        let mut seen = HashSet::with_capacity(threshold);
        for pt in &points[..threshold] {
            if !seen.insert(pt.x()) {
                return Err(Error::DuplicateAbscissa { x: pt.x().clone() });
            }
        }
        Ok(Self { points, threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Degree of the interpolating polynomial, `k - 1`
    pub fn degree(&self) -> usize {
        self.threshold - 1
    }

    /// The first `k` points, which are the only ones used for reconstruction
    pub fn working_set(&self) -> &[Point] {
        &self.points[..self.threshold]
    }

    /// All points, including the ones past the threshold
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
