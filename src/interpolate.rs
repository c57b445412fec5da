//! Reconstruction of the constant term from a [`PointSet`].
//!
//! Three entry points compute the same value and serve as cross-checks:
//! Lagrange interpolation evaluated directly at zero, and two solves of the
//! Vandermonde system that share one elimination routine.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::matrix::{self, Matrix};
use crate::point::PointSet;
use crate::polynomial::Polynomial;
use crate::rational::Rational;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Lagrange,
    GaussElimination,
    LinearSolve,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Lagrange, Method::GaussElimination, Method::LinearSolve];

    pub fn name(self) -> &'static str {
        match self {
            Method::Lagrange => "lagrange",
            Method::GaussElimination => "gauss",
            Method::LinearSolve => "linear",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown method {s:?}, expected lagrange, gauss or linear"))
    }
}

/// Lagrange interpolation evaluated at x = 0:
/// f(0) = sum_i y_i * prod_{j != i} (0 - x_j) / (x_i - x_j)
pub fn lagrange(set: &PointSet) -> Result<Rational> {
    let pts = set.working_set();
    debug!("Lagrange reconstruction from {} points", pts.len());
    let xs: Vec<Rational> = pts.iter().map(|p| p.x_rational()).collect();
    let mut secret = Rational::zero();
    for (i, pt) in pts.iter().enumerate() {
        let mut num = Rational::one();
        let mut den = Rational::one();
        for (j, x_j) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            num = num * &(-x_j);
            den = den * &(&xs[i] - x_j);
        }
        let lambda_i = num
            .checked_div(&den)
            .map_err(|_| Error::SingularSystem { column: None })?;
        trace!("lambda_{i} = {lambda_i}");
        secret = secret + &(pt.y_rational() * &lambda_i);
    }
    Ok(secret)
}

/// Rows `[x_i^m, ..., x_i, 1]` for each point of the working set, m = k - 1.
fn vandermonde(set: &PointSet) -> (Matrix<Rational>, Vec<Rational>) {
    let pts = set.working_set();
    let k = pts.len();
    let mut eqs = Vec::with_capacity(k * k);
    let mut rhs = Vec::with_capacity(k);
    for pt in pts {
        let x = pt.x_rational();
        eqs.extend((0..k as u32).rev().map(|e| x.pow(e)));
        rhs.push(pt.y_rational());
    }
    (Matrix::from_vec(k, eqs), rhs)
}

/// Recover all polynomial coefficients by Gaussian elimination on the
/// augmented Vandermonde matrix.
pub fn solve_coefficients(set: &PointSet) -> Result<Polynomial> {
    let (eqs, rhs) = vandermonde(set);
    let coeffs = matrix::gauss_eliminate(eqs.augment(&rhs))?;
    Ok(Polynomial::from_coeffs_high_first(coeffs))
}

pub fn gauss_elimination(set: &PointSet) -> Result<Rational> {
    debug!("Gaussian elimination from {} points", set.threshold());
    Ok(solve_coefficients(set)?.constant_term())
}

pub fn linear_solve(set: &PointSet) -> Result<Rational> {
    debug!("Linear solve from {} points", set.threshold());
    let (eqs, rhs) = vandermonde(set);
    let mut coeffs = matrix::solve(&eqs, &rhs)?;
    // k >= 1 is guaranteed by PointSet, so there is always a constant term
    coeffs.pop().ok_or(Error::SingularSystem { column: None })
}

pub fn reconstruct_secret(set: &PointSet, method: Method) -> Result<Rational> {
    match method {
        Method::Lagrange => lagrange(set),
        Method::GaussElimination => gauss_elimination(set),
        Method::LinearSolve => linear_solve(set),
    }
}

/// The secret as computed by every method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub lagrange: Rational,
    pub gauss: Rational,
    pub linear: Rational,
}

impl Reconstruction {
    pub fn get(&self, method: Method) -> &Rational {
        match method {
            Method::Lagrange => &self.lagrange,
            Method::GaussElimination => &self.gauss,
            Method::LinearSolve => &self.linear,
        }
    }

    pub fn agree(&self) -> bool {
        self.lagrange == self.gauss && self.gauss == self.linear
    }

    /// The common value, or [`Error::MethodsDisagree`]
    pub fn secret(&self) -> Result<&Rational> {
        if self.agree() {
            Ok(&self.lagrange)
        } else {
            Err(Error::MethodsDisagree)
        }
    }
}

pub fn reconstruct_all(set: &PointSet) -> Result<Reconstruction> {
    let rec = Reconstruction {
        lagrange: lagrange(set)?,
        gauss: gauss_elimination(set)?,
        linear: linear_solve(set)?,
    };
    if !rec.agree() {
        warn!(
            "methods disagree: lagrange = {}, gauss = {}, linear = {}",
            rec.lagrange, rec.gauss, rec.linear
        );
    }
    Ok(rec)
}
