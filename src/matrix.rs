//! Dense row-major matrices and exact Gaussian elimination over [`Rational`].

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use log::trace;

use crate::error::{Error, Result};
use crate::rational::Rational;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    elem: Vec<T>,
}

impl<T> Matrix<T> {
    pub fn from_vec(nrows: usize, elem: Vec<T>) -> Self {
        assert!(elem.is_empty() || (nrows > 0 && elem.len() % nrows == 0));
        let ncols = if elem.is_empty() {
            0
        } else {
            elem.len() / nrows
        };
        Self { nrows, ncols, elem }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn row(&self, r: usize) -> &[T] {
        let start_idx = r * self.ncols;
        &self.elem[start_idx..(start_idx + self.ncols)]
    }

    pub fn swap_rows(&mut self, mut i: usize, mut j: usize) {
        if i == j {
            return;
        }
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }
        let row_length = self.ncols();
        let elems = &mut self.elem[i * row_length..];
        let (first_row, rest) = elems.split_at_mut(row_length);
        let second_row_idx = (j - i - 1) * row_length;
        let second_row = &mut rest[second_row_idx..(second_row_idx + row_length)];
        first_row.swap_with_slice(second_row)
    }
}

impl<T: Clone> Matrix<T> {
    /// Append `col` as an extra rightmost column, e.g. to form an augmented
    /// matrix `[A | b]`.
    pub fn augment(&self, col: &[T]) -> Self {
        assert_eq!(col.len(), self.nrows);
        let mut elem = Vec::with_capacity(self.nrows * (self.ncols + 1));
        for (r, extra) in col.iter().enumerate() {
            elem.extend_from_slice(self.row(r));
            elem.push(extra.clone());
        }
        Self::from_vec(self.nrows, elem)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        let row_length = self.ncols();
        &self.elem[row * row_length + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        let row_length = self.ncols();
        &mut self.elem[row * row_length + col]
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.nrows {
            write!(f, "|")?;
            for e in self.row(r) {
                write!(f, " {e}")?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}

/// Solve the square system `eqs * x = rhs`.
pub fn solve(eqs: &Matrix<Rational>, rhs: &[Rational]) -> Result<Vec<Rational>> {
    debug_assert_eq!(eqs.nrows(), rhs.len());
    debug_assert_eq!(eqs.nrows(), eqs.ncols());
    gauss_eliminate(eqs.augment(rhs))
}

/// Solve the square system given as an n x (n+1) augmented matrix `[A | b]`.
///
/// Row `i` eliminates column `i` in every row below it. A zero on the
/// diagonal is replaced by swapping in the first lower row with a non-zero
/// entry in that column; if there is none the system is singular.
pub fn gauss_eliminate(mut aug: Matrix<Rational>) -> Result<Vec<Rational>> {
    let n = aug.nrows();
    assert_eq!(aug.ncols(), n + 1, "augmented matrix must be n x (n+1)");
    trace!("Eliminating\n{aug}");

    // forward elimination
    for col in 0..n {
        if aug[(col, col)].is_zero() {
            let pivot = ((col + 1)..n)
                .find(|&r| !aug[(r, col)].is_zero())
                .ok_or(Error::SingularSystem { column: Some(col) })?;
            trace!("zero pivot in column {col}, swapping rows {col} and {pivot}");
            aug.swap_rows(col, pivot);
        }
        for row in (col + 1)..n {
            if aug[(row, col)].is_zero() {
                continue;
            }
            let fact = aug[(row, col)]
                .checked_div(&aug[(col, col)])
                .map_err(|_| Error::SingularSystem { column: Some(col) })?;
            aug[(row, col)] = Rational::zero();
            for c in (col + 1)..=n {
                let updated = &aug[(row, c)] - &(&fact * &aug[(col, c)]);
                aug[(row, c)] = updated;
            }
        }
    }
    trace!("Upper triangular form\n{aug}");

    // back substitution
    let mut x = vec![Rational::zero(); n];
    for row in (0..n).rev() {
        let mut acc = aug[(row, n)].clone();
        for c in (row + 1)..n {
            acc = acc - &(&aug[(row, c)] * &x[c]);
        }
        x[row] = acc
            .checked_div(&aug[(row, row)])
            .map_err(|_| Error::SingularSystem { column: Some(row) })?;
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Rational {
        Rational::from(n)
    }

    fn mat(nrows: usize, raw: &[i64]) -> Matrix<Rational> {
        Matrix::from_vec(nrows, raw.iter().map(|&v| int(v)).collect())
    }

    #[test]
    fn solve_linear() {
        // x - y = 1, x + y = 1
        let sys = mat(2, &[1, -1, 1, 1]);
        let x = solve(&sys, &[int(1), int(1)]).unwrap();
        assert_eq!(x, [int(1), int(0)]);
    }

    #[test]
    fn solve_needs_row_swap() {
        // 0x + y = 2, x + y = 5
        let sys = mat(2, &[0, 1, 1, 1]);
        let x = solve(&sys, &[int(2), int(5)]).unwrap();
        assert_eq!(x, [int(3), int(2)]);
    }

    #[test]
    fn solve_fractional() {
        // 2x = 1
        let x = solve(&mat(1, &[2]), &[int(1)]).unwrap();
        assert_eq!(x, [Rational::one().checked_div(&int(2)).unwrap()]);
    }

    #[test]
    fn singular() {
        let sys = mat(2, &[1, 2, 2, 4]);
        assert_eq!(
            solve(&sys, &[int(1), int(2)]),
            Err(Error::SingularSystem { column: Some(1) })
        );
        let sys = mat(2, &[0, 1, 0, 3]);
        assert_eq!(
            solve(&sys, &[int(1), int(2)]),
            Err(Error::SingularSystem { column: Some(0) })
        );
    }

    #[test]
    fn swap_and_augment() {
        let mut m = mat(3, &[1, 2, 3, 4, 5, 6]);
        m.swap_rows(2, 0);
        assert_eq!(m, mat(3, &[5, 6, 3, 4, 1, 2]));
        let aug = m.augment(&[int(7), int(8), int(9)]);
        assert_eq!(aug.ncols(), 3);
        assert_eq!(aug.row(1), &[int(3), int(4), int(8)]);
    }

    #[test]
    fn display() {
        let m = mat(2, &[1, -2, 3, 4]);
        assert_eq!(m.to_string(), "| 1 -2 |\n| 3 4 |\n");
    }
}
