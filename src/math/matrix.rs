use rand::RngCore;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::math::error::ShapeError;
use crate::math::rng::unit_f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills a `rows x cols` matrix row by row with values from `[-1, 1)`,
    /// each computed as `2 * U[0, 1) - 1`.
    pub fn random_uniform<R: RngCore + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = 2.0 * unit_f64(rng) - 1.0;
            }
        }

        res
    }

    /// Builds a matrix from row vectors. Every row must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix, ShapeError> {
        let cols = data.first().ok_or(ShapeError::Empty)?.len();
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(ShapeError::Ragged { row, expected: cols, found: r.len() });
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// A single-column matrix, one row per value.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect()
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    pub fn sum_abs(&self) -> f64 {
        self.data.iter().flatten().map(|x| x.abs()).sum()
    }

    /// Mean of the absolute values of all elements; 0 for an empty matrix.
    pub fn mean_abs(&self) -> f64 {
        let n = self.rows * self.cols;
        if n == 0 {
            return 0.0;
        }
        self.sum_abs() / n as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter().flatten()
    }

    /// Row-by-column matrix product.
    pub fn try_dot(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        if self.cols != rhs.rows {
            return Err(self.mismatch("multiply", rhs));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn try_hadamard(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        self.zip_with(rhs, "take the element-wise product of", |a, b| a * b)
    }

    /// Panicking form of `try_hadamard`.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        fatal(self.try_hadamard(rhs))
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: &'static str, f: F) -> Result<Matrix, ShapeError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch(op, rhs));
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&x, &y)| f(x, y)).collect()
            })
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    fn mismatch(&self, op: &'static str, rhs: &Matrix) -> ShapeError {
        ShapeError::Mismatch { op, lhs: self.shape(), rhs: rhs.shape() }
    }
}

/// Shapes in this crate are fixed, so a mismatch is a broken invariant, not
/// something a caller can recover from.
fn fatal(res: Result<Matrix, ShapeError>) -> Matrix {
    match res {
        Ok(m) => m,
        Err(e) => panic!("{e}"),
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            let cells: Vec<String> = row.iter().map(|x| format!("{x:.8}")).collect();
            write!(f, "[{}]", cells.join(" "))?;
        }
        write!(f, "]")
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        fatal(self.try_add(rhs))
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        fatal(self.try_sub(rhs))
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        fatal(self.try_dot(rhs))
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        if self.shape() != rhs.shape() {
            panic!("{}", self.mismatch("add", rhs));
        }

        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, y) in row.iter_mut().zip(rhs_row.iter()) {
                *x += y;
            }
        }
    }
}
