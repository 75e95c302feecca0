//! LU decomposition solver
//!
//! LU factorization with partial pivoting for dense complex systems.
//! The factorization can be reused across multiple right-hand sides,
//! which matters when the same scattering matrix is solved for several
//! incident fields.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use thiserror::Error;

/// Pivot magnitudes below this are treated as exact zeros
const SINGULARITY_TOLERANCE: f64 = 1e-30;

/// Errors that can occur during LU factorization
#[derive(Error, Debug)]
pub enum LuError {
    /// The matrix has a vanishing pivot and cannot be factorized
    #[error("Matrix is singular or nearly singular")]
    SingularMatrix,
    /// Matrix or right-hand-side dimensions do not agree
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Required dimension
        expected: usize,
        /// Dimension actually supplied
        got: usize,
    },
}

/// LU factorization of a dense complex matrix
///
/// Stores L and U factors along with pivot information. L is unit lower
/// triangular and occupies the strictly-lower part of `lu`.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Combined L and U matrices
    pub lu: Array2<Complex64>,
    /// Pivot indices
    pub pivots: Vec<usize>,
    /// Matrix dimension
    pub n: usize,
}

impl LuFactorization {
    /// Solve Ax = b using the pre-computed LU factorization
    pub fn solve(&self, b: &Array1<Complex64>) -> Result<Array1<Complex64>, LuError> {
        if b.len() != self.n {
            return Err(LuError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        // Apply the row permutation: pivots[i] is the original row that
        // ended up in position i, so gather rather than replay swaps
        let mut x = Array1::from_iter(self.pivots.iter().map(|&p| b[p]));

        // Forward substitution: Ly = Pb
        for i in 0..self.n {
            for j in 0..i {
                let l_ij = self.lu[[i, j]];
                x[i] = x[i] - l_ij * x[j];
            }
        }

        // Backward substitution: Ux = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let u_ij = self.lu[[i, j]];
                x[i] = x[i] - u_ij * x[j];
            }
            let u_ii = self.lu[[i, i]];
            if u_ii.norm() < SINGULARITY_TOLERANCE {
                return Err(LuError::SingularMatrix);
            }
            x[i] /= u_ii;
        }

        Ok(x)
    }
}

/// Compute LU factorization with partial pivoting
pub fn lu_factorize(a: &Array2<Complex64>) -> Result<LuFactorization, LuError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }

    let mut lu = a.clone();
    let mut pivots: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[[k, k]].norm();
        let mut max_row = k;

        for i in (k + 1)..n {
            let val = lu[[i, k]].norm();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < SINGULARITY_TOLERANCE {
            return Err(LuError::SingularMatrix);
        }

        if max_row != k {
            for j in 0..n {
                let tmp = lu[[k, j]];
                lu[[k, j]] = lu[[max_row, j]];
                lu[[max_row, j]] = tmp;
            }
            pivots.swap(k, max_row);
        }

        // Compute multipliers and eliminate
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = mult;

            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    Ok(LuFactorization { lu, pivots, n })
}

/// Solve Ax = b by LU decomposition
///
/// Convenience function combining factorization and solve.
pub fn lu_solve(a: &Array2<Complex64>, b: &Array1<Complex64>) -> Result<Array1<Complex64>, LuError> {
    let factorization = lu_factorize(a)?;
    factorization.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_lu_solve_complex() {
        let a = array![
            [Complex64::new(4.0, 1.0), Complex64::new(1.0, 0.0)],
            [Complex64::new(1.0, 0.0), Complex64::new(3.0, -1.0)],
        ];

        let b = array![Complex64::new(1.0, 1.0), Complex64::new(2.0, -1.0)];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!((ax[i] - b[i]).norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_identity() {
        let n = 5;
        let a = Array2::from_diag(&Array1::from_elem(n, Complex64::new(1.0, 0.0)));
        let b = Array1::from_iter((1..=n).map(|i| Complex64::new(i as f64, -(i as f64))));

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        for i in 0..n {
            assert_relative_eq!((x[i] - b[i]).norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_singular() {
        let a = array![
            [Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
            [Complex64::new(2.0, 0.0), Complex64::new(4.0, 0.0)],
        ];

        let b = array![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)];

        assert!(lu_solve(&a, &b).is_err());
    }

    #[test]
    fn test_lu_dimension_mismatch() {
        let a = array![
            [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        ];
        let b = array![Complex64::new(1.0, 0.0)];

        match lu_solve(&a, &b) {
            Err(LuError::DimensionMismatch { expected, got }) => {
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("expected dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_lu_pivot_cycle() {
        // Pivoting on this matrix selects rows (2, then old row 0) so the
        // permutation vector becomes the 3-cycle [2, 0, 1]; the permuted
        // right-hand side must be gathered through it, not rebuilt from
        // pairwise swaps.
        let a = array![
            [
                Complex64::new(1.0, 0.0),
                Complex64::new(3.0, 0.0),
                Complex64::new(1.0, 0.0)
            ],
            [
                Complex64::new(2.0, 0.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(1.0, 0.0)
            ],
            [
                Complex64::new(4.0, 0.0),
                Complex64::new(2.0, 0.0),
                Complex64::new(1.0, 0.0)
            ],
        ];

        let factorization = lu_factorize(&a).expect("Factorization should succeed");
        assert_eq!(factorization.pivots, vec![2, 0, 1]);

        // Exact solution x = (1, 1, 1): b = row sums
        let b = array![
            Complex64::new(5.0, 0.0),
            Complex64::new(4.0, 0.0),
            Complex64::new(7.0, 0.0)
        ];
        let x = factorization.solve(&b).expect("Solve should succeed");
        for i in 0..3 {
            assert_relative_eq!((x[i] - Complex64::new(1.0, 0.0)).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lu_random_residuals() {
        // Deterministic pseudo-random dense systems, verified through the
        // residual ||Ax - b|| rather than stored solutions.
        let mut state = 0x2545f4914f6cdd1d_u64;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
        };

        for n in [4usize, 8, 13] {
            let a = Array2::from_shape_fn((n, n), |_| Complex64::new(next(), next()));
            let b = Array1::from_shape_fn(n, |_| Complex64::new(next(), next()));

            let x = lu_solve(&a, &b).expect("LU solve should succeed");
            let residual = a.dot(&x) - &b;
            let norm: f64 = residual.iter().map(|v| v.norm_sqr()).sum::<f64>().sqrt();
            assert!(norm < 1e-10, "residual {norm} too large for n = {n}");
        }
    }

    #[test]
    fn test_lu_factorize_multiple_rhs() {
        let a = array![
            [
                Complex64::new(4.0, 0.0),
                Complex64::new(1.0, 0.5),
                Complex64::new(0.0, 0.0)
            ],
            [
                Complex64::new(1.0, -0.5),
                Complex64::new(3.0, 0.0),
                Complex64::new(1.0, 0.0)
            ],
            [
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(2.0, 1.0)
            ],
        ];

        let factorization = lu_factorize(&a).expect("Factorization should succeed");

        for b in [
            array![
                Complex64::new(1.0, 0.0),
                Complex64::new(2.0, 0.0),
                Complex64::new(3.0, 0.0)
            ],
            array![
                Complex64::new(0.0, 4.0),
                Complex64::new(5.0, 0.0),
                Complex64::new(0.0, -6.0)
            ],
        ] {
            let x = factorization.solve(&b).expect("Solve should succeed");
            let ax = a.dot(&x);
            for i in 0..3 {
                assert_relative_eq!((ax[i] - b[i]).norm(), 0.0, epsilon = 1e-10);
            }
        }
    }
}
