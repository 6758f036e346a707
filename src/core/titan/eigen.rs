//! Complex eigendecomposition A = V·diag(Λ)·V⁻¹.
//!
//! The matrix is reduced to complex Schur form A = Q·T·Qᴴ, the eigenvectors of
//! the upper-triangular T are found by back-substitution, and V = Q·Y.
//! Defective inputs are not detected; their eigenbasis is ill-conditioned.
use nalgebra::linalg::Schur;
use nalgebra::DVector;

use crate::config::FunmSettings;
use crate::core::error::FunmError;
use crate::core::titan::types::{is_square, CMatrix, C64};

#[derive(Clone, Debug)]
pub struct EigenDecomposition {
    /// Column j is the unit eigenvector of `eigenvalues[j]`.
    pub eigenvectors: CMatrix,
    pub eigenvalues: DVector<C64>,
}

impl EigenDecomposition {
    /// Rebuild V·diag(f(λ₁),…,f(λₙ))·V⁻¹.
    pub fn apply<F: Fn(C64) -> C64>(&self, f: F) -> Result<CMatrix, FunmError> {
        self.apply_as("funm", f)
    }

    pub(crate) fn apply_as<F: Fn(C64) -> C64>(&self, op: &'static str, f: F) -> Result<CMatrix, FunmError> {
        let mapped = self.eigenvalues.map(&f);
        let v_inv = self.eigenvectors.clone().try_inverse().ok_or_else(|| {
            debug_log!("{op}: eigenvector matrix not invertible");
            FunmError::singular(op)
        })?;
        Ok(&self.eigenvectors * CMatrix::from_diagonal(&mapped) * v_inv)
    }
}

pub fn eigendecompose(a: &CMatrix) -> Result<EigenDecomposition, FunmError> {
    decompose("eigendecompose", a, &FunmSettings::default())
}

pub fn eigendecompose_with(a: &CMatrix, settings: &FunmSettings) -> Result<EigenDecomposition, FunmError> {
    decompose("eigendecompose", a, settings)
}

pub(crate) fn decompose(
    op: &'static str,
    a: &CMatrix,
    settings: &FunmSettings,
) -> Result<EigenDecomposition, FunmError> {
    if !is_square(a) {
        return Err(FunmError::not_square(op, a.nrows(), a.ncols()));
    }
    let n = a.nrows();
    if n == 0 {
        return Ok(EigenDecomposition {
            eigenvectors: CMatrix::zeros(0, 0),
            eigenvalues: DVector::zeros(0),
        });
    }
    if a.iter().all(|z| z.re == 0.0 && z.im == 0.0) {
        // Schur scales by the largest entry; keep the zero matrix away from 0/0.
        return Ok(EigenDecomposition {
            eigenvectors: CMatrix::identity(n, n),
            eigenvalues: DVector::zeros(n),
        });
    }

    let schur = Schur::try_new(a.clone(), settings.schur_eps, settings.max_iterations).ok_or(
        FunmError::NoConvergence { op, iterations: settings.max_iterations },
    )?;
    let (q, t) = schur.unpack();
    debug_log!("{op}: schur form of {n}x{n} done");

    let eigenvalues = t.diagonal();
    let y = triangular_eigenvectors(&t, settings.pivot_floor);
    Ok(EigenDecomposition { eigenvectors: q * y, eigenvalues })
}

/// Eigenvectors of an upper-triangular matrix, one per diagonal entry.
///
/// Column k solves (T − t_kk·I)·y = 0 with y_k = 1 and y_i = 0 below k.
/// Pivots smaller than `pivot_floor·max|t_ij|` are replaced by that bound so
/// repeated eigenvalues stay finite. Division never squares a pivot, so
/// tiny-scale inputs do not underflow to 0/0.
fn triangular_eigenvectors(t: &CMatrix, pivot_floor: f64) -> CMatrix {
    let n = t.nrows();
    let tmax = t.iter().map(|z| z.norm()).fold(0.0_f64, f64::max);
    if tmax == 0.0 {
        return CMatrix::identity(n, n);
    }
    let smin = (pivot_floor * tmax).max(f64::MIN_POSITIVE);

    let mut y = CMatrix::zeros(n, n);
    for k in 0..n {
        let lambda = t[(k, k)];
        y[(k, k)] = C64::new(1.0, 0.0);
        for i in (0..k).rev() {
            let mut acc = C64::new(0.0, 0.0);
            for j in i + 1..=k {
                acc += t[(i, j)] * y[(j, k)];
            }
            let pivot = t[(i, i)] - lambda;
            let size = pivot.norm();
            y[(i, k)] = if size < smin {
                -acc.unscale(smin)
            } else {
                // 1/p = conj(p/|p|)/|p|
                -acc.unscale(size) * pivot.unscale(size).conj()
            };
        }
        // y_kk = 1, so the norm is at least one.
        y.column_mut(k).normalize_mut();
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: f64, i: f64) -> C64 {
        C64::new(r, i)
    }

    fn max_abs(m: &CMatrix) -> f64 {
        m.iter().map(|z| z.norm()).fold(0.0_f64, f64::max)
    }

    #[test]
    fn rotation_generator_has_imaginary_pair() {
        let a = CMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(-1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]);
        let eig = eigendecompose(&a).unwrap();
        let mut ims: Vec<f64> = eig.eigenvalues.iter().map(|l| l.im).collect();
        ims.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert!((ims[0] + 1.0).abs() < 1e-10 && (ims[1] - 1.0).abs() < 1e-10);
        assert!(eig.eigenvalues.iter().all(|l| l.re.abs() < 1e-10));

        let residual = &a * &eig.eigenvectors - &eig.eigenvectors * CMatrix::from_diagonal(&eig.eigenvalues);
        assert!(max_abs(&residual) < 1e-10);
    }

    #[test]
    fn residual_of_upper_triangular_input() {
        let a = CMatrix::from_row_slice(
            3,
            3,
            &[
                c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0),
                c(0.0, 0.0), c(4.0, 0.0), c(5.0, 0.0),
                c(0.0, 0.0), c(0.0, 0.0), c(6.0, 0.0),
            ],
        );
        let eig = eigendecompose(&a).unwrap();
        let residual = &a * &eig.eigenvectors - &eig.eigenvectors * CMatrix::from_diagonal(&eig.eigenvalues);
        assert!(max_abs(&residual) < 1e-9);
        for j in 0..3 {
            assert!((eig.eigenvectors.column(j).norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn repeated_eigenvalues_stay_finite() {
        let a = CMatrix::identity(3, 3) * c(2.0, 0.0);
        let eig = eigendecompose(&a).unwrap();
        assert!(eig.eigenvectors.iter().all(|z| z.re.is_finite() && z.im.is_finite()));
        let back = eig.apply(|l| l).unwrap();
        assert!(max_abs(&(back - a)) < 1e-12);
    }

    #[test]
    fn zero_matrix_has_unitary_basis() {
        let eig = eigendecompose(&CMatrix::zeros(2, 2)).unwrap();
        assert!(eig.eigenvectors.iter().all(|z| z.re.is_finite() && z.im.is_finite()));
        assert!(max_abs(&(eig.eigenvectors.adjoint() * &eig.eigenvectors - CMatrix::identity(2, 2))) < 1e-15);
        let e = eig.apply(|l| l.exp()).unwrap();
        assert!(max_abs(&(e - CMatrix::identity(2, 2))) < 1e-15);
    }

    #[test]
    fn tiny_scale_input_stays_finite() {
        let a = CMatrix::identity(2, 2) * c(1e-160, 0.0);
        let eig = eigendecompose(&a).unwrap();
        assert!(eig.eigenvectors.iter().all(|z| z.re.is_finite() && z.im.is_finite()));
        let back = eig.apply(|l| l).unwrap();
        assert!(max_abs(&(back - &a)) < 1e-172);
    }

    #[test]
    fn zero_pivot_floor_does_not_produce_nan() {
        let settings = FunmSettings { pivot_floor: 0.0, ..FunmSettings::default() };
        let a = CMatrix::identity(3, 3) * c(1e-200, 0.0);
        let eig = eigendecompose_with(&a, &settings).unwrap();
        assert!(eig.eigenvectors.iter().all(|z| z.re.is_finite() && z.im.is_finite()));
    }

    #[test]
    fn singular_basis_is_reported() {
        let eig = EigenDecomposition {
            eigenvectors: CMatrix::zeros(2, 2),
            eigenvalues: DVector::from_vec(vec![c(1.0, 0.0), c(2.0, 0.0)]),
        };
        assert_eq!(eig.apply(|l| l).unwrap_err(), FunmError::SingularEigenbasis { op: "funm" });
    }

    #[test]
    fn rejects_non_square() {
        let a = CMatrix::zeros(2, 3);
        assert_eq!(
            eigendecompose(&a).unwrap_err(),
            FunmError::NotSquare { op: "eigendecompose", rows: 2, cols: 3 }
        );
    }

    #[test]
    fn empty_matrix_decomposes_to_nothing() {
        let eig = eigendecompose(&CMatrix::zeros(0, 0)).unwrap();
        assert_eq!(eig.eigenvalues.len(), 0);
        assert_eq!(eig.apply(|l| l.exp()).unwrap().shape(), (0, 0));
    }
}
