//! Matrix functional calculus.
//!
//! `funm` applies a scalar function through the eigendecomposition of a square
//! matrix; `fun` applies one entry by entry. The named functions (`expm`,
//! `logm`, `sqrtm`, `sinm`, `cosm`, `absm`) are `funm` with a fixed function.
use nalgebra::{DMatrix, Scalar};

use crate::config::FunmSettings;
use crate::core::error::FunmError;
use crate::core::titan::eigen::decompose;
use crate::core::titan::ops::{gram, promote};
use crate::core::titan::scalar::ScalarFunction;
use crate::core::titan::types::{is_square, CMatrix, ToComplex, C64};

/// f(A) = V·diag(f(λ₁),…,f(λₙ))·V⁻¹ for a square A promoted to complex.
pub fn funm<T, F>(a: &DMatrix<T>, f: F) -> Result<CMatrix, FunmError>
where
    T: ToComplex,
    F: Fn(C64) -> C64,
{
    funm_as("funm", a, f, &FunmSettings::default())
}

/// `funm` with explicit numeric settings.
pub fn funm_with<T, F>(a: &DMatrix<T>, f: F, settings: &FunmSettings) -> Result<CMatrix, FunmError>
where
    T: ToComplex,
    F: Fn(C64) -> C64,
{
    funm_as("funm", a, f, settings)
}

/// `funm` with a named scalar function; errors carry the matrix function's name.
pub fn funm_named<T: ToComplex>(a: &DMatrix<T>, func: ScalarFunction) -> Result<CMatrix, FunmError> {
    funm_as(func.matrix_op(), a, |z| func.apply(z), &FunmSettings::default())
}

fn funm_as<T, F>(op: &'static str, a: &DMatrix<T>, f: F, settings: &FunmSettings) -> Result<CMatrix, FunmError>
where
    T: ToComplex,
    F: Fn(C64) -> C64,
{
    // Shape first: nothing numeric runs on a bad input.
    if !is_square(a) {
        debug_log!("{op}: rejected {}x{} input", a.nrows(), a.ncols());
        return Err(FunmError::not_square(op, a.nrows(), a.ncols()));
    }
    let eig = decompose(op, &promote(a), settings)?;
    eig.apply_as(op, f)
}

/// Entry-wise map: result[(i, j)] = f(&a[(i, j)]). Any shape.
pub fn fun<T, U, F>(a: &DMatrix<T>, f: F) -> DMatrix<U>
where
    T: Scalar,
    U: Scalar,
    F: Fn(&T) -> U,
{
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| f(&a[(i, j)]))
}

/// Matrix absolute value √(Aᴴ·A). The Gram matrix is square for any m×n A,
/// so the result is n×n.
pub fn absm<T: ToComplex>(a: &DMatrix<T>) -> Result<CMatrix, FunmError> {
    funm_as("absm", &gram(a), |z| z.sqrt(), &FunmSettings::default())
}

pub fn expm<T: ToComplex>(a: &DMatrix<T>) -> Result<CMatrix, FunmError> {
    funm_named(a, ScalarFunction::Exp)
}

/// Principal matrix logarithm.
pub fn logm<T: ToComplex>(a: &DMatrix<T>) -> Result<CMatrix, FunmError> {
    funm_named(a, ScalarFunction::Log)
}

/// Principal matrix square root.
pub fn sqrtm<T: ToComplex>(a: &DMatrix<T>) -> Result<CMatrix, FunmError> {
    funm_named(a, ScalarFunction::Sqrt)
}

pub fn sinm<T: ToComplex>(a: &DMatrix<T>) -> Result<CMatrix, FunmError> {
    funm_named(a, ScalarFunction::Sin)
}

pub fn cosm<T: ToComplex>(a: &DMatrix<T>) -> Result<CMatrix, FunmError> {
    funm_named(a, ScalarFunction::Cos)
}

/// Method-call form of the functional calculus on `DMatrix`.
pub trait MatrixFunctions {
    fn funm<F: Fn(C64) -> C64>(&self, f: F) -> Result<CMatrix, FunmError>;
    fn absm(&self) -> Result<CMatrix, FunmError>;
    fn expm(&self) -> Result<CMatrix, FunmError>;
    fn logm(&self) -> Result<CMatrix, FunmError>;
    fn sqrtm(&self) -> Result<CMatrix, FunmError>;
    fn sinm(&self) -> Result<CMatrix, FunmError>;
    fn cosm(&self) -> Result<CMatrix, FunmError>;
}

impl<T: ToComplex> MatrixFunctions for DMatrix<T> {
    fn funm<F: Fn(C64) -> C64>(&self, f: F) -> Result<CMatrix, FunmError> { funm(self, f) }
    fn absm(&self) -> Result<CMatrix, FunmError> { absm(self) }
    fn expm(&self) -> Result<CMatrix, FunmError> { expm(self) }
    fn logm(&self) -> Result<CMatrix, FunmError> { logm(self) }
    fn sqrtm(&self) -> Result<CMatrix, FunmError> { sqrtm(self) }
    fn sinm(&self) -> Result<CMatrix, FunmError> { sinm(self) }
    fn cosm(&self) -> Result<CMatrix, FunmError> { cosm(self) }
}
