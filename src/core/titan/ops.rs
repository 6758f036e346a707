//! Promotion and Gram products over complex matrices.
use crate::core::titan::types::{CMatrix, ToComplex};
use nalgebra::DMatrix;

/// Cast every entry to `Complex64`.
pub fn promote<T: ToComplex>(a: &DMatrix<T>) -> CMatrix {
    a.map(|x| x.to_c64())
}

/// Gram matrix Aᴴ·A (n×n for an m×n input).
pub fn gram<T: ToComplex>(a: &DMatrix<T>) -> CMatrix {
    let c = promote(a);
    c.adjoint() * &c
}
