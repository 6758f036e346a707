//! Scalar types and promotion for the Titan functional calculus.
use nalgebra::{DMatrix, Scalar};
use num_complex::Complex;

pub use num_complex::Complex64 as C64;

pub type CMatrix = DMatrix<C64>;

/// Scalars that widen losslessly (up to `f64` precision) to `Complex64`.
pub trait ToComplex: Scalar {
    fn to_c64(&self) -> C64;
}

impl ToComplex for f64 {
    fn to_c64(&self) -> C64 { C64::new(*self, 0.0) }
}
impl ToComplex for f32 {
    fn to_c64(&self) -> C64 { C64::new(f64::from(*self), 0.0) }
}
impl ToComplex for i32 {
    fn to_c64(&self) -> C64 { C64::new(f64::from(*self), 0.0) }
}
impl ToComplex for i64 {
    fn to_c64(&self) -> C64 { C64::new(*self as f64, 0.0) }
}
impl ToComplex for C64 {
    fn to_c64(&self) -> C64 { *self }
}
impl ToComplex for Complex<f32> {
    fn to_c64(&self) -> C64 { C64::new(f64::from(self.re), f64::from(self.im)) }
}

#[inline]
pub fn is_square<T: Scalar>(a: &DMatrix<T>) -> bool {
    a.nrows() == a.ncols()
}
