//! Matrix functional calculus over `nalgebra` matrices: f(A) through the
//! eigendecomposition (`funm` and the named `expm`, `logm`, `sqrtm`, `sinm`,
//! `cosm`, `absm`) and entry-wise maps (`fun`).
pub mod config;
pub mod core;

pub use crate::config::FunmSettings;
pub use crate::core::error::FunmError;
pub use crate::core::titan::eigen::{eigendecompose, eigendecompose_with, EigenDecomposition};
pub use crate::core::titan::functional::{
    absm, cosm, expm, fun, funm, funm_named, funm_with, logm, sinm, sqrtm, MatrixFunctions,
};
pub use crate::core::titan::scalar::ScalarFunction;
pub use crate::core::titan::types::{CMatrix, ToComplex, C64};
