//! Titan matrix functional calculus.

pub mod eigen;
pub mod functional;
pub mod ops;
pub mod scalar;
pub mod types;
