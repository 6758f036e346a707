use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FunmError {
    /// The operation needs a square matrix.
    NotSquare { op: &'static str, rows: usize, cols: usize },
    /// Schur iteration gave up before the subdiagonal vanished.
    NoConvergence { op: &'static str, iterations: usize },
    /// The eigenvector matrix has no inverse.
    SingularEigenbasis { op: &'static str },
    UnknownFunction(String),
}

impl fmt::Display for FunmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunmError::NotSquare { op, rows, cols } => {
                write!(f, "{}: matrix must be square (got {}x{})", op, rows, cols)
            }
            FunmError::NoConvergence { op, iterations } => {
                write!(f, "{}: Schur iteration did not converge after {} iterations", op, iterations)
            }
            FunmError::SingularEigenbasis { op } => {
                write!(f, "{}: eigenvector matrix is singular", op)
            }
            FunmError::UnknownFunction(name) => write!(f, "unknown scalar function '{}'", name),
        }
    }
}

impl std::error::Error for FunmError {}

impl FunmError {
    pub fn not_square(op: &'static str, rows: usize, cols: usize) -> Self { FunmError::NotSquare { op, rows, cols } }
    pub fn singular(op: &'static str) -> Self { FunmError::SingularEigenbasis { op } }
}
