//! Named complex scalar functions usable with `funm`.
use std::fmt;
use std::str::FromStr;

use crate::core::error::FunmError;
use crate::core::titan::types::C64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarFunction {
    Exp,
    /// Principal branch, cut along the negative real axis.
    Log,
    /// Principal square root.
    Sqrt,
    Sin,
    Cos,
}

impl ScalarFunction {
    pub const ALL: [ScalarFunction; 5] = [
        ScalarFunction::Exp,
        ScalarFunction::Log,
        ScalarFunction::Sqrt,
        ScalarFunction::Sin,
        ScalarFunction::Cos,
    ];

    #[inline]
    pub fn apply(self, z: C64) -> C64 {
        match self {
            ScalarFunction::Exp => z.exp(),
            ScalarFunction::Log => z.ln(),
            ScalarFunction::Sqrt => z.sqrt(),
            ScalarFunction::Sin => z.sin(),
            ScalarFunction::Cos => z.cos(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarFunction::Exp => "exp",
            ScalarFunction::Log => "log",
            ScalarFunction::Sqrt => "sqrt",
            ScalarFunction::Sin => "sin",
            ScalarFunction::Cos => "cos",
        }
    }

    /// Name of the matrix function built on this scalar function.
    pub fn matrix_op(self) -> &'static str {
        match self {
            ScalarFunction::Exp => "expm",
            ScalarFunction::Log => "logm",
            ScalarFunction::Sqrt => "sqrtm",
            ScalarFunction::Sin => "sinm",
            ScalarFunction::Cos => "cosm",
        }
    }
}

impl fmt::Display for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarFunction {
    type Err = FunmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exp" => Ok(ScalarFunction::Exp),
            "log" | "ln" => Ok(ScalarFunction::Log),
            "sqrt" => Ok(ScalarFunction::Sqrt),
            "sin" => Ok(ScalarFunction::Sin),
            "cos" => Ok(ScalarFunction::Cos),
            _ => Err(FunmError::UnknownFunction(s.to_string())),
        }
    }
}
