//! Error types for prime field construction and the checked arithmetic variants

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid modulus {0}: the characteristic must be a prime")]
    InvalidModulus(u32),

    #[error("Modulus {characteristic} is too large, the maximum supported characteristic is {max}")]
    ModulusTooLarge { characteristic: u32, max: u32 },

    #[error("{generator} does not generate the multiplicative group of GF({characteristic})")]
    NotAGenerator { generator: u32, characteristic: u32 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("{value} is out of range for GF({characteristic})")]
    OutOfRange { value: u32, characteristic: u32 },
}

pub type Result<T> = std::result::Result<T, FieldError>;
