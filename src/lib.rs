//! # rzzp
//!
//! The prime field GF(p) with its elements stored as discrete logarithms of a primitive root.
//!
//! ```ignore
//! use rzzp::arith::zzp::PrimeField;
//!
//! let field = PrimeField::new(101)?;
//! let a = field.from_integer(7);
//! let b = field.invert(a);
//! assert_eq!(field.multiply(a, b), field.one());
//! ```
//!
//! - [`arith`]: The field, its tables and arithmetic
//! - [`subroutines`]: Seeded sampling of field elements
//! - [`errors`]: Error types

pub mod arith;
pub mod constants;
pub mod errors;
pub mod subroutines;
pub(crate) mod utils;

pub use arith::zzp::{zzp_bound::Zp, PrimeField, ZZpElem};
pub use errors::{FieldError, Result};
