//! # Subroutines
//!
//! - [`prg`]: Deterministic sampling of field elements from a seed
pub mod prg;
