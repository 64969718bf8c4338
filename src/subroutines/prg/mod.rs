//! # Pseudo Random Generator (PRG)
//! Pseudo-randomness used to sample elements of GF(p), e.g. for randomized tests, benchmarks and
//! the `sample` command of the CLI.
//!
//! ## XOF
//! Extendable Output Functions (XOFs) generate the pseudorandom bytes the elements are reduced
//! from. The XOF is implemented in the [`xof`] module.

pub mod prg;
pub mod xof;

pub use prg::PRG;
