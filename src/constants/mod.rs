//! # Constants
//!
//! The [`params`] module holds the limits and sizes used throughout the crate, such as
//! the largest characteristic a [`crate::arith::zzp::PrimeField`] can be built for.
//!
//! The [`types`] module contains the type aliases shared by the library and the CLI, like
//! [`crate::constants::types::Seed`].
//!

pub mod params;
pub mod types;
