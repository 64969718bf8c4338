//! # Utilities
//! This module contains the utilities used across the crate.
//!
//! - [`iterator`]: Switches between sequential and parallel iterators on the `parallel` feature.

pub(crate) mod iterator;
