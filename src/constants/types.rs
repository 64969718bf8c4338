use super::params::PARAM_SEED_SIZE;

/// Seed for the element sampler [`crate::subroutines::prg::PRG`]
pub type Seed = [u8; PARAM_SEED_SIZE];
