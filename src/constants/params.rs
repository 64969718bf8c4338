// Field Parameters
/// Largest supported characteristic, the signed 32-bit bound. Residues stay below 2^31 so
/// the sum of two residues never overflows a `u32`.
pub const MAX_CHARACTERISTIC: u32 = i32::MAX as u32;

/// Tag written in front of the modulus when rendering a field descriptor, e.g. `GF(97)`
pub const FIELD_LABEL_TAG: &str = "GF";

// Sampling Parameters
/// Seed size in bytes for the element sampler
pub const PARAM_SEED_SIZE: usize = 128 / 8;

/// Number of XOF bytes squeezed per sampled element. Eight bytes reduced modulo a prime below
/// 2^31 keeps the sampling bias below 2^-32.
pub const PARAM_SAMPLE_BYTES: usize = 8;
