//! # Extendable output function (XOF).
//!
//! The sampler reads its pseudorandomness from SHAKE128. A field element is sampled by squeezing
//! [`PARAM_SAMPLE_BYTES`](crate::constants::params::PARAM_SAMPLE_BYTES) bytes and reducing them
//! modulo the characteristic.

use tiny_keccak::{Hasher, Shake, Xof};

use crate::constants::types::Seed;

/// Domain separation prefix absorbed before the seed
pub const XOF_DOMAIN_SAMPLE: &[u8] = b"rzzp-sample";

/// Trait for the extendable output function (XOF) implementation
pub trait ZZpXOFTrait {
    /// Initialize the XOF with a base value `x`
    fn init_base(x: &[u8]) -> Self;
    /// Initialize the XOF with a [`Seed`]
    fn init(seed: &Seed) -> Self;
    /// Squeeze the XOF to get the output of size `output.len()`
    fn squeeze(&mut self, output: &mut [u8]);
}

/// SHAKE128 based XOF
pub struct ZZpXOF {
    xof: Shake,
}

impl ZZpXOFTrait for ZZpXOF {
    fn init_base(x: &[u8]) -> Self {
        let mut xof = Shake::v128();
        xof.update(x);
        ZZpXOF { xof }
    }

    fn init(seed: &Seed) -> Self {
        let mut xof = Shake::v128();
        xof.update(XOF_DOMAIN_SAMPLE);
        xof.update(seed);
        ZZpXOF { xof }
    }

    fn squeeze(&mut self, output: &mut [u8]) {
        self.xof.squeeze(output);
    }
}
