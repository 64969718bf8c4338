use crate::{
    arith::zzp::{PrimeField, ZZpElem},
    constants::{
        params::{PARAM_SAMPLE_BYTES, PARAM_SEED_SIZE},
        types::Seed,
    },
};

use super::xof::{ZZpXOF, ZZpXOFTrait as _};

/// Pseudo Random Generator (PRG) struct
/// Generates random elements of GF(p) from a seed
///
/// The pseudorandomness is generated through an extendable output function (XOF). The same
/// seed yields the same elements for the same field.
pub struct PRG {
    xof: ZZpXOF,
}

impl PRG {
    /// Initialize the PRG with a seed
    pub fn init(seed: &Seed) -> Self {
        PRG {
            xof: ZZpXOF::init(seed),
        }
    }

    /// Initialize the PRG with a base value
    pub fn init_base(x: &[u8]) -> Self {
        PRG {
            xof: ZZpXOF::init_base(x),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; PARAM_SAMPLE_BYTES];
        self.xof.squeeze(&mut buf);
        u64::from_le_bytes(buf)
    }

    /// Sample uniformly random elements of `field`
    pub fn sample_elements(&mut self, field: &PrimeField, out: &mut [ZZpElem]) {
        let p = u64::from(field.characteristic());
        for x in out.iter_mut() {
            let residue = (self.next_u64() % p) as u32;
            *x = field.tables().encode(residue);
        }
    }

    /// Sample a random [`Vec`] of elements of `field`
    pub fn sample_elements_vec(&mut self, field: &PrimeField, n: usize) -> Vec<ZZpElem> {
        let mut f = vec![ZZpElem::ZERO; n];
        self.sample_elements(field, &mut f);
        f
    }

    /// Sample non-zero random elements of `field`
    pub fn sample_non_zero(&mut self, field: &PrimeField, out: &mut [ZZpElem]) {
        let group_order = u64::from(field.group_order());
        for x in out.iter_mut() {
            // Nonzero elements are exactly the exponents 1..=p-1
            let exponent = 1 + (self.next_u64() % group_order) as u32;
            *x = ZZpElem(exponent);
        }
    }

    /// Sample a random [`Seed`].
    pub fn sample_seed(&mut self) -> Seed {
        let mut seed = [0u8; PARAM_SEED_SIZE];
        self.xof.squeeze(&mut seed);
        seed
    }
}
