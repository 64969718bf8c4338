//! # Exp and log tables
//!
//! For a primitive root `g` of GF(p):
//!
//! - `exp_table[e] = g^e mod p` for `1 <= e <= p-1`, and `exp_table[0] = 0`
//! - `log_table[v] = e` with `g^e = v mod p` for `1 <= v <= p-1`, and `log_table[0] = 0`
//!
//! The index `0` of both tables is the sentinel for the field zero. With that convention the
//! tables are mutually inverse permutations of `0..p`, and `exp_table[p-1] = 1`.

use crate::{
    errors::{FieldError, Result},
    utils::iterator::*,
};

use super::ZZpElem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZZpTables {
    exp_table: Box<[u32]>,
    log_table: Box<[u32]>,
}

impl ZZpTables {
    /// Build both tables in one O(p) walk over the powers of `generator`.
    ///
    /// Fails if the walk hits zero or revisits a residue before `p-1` steps, i.e. if
    /// `generator` does not have order `p-1`. That is always the case for a composite `p`.
    pub fn build(characteristic: u32, generator: u32) -> Result<Self> {
        let p = characteristic as usize;
        let not_a_generator = || FieldError::NotAGenerator {
            generator,
            characteristic,
        };

        let mut exp_table = vec![0u32; p];
        let mut log_table = vec![0u32; p];

        let modulus = u64::from(characteristic);
        let g = u64::from(generator) % modulus;
        let mut power = 1u64;
        for e in 1..characteristic {
            // g^e = g^(e-1) * g
            power = power * g % modulus;
            let residue = power as u32;
            if residue == 0 || log_table[residue as usize] != 0 {
                return Err(not_a_generator());
            }
            exp_table[e as usize] = residue;
            log_table[residue as usize] = e;
        }

        if exp_table[p - 1] != 1 {
            return Err(not_a_generator());
        }

        Ok(ZZpTables {
            exp_table: exp_table.into_boxed_slice(),
            log_table: log_table.into_boxed_slice(),
        })
    }

    /// Residue of an element, `exp_table[e]`
    #[inline]
    pub fn decode(&self, a: ZZpElem) -> u32 {
        self.exp_table[a.0 as usize]
    }

    /// Element of a residue in `0..p`, `log_table[v]`
    #[inline]
    pub fn encode(&self, residue: u32) -> ZZpElem {
        ZZpElem(self.log_table[residue as usize])
    }

    pub fn exp_table(&self) -> &[u32] {
        &self.exp_table
    }

    pub fn log_table(&self) -> &[u32] {
        &self.log_table
    }

    /// Length of each table, which is p
    pub fn len(&self) -> usize {
        self.exp_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exp_table.is_empty()
    }

    /// Check that the tables are mutually inverse permutations of `0..p` with the zero
    /// sentinel at index 0 and `g^(p-1) = 1`.
    pub fn verify(&self) -> bool {
        let p = self.len();
        if p < 2 || self.log_table.len() != p {
            return false;
        }
        let exp_table = &self.exp_table;
        let log_table = &self.log_table;
        let in_range = |x: u32| (x as usize) < p;

        exp_table[0] == 0
            && log_table[0] == 0
            && exp_table[p - 1] == 1
            && get_range_iterator(0..p as u32).all(|v| {
                let e = log_table[v as usize];
                let r = exp_table[v as usize];
                in_range(e)
                    && in_range(r)
                    && exp_table[e as usize] == v
                    && log_table[r as usize] == v
            })
    }
}
