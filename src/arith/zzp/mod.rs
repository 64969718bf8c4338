//! # Prime field GF(p) in discrete-logarithm representation
//!
//! Elements of GF(p) are stored as exponents of a fixed primitive root `g` of the
//! multiplicative group rather than as residues:
//!
//! - `0` is the field zero (it has no logarithm)
//! - `1 <= e <= p-1` is the residue `g^e mod p`, so `p-1` is the field one
//!
//! Multiplication, division, inversion and powers are exponent arithmetic modulo the
//! group order `p-1`. Addition and subtraction decode both operands to residues through
//! the exp table, add modulo `p`, and encode the result through the log table.
//!
//! A [`PrimeField`] is built once per prime and owns both tables. Elements
//! ([`ZZpElem`]) are plain `Copy` values and must only be used with the field that
//! produced them. Once built the descriptor is immutable, so it can be shared by reference
//! between any number of threads.
//!
//! - [`primitive_root`]: Finds the primitive root the representation is based on.
//! - [`zzp_tables`]: Builds the exp and log tables.
//! - [`zzp_arith`]: The field operations.
//! - [`zzp_convert`]: Conversions from and to machine and arbitrary-precision numbers.
//! - [`zzp_text`]: Text output of the field and its elements.
//! - [`zzp_bound`]: Elements bound to their field, with operator overloading.
//! - [`zzp_vector`]: Operations on slices of elements.

use tracing::{debug, warn};

use crate::{
    constants::params::MAX_CHARACTERISTIC,
    errors::{FieldError, Result},
};

use self::{primitive_root::find_primitive_root, zzp_tables::ZZpTables};

pub mod primitive_root;
pub mod zzp_arith;
pub mod zzp_bound;
pub mod zzp_convert;
pub mod zzp_tables;
pub mod zzp_text;
pub mod zzp_vector;

/// An element of GF(p): the exponent `e` of `g^e`, or `0` for the field zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct ZZpElem(pub(crate) u32);

impl ZZpElem {
    /// The field zero. It is the same for every field.
    pub const ZERO: ZZpElem = ZZpElem(0);

    /// The exponent the element is stored as. Not a field operation; use
    /// [`PrimeField::to_residue`] for the value.
    pub fn raw_exponent(self) -> u32 {
        self.0
    }
}

/// Field descriptor for GF(p)
#[derive(Clone, Debug)]
pub struct PrimeField {
    characteristic: u32,
    group_order: u32,
    generator: u32,
    minus_one: ZZpElem,
    tables: ZZpTables,
}

impl PrimeField {
    /// Build GF(p) on the smallest primitive root of `p`.
    ///
    /// Costs O(p) time and memory. Fails with [`FieldError::InvalidModulus`] if `p` is not
    /// prime, which is noticed while building the tables.
    pub fn new(characteristic: u32) -> Result<Self> {
        check_characteristic(characteristic)?;
        let generator = find_primitive_root(characteristic)?;

        // The root search only proves `generator` has full order when p is prime
        Self::with_generator(characteristic, generator).map_err(|err| match err {
            FieldError::NotAGenerator { .. } => {
                warn!(characteristic, "modulus rejected, it is not a prime");
                FieldError::InvalidModulus(characteristic)
            }
            err => err,
        })
    }

    /// Build GF(p) on a caller-chosen primitive root `generator`.
    pub fn with_generator(characteristic: u32, generator: u32) -> Result<Self> {
        check_characteristic(characteristic)?;
        let tables = ZZpTables::build(characteristic, generator)?;
        let minus_one = tables.encode(characteristic - 1);

        debug!(
            characteristic,
            generator,
            minus_one = minus_one.0,
            table_len = tables.len(),
            "prime field tables built"
        );

        Ok(PrimeField {
            characteristic,
            group_order: characteristic - 1,
            generator: generator % characteristic,
            minus_one,
            tables,
        })
    }

    /// The prime p
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// p - 1, the order of the multiplicative group
    pub fn group_order(&self) -> u32 {
        self.group_order
    }

    /// The primitive root, as a residue
    pub fn generator(&self) -> u32 {
        self.generator
    }

    /// The primitive root as an element, i.e. exponent 1
    pub fn generator_element(&self) -> ZZpElem {
        ZZpElem(1)
    }

    /// The element -1
    pub fn minus_one(&self) -> ZZpElem {
        self.minus_one
    }

    pub fn tables(&self) -> &ZZpTables {
        &self.tables
    }

    /// Inverse of [`ZZpElem::raw_exponent`]
    pub fn from_raw_exponent(&self, exponent: u32) -> Result<ZZpElem> {
        if exponent >= self.characteristic {
            return Err(FieldError::OutOfRange {
                value: exponent,
                characteristic: self.characteristic,
            });
        }
        Ok(ZZpElem(exponent))
    }

    /// All p elements in residue order 0, 1, ..., p-1
    pub fn elements(&self) -> impl Iterator<Item = ZZpElem> + '_ {
        (0..self.characteristic).map(move |v| self.tables.encode(v))
    }
}

fn check_characteristic(characteristic: u32) -> Result<()> {
    if characteristic < 2 {
        warn!(characteristic, "modulus rejected, it is not a prime");
        return Err(FieldError::InvalidModulus(characteristic));
    }
    if characteristic > MAX_CHARACTERISTIC {
        return Err(FieldError::ModulusTooLarge {
            characteristic,
            max: MAX_CHARACTERISTIC,
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Primes the field tests run over
    pub(crate) const TEST_PRIMES: [u32; 9] = [2, 3, 5, 7, 11, 13, 97, 101, 65521];

    #[test]
    fn test_new_field() {
        let field = PrimeField::new(5).unwrap();
        assert_eq!(field.characteristic(), 5);
        assert_eq!(field.group_order(), 4);
        assert_eq!(field.generator(), 2);
        // 2^2 = 4 = -1 mod 5
        assert_eq!(field.minus_one(), ZZpElem(2));
        assert_eq!(field.tables().len(), 5);
    }

    #[test]
    fn test_characteristic_two() {
        let field = PrimeField::new(2).unwrap();
        assert_eq!(field.generator(), 1);
        assert_eq!(field.group_order(), 1);
        // -1 = 1 in GF(2)
        assert_eq!(field.minus_one(), ZZpElem(1));
    }

    #[test]
    fn test_invalid_modulus() {
        for p in [0, 1, 4, 6, 9, 15, 91, 561, 1001] {
            assert_eq!(
                PrimeField::new(p).unwrap_err(),
                FieldError::InvalidModulus(p),
                "Failed for p: {}",
                p
            );
        }
    }

    #[test]
    fn test_modulus_too_large() {
        let p = MAX_CHARACTERISTIC + 2;
        assert_eq!(
            PrimeField::new(p).unwrap_err(),
            FieldError::ModulusTooLarge {
                characteristic: p,
                max: MAX_CHARACTERISTIC
            }
        );
    }

    #[test]
    fn test_with_generator() {
        // 3 and 5 are the primitive roots of 7
        let field = PrimeField::with_generator(7, 5).unwrap();
        assert_eq!(field.generator(), 5);
        assert_eq!(field.tables().exp_table(), &[0, 5, 4, 6, 2, 3, 1]);

        // 2 has order 3 in GF(7)
        assert_eq!(
            PrimeField::with_generator(7, 2).unwrap_err(),
            FieldError::NotAGenerator {
                generator: 2,
                characteristic: 7
            }
        );
        assert!(PrimeField::with_generator(7, 0).is_err());
        assert!(PrimeField::with_generator(7, 7).is_err());
    }

    #[test]
    fn test_from_raw_exponent() {
        let field = PrimeField::new(13).unwrap();
        for e in 0..13 {
            assert_eq!(field.from_raw_exponent(e).unwrap().raw_exponent(), e);
        }
        assert_eq!(
            field.from_raw_exponent(13).unwrap_err(),
            FieldError::OutOfRange {
                value: 13,
                characteristic: 13
            }
        );
    }

    #[test]
    fn test_elements_in_residue_order() {
        for p in TEST_PRIMES {
            let field = PrimeField::new(p).unwrap();
            let residues: Vec<u32> = field.elements().map(|a| field.to_residue(a)).collect();
            assert_eq!(residues, (0..p).collect::<Vec<u32>>(), "Failed for p: {}", p);
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let field = PrimeField::new(101).unwrap();
        let sums: Vec<u32> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let field = &field;
                    scope.spawn(move || {
                        field
                            .elements()
                            .fold(field.from_integer(t), |acc, a| field.add(acc, a))
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| field.to_residue(h.join().unwrap()))
                .collect()
        });
        // The sum of all residues is p(p-1)/2 = 0 mod p
        assert_eq!(sums, vec![0, 1, 2, 3]);
    }
}
