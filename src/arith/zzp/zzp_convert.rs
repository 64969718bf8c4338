// Conversions between GF(p) elements and machine or arbitrary-precision numbers.
// Reductions use floor semantics, so negative inputs land in 0..p.

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::ToPrimitive as _;

use crate::errors::{FieldError, Result};

use super::{PrimeField, ZZpElem};

impl PrimeField {
    /// `n mod p` as an element
    pub fn from_integer(&self, n: i64) -> ZZpElem {
        let residue = n.rem_euclid(i64::from(self.characteristic)) as u32;
        self.tables.encode(residue)
    }

    /// `n mod p` as an element
    pub fn from_bigint(&self, n: &BigInt) -> ZZpElem {
        let residue = n
            .mod_floor(&BigInt::from(self.characteristic))
            .to_u32()
            .expect("residue is reduced below the characteristic");
        self.tables.encode(residue)
    }

    /// `numerator / denominator mod p`.
    ///
    /// If p divides the denominator the result is silently zero, see
    /// [`PrimeField::checked_from_rational`].
    pub fn from_rational(&self, q: &BigRational) -> ZZpElem {
        let numerator = self.from_bigint(q.numer());
        let denominator = self.from_bigint(q.denom());
        self.divide(numerator, denominator)
    }

    /// [`PrimeField::from_rational`] that fails if p divides the denominator
    pub fn checked_from_rational(&self, q: &BigRational) -> Result<ZZpElem> {
        let numerator = self.from_bigint(q.numer());
        let denominator = self.from_bigint(q.denom());
        self.checked_divide(numerator, denominator)
    }

    /// The residue of `a` in `0..p`
    #[inline]
    pub fn to_residue(&self, a: ZZpElem) -> u32 {
        self.tables.decode(a)
    }

    pub fn to_bigint(&self, a: ZZpElem) -> BigInt {
        BigInt::from(self.to_residue(a))
    }

    /// The residue of `a` in the symmetric range `(-p/2, p/2]`
    pub fn lift_balanced(&self, a: ZZpElem) -> i64 {
        let residue = i64::from(self.to_residue(a));
        let p = i64::from(self.characteristic);
        if residue > p / 2 {
            residue - p
        } else {
            residue
        }
    }

    /// `a^n` for an arbitrary-precision `n`, reduced modulo the group order first
    pub fn power_bigint(&self, a: ZZpElem, n: &BigInt) -> ZZpElem {
        let n = n
            .mod_floor(&BigInt::from(self.group_order))
            .to_i64()
            .expect("exponent is reduced below the group order");
        self.power(a, n)
    }

    /// Checked [`PrimeField::from_raw_exponent`] counterpart for a residue
    pub fn from_residue(&self, residue: u32) -> Result<ZZpElem> {
        if residue >= self.characteristic {
            return Err(FieldError::OutOfRange {
                value: residue,
                characteristic: self.characteristic,
            });
        }
        Ok(self.tables.encode(residue))
    }
}
