// GF(p) operations in discrete-logarithm representation

use std::cmp::Ordering;

use crate::{
    arith::FieldArith,
    errors::{FieldError, Result},
};

use super::{PrimeField, ZZpElem};

impl PrimeField {
    #[inline]
    pub fn zero(&self) -> ZZpElem {
        ZZpElem::ZERO
    }

    /// The field one, stored as `g^(p-1)`
    #[inline]
    pub fn one(&self) -> ZZpElem {
        ZZpElem(self.group_order)
    }

    #[inline]
    pub fn is_zero(&self, a: ZZpElem) -> bool {
        a.0 == 0
    }

    /// Every nonzero element is a unit
    #[inline]
    pub fn is_unit(&self, a: ZZpElem) -> bool {
        a.0 != 0
    }

    #[inline]
    pub fn is_equal(&self, a: ZZpElem, b: ZZpElem) -> bool {
        a == b
    }

    /// Orders elements by residue, not by exponent, so the order does not depend on the
    /// primitive root.
    pub fn compare(&self, a: ZZpElem, b: ZZpElem) -> Ordering {
        self.tables.decode(a).cmp(&self.tables.decode(b))
    }

    pub fn swap(&self, a: &mut ZZpElem, b: &mut ZZpElem) {
        std::mem::swap(a, b);
    }

    /// `-a`, computed as `a * (-1)` in exponent space
    #[inline]
    pub fn negate(&self, a: ZZpElem) -> ZZpElem {
        if a.0 == 0 {
            return ZZpElem::ZERO;
        }
        self.multiply(a, self.minus_one)
    }

    /// `a^-1 = g^(p-1-e)`. The zero exponent is written as `p-1`, the one.
    ///
    /// Assumes `a != 0`. For `a = 0` this silently returns the one, see
    /// [`PrimeField::checked_invert`].
    #[inline]
    pub fn invert(&self, a: ZZpElem) -> ZZpElem {
        let e = self.group_order - a.0;
        if e == 0 {
            self.one()
        } else {
            ZZpElem(e)
        }
    }

    /// `a + b` by way of the residues
    #[inline]
    pub fn add(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        let n = self.tables.decode(a) + self.tables.decode(b);
        let n = if n >= self.characteristic {
            n - self.characteristic
        } else {
            n
        };
        self.tables.encode(n)
    }

    /// `a - b` by way of the residues
    #[inline]
    pub fn subtract(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        let x = self.tables.decode(a);
        let y = self.tables.decode(b);
        let n = if x >= y {
            x - y
        } else {
            x + self.characteristic - y
        };
        self.tables.encode(n)
    }

    /// `result -= a * b` without building the product element.
    ///
    /// `a` and `b` must both be nonzero; this is only checked in debug builds.
    #[inline]
    pub fn subtract_multiple(&self, result: &mut ZZpElem, a: ZZpElem, b: ZZpElem) {
        debug_assert!(
            a.0 != 0 && b.0 != 0,
            "subtract_multiple expects nonzero factors"
        );
        let ab = self.add_exponents(a.0, b.0);
        *result = self.subtract(*result, ZZpElem(ab));
    }

    /// `a * b = g^(e + f)`
    #[inline]
    pub fn multiply(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        if a.0 == 0 || b.0 == 0 {
            return ZZpElem::ZERO;
        }
        ZZpElem(self.add_exponents(a.0, b.0))
    }

    /// `a / b = g^(e - f)`.
    ///
    /// Returns zero if either operand is zero, so division by zero goes unnoticed. See
    /// [`PrimeField::checked_divide`].
    #[inline]
    pub fn divide(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        if a.0 == 0 || b.0 == 0 {
            return ZZpElem::ZERO;
        }
        if a.0 > b.0 {
            ZZpElem(a.0 - b.0)
        } else {
            ZZpElem(a.0 + self.group_order - b.0)
        }
    }

    /// `a^n = g^(e * n mod (p-1))`. Negative `n` is a power of the inverse. Zero stays zero
    /// for every `n`, including `n = 0`.
    pub fn power(&self, a: ZZpElem, n: i64) -> ZZpElem {
        if a.0 == 0 {
            return ZZpElem::ZERO;
        }
        let group_order = u64::from(self.group_order);
        let n = n.rem_euclid(group_order as i64) as u64;
        let e = (u64::from(a.0) * n % group_order) as u32;
        if e == 0 {
            self.one()
        } else {
            ZZpElem(e)
        }
    }

    /// [`PrimeField::invert`] that fails on zero
    pub fn checked_invert(&self, a: ZZpElem) -> Result<ZZpElem> {
        if a.0 == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.invert(a))
    }

    /// [`PrimeField::divide`] that fails on a zero divisor
    pub fn checked_divide(&self, a: ZZpElem, b: ZZpElem) -> Result<ZZpElem> {
        if b.0 == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.divide(a, b))
    }

    /// Sum of two nonzero exponents, wrapped into `1..=p-1`
    #[inline]
    fn add_exponents(&self, e: u32, f: u32) -> u32 {
        let c = e + f;
        if c > self.group_order {
            c - self.group_order
        } else {
            c
        }
    }
}

impl FieldArith for PrimeField {
    type Element = ZZpElem;

    fn field_zero(&self) -> ZZpElem {
        self.zero()
    }

    fn field_one(&self) -> ZZpElem {
        self.one()
    }

    fn field_add(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        self.add(a, b)
    }

    fn field_sub(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        self.subtract(a, b)
    }

    fn field_neg(&self, a: ZZpElem) -> ZZpElem {
        self.negate(a)
    }

    fn field_mul(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        self.multiply(a, b)
    }

    fn field_mul_inverse(&self, a: ZZpElem) -> ZZpElem {
        self.invert(a)
    }

    fn field_div(&self, a: ZZpElem, b: ZZpElem) -> ZZpElem {
        self.divide(a, b)
    }

    fn field_pow(&self, a: ZZpElem, exp: u64) -> ZZpElem {
        let exp = exp % u64::from(self.group_order);
        self.power(a, exp as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arith::{test_field_definitions, zzp::tests::TEST_PRIMES},
        subroutines::prg::PRG,
    };

    fn gf5() -> PrimeField {
        let field = PrimeField::new(5).unwrap();
        assert_eq!(field.generator(), 2);
        field
    }

    #[test]
    fn test_gf5_scenarios() {
        let field = gf5();
        let two = field.from_integer(2);
        let three = field.from_integer(3);

        assert_eq!(field.to_residue(field.add(two, three)), 0);
        assert_eq!(field.to_residue(field.invert(two)), 3);
        assert_eq!(field.to_residue(field.power(three, 4)), 1);
        assert_eq!(field.to_residue(field.from_integer(-1)), 4);
        assert_eq!(
            field.to_residue(field.divide(field.from_integer(0), three)),
            0
        );
    }

    #[test]
    fn test_identities() {
        for p in TEST_PRIMES {
            let field = PrimeField::new(p).unwrap();
            assert!(field.is_zero(field.zero()));
            assert!(!field.is_unit(field.zero()));
            assert!(field.is_unit(field.one()));
            assert_eq!(field.to_residue(field.zero()), 0);
            assert_eq!(field.to_residue(field.one()), 1);
            assert_eq!(field.to_residue(field.minus_one()), p - 1);
            // g^(p-1) = 1
            assert_eq!(
                field.power(field.generator_element(), i64::from(p - 1)),
                field.one()
            );
        }
    }

    #[test]
    fn test_field_axioms_exhaustive() {
        for p in [2, 3, 5, 7, 13] {
            let field = PrimeField::new(p).unwrap();
            let elements: Vec<ZZpElem> = field.elements().collect();
            for &a in &elements {
                for &b in &elements {
                    for &c in &elements {
                        test_field_definitions(&field, a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_field_axioms_sampled() {
        let mut prg = PRG::init(&[7u8; 16]);
        for p in [97, 101, 65521, 1_000_003] {
            let field = PrimeField::new(p).unwrap();
            for _ in 0..200 {
                let [a, b, c] = *prg.sample_elements_vec(&field, 3).as_slice() else {
                    panic!("Failed to sample 3 field elements");
                };
                test_field_definitions(&field, a, b, c);
            }
        }
    }

    #[test]
    fn test_inverse_laws() {
        for p in TEST_PRIMES {
            let field = PrimeField::new(p).unwrap();
            for a in field.elements() {
                assert_eq!(field.to_residue(field.add(a, field.negate(a))), 0);
                if field.is_unit(a) {
                    assert_eq!(field.to_residue(field.multiply(a, field.invert(a))), 1);
                }
            }
        }
    }

    #[test]
    fn test_negate_is_residue_negation() {
        for p in TEST_PRIMES {
            let field = PrimeField::new(p).unwrap();
            for a in field.elements().filter(|a| a.0 != 0) {
                assert_eq!(
                    field.to_residue(field.negate(a)),
                    p - field.to_residue(a),
                    "Failed for p: {}, e: {}",
                    p,
                    a.0
                );
            }
        }
    }

    /// Complementing the exponent against p or against p-1 does not negate. In GF(5) with
    /// g = 2 the element 2 has exponent 1 and the element 4 has exponent 2.
    #[test]
    fn test_exponent_complements_are_not_negation() {
        let field = gf5();
        let two = field.from_integer(2);
        let four = field.from_integer(4);
        assert_eq!(two.raw_exponent(), 1);
        assert_eq!(four.raw_exponent(), 2);

        // p - e: -2 would be g^4 = 1
        assert_ne!(field.to_residue(ZZpElem(5 - two.0)), 3);
        // (p-1) - e: -4 would be g^2 = 4
        assert_ne!(field.to_residue(ZZpElem(4 - four.0)), 1);

        assert_eq!(field.to_residue(field.negate(two)), 3);
        assert_eq!(field.to_residue(field.negate(four)), 1);
    }

    #[test]
    fn test_division_by_zero_is_silent() {
        let field = PrimeField::new(13).unwrap();
        let a = field.from_integer(6);
        assert_eq!(field.divide(a, field.zero()), field.zero());
        assert_eq!(field.invert(field.zero()), field.one());

        assert_eq!(
            field.checked_divide(a, field.zero()),
            Err(FieldError::DivisionByZero)
        );
        assert_eq!(field.checked_invert(field.zero()), Err(FieldError::DivisionByZero));
        assert_eq!(field.checked_divide(field.zero(), a), Ok(field.zero()));
        assert_eq!(
            field.to_residue(field.checked_invert(a).unwrap()),
            11 // 6 * 11 = 66 = 1 mod 13
        );
    }

    #[test]
    fn test_divide_matches_multiply_by_inverse() {
        let field = PrimeField::new(101).unwrap();
        for a in field.elements() {
            for b in field.elements().filter(|b| b.0 != 0) {
                assert_eq!(field.divide(a, b), field.multiply(a, field.invert(b)));
            }
        }
    }

    #[test]
    fn test_subtract_multiple() {
        let field = PrimeField::new(13).unwrap();
        for acc in field.elements() {
            for a in field.elements().skip(1) {
                for b in field.elements().skip(1) {
                    let mut result = acc;
                    field.subtract_multiple(&mut result, a, b);
                    assert_eq!(result, field.subtract(acc, field.multiply(a, b)));
                }
            }
        }
    }

    #[test]
    fn test_power() {
        let field = PrimeField::new(97).unwrap();
        let a = field.from_integer(10);

        assert_eq!(field.power(a, 0), field.one());
        assert_eq!(field.power(a, 1), a);
        assert_eq!(field.power(a, -1), field.invert(a));
        assert_eq!(field.power(a, -3), field.invert(field.power(a, 3)));
        assert_eq!(field.power(a, 96), field.one());
        assert_eq!(field.power(a, i64::MIN), field.power(a, i64::MIN % 96));
        assert_eq!(field.power(field.zero(), 0), field.zero());
        assert_eq!(field.power(field.zero(), -5), field.zero());

        // 10^2 = 100 = 3 mod 97
        assert_eq!(field.to_residue(field.power(a, 2)), 3);
        assert_eq!(field.field_pow(a, 2), field.power(a, 2));
        assert_eq!(field.field_pow(a, u64::MAX), field.power(a, (u64::MAX % 96) as i64));
    }

    #[test]
    fn test_compare_by_residue() {
        for g in [3, 5] {
            let field = PrimeField::with_generator(7, g).unwrap();
            let mut elements: Vec<ZZpElem> = (0..7).rev().map(|v| field.from_integer(v)).collect();
            elements.sort_by(|a, b| field.compare(*a, *b));
            let residues: Vec<u32> = elements.iter().map(|a| field.to_residue(*a)).collect();
            assert_eq!(residues, vec![0, 1, 2, 3, 4, 5, 6]);

            for a in field.elements() {
                for b in field.elements() {
                    let expected = field.to_residue(a).cmp(&field.to_residue(b));
                    assert_eq!(field.compare(a, b), expected);
                }
            }
        }
    }

    #[test]
    fn test_swap() {
        let field = PrimeField::new(11).unwrap();
        let mut a = field.from_integer(3);
        let mut b = field.from_integer(8);
        field.swap(&mut a, &mut b);
        assert_eq!(field.to_residue(a), 8);
        assert_eq!(field.to_residue(b), 3);
        assert!(field.is_equal(a, field.from_integer(8)));
    }

    #[test]
    fn test_eval_polynomial() {
        // f(x) = 1 + 2x + 3x^2, f(2) = 17 = 4 mod 13
        let field = PrimeField::new(13).unwrap();
        let poly: Vec<ZZpElem> = [1, 2, 3].iter().map(|&c| field.from_integer(c)).collect();
        let y = field.field_eval_polynomial(field.from_integer(2), &poly);
        assert_eq!(field.to_residue(y), 4);
    }
}
