//! # Arithmetic
//!
//! [`FieldArith`] is the interface a coefficient field exposes to generic code such as
//! polynomial evaluation. Elements are plain values; every operation goes through the field
//! descriptor that owns the tables the element representation refers to.
//!
//! See [`zzp`] for GF(p) in discrete-logarithm representation.

use std::fmt::Debug;

pub mod zzp;

/// Field operations over a field descriptor `Self` and its element type.
pub trait FieldArith {
    type Element: Copy + PartialEq + Debug;

    fn field_zero(&self) -> Self::Element;
    fn field_one(&self) -> Self::Element;
    fn field_add(&self, a: Self::Element, b: Self::Element) -> Self::Element;
    fn field_sub(&self, a: Self::Element, b: Self::Element) -> Self::Element;
    fn field_neg(&self, a: Self::Element) -> Self::Element;
    fn field_mul(&self, a: Self::Element, b: Self::Element) -> Self::Element;
    fn field_mul_inverse(&self, a: Self::Element) -> Self::Element;

    /// `a / b`. What happens for `b = 0` is up to the implementation.
    fn field_div(&self, a: Self::Element, b: Self::Element) -> Self::Element {
        self.field_mul(a, self.field_mul_inverse(b))
    }

    /// Square and multiply
    fn field_pow(&self, a: Self::Element, exp: u64) -> Self::Element {
        let mut acc = self.field_one();
        let mut base = a;
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.field_mul(acc, base);
            }
            base = self.field_mul(base, base);
            exp >>= 1;
        }
        acc
    }

    /// Evaluate a polynomial at the point `x` using Horner's method. `poly[i]` is the
    /// coefficient of `x^i`.
    fn field_eval_polynomial(&self, x: Self::Element, poly: &[Self::Element]) -> Self::Element {
        assert!(!poly.is_empty() && poly.len() < u32::MAX as usize);
        let degree = poly.len() - 1;
        let mut acc = poly[degree];
        for i in (0..degree).rev() {
            acc = self.field_mul(acc, x);
            acc = self.field_add(acc, poly[i]);
        }
        acc
    }

    fn field_add_mut(&self, a: &mut Self::Element, b: Self::Element) {
        *a = self.field_add(*a, b);
    }

    fn field_sub_mut(&self, a: &mut Self::Element, b: Self::Element) {
        *a = self.field_sub(*a, b);
    }

    fn field_mul_mut(&self, a: &mut Self::Element, b: Self::Element) {
        *a = self.field_mul(*a, b);
    }
}

/// A thorough test for the field axioms on three elements
#[cfg(test)]
pub(crate) fn test_field_definitions<F>(field: &F, a: F::Element, b: F::Element, c: F::Element)
where
    F: FieldArith,
{
    let zero = field.field_zero();
    let one = field.field_one();

    // Commutativity of addition and multiplication:
    assert_eq!(field.field_add(a, b), field.field_add(b, a));
    assert_eq!(field.field_mul(a, b), field.field_mul(b, a));

    // Associativity of addition and multiplication:
    assert_eq!(
        field.field_add(a, field.field_add(b, c)),
        field.field_add(field.field_add(a, b), c)
    );
    assert_eq!(
        field.field_mul(a, field.field_mul(b, c)),
        field.field_mul(field.field_mul(a, b), c)
    );

    // Identity of addition and multiplication:
    assert_eq!(field.field_add(a, zero), a);
    assert_eq!(field.field_mul(a, one), a);

    // Inverse of addition and multiplication:
    assert_eq!(field.field_sub(a, a), zero);
    assert_eq!(field.field_add(a, field.field_neg(a)), zero);
    if b != zero {
        assert_eq!(field.field_div(field.field_mul(a, b), b), a);
        assert_eq!(field.field_mul(b, field.field_mul_inverse(b)), one);
    }

    // Distributivity of multiplication over addition:
    assert_eq!(
        field.field_mul(a, field.field_add(b, c)),
        field.field_add(field.field_mul(a, b), field.field_mul(a, c))
    );

    // Negation
    assert_eq!(field.field_add(b, field.field_neg(a)), field.field_sub(b, a));
}
