// Elements bound to their field, so the usual operators can be used

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::CheckedDiv;

use super::{PrimeField, ZZpElem};

/// A GF(p) element together with the field it belongs to.
///
/// Operands of a binary operation must come from the same field; this is only checked in
/// debug builds.
#[derive(Clone, Copy)]
pub struct Zp<'a> {
    field: &'a PrimeField,
    elem: ZZpElem,
}

impl PrimeField {
    pub fn bind(&self, a: ZZpElem) -> Zp<'_> {
        Zp {
            field: self,
            elem: a,
        }
    }

    /// `n mod p` bound to this field
    pub fn int(&self, n: i64) -> Zp<'_> {
        self.bind(self.from_integer(n))
    }
}

impl<'a> Zp<'a> {
    pub fn field(&self) -> &'a PrimeField {
        self.field
    }

    pub fn elem(&self) -> ZZpElem {
        self.elem
    }

    pub fn residue(&self) -> u32 {
        self.field.to_residue(self.elem)
    }

    pub fn is_zero(&self) -> bool {
        self.field.is_zero(self.elem)
    }

    /// Multiplicative inverse; the one for zero, like [`PrimeField::invert`]
    pub fn inverse(self) -> Self {
        self.with(self.field.invert(self.elem))
    }

    pub fn pow(self, n: i64) -> Self {
        self.with(self.field.power(self.elem, n))
    }

    fn with(self, elem: ZZpElem) -> Self {
        Zp {
            field: self.field,
            elem,
        }
    }

    fn same_field(&self, rhs: &Self) {
        debug_assert!(
            std::ptr::eq(self.field, rhs.field),
            "operands belong to different fields"
        );
    }
}

impl Add for Zp<'_> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.same_field(&rhs);
        self.with(self.field.add(self.elem, rhs.elem))
    }
}

impl Sub for Zp<'_> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.same_field(&rhs);
        self.with(self.field.subtract(self.elem, rhs.elem))
    }
}

impl Mul for Zp<'_> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.same_field(&rhs);
        self.with(self.field.multiply(self.elem, rhs.elem))
    }
}

/// Division by zero gives zero, like [`PrimeField::divide`]. Use [`CheckedDiv`] to catch it.
impl Div for Zp<'_> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.same_field(&rhs);
        self.with(self.field.divide(self.elem, rhs.elem))
    }
}

impl Neg for Zp<'_> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.with(self.field.negate(self.elem))
    }
}

impl AddAssign for Zp<'_> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Zp<'_> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Zp<'_> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Zp<'_> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl CheckedDiv for Zp<'_> {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.same_field(rhs);
        self.field
            .checked_divide(self.elem, rhs.elem)
            .ok()
            .map(|elem| self.with(elem))
    }
}

impl PartialEq for Zp<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other);
        self.elem == other.elem
    }
}

impl Eq for Zp<'_> {}

impl PartialOrd for Zp<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// By residue, see [`PrimeField::compare`]
impl Ord for Zp<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.same_field(other);
        self.field.compare(self.elem, other.elem)
    }
}

impl Display for Zp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.field.elem_text_out(f, self.elem, true, false, false)
    }
}

impl Debug for Zp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} (g^{})",
            self.residue(),
            self.field,
            self.elem.raw_exponent()
        )
    }
}
