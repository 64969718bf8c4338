//! Text output of a [`PrimeField`] and its elements into any [`std::fmt::Write`] sink.
//!
//! Elements are printed as their balanced residue in `(-p/2, p/2]`, the way coefficients of
//! a polynomial over GF(p) are usually written.

use std::fmt::{self, Write};

use crate::constants::params::FIELD_LABEL_TAG;

use super::{PrimeField, ZZpElem};

impl PrimeField {
    /// Writes the field label, e.g. `GF(97)`
    pub fn text_out<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}({})", FIELD_LABEL_TAG, self.characteristic)
    }

    /// Writes `a` as a coefficient.
    ///
    /// - `print_one`: if false, a coefficient of absolute value 1 is written as its sign only
    /// - `print_plus`: write a `+` in front of a nonnegative value
    /// - `parens`: wrap the value in parentheses. The `+` stays outside and the digits are
    ///   always written inside.
    pub fn elem_text_out<W: Write>(
        &self,
        out: &mut W,
        a: ZZpElem,
        print_one: bool,
        print_plus: bool,
        parens: bool,
    ) -> fmt::Result {
        let n = self.lift_balanced(a);

        if parens {
            if print_plus {
                out.write_char('+')?;
            }
            return write!(out, "({})", n);
        }

        if n < 0 {
            out.write_char('-')?;
        } else if print_plus {
            out.write_char('+')?;
        }

        let magnitude = n.unsigned_abs();
        if print_one || magnitude != 1 {
            write!(out, "{}", magnitude)?;
        }
        Ok(())
    }

    /// `a` as a standalone value, e.g. `-3`
    pub fn elem_to_string(&self, a: ZZpElem) -> String {
        let mut s = String::new();
        // Writing into a String does not fail
        let _ = self.elem_text_out(&mut s, a, true, false, false);
        s
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text_out(f)
    }
}
