use std::str::FromStr as _;

use clap::{Error, Parser, ValueEnum};
use num_bigint::BigInt;
use num_rational::BigRational;

use rzzp::arith::zzp::{PrimeField, ZZpElem};

use crate::utilities::{clap_err_result, clap_err_result_msg, FieldArgs};

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Inv,
    Pow,
}

impl Operation {
    fn arity(self) -> usize {
        match self {
            Operation::Neg | Operation::Inv => 1,
            _ => 2,
        }
    }
}

#[derive(Parser)]
#[command(version, about("Apply one field operation"), long_about = None)]
pub struct Eval {
    #[command(flatten)]
    field: FieldArgs,

    #[arg(value_enum)]
    op: Operation,

    /// Integers or rationals such as -3/4. The exponent of `pow` is an integer.
    #[arg(required = true, num_args = 1..=2, allow_hyphen_values = true)]
    operands: Vec<String>,

    /// Fail on division by zero instead of returning zero
    #[arg(long)]
    checked: bool,

    /// Print the balanced residue in (-p/2, p/2]
    #[arg(long)]
    balanced: bool,
}

impl Eval {
    fn element(&self, field: &PrimeField, operand: &str) -> Result<ZZpElem, Error> {
        let q = clap_err_result!(BigRational::from_str(operand))?;
        if self.checked {
            clap_err_result_msg!(field.checked_from_rational(&q), operand)
        } else {
            Ok(field.from_rational(&q))
        }
    }

    pub fn evaluate(&self) -> Result<(), Error> {
        if self.operands.len() != self.op.arity() {
            return Err(Error::raw(
                clap::error::ErrorKind::WrongNumberOfValues,
                format!("Expected {} operand(s)", self.op.arity()),
            ));
        }

        let field = self.field.build()?;
        let a = self.element(&field, &self.operands[0])?;

        let result = match self.op {
            Operation::Neg => field.negate(a),
            Operation::Inv if self.checked => clap_err_result!(field.checked_invert(a))?,
            Operation::Inv => field.invert(a),
            Operation::Pow => {
                let n = clap_err_result!(BigInt::from_str(&self.operands[1]))?;
                field.power_bigint(a, &n)
            }
            op => {
                let b = self.element(&field, &self.operands[1])?;
                match op {
                    Operation::Add => field.add(a, b),
                    Operation::Sub => field.subtract(a, b),
                    Operation::Mul => field.multiply(a, b),
                    Operation::Div if self.checked => {
                        clap_err_result!(field.checked_divide(a, b))?
                    }
                    _ => field.divide(a, b),
                }
            }
        };

        if self.balanced {
            println!("{}", field.elem_to_string(result));
        } else {
            println!("{}", field.to_residue(result));
        }

        Ok(())
    }
}
