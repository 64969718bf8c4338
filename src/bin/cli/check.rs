use clap::{Error, Parser};
use colored::Colorize as _;

use rzzp::arith::zzp::PrimeField;

use crate::utilities::{print_title, FieldArgs};

#[derive(Parser)]
#[command(version, about("Verify the tables and the field laws"), long_about = None)]
pub struct Check {
    #[command(flatten)]
    field: FieldArgs,
}

fn report(name: &str, ok: bool) -> bool {
    let status = if ok { "ok".green() } else { "FAILED".red().bold() };
    println!("{}\t{}", status, name);
    ok
}

/// Laws that hold element by element, checked over the whole field
fn check_elementwise(field: &PrimeField) -> [(&'static str, bool); 5] {
    let one = field.one();
    let zero = field.zero();
    let g = field.generator_element();

    [
        (
            "a * a^-1 = 1",
            field
                .elements()
                .skip(1)
                .all(|a| field.multiply(a, field.invert(a)) == one),
        ),
        (
            "a + (-a) = 0",
            field.elements().all(|a| field.add(a, field.negate(a)) == zero),
        ),
        (
            "a - a = 0 and a / a = 1",
            field
                .elements()
                .skip(1)
                .all(|a| field.subtract(a, a) == zero && field.divide(a, a) == one),
        ),
        (
            "a^(p-1) = 1",
            field
                .elements()
                .skip(1)
                .all(|a| field.power(a, i64::from(field.group_order())) == one),
        ),
        (
            "g^e walks all nonzero residues",
            (1..=i64::from(field.group_order()))
                .map(|e| field.to_residue(field.power(g, e)))
                .zip(field.tables().exp_table().iter().skip(1))
                .all(|(v, expected)| v == *expected),
        ),
    ]
}

impl Check {
    pub fn check_field(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        print_title(&format!("Checking {}", field));

        let mut ok = report("exp and log tables are inverse bijections", field.tables().verify());
        for (name, passed) in check_elementwise(&field) {
            ok &= report(name, passed);
        }

        if !ok {
            return Err(Error::raw(
                clap::error::ErrorKind::InvalidValue,
                format!("{} failed its checks", field),
            ));
        }

        Ok(())
    }
}
