use clap::{Error, Parser};
use colored::Colorize as _;

use crate::utilities::FieldArgs;

#[derive(Parser)]
#[command(version, about("Print a summary of the field descriptor"), long_about = None)]
pub struct Info {
    #[command(flatten)]
    field: FieldArgs,
}

impl Info {
    pub fn print_info(&self) -> Result<(), Error> {
        let field = self.field.build()?;

        println!("{} {}", "Field:".blue().bold(), field);
        println!(
            "{}\t(p) Characteristic",
            field.characteristic().to_string().bold()
        );
        println!(
            "{}\t(g) Primitive root",
            field.generator().to_string().bold()
        );
        println!(
            "{}\t(p-1) Group order",
            field.group_order().to_string().bold()
        );
        println!(
            "{}\tlog(-1)",
            field.minus_one().raw_exponent().to_string().bold()
        );

        let table_bytes = 2 * field.tables().len() * std::mem::size_of::<u32>();
        println!("{}\tTable size in bytes", table_bytes.to_string().bold());

        Ok(())
    }
}
