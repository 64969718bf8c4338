use clap::{Error, Parser};
use colored::Colorize as _;

use crate::utilities::{print_title, FieldArgs};

#[derive(Parser)]
#[command(version, about("Print the exp and log tables"), long_about = None)]
pub struct Table {
    #[command(flatten)]
    field: FieldArgs,

    /// Print at most this many rows of each table
    #[arg(short, long, default_value_t = 64)]
    limit: usize,
}

impl Table {
    pub fn print_tables(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        let tables = field.tables();

        print_title(&format!("exp table of {} (e -> g^e)", field));
        for (e, value) in tables.exp_table().iter().enumerate().take(self.limit) {
            println!("{}\t{}", e.to_string().blue(), value);
        }

        print_title(&format!("log table of {} (v -> log v)", field));
        for (v, exponent) in tables.log_table().iter().enumerate().take(self.limit) {
            println!("{}\t{}", v.to_string().blue(), exponent);
        }

        if tables.len() > self.limit {
            eprintln!(
                "{}",
                format!("{} of {} rows shown", self.limit, tables.len()).yellow()
            );
        }

        Ok(())
    }
}
