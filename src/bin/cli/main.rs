//! # GF(p) Command Line Interface
//!
//! ```
//! Usage: zzp [OPTIONS] [COMMAND]
//!
//! Commands:
//!   info    Print a summary of the field descriptor
//!   table   Print the exp and log tables
//!   eval    Apply one field operation
//!   sample  Sample random elements from a seed
//!   check   Verify the tables and the field laws
//!   help    Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -v, --verbose  Log construction details (overridden by RUST_LOG)
//!   -h, --help     Print help
//!   -V, --version  Print version
//! ```
//!
//! ## Info
//!
//! ```
//! $ zzp info -p 101
//! Field: GF(101)
//! 101	(p) Characteristic
//! 2	(g) Primitive root
//! 100	(p-1) Group order
//! 50	log(-1)
//! ```
//!
//! ## Eval
//!
//! Operands are integers or rationals and are reduced into the field.
//!
//! ```
//! $ zzp eval -p 7 div 3 5
//! 2
//! $ zzp eval -p 7 pow 3 -1
//! 5
//! ```
//!
//! ## Sample
//!
//! ```
//! $ zzp sample -p 65521 -n 4 --seed AAAAAAAAAAAAAAAAAAAAAA==
//! ```

use check::Check;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize as _;
use eval::Eval;
use info::Info;
use sample::Sample;
use table::Table;

mod check;
mod eval;
mod info;
mod sample;
mod table;
mod utilities;

#[derive(Parser)]
#[command(version, about("Prime field GF(p) in discrete-logarithm representation"))]
pub struct Cli {
    /// Log construction details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Info(Info),
    Table(Table),
    Eval(Eval),
    Sample(Sample),
    Check(Check),
}

fn main() {
    let cli = Cli::parse();
    utilities::init_tracing(cli.verbose);

    let res = match &cli.command {
        Some(Commands::Info(info)) => info.print_info(),
        Some(Commands::Table(table)) => table.print_tables(),
        Some(Commands::Eval(eval)) => eval.evaluate(),
        Some(Commands::Sample(sample)) => sample.sample_elements(),
        Some(Commands::Check(check)) => check.check_field(),
        // Print help
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(err) = res {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }

    std::process::exit(0);
}
