//! Utility functions

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{Args, Error};
use colored::Colorize as _;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

use rzzp::{
    arith::zzp::PrimeField,
    constants::{params::PARAM_SEED_SIZE, types::Seed},
};

macro_rules! clap_err_result {
    ($e:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, e)),
        }
    };

    ($e:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw(clap::error::ErrorKind::InvalidValue, e)),
        }
    };
}
pub(super) use clap_err_result;

macro_rules! clap_err_result_msg {
    ($e:expr, $m:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, format!("{}: {}", $m, e))),
        }
    };

    ($e:expr, $m:expr) => {
        clap_err_result_msg!($e, $m, clap::error::ErrorKind::InvalidValue)
    };
}
pub(super) use clap_err_result_msg;

pub(super) fn print_title(title: &str) {
    eprintln!("{}", title.green().bold());
}

/// Install the `tracing` subscriber. `RUST_LOG` wins over `--verbose`.
pub(super) fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The field every subcommand works in
#[derive(Args)]
pub struct FieldArgs {
    /// The characteristic, a prime below 2^31
    #[arg(short, long)]
    prime: u32,

    /// Primitive root to build the tables on (default: the smallest one)
    #[arg(short, long)]
    generator: Option<u32>,
}

impl FieldArgs {
    pub(super) fn build(&self) -> Result<PrimeField, Error> {
        let field = match self.generator {
            Some(generator) => PrimeField::with_generator(self.prime, generator),
            None => PrimeField::new(self.prime),
        };
        clap_err_result_msg!(field, "Could not build the field")
    }
}

/// Returns a seed. If no seed is provided, a random seed is generated and printed.
pub(super) fn get_seed(seed: Option<&String>) -> Result<Seed, Error> {
    let seed = match seed {
        None => {
            // Generate a random seed using StdRng
            let mut rng = StdRng::from_entropy();
            let mut seed: Seed = [0u8; PARAM_SEED_SIZE];
            rng.fill_bytes(&mut seed);
            eprintln!("{}: {}", "Seed".blue(), STANDARD.encode(seed));
            seed
        }
        Some(seed_string) => {
            let seed_vec = clap_err_result_msg!(
                STANDARD.decode(seed_string),
                "Could not decode seed from base64"
            )?;

            if seed_vec.len() != PARAM_SEED_SIZE {
                return Err(Error::raw(
                    clap::error::ErrorKind::InvalidValue,
                    format!("Seed must be {} bytes long", PARAM_SEED_SIZE),
                ));
            }

            let mut seed: Seed = [0u8; PARAM_SEED_SIZE];
            seed.copy_from_slice(&seed_vec);
            seed
        }
    };

    Ok(seed)
}
