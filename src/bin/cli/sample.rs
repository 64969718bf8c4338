use clap::{ArgAction, Error, Parser};

use rzzp::subroutines::prg::PRG;

use crate::utilities::{get_seed, FieldArgs};

#[derive(Parser)]
#[command(version, about("Sample random elements from a seed"), long_about = None)]
pub struct Sample {
    #[command(flatten)]
    field: FieldArgs,

    /// Seed in base64. Must be 16 bytes long. A random one is generated and printed if absent.
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of elements
    #[arg(short = 'n', long, default_value_t = 8)]
    count: usize,

    /// Only sample nonzero elements
    #[arg(long, action = ArgAction::SetTrue)]
    non_zero: bool,
}

impl Sample {
    pub fn sample_elements(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        let seed = get_seed(self.seed.as_ref())?;
        let mut prg = PRG::init(&seed);

        let elements = if self.non_zero {
            let mut out = vec![field.zero(); self.count];
            prg.sample_non_zero(&field, &mut out);
            out
        } else {
            prg.sample_elements_vec(&field, self.count)
        };

        let residues: Vec<String> = elements
            .iter()
            .map(|&a| field.to_residue(a).to_string())
            .collect();
        println!("{}", residues.join(" "));

        Ok(())
    }
}
