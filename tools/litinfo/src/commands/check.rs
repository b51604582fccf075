use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use litematic::LitematicReader;

#[derive(Args)]
pub struct CheckArgs {
    /// Paths to .litematic files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Only print failures
    #[arg(short, long)]
    quiet: bool,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let reader = LitematicReader::default();
        let mut failed = 0usize;

        for input in &self.inputs {
            tracing::debug!(path = %input.display(), "checking");
            match reader.load(input) {
                Ok(meta) => {
                    if !self.quiet {
                        println!("ok\t{}\tversion {}", input.display(), meta.version());
                    }
                }
                Err(e) => {
                    failed += 1;
                    println!("error\t{}\t{e}", input.display());
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} files failed to decode", self.inputs.len());
        }
        Ok(())
    }
}
