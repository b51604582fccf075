use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Args;
use litematic::LitematicReader;

use crate::format::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Paths to .litematic files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let reader = LitematicReader::default();
        let mut dest: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        if let Some(header) = self.format.header() {
            writeln!(dest, "{header}")?;
        }
        for (i, input) in self.inputs.iter().enumerate() {
            let meta = reader.load(input)?;
            if i > 0 && self.format == OutputFormat::Text {
                writeln!(dest)?;
            }
            write!(dest, "{}", self.format.render(&meta))?;
        }
        dest.flush()?;
        Ok(())
    }
}
