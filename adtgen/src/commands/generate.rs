use std::path::PathBuf;

use adtgen_schema::builtin;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to adtgen.toml (defaults to ./adtgen.toml)
    #[arg(short, long, default_value = "adtgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides adtgen.toml, defaults to current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only generate this class (repeatable)
    #[arg(long = "class", value_name = "NAME")]
    pub classes: Vec<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let registry = builtin::registry();

        let options = config.generator_options(&self.classes);
        if let Some(names) = &options.classes {
            registry.check_selection(names).unwrap_or_exit();
        }

        let output_dir = config.output_dir(self.output.as_deref());
        let report = ops::generate(
            &registry,
            options,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
