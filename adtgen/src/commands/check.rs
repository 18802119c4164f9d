use std::path::PathBuf;

use adtgen_schema::builtin;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to adtgen.toml (defaults to ./adtgen.toml)
    #[arg(short, long, default_value = "adtgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let registry = builtin::registry();

        // The class allow-list must name catalog classes
        if let Some(names) = &config.generator.classes {
            registry.check_selection(names).unwrap_or_exit();
        }

        let config_path = self.config.exists().then_some(self.config.as_path());
        let report = ops::check(&registry, config_path);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
