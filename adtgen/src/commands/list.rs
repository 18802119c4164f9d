use adtgen_schema::builtin;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Only list this class (repeatable)
    #[arg(long = "class", value_name = "NAME")]
    pub classes: Vec<String>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let mut registry = builtin::registry();
        if !self.classes.is_empty() {
            registry = registry.select(&self.classes).unwrap_or_exit();
        }

        ops::list(&registry).render(&mut TerminalOutput::new());
        Ok(())
    }
}
