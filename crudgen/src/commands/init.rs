use std::path::PathBuf;

use clap::Args;
use console::style;
use crudgen_core::File;
use crudgen_manifest::STARTER_TEMPLATE;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the configuration
    #[arg(short, long, default_value = "crudgen.toml")]
    pub config: PathBuf,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub async fn run(&self) -> Result<()> {
        let file = File::new(&self.config, STARTER_TEMPLATE);

        if file.exists() && !self.force && !Self::confirm_overwrite(&self.config)? {
            println!("{}", style("Aborted, nothing written").dim());
            return Ok(());
        }

        file.write().await?;

        println!(
            "{} {}",
            style("Created").green().bold(),
            self.config.display()
        );
        println!(
            "  {} {}",
            style("next:").dim(),
            style("crudgen generate users --dry-run").cyan()
        );

        Ok(())
    }

    fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
