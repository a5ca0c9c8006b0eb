mod check;
mod completions;
mod generate;
mod init;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use miette::Diagnostic;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Scaffold Supabase CRUD functions in TypeScript from a table schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run().await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate create/read/update/delete/list files for one or more tables
    Generate(GenerateCommand),

    /// Validate crudgen.toml without generating code
    Check(CheckCommand),

    /// Write a starter crudgen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
