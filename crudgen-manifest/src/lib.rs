// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CONFIG_FILE_NAME, ClientConfig, ConfigFile, DatabaseConfig, GenerateConfig, Manifest,
    OutputConfig, ParseContext, STARTER_TEMPLATE, TableConfig,
};
