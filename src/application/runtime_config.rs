use std::path::PathBuf;

use crate::application::data::{ColorChoice, OutputFormat};
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub target: String,
    pub document: PathBuf,
    pub files_key: String,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            target: cli.target,
            document: cli.document,
            files_key: cli.files_key,
            format: cli.format,
            color: cli.color,
        }
    }
}
