use std::path::PathBuf;

use clap::Parser;
use treeseek::document::DEFAULT_FILES_KEY;

use crate::application::data::{ColorChoice, LogLevel, OutputFormat};

/// Find every path to a file name in a directory tree document
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The file name to search for, matched exactly
    pub target: String,

    /// The tree document to search (YAML or JSON)
    pub document: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The key that lists the files of a directory
    #[clap(long, default_value = DEFAULT_FILES_KEY)]
    pub files_key: String,

    #[clap(long, short, default_value = "lines", value_enum)]
    pub format: OutputFormat,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_applies_defaults() {
        let cli = Cli::try_parse_from(["treeseek", "a.txt", "tree.json"]).unwrap();

        assert_eq!(cli.target, "a.txt");
        assert_eq!(cli.document, PathBuf::from("tree.json"));
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.files_key, "_files");
        assert_eq!(cli.format, OutputFormat::Lines);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn cli_parses_all_options() {
        let cli = Cli::try_parse_from([
            "treeseek",
            "--log-level",
            "debug",
            "--files-key",
            "files",
            "--format",
            "list",
            "--color",
            "never",
            "",
            "tree.yaml",
        ])
        .unwrap();

        assert_eq!(cli.target, "");
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.files_key, "files");
        assert_eq!(cli.format, OutputFormat::List);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn cli_requires_document() {
        assert!(Cli::try_parse_from(["treeseek", "a.txt"]).is_err());
    }
}
