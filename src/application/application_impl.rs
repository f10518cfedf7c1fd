use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};
use treeseek::document::{TreeDocument, TreeDocumentError};
use treeseek::search::search_matches;

use crate::application::RuntimeConfig;
use crate::output::MatchPrinter;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let stdout = io::stdout();
        Self::run_to(app_config, &mut stdout.lock()).await
    }

    /// Loads the document, searches it and writes the matches to `out`.
    pub async fn run_to(
        app_config: impl Into<RuntimeConfig>,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let document = TreeDocument::from_path(&app_config.document, &app_config.files_key)
            .await
            .context(TreeDocumentSnafu)?;

        let matches = search_matches(document.root(), &app_config.target);
        info!(
            "Found {} occurrence(s) of '{}'",
            matches.len(),
            app_config.target
        );

        let colorize = app_config.color.should_colorize();
        if colorize {
            colored::control::set_override(true);
        }

        MatchPrinter::new(app_config.format, colorize)
            .write(out, &matches)
            .context(OutputSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the tree document"))]
    TreeDocumentError { source: TreeDocumentError },
    #[snafu(display("Failed to write the search results"))]
    OutputError { source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::{ColorChoice, OutputFormat};
    use std::path::{Path, PathBuf};
    use tempfile::NamedTempFile;

    fn config(document: &Path, target: &str, format: OutputFormat) -> RuntimeConfig {
        RuntimeConfig {
            target: target.to_string(),
            document: document.to_path_buf(),
            files_key: "_files".to_string(),
            format,
            color: ColorChoice::Never,
        }
    }

    fn document_file(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{contents}").expect("Failed to write to temp file");
        temp_file
    }

    #[compio::test]
    async fn run_prints_matches_in_order() {
        let file = document_file(
            r#"{"_files": ["a.txt"], "y": {"_files": ["a.txt"]}, "x": {"_files": ["a.txt"], "z": {"_files": ["a.txt"]}}}"#,
        );
        let mut out = Vec::new();

        Application::run_to(config(file.path(), "a.txt", OutputFormat::Lines), &mut out)
            .await
            .expect("Run failed");

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a.txt\nx/a.txt\ny/a.txt\nx/z/a.txt\n"
        );
    }

    #[compio::test]
    async fn run_prints_empty_list_without_matches() {
        let file = document_file(r#"{"docs": {"_files": ["b.txt"]}}"#);
        let mut out = Vec::new();

        Application::run_to(config(file.path(), "missing.txt", OutputFormat::List), &mut out)
            .await
            .expect("Run failed");

        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[compio::test]
    async fn run_fails_on_malformed_document() {
        let file = document_file(r#"{"docs": ["a.txt"]}"#);
        let mut out = Vec::new();

        let result =
            Application::run_to(config(file.path(), "a.txt", OutputFormat::Lines), &mut out).await;

        assert!(matches!(
            result,
            Err(ApplicationError::TreeDocumentError {
                source: TreeDocumentError::MalformedTree { .. }
            })
        ));
        assert!(out.is_empty());
    }

    #[compio::test]
    async fn run_fails_on_missing_document() {
        let missing = PathBuf::from("/this/path/does/not/exist.json");
        let mut out = Vec::new();

        let result =
            Application::run_to(config(&missing, "a.txt", OutputFormat::Lines), &mut out).await;

        assert!(matches!(
            result,
            Err(ApplicationError::TreeDocumentError {
                source: TreeDocumentError::ReadError { .. }
            })
        ));
    }
}
