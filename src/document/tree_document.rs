use std::{path::Path, string::FromUtf8Error};

use compio::fs;
use derive_more::Display;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, trace};

use super::event_check::check_events;
use crate::tree::{PATH_SEPARATOR, TreeNode};

pub const DEFAULT_FILES_KEY: &str = "_files";

const ROOT_LOCATION: &str = "<root>";

/// A tree loaded from a document, validated and ready to be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDocument {
    root: TreeNode,
}

impl TreeDocument {
    pub async fn from_path(
        path: impl AsRef<Path>,
        files_key: &str,
    ) -> Result<Self, TreeDocumentError> {
        let path = path.as_ref();
        debug!("Reading tree document: {}", path.display());

        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read tree document: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;

        Self::parse(&contents, files_key)
    }

    /// Parses `contents`, treating `files_key` as the reserved key that lists
    /// a directory's files.
    ///
    /// Repeated keys within one mapping and YAML aliases are rejected before
    /// the tree is built.
    pub fn parse(contents: &str, files_key: &str) -> Result<Self, TreeDocumentError> {
        check_events(contents, files_key)?;

        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let top_level = documents.first().context(EmptyDocumentSnafu)?;
        let mapping = top_level.as_mapping().context(TopLevelNotMapSnafu)?;

        let mut location = Vec::new();
        let root = Self::build_directory(mapping, files_key, &mut location)?;
        debug!(
            "Loaded tree with {} directories and {} files",
            root.directory_count(),
            root.file_count()
        );

        Ok(Self { root })
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn into_root(self) -> TreeNode {
        self.root
    }

    fn build_directory(
        mapping: &LinkedHashMap<Yaml, Yaml>,
        files_key: &str,
        location: &mut Vec<String>,
    ) -> Result<TreeNode, TreeDocumentError> {
        let mut node = TreeNode::new();

        for (key, value) in mapping {
            let label = match key {
                Yaml::Value(Scalar::String(label)) => label,
                _ => return malformed(location, MalformedReason::LabelNotString),
            };

            if label == files_key {
                Self::collect_files(&mut node, value, location)?;
                continue;
            }

            if label.is_empty() || label.contains(PATH_SEPARATOR) {
                return malformed(location, MalformedReason::InvalidLabel(label.to_string()));
            }

            location.push(label.to_string());
            let child = match value {
                Yaml::Mapping(child_mapping) => {
                    Self::build_directory(child_mapping, files_key, location)?
                }
                Yaml::Value(Scalar::Null) => TreeNode::new(),
                _ => {
                    return malformed(
                        location,
                        MalformedReason::DirectoryNotMapping(label.to_string()),
                    );
                }
            };
            location.pop();

            trace!("Adding directory '{}'", label);
            node.insert_child(label.to_string(), child);
        }

        Ok(node)
    }

    fn collect_files(
        node: &mut TreeNode,
        value: &Yaml,
        location: &[String],
    ) -> Result<(), TreeDocumentError> {
        let entries = match value {
            Yaml::Sequence(entries) => entries,
            Yaml::Value(Scalar::Null) => return Ok(()),
            _ => return malformed(location, MalformedReason::FilesNotSequence),
        };

        for entry in entries {
            let name = match entry {
                Yaml::Value(Scalar::String(name)) => name,
                _ => return malformed(location, MalformedReason::FileNameNotString),
            };

            if name.contains(PATH_SEPARATOR) {
                return malformed(location, MalformedReason::InvalidFileName(name.to_string()));
            }
            if !node.insert_file(name.to_string()) {
                return malformed(
                    location,
                    MalformedReason::DuplicateFileName(name.to_string()),
                );
            }
        }

        Ok(())
    }
}

impl TryFrom<&str> for TreeDocument {
    type Error = TreeDocumentError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        Self::parse(contents, DEFAULT_FILES_KEY)
    }
}

pub(super) fn malformed<T>(
    location: &[String],
    reason: MalformedReason,
) -> Result<T, TreeDocumentError> {
    let location = if location.is_empty() {
        ROOT_LOCATION.to_string()
    } else {
        location.join(PATH_SEPARATOR)
    };
    MalformedTreeSnafu { location, reason }.fail()
}

/// Why a document does not describe a well-formed tree.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MalformedReason {
    #[display("the file list is not a sequence")]
    FilesNotSequence,
    #[display("a file name is not a string")]
    FileNameNotString,
    #[display("file '{_0}' is listed more than once")]
    DuplicateFileName(String),
    #[display("directory '{_0}' is listed more than once")]
    DuplicateLabel(String),
    #[display("the file list key '{_0}' appears more than once")]
    DuplicateFilesKey(String),
    #[display("a directory label is not a string")]
    LabelNotString,
    #[display("'{_0}' is not a valid directory label")]
    InvalidLabel(String),
    #[display("'{_0}' is not a valid file name")]
    InvalidFileName(String),
    #[display("directory '{_0}' is neither a mapping nor empty")]
    DirectoryNotMapping(String),
    #[display("aliases are not supported")]
    AliasNotAllowed,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum TreeDocumentError {
    #[snafu(display("Failed to read the tree document: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The tree document {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the tree document"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("The tree document is empty"))]
    EmptyDocument,
    #[snafu(display("Top level of the tree document should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Malformed tree at '{}': {}", location, reason))]
    MalformedTree {
        location: String,
        reason: MalformedReason,
    },
}
