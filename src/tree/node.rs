use std::collections::{BTreeMap, BTreeSet};

use snafu::Snafu;
use tracing::trace;

use super::PATH_SEPARATOR;

/// A directory: the file names it holds directly and its labelled
/// subdirectories.
///
/// Both collections are ordered, so iterating a node always yields names in
/// ascending lexicographic order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    files: BTreeSet<String>,
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.insert_file(name);
        self
    }

    /// Adds `node` under `label`, replacing any existing child with that label.
    pub fn with_child(mut self, label: impl Into<String>, node: TreeNode) -> Self {
        self.insert_child(label, node);
        self
    }

    /// Returns `true` if the file was not already present.
    pub fn insert_file(&mut self, name: impl Into<String>) -> bool {
        self.files.insert(name.into())
    }

    /// Returns the child previously stored under `label`, if any.
    pub fn insert_child(&mut self, label: impl Into<String>, node: TreeNode) -> Option<TreeNode> {
        self.children.insert(label.into(), node)
    }

    /// Inserts a `/`-separated path whose last segment is a file, creating
    /// intermediate directories as needed.
    ///
    /// The path is validated in full before the tree is touched, so a failed
    /// insert leaves the node unchanged.
    pub fn insert_path(&mut self, path: &str) -> Result<(), InsertPathError> {
        if path.is_empty() {
            return Err(InsertPathError::EmptyPath);
        }

        let segments = path.split(PATH_SEPARATOR).collect::<Vec<_>>();
        let Some((file_name, directories)) = segments.split_last() else {
            return Err(InsertPathError::EmptyPath);
        };

        if directories.iter().any(|segment| segment.is_empty()) {
            return Err(InsertPathError::EmptySegment {
                path: path.to_string(),
            });
        }
        if file_name.is_empty() {
            return Err(InsertPathError::TrailingSeparator {
                path: path.to_string(),
            });
        }

        let mut current = self;
        for directory in directories {
            current = current.children.entry(directory.to_string()).or_default();
        }
        trace!("Inserting file '{}' for path '{}'", file_name, path);
        current.files.insert(file_name.to_string());

        Ok(())
    }

    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    pub fn children(&self) -> &BTreeMap<String, TreeNode> {
        &self.children
    }

    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children.get(label)
    }

    pub fn contains_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// A node with neither files nor subdirectories.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.children.is_empty()
    }

    /// Number of files in this node and all of its descendants.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .children
                .values()
                .map(TreeNode::file_count)
                .sum::<usize>()
    }

    /// Number of directories below this node, not counting the node itself.
    pub fn directory_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .values()
                .map(TreeNode::directory_count)
                .sum::<usize>()
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum InsertPathError {
    #[snafu(display("Cannot insert an empty path"))]
    EmptyPath,
    #[snafu(display("Path '{}' contains an empty directory segment", path))]
    EmptySegment { path: String },
    #[snafu(display("Path '{}' ends with a separator instead of a file name", path))]
    TrailingSeparator { path: String },
}
