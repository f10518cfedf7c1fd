//! In-memory directory tree searched by the engine.
//!
//! A tree is a root [`TreeNode`] that owns its children outright. Nodes carry
//! no name of their own: a directory's label is the key its parent stores it
//! under, and the root is unnamed.

mod node;

pub use node::{InsertPathError, TreeNode};

/// Separator between path segments, both in inserted paths and search output.
pub const PATH_SEPARATOR: &str = "/";
