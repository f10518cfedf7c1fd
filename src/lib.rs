//! Find every occurrence of a file name in an in-memory directory tree.
//!
//! ```
//! use treeseek::{search::search, tree::TreeNode};
//!
//! let tree = TreeNode::new()
//!     .with_child("x", TreeNode::new().with_file("a.txt"))
//!     .with_child("y", TreeNode::new().with_file("a.txt"));
//!
//! assert_eq!(search(&tree, "a.txt"), vec!["x/a.txt", "y/a.txt"]);
//! ```

pub mod document;
pub mod search;
pub mod tree;
