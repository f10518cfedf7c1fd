//! Loading trees from nested key-value documents.
//!
//! A document is a YAML mapping (JSON documents are accepted as they are valid
//! YAML) where one reserved key lists the files of a directory and every other
//! key names a subdirectory:
//!
//! ```yaml
//! _files: [README.md]
//! docs:
//!   _files: [index.md]
//!   guide: {}
//! ```
//!
//! Loading fails fast on anything that would make the tree ambiguous: a key
//! repeated within one mapping, a YAML alias, or a value of the wrong shape.

mod event_check;
mod tree_document;

pub use tree_document::{DEFAULT_FILES_KEY, MalformedReason, TreeDocument, TreeDocumentError};
