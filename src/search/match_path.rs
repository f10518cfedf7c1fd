use derive_more::Display;

use crate::tree::PATH_SEPARATOR;

/// Location of one match: the directory labels below the root followed by
/// the matched file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{}", segments.join(PATH_SEPARATOR))]
pub struct MatchPath {
    segments: Vec<String>,
}

impl MatchPath {
    pub(super) fn new(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Labels of the directories leading to the file, outermost first.
    pub fn directories(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    pub fn file_name(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// Number of directories between the root and the file.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_level_path_has_no_separator() {
        let path = MatchPath::new(vec!["a.txt".into()]);
        assert_eq!(path.to_string(), "a.txt");
        assert_eq!(path.depth(), 0);
        assert!(path.directories().is_empty());
    }

    #[test]
    fn nested_path_joins_segments() {
        let path = MatchPath::new(vec!["docs".into(), "api".into(), "a.txt".into()]);
        assert_eq!(path.to_string(), "docs/api/a.txt");
        assert_eq!(path.file_name(), "a.txt");
        assert_eq!(path.directories(), ["docs", "api"]);
        assert_eq!(path.depth(), 2);
    }
}
