use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::MatchPath;
use crate::tree::TreeNode;

/// Index of a visited node in the order it was discovered. The root is 0.
type NodeId = usize;

const ROOT_ID: NodeId = 0;

/// How a discovered node hangs off its parent.
///
/// Links are addressed by [`NodeId`] rather than by label, so equal labels in
/// different subtrees never resolve to the wrong ancestor chain.
#[derive(Debug)]
struct Link<'a> {
    parent: Option<NodeId>,
    label: &'a str,
}

/// Lazy level-order traversal yielding one [`MatchPath`] per directory whose
/// files contain the target name.
///
/// Directories at the same depth are visited in ascending label order, so the
/// output is fully determined by the tree's contents.
#[derive(Debug)]
pub struct Matches<'a> {
    target: &'a str,
    queue: VecDeque<(NodeId, &'a TreeNode)>,
    links: Vec<Link<'a>>,
}

impl<'a> Matches<'a> {
    pub fn new(root: &'a TreeNode, target: &'a str) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((ROOT_ID, root));

        Self {
            target,
            queue,
            links: vec![Link {
                parent: None,
                label: "",
            }],
        }
    }

    fn enqueue_children(&mut self, parent: NodeId, node: &'a TreeNode) {
        for (label, child) in node.children() {
            let id = self.links.len();
            self.links.push(Link {
                parent: Some(parent),
                label,
            });
            self.queue.push_back((id, child));
        }
    }

    /// Walks parent links back to the root. The root's own label is never part
    /// of the path.
    fn trace_path(&self, id: NodeId) -> MatchPath {
        let mut segments = vec![self.target.to_string()];
        let mut current = &self.links[id];

        while let Some(parent) = current.parent {
            segments.push(current.label.to_string());
            current = &self.links[parent];
        }

        segments.reverse();
        MatchPath::new(segments)
    }
}

impl Iterator for Matches<'_> {
    type Item = MatchPath;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, node)) = self.queue.pop_front() {
            let found = node
                .contains_file(self.target)
                .then(|| self.trace_path(id));

            self.enqueue_children(id, node);

            if let Some(path) = found {
                trace!("Found '{}' at '{}'", self.target, path);
                return Some(path);
            }
        }

        None
    }
}

impl FusedIterator for Matches<'_> {}

/// Every path from the root to a file named `target`, in level order.
pub fn search_matches(root: &TreeNode, target: &str) -> Vec<MatchPath> {
    debug!("Searching for '{}'", target);
    let matches = Matches::new(root, target).collect::<Vec<_>>();
    debug!("Found {} occurrence(s) of '{}'", matches.len(), target);
    matches
}

/// Like [`search_matches`], with each path rendered as a `/`-joined string.
pub fn search(root: &TreeNode, target: &str) -> Vec<String> {
    search_matches(root, target)
        .iter()
        .map(MatchPath::to_string)
        .collect()
}
