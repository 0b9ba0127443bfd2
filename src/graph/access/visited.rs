//! Visited set for string-keyed traversals.
//!
//! Nodes are marked at discovery time, not when they are expanded, so a node
//! reachable along several paths enters the frontier only once.

use std::collections::HashSet;

/// Membership set of node identifiers borrowed from the graph under traversal.
pub(crate) struct VisitedSet<'g> {
    seen: HashSet<&'g str>,
}

impl<'g> VisitedSet<'g> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: &'g str) -> bool {
        self.seen.insert(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_reports_first_sighting_only() {
        let mut visited = VisitedSet::with_capacity(2);
        assert!(visited.try_visit("A"));
        assert!(!visited.try_visit("A"));
        assert!(visited.try_visit("B"));
        assert_eq!(visited.len(), 2);
    }
}
