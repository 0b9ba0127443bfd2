//! Error type shared by graph construction and traversal.

/// A node identifier was looked up but is not a key of the graph.
///
/// Raised for an unknown traversal start node, and at construction time for
/// an adjacency list that references a node with no entry of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeNotFound {
    node: String,
}

impl NodeNotFound {
    /// Creates the error for the missing identifier `node`.
    pub fn new(node: impl Into<String>) -> Self {
        Self { node: node.into() }
    }

    /// The identifier that could not be found.
    pub fn node(&self) -> &str {
        &self.node
    }
}

impl core::fmt::Display for NodeNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "node not found: {:?}", self.node)
    }
}

impl std::error::Error for NodeNotFound {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_the_missing_node() {
        let err = NodeNotFound::new("Z");
        assert_eq!(err.node(), "Z");
        assert_eq!(err.to_string(), "node not found: \"Z\"");
    }
}
