//! A string-keyed adjacency-mapping graph.
//!
//! Each node identifier maps to the ordered list of its neighbors. The order
//! of each list is significant: traversals expand neighbors left to right.
//!
//! ### Invariant
//! Every neighbor referenced by an adjacency list is itself a key. The
//! constructors enforce this, so traversals never meet a dangling edge.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `from_adjacency` | \(O((n + m) \log n)\) | Validates every edge |
//! | `neighbors` | \(O(\log n)\) | `BTreeMap` lookup |
//! | `contains` | \(O(\log n)\) | |
//! | `node_count` | \(O(1)\) | |

use std::collections::BTreeMap;

use crate::error::NodeNotFound;

/// An adjacency mapping from node identifier to ordered neighbor identifiers.
///
/// Immutable once built; traversals only borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl Graph {
    /// Builds a graph from `(node, neighbors)` entries.
    ///
    /// Neighbor order is preserved. If the same node appears twice, the later
    /// entry replaces the earlier one.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] naming the first neighbor (in key order) that
    /// has no entry of its own.
    pub fn from_adjacency<I, K, N, V>(entries: I) -> Result<Self, NodeNotFound>
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let adjacency: BTreeMap<String, Vec<String>> = entries
            .into_iter()
            .map(|(node, nbrs)| (node.into(), nbrs.into_iter().map(Into::into).collect()))
            .collect();

        for nbrs in adjacency.values() {
            if let Some(missing) = nbrs.iter().find(|v| !adjacency.contains_key(*v)) {
                return Err(NodeNotFound::new(missing.as_str()));
            }
        }

        Ok(Self { adjacency })
    }

    /// Builds an undirected graph from declared nodes and an edge list.
    ///
    /// Each edge `(u, v)` appends `v` to `u`'s list and `u` to `v`'s list, so
    /// neighbor order follows edge order. Nodes without edges are kept.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if an edge endpoint was not declared in `nodes`.
    pub fn undirected<'a, N, E>(nodes: N, edges: E) -> Result<Self, NodeNotFound>
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut adjacency: BTreeMap<String, Vec<String>> = nodes
            .into_iter()
            .map(|node| (node.to_owned(), Vec::new()))
            .collect();

        for (u, v) in edges {
            if !adjacency.contains_key(v) {
                return Err(NodeNotFound::new(v));
            }
            adjacency
                .get_mut(u)
                .ok_or_else(|| NodeNotFound::new(u))?
                .push(v.to_owned());
            if let Some(nbrs) = adjacency.get_mut(v) {
                nbrs.push(u.to_owned());
            }
        }

        Ok(Self { adjacency })
    }

    /// The six-node demonstration graph `A`..`F`.
    ///
    /// ```text
    /// A - B - D - F
    ///  \  |  /|
    ///   \ | / |
    ///     C - E
    /// ```
    pub fn sample() -> Self {
        const SAMPLE: [(&str, &[&str]); 6] = [
            ("A", &["B", "C"]),
            ("B", &["A", "C", "D"]),
            ("C", &["A", "B", "D", "E"]),
            ("D", &["B", "C", "E", "F"]),
            ("E", &["C", "D"]),
            ("F", &["D"]),
        ];

        let adjacency = SAMPLE
            .iter()
            .map(|(node, nbrs)| {
                let nbrs = nbrs.iter().map(|v| (*v).to_owned()).collect();
                ((*node).to_owned(), nbrs)
            })
            .collect();
        Self { adjacency }
    }

    /// Returns the neighbors of `node` in adjacency order.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if `node` is not a key.
    pub fn neighbors(&self, node: &str) -> Result<&[String], NodeNotFound> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| NodeNotFound::new(node))
    }

    /// Returns `true` if `node` is a key of the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over node identifiers in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Resolves `node` to the graph-owned key so traversals can borrow it.
    pub(crate) fn key(&self, node: &str) -> Result<&str, NodeNotFound> {
        self.adjacency
            .get_key_value(node)
            .map(|(k, _)| k.as_str())
            .ok_or_else(|| NodeNotFound::new(node))
    }

    /// Neighbors of a node known to be a key; empty for anything else.
    #[inline]
    pub(crate) fn adjacent(&self, node: &str) -> impl Iterator<Item = &str> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_satisfies_the_key_invariant() {
        let sample = Graph::sample();
        let rebuilt = Graph::from_adjacency(
            sample
                .nodes()
                .map(|n| (n, sample.neighbors(n).unwrap().to_vec())),
        )
        .unwrap();
        assert_eq!(rebuilt, sample);
        assert_eq!(sample.node_count(), 6);
    }

    #[test]
    fn dangling_neighbor_is_rejected() {
        let err = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["Q"])]).unwrap_err();
        assert_eq!(err.node(), "Q");
    }

    #[test]
    fn undirected_matches_the_sample_literal() {
        let g = Graph::undirected(
            ["A", "B", "C", "D", "E", "F"],
            [
                ("A", "B"),
                ("A", "C"),
                ("B", "C"),
                ("B", "D"),
                ("C", "D"),
                ("C", "E"),
                ("D", "E"),
                ("D", "F"),
            ],
        )
        .unwrap();
        assert_eq!(g, Graph::sample());
    }

    #[test]
    fn undirected_rejects_undeclared_endpoint() {
        let err = Graph::undirected(["A"], [("A", "B")]).unwrap_err();
        assert_eq!(err.node(), "B");
        let err = Graph::undirected(["B"], [("A", "B")]).unwrap_err();
        assert_eq!(err.node(), "A");
    }

    #[test]
    fn neighbors_of_unknown_node_fails() {
        let g = Graph::sample();
        assert_eq!(g.neighbors("D").unwrap(), ["B", "C", "E", "F"]);
        assert_eq!(g.neighbors("Z").unwrap_err(), NodeNotFound::new("Z"));
        assert!(!g.contains("Z"));
    }
}
