//! Breadth-first and depth-first traversals over a [`Graph`].
//!
//! Both walks mark a node visited when it is discovered, so each reachable
//! node is yielded exactly once. They differ only in which end of the
//! frontier is taken next: the front of a FIFO queue for BFS, the top of a
//! stack for DFS. Unreachable nodes are never yielded.

use std::collections::VecDeque;

use crate::error::NodeNotFound;
use crate::graph::access::VisitedSet;
use crate::graph::{Graph, ScanResult};

/// An iterator for Breadth-First Search (BFS).
///
/// Yields node identifiers in non-decreasing distance from the start node.
/// Nodes at the same distance come in the order their parents discovered
/// them, left to right through each adjacency list.
pub struct Bfs<'g> {
    graph: &'g Graph,
    visited: VisitedSet<'g>,
    queue: VecDeque<&'g str>,
}

impl<'g> Bfs<'g> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if `start` is not a key of `graph`.
    pub fn new(graph: &'g Graph, start: &str) -> Result<Self, NodeNotFound> {
        let start = graph.key(start)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(start, nodes = graph.node_count(), "breadth-first scan");

        let mut visited = VisitedSet::with_capacity(graph.node_count());
        visited.try_visit(start);
        let mut queue = VecDeque::with_capacity(graph.node_count());
        queue.push_back(start);

        Ok(Self {
            graph,
            visited,
            queue,
        })
    }

    /// Number of nodes discovered so far, including those still queued.
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }
}

impl<'g> Iterator for Bfs<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.queue.pop_front()?;

        for ver in self.graph.adjacent(cur) {
            if self.visited.try_visit(ver) {
                self.queue.push_back(ver);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(node = cur, frontier = self.queue.len(), "bfs visit");

        Some(cur)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Same discovery-time marking as [`Bfs`], but the most recently discovered
/// node is expanded next.
pub struct Dfs<'g> {
    graph: &'g Graph,
    visited: VisitedSet<'g>,
    stack: Vec<&'g str>,
}

impl<'g> Dfs<'g> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`NodeNotFound`] if `start` is not a key of `graph`.
    pub fn new(graph: &'g Graph, start: &str) -> Result<Self, NodeNotFound> {
        let start = graph.key(start)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(start, nodes = graph.node_count(), "depth-first scan");

        let mut visited = VisitedSet::with_capacity(graph.node_count());
        visited.try_visit(start);

        Ok(Self {
            graph,
            visited,
            stack: vec![start],
        })
    }

    /// Number of nodes discovered so far, including those still stacked.
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }
}

impl<'g> Iterator for Dfs<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.stack.pop()?;

        for ver in self.graph.adjacent(cur) {
            if self.visited.try_visit(ver) {
                self.stack.push(ver);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(node = cur, frontier = self.stack.len(), "dfs visit");

        Some(cur)
    }
}

/// Returns the breadth-first visitation order of `graph` from `start`.
///
/// Pure: the graph is only borrowed and no state survives the call.
///
/// # Errors
/// Returns [`NodeNotFound`] if `start` is not a key of `graph`.
pub fn bfs(graph: &Graph, start: &str) -> Result<ScanResult, NodeNotFound> {
    Ok(Bfs::new(graph, start)?.collect())
}

/// Returns the depth-first visitation order of `graph` from `start`.
///
/// # Errors
/// Returns [`NodeNotFound`] if `start` is not a key of `graph`.
pub fn dfs(graph: &Graph, start: &str) -> Result<ScanResult, NodeNotFound> {
    Ok(Dfs::new(graph, start)?.collect())
}
