//! # `graph-scan` - Adjacency-Mapping Graph Traversals
//!
//! Breadth-first (and depth-first) traversal over small, string-keyed
//! adjacency-mapping graphs, producing the order in which nodes are visited.
//!
//! ## Guarantees
//!
//! - **Exactly once**: every node reachable from the start node is visited
//!   exactly once; unreachable nodes are never visited and never an error.
//! - **Strict BFS order**: [`bfs`] visits nodes in non-decreasing distance
//!   from the start. Ties follow discovery order, left to right through each
//!   adjacency list.
//! - **Purity**: traversals only borrow the [`Graph`]; visited sets and
//!   frontiers live for a single call.
//! - **Closed graphs**: a [`Graph`] cannot hold an edge to a node that is not
//!   one of its keys, so the only traversal failure is an unknown start node
//!   ([`NodeNotFound`]).
//!
//! ## Example
//!
//! ```rust
//! use graph_scan::{bfs, Graph};
//!
//! let graph = Graph::sample();
//! let scan = bfs(&graph, "A").unwrap();
//! assert_eq!(scan.to_string(), "A -> B -> C -> D -> E -> F");
//!
//! assert!(bfs(&graph, "Z").is_err());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::NodeNotFound;
pub use graph::{bfs, dfs, Bfs, Dfs, Graph, ScanResult};
