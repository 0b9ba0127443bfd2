//! String-keyed graphs and their traversals.
//!
//! - `adjacency`: the [`Graph`] adjacency mapping
//! - `traversal`: [`Bfs`] / [`Dfs`] iterators and the [`bfs`] / [`dfs`] entry points
//! - `scan`: the [`ScanResult`] a traversal produces

pub mod adjacency;
pub mod scan;
pub mod traversal;
pub(crate) mod access;

pub use adjacency::Graph;
pub use scan::ScanResult;
pub use traversal::{bfs, dfs, Bfs, Dfs};
