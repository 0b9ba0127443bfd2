//! Per-traversal scratch state.
//!
//! Kept `pub(crate)` so the traversal iterators share one notion of
//! "visited" without exposing it in the public API.

pub(crate) mod visited;

pub(crate) use visited::VisitedSet;
