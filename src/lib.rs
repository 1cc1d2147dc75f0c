//! Route Planner - multi-criteria least-cost path search
//!
//! This library computes a least-cost path between two vertices of a weighted
//! directed graph under a caller-selected weight criterion. Each edge carries
//! three independent non-negative weights (distance, time, cost); exactly one
//! is selected per search, never a combination.
//!
//! The search engine is Dijkstra's algorithm in its lazy-deletion variant,
//! built on hand-rolled data structures: a singly linked list backing the
//! adjacency lists and path results, and an array-backed binary min-heap with
//! no decrease-key (stale queue entries are discarded on pop).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{find_shortest_path, find_shortest_path_by_name},
    PathResult,
};
/// Re-export main types for convenient use
pub use graph::{Criterion, Route, RouteGraph, Vertex};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Graph capacity must be positive")]
    InvalidCapacity,

    #[error("Invalid vertex ID: {id} (must be below capacity {capacity})")]
    VertexOutOfRange { id: usize, capacity: usize },

    #[error("Vertex with ID {0} already exists")]
    DuplicateVertex(usize),

    #[error("Graph is full: capacity of {0} vertices reached")]
    GraphFull(usize),

    #[error("Vertex {0} does not exist")]
    VertexNotFound(usize),

    #[error("Unknown weight criterion: {0:?} (use \"distance\", \"time\" or \"cost\")")]
    UnknownCriterion(String),

    #[error("{0} is empty")]
    EmptyContainer(&'static str),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
