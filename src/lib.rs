//! # `edgelist` - Adjacency List to Edge List Conversion
//!
//! Converts a directed graph stored as an adjacency list (one neighbor row per
//! vertex) into a flat, ordered list of `(source, target)` edges.
//!
//! ## Guarantees
//!
//! - **Count**: the edge list holds exactly one edge per neighbor entry, so its
//!   length is the sum of all out-degrees.
//! - **Order**: edges are grouped by ascending source vertex; within a group
//!   they follow the neighbor row order.
//! - **Passthrough**: duplicates, self-loops, negative and out-of-range
//!   neighbors are copied as-is. No validation is performed on targets.
//! - **Purity**: the input graph is only read; the same graph always yields
//!   the same edge list.
//!
//! ## Architecture
//!
//! - [`graph`]: `AdjacencyList`, `Edge`, `EdgeList`, and the conversion
//! - [`report`]: console rendering of both representations
//! - [`io`]: JSON input
//! - [`error`]: the crate error type
//!
//! With the `parallel` feature the conversion can also run on the rayon pool;
//! its output is identical to the sequential pass.
//!
//! ## Example
//!
//! ```rust
//! use edgelist::{AdjacencyList, Edge};
//!
//! let graph = AdjacencyList::<i64>::from_rows(vec![vec![1, 2], vec![2], vec![]]).unwrap();
//! let edges = graph.to_edge_list();
//!
//! assert_eq!(edges.len(), graph.edge_count());
//! assert_eq!(edges[0], Edge::new(0, 1));
//! assert_eq!(edges.to_string(), "(0, 1)\n(0, 2)\n(1, 2)\n");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod io;
pub mod report;

pub use error::{Error, Result};
#[cfg(feature = "parallel")]
pub use graph::par_convert_to_edge_list;
pub use graph::{
    convert_to_edge_list, convert_with, edge_offsets, AdjacencyList, Edge, EdgeList, Strategy, VertexId,
};
pub use report::{OutputFormat, Report};

// Layout claims the edge list relies on.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Edge<i64>>() == 2 * mem::size_of::<i64>());
    assert!(mem::size_of::<Edge<u32>>() == 2 * mem::size_of::<u32>());
    assert!(mem::size_of::<EdgeList<i64>>() == mem::size_of::<Vec<Edge<i64>>>());
};
