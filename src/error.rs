//! Error type shared by graph construction and input loading.
//!
//! Converting an adjacency list into an edge list never fails; errors only
//! come from the surfaces around it (reading input, sizing the vertex type).

use std::io;

/// Errors produced while building or loading an adjacency list.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading the input failed.
    #[error("IO: {0}")]
    Io(#[from] io::Error),
    /// The input is not a JSON array of integer arrays.
    #[error("invalid adjacency list: {0}")]
    Json(#[from] serde_json::Error),
    /// The vertex positions `0..count` cannot all be represented by the vertex type.
    #[error("{count} vertices do not fit the vertex id type")]
    VertexCountOverflow {
        /// Number of rows in the rejected adjacency list.
        count: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
