//! Graph representations and the conversion between them.
//!
//! - `adjacency`: one neighbor row per vertex
//! - `edge`: flat `(source, target)` pairs
//! - `convert`: adjacency list to edge list
//! - `vertex`: integer vertex ids

pub mod adjacency;
pub mod convert;
pub mod edge;
pub mod vertex;

pub use adjacency::AdjacencyList;
#[cfg(feature = "parallel")]
pub use convert::par_convert_to_edge_list;
pub use convert::{convert_to_edge_list, convert_with, edge_offsets, Strategy};
pub use edge::{Edge, EdgeList};
pub use vertex::VertexId;
