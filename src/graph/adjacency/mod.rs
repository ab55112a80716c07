//! Adjacency-list graphs.
//!
//! Vertex `i` is the row stored at position `i`; the row lists the targets of
//! its outgoing edges in insertion order. Rows are taken as given: neighbor
//! values are never range-checked, sorted, or deduplicated.

use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::graph::convert::convert_to_edge_list;
use crate::graph::edge::EdgeList;
use crate::graph::vertex::VertexId;

/// A directed graph stored as one neighbor row per vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_rows` | \(O(1)\) | Only checks that the vertex count fits `V` |
/// | `neighbors` | \(O(1)\) | Borrowed slice of the row |
/// | `out_degree` | \(O(1)\) | Row length |
/// | `edge_count` | \(O(n)\) | Sum of row lengths |
/// | `to_edge_list` | \(O(n + m)\) | See [`convert_to_edge_list`] |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdjacencyList<V = i64> {
    rows: Vec<Vec<V>>,
}

impl<V: VertexId> AdjacencyList<V> {
    /// Wraps `rows` as an adjacency list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexCountOverflow`] if the last vertex position
    /// cannot be represented as a `V`.
    pub fn from_rows(rows: Vec<Vec<V>>) -> Result<Self> {
        if let Some(last) = rows.len().checked_sub(1) {
            if V::from_position(last).is_none() {
                return Err(Error::VertexCountOverflow { count: rows.len() });
            }
        }
        Ok(Self { rows })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of neighbor entries, i.e. the sum of out-degrees.
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Neighbor row of the vertex at `position`.
    #[inline]
    pub fn neighbors(&self, position: usize) -> Option<&[V]> {
        self.rows.get(position).map(Vec::as_slice)
    }

    /// Out-degree of the vertex at `position`.
    #[inline]
    pub fn out_degree(&self, position: usize) -> Option<usize> {
        self.rows.get(position).map(Vec::len)
    }

    /// All rows, indexed by vertex position.
    #[inline]
    pub fn rows(&self) -> &[Vec<V>] {
        &self.rows
    }

    /// Iterates `(vertex, neighbors)` in ascending vertex order.
    pub fn vertices(&self) -> impl Iterator<Item = (V, &[V])> + '_ {
        // `from_rows` guarantees every position fits, so the zip never runs short.
        core::iter::successors(Some(V::zero()), |v| v.checked_add(&V::one()))
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// Builds the edge list of this graph.
    pub fn to_edge_list(&self) -> EdgeList<V> {
        convert_to_edge_list(self)
    }

    /// Consumes the graph, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<V>> {
        self.rows
    }
}

impl<V: VertexId> TryFrom<Vec<Vec<V>>> for AdjacencyList<V> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<V>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<V: Serialize> Serialize for AdjacencyList<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for AdjacencyList<V>
where
    V: VertexId + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<V>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(D::Error::custom)
    }
}

/// One line per vertex: `"<vertex> : "` then `"<neighbor> "` for each neighbor.
impl<V: VertexId> fmt::Display for AdjacencyList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in self.vertices() {
            write!(f, "{vertex} : ")?;
            for neighbor in neighbors {
                write!(f, "{neighbor} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
