//! Edges and edge lists.

use core::fmt;
use core::ops::Index;
use core::slice;

use serde::{Deserialize, Serialize};

/// A directed edge `source -> target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge<V = i64> {
    /// Vertex the edge leaves.
    pub source: V,
    /// Vertex the edge enters.
    pub target: V,
}

impl<V> Edge<V> {
    /// Creates the edge `source -> target`.
    #[inline]
    pub const fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    /// Splits the edge into `(source, target)`.
    #[inline]
    pub fn into_pair(self) -> (V, V) {
        (self.source, self.target)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    #[inline]
    fn from((source, target): (V, V)) -> Self {
        Self::new(source, target)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// An ordered sequence of edges.
///
/// Order is significant and duplicates are kept; an edge list produced from an
/// adjacency list is grouped by ascending source, each group in row order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeList<V = i64> {
    edges: Vec<Edge<V>>,
}

impl<V> EdgeList<V> {
    /// Creates an empty edge list.
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Creates an empty edge list with room for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Appends an edge.
    #[inline]
    pub fn push(&mut self, edge: Edge<V>) {
        self.edges.push(edge);
    }

    /// Number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the edges in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Edge<V>> {
        self.edges.iter()
    }

    /// The edges as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Consumes the list, returning the underlying vector.
    pub fn into_inner(self) -> Vec<Edge<V>> {
        self.edges
    }
}

impl<V: Copy> EdgeList<V> {
    /// The edges as `(source, target)` pairs.
    pub fn to_pairs(&self) -> Vec<(V, V)> {
        self.edges.iter().copied().map(Edge::into_pair).collect()
    }
}

impl<V> From<Vec<Edge<V>>> for EdgeList<V> {
    fn from(edges: Vec<Edge<V>>) -> Self {
        Self { edges }
    }
}

impl<V> FromIterator<Edge<V>> for EdgeList<V> {
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for EdgeList<V> {
    type Item = Edge<V>;
    type IntoIter = std::vec::IntoIter<Edge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a EdgeList<V> {
    type Item = &'a Edge<V>;
    type IntoIter = slice::Iter<'a, Edge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl<V> Index<usize> for EdgeList<V> {
    type Output = Edge<V>;

    #[inline]
    fn index(&self, index: usize) -> &Edge<V> {
        &self.edges[index]
    }
}

/// One `(source, target)` per line.
impl<V: fmt::Display> fmt::Display for EdgeList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
