//! Adjacency list to edge list conversion.
//!
//! The conversion is a single pass: vertices in ascending order, each row in
//! its stored order, one edge per neighbor entry. Nothing is checked, dropped,
//! or merged, so `edges.len() == graph.edge_count()` always holds and any
//! out-of-range or negative neighbor shows up verbatim as an edge target.

use tracing::debug;

use crate::graph::adjacency::AdjacencyList;
use crate::graph::edge::{Edge, EdgeList};
use crate::graph::vertex::VertexId;

/// How a conversion is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded pass.
    #[default]
    Sequential,
    /// Rows split across the rayon pool. Without the `parallel` feature this
    /// runs sequentially.
    Parallel,
}

/// Converts an adjacency list into its edge list.
///
/// Edges are grouped by ascending source vertex; within a group they follow
/// the row order. Runs in \(O(n + m)\) time with a single allocation of
/// exactly `graph.edge_count()` edges.
///
/// ```
/// use edgelist::{convert_to_edge_list, AdjacencyList, Edge};
///
/// let graph = AdjacencyList::<i64>::from_rows(vec![vec![1], vec![0, 1]]).unwrap();
/// let edges = convert_to_edge_list(&graph);
/// assert_eq!(edges.as_slice(), &[Edge::new(0, 1), Edge::new(1, 0), Edge::new(1, 1)]);
/// ```
pub fn convert_to_edge_list<V: VertexId>(graph: &AdjacencyList<V>) -> EdgeList<V> {
    let mut edges = EdgeList::with_capacity(graph.edge_count());

    for (source, neighbors) in graph.vertices() {
        for &target in neighbors {
            edges.push(Edge::new(source, target));
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = edges.len(),
        "converted adjacency list"
    );
    edges
}

/// Prefix sums of out-degrees, of length `n + 1`.
///
/// The edges leaving vertex `i` occupy `offsets[i]..offsets[i + 1]` of the
/// list returned by [`convert_to_edge_list`].
pub fn edge_offsets<V: VertexId>(graph: &AdjacencyList<V>) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(graph.vertex_count() + 1);
    offsets.push(0);

    let mut total_edges = 0usize;
    for row in graph.rows() {
        total_edges += row.len();
        offsets.push(total_edges);
    }
    offsets
}

/// Parallel variant of [`convert_to_edge_list`].
///
/// Produces the same edges in the same order; rows are expanded on the rayon
/// pool and collected back in vertex order.
#[cfg(feature = "parallel")]
pub fn par_convert_to_edge_list<V: VertexId>(graph: &AdjacencyList<V>) -> EdgeList<V> {
    use rayon::prelude::*;

    let edges: Vec<Edge<V>> = graph
        .rows()
        .par_iter()
        .enumerate()
        .flat_map_iter(|(position, neighbors)| {
            // Always `Some` for a graph built through `AdjacencyList::from_rows`.
            V::from_position(position)
                .into_iter()
                .flat_map(move |source| neighbors.iter().map(move |&target| Edge::new(source, target)))
        })
        .collect();

    debug_assert_eq!(edges.len(), graph.edge_count());
    debug!(
        vertices = graph.vertex_count(),
        edges = edges.len(),
        threads = rayon::current_num_threads(),
        "converted adjacency list in parallel"
    );
    EdgeList::from(edges)
}

/// Converts using the requested [`Strategy`].
pub fn convert_with<V: VertexId>(graph: &AdjacencyList<V>, strategy: Strategy) -> EdgeList<V> {
    match strategy {
        Strategy::Sequential => convert_to_edge_list(graph),
        #[cfg(feature = "parallel")]
        Strategy::Parallel => par_convert_to_edge_list(graph),
        #[cfg(not(feature = "parallel"))]
        Strategy::Parallel => {
            debug!("built without the `parallel` feature; converting sequentially");
            convert_to_edge_list(graph)
        }
    }
}

impl<V: VertexId> From<&AdjacencyList<V>> for EdgeList<V> {
    fn from(graph: &AdjacencyList<V>) -> Self {
        convert_to_edge_list(graph)
    }
}

#[cfg(test)]
mod tests;
