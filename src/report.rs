//! Console rendering of a graph next to its edge list.

use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::graph::{AdjacencyList, EdgeList, VertexId};

/// The sample graph printed when no input is given.
///
/// ```text
/// 0 -> 1, 2
/// 1 -> 0, 2, 3
/// 2 -> 0, 1, 4, 5
/// 3 -> 1
/// 4 -> 2
/// 5 -> 2
/// ```
///
/// # Errors
///
/// Never in practice; six vertices fit `i64`.
pub fn example_graph() -> Result<AdjacencyList> {
    AdjacencyList::from_rows(vec![
        vec![1, 2],
        vec![0, 2, 3],
        vec![0, 1, 4, 5],
        vec![1],
        vec![2],
        vec![2],
    ])
}

/// Output encoding of a [`Report`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Headed, line-oriented text.
    #[default]
    Text,
    /// A single JSON object with `adjacency` and `edges`.
    Json,
}

/// A graph paired with the edge list derived from it.
#[derive(Debug, Serialize)]
pub struct Report<'a, V = i64> {
    /// The input graph.
    #[serde(rename = "adjacency")]
    pub graph: &'a AdjacencyList<V>,
    /// Its edges.
    pub edges: &'a EdgeList<V>,
}

impl<'a, V: VertexId> Report<'a, V> {
    /// Pairs `graph` with `edges`.
    pub fn new(graph: &'a AdjacencyList<V>, edges: &'a EdgeList<V>) -> Self {
        Self { graph, edges }
    }
}

impl<V: VertexId> fmt::Display for Report<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "For the following Adjacency list:")?;
        write!(f, "{}", self.graph)?;
        writeln!(f, "Below is the Edge list:")?;
        write!(f, "{}", self.edges)
    }
}

/// Writes `report` to `out` in the given format.
///
/// # Errors
///
/// Propagates write failures and JSON encoding errors.
pub fn write_report<W, V>(mut out: W, report: &Report<'_, V>, format: OutputFormat) -> Result<()>
where
    W: Write,
    V: VertexId + Serialize,
{
    match format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Renders the report of the built-in example to a string.
///
/// # Errors
///
/// See [`example_graph`].
pub fn example_report() -> Result<String> {
    let graph = example_graph()?;
    let edges = graph.to_edge_list();
    Ok(Report::new(&graph, &edges).to_string())
}

/// Convenience for writing to a locked stdout.
///
/// # Errors
///
/// See [`write_report`].
pub fn print_report<V>(report: &Report<'_, V>, format: OutputFormat) -> Result<()>
where
    V: VertexId + Serialize,
{
    let stdout = io::stdout();
    write_report(stdout.lock(), report, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each adjacency line keeps the separator after its last neighbor.
    const EXPECTED: &str = concat!(
        "For the following Adjacency list:\n",
        "0 : 1 2 \n",
        "1 : 0 2 3 \n",
        "2 : 0 1 4 5 \n",
        "3 : 1 \n",
        "4 : 2 \n",
        "5 : 2 \n",
        "Below is the Edge list:\n",
        "(0, 1)\n",
        "(0, 2)\n",
        "(1, 0)\n",
        "(1, 2)\n",
        "(1, 3)\n",
        "(2, 0)\n",
        "(2, 1)\n",
        "(2, 4)\n",
        "(2, 5)\n",
        "(3, 1)\n",
        "(4, 2)\n",
        "(5, 2)\n",
    );

    #[test]
    fn example_report_matches_reference_output() {
        assert_eq!(example_report().unwrap(), EXPECTED);
    }

    #[test]
    fn text_format_writes_display() {
        let graph = example_graph().unwrap();
        let edges = graph.to_edge_list();
        let mut buf = Vec::new();
        write_report(&mut buf, &Report::new(&graph, &edges), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), EXPECTED);
    }

    #[test]
    fn json_format_has_both_representations() {
        let graph = AdjacencyList::<i64>::from_rows(vec![vec![1], vec![]]).unwrap();
        let edges = graph.to_edge_list();
        let mut buf = Vec::new();
        write_report(&mut buf, &Report::new(&graph, &edges), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "adjacency": [[1], []],
                "edges": [{"source": 0, "target": 1}],
            })
        );
    }
}
