//! Loading adjacency lists from JSON.
//!
//! The accepted shape is a JSON array of integer arrays, e.g. `[[1,2],[0],[]]`.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::graph::{AdjacencyList, VertexId};

/// Reads an adjacency list from `reader`.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] for malformed input or non-integer entries,
/// [`crate::Error::Io`] when reading fails.
pub fn read_adjacency<R, V>(reader: R) -> Result<AdjacencyList<V>>
where
    R: Read,
    V: VertexId + DeserializeOwned,
{
    let graph: AdjacencyList<V> = serde_json::from_reader(reader)?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "read adjacency list"
    );
    Ok(graph)
}

/// Loads an adjacency list from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// See [`read_adjacency`]; opening the file may also fail with
/// [`crate::Error::Io`].
pub fn load_adjacency<V>(path: &Path) -> Result<AdjacencyList<V>>
where
    V: VertexId + DeserializeOwned,
{
    if path.as_os_str() == "-" {
        debug!("reading adjacency list from stdin");
        return read_adjacency(io::stdin().lock());
    }
    debug!(path = %path.display(), "reading adjacency list");
    let file = File::open(path)?;
    read_adjacency(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn reads_signed_rows() {
        let graph: AdjacencyList<i64> = read_adjacency(&b"[[1, -2], [], [0]]"[..]).unwrap();
        assert_eq!(graph.rows(), &[vec![1, -2], vec![], vec![0]]);
    }

    #[test]
    fn rejects_non_integer_entries() {
        let err = read_adjacency::<_, i64>(&b"[[1, \"two\"]]"[..]).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn rejects_flat_arrays() {
        let err = read_adjacency::<_, i64>(&b"[1, 2, 3]"[..]).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_adjacency::<i64>(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
