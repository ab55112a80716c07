//! Tests for adjacency list to edge list conversion.

use super::*;

fn graph(rows: Vec<Vec<i64>>) -> AdjacencyList<i64> {
    AdjacencyList::from_rows(rows).unwrap()
}

#[test]
fn test_reference_graph() {
    let g = graph(vec![
        vec![1, 2],
        vec![0, 2, 3],
        vec![0, 1, 4, 5],
        vec![1],
        vec![2],
        vec![2],
    ]);
    let edges = convert_to_edge_list(&g);

    assert_eq!(
        edges.to_pairs(),
        vec![
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (1, 3),
            (2, 0),
            (2, 1),
            (2, 4),
            (2, 5),
            (3, 1),
            (4, 2),
            (5, 2),
        ]
    );
}

#[test]
fn test_empty_inputs() {
    assert!(convert_to_edge_list(&graph(Vec::new())).is_empty());
    assert!(convert_to_edge_list(&graph(vec![vec![], vec![], vec![]])).is_empty());
}

#[test]
fn test_row_order_and_duplicates_kept() {
    // 0 -> 2, 1, 2, 0
    let edges = convert_to_edge_list(&graph(vec![vec![2, 1, 2, 0], vec![], vec![]]));
    assert_eq!(edges.to_pairs(), vec![(0, 2), (0, 1), (0, 2), (0, 0)]);
}

#[test]
fn test_unchecked_targets_pass_through() {
    // Negative and out-of-range neighbors are not rejected.
    let edges = convert_to_edge_list(&graph(vec![vec![-1], vec![99, 1]]));
    assert_eq!(edges.to_pairs(), vec![(0, -1), (1, 99), (1, 1)]);
}

#[test]
fn test_input_left_untouched_and_output_repeatable() {
    let g = graph(vec![vec![1], vec![0]]);
    let before = g.clone();
    let first = convert_to_edge_list(&g);
    let second = convert_to_edge_list(&g);
    assert_eq!(g, before);
    assert_eq!(first, second);
}

#[test]
fn test_unsigned_vertex_type() {
    let g = AdjacencyList::<u16>::from_rows(vec![vec![1], vec![]]).unwrap();
    assert_eq!(g.to_edge_list().as_slice(), &[Edge::new(0_u16, 1)]);
    assert_eq!(EdgeList::from(&g).len(), 1);
}

#[test]
fn test_edge_offsets_partition_edges() {
    let g = graph(vec![vec![1, 2], vec![], vec![0, 1, 2]]);
    let offsets = edge_offsets(&g);
    assert_eq!(offsets, vec![0, 2, 2, 5]);

    let edges = convert_to_edge_list(&g);
    for (position, w) in offsets.windows(2).enumerate() {
        let slice = &edges.as_slice()[w[0]..w[1]];
        assert_eq!(slice.len(), g.out_degree(position).unwrap());
        assert!(slice.iter().all(|e| e.source == position as i64));
    }
}

#[test]
fn test_edge_offsets_of_empty_graph() {
    assert_eq!(edge_offsets(&graph(Vec::new())), vec![0]);
}

#[test]
fn test_strategies_agree() {
    let g = graph(vec![vec![3, 1], vec![2], vec![], vec![0, 0, 1]]);
    assert_eq!(
        convert_with(&g, Strategy::Sequential),
        convert_with(&g, Strategy::Parallel)
    );
    assert_eq!(Strategy::default(), Strategy::Sequential);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential_on_large_graph() {
    let n = 2_000usize;
    let rows: Vec<Vec<i64>> = (0..n)
        .map(|i| (0..(i % 7)).map(|j| ((i * 31 + j * 17) % n) as i64).collect())
        .collect();
    let g = graph(rows);
    assert_eq!(par_convert_to_edge_list(&g), convert_to_edge_list(&g));
}
