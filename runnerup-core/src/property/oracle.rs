//! Reference oracles for second-best spanning tree costs.
//!
//! Both oracles work on the distinct edge set: self-loops dropped and
//! repeated `(weight, source, target)` triples collapsed, matching what the
//! pipeline treats as one edge.

use std::collections::HashSet;

use super::helpers::find_root;

/// A distinct edge as `(weight, source, target)` with `source < target`.
pub(super) type OracleEdge = (i64, usize, usize);

/// Costs reported by an oracle for a connected graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleOutcome {
    /// Minimum spanning tree cost.
    pub mst_cost: i64,
    /// Cheapest cost among the other spanning trees, if any exist.
    pub second_best_cost: Option<i64>,
}

/// Canonicalises and deduplicates raw triples, keeping first occurrences.
pub(super) fn distinct_edges(triples: &[(usize, usize, i64)]) -> Vec<OracleEdge> {
    let mut seen = HashSet::new();
    triples
        .iter()
        .filter(|(u, v, _)| u != v)
        .map(|&(u, v, w)| (w, u.min(v), u.max(v)))
        .filter(|edge| seen.insert(*edge))
        .collect()
}

/// Enumerates every `(n - 1)`-edge subset and keeps those forming a
/// spanning tree. Returns `None` when the graph is disconnected.
///
/// Only usable for a handful of edges; the subset count is `2^edges`.
pub(super) fn enumerate_spanning_trees(
    vertex_count: usize,
    edges: &[OracleEdge],
) -> Option<OracleOutcome> {
    assert!(edges.len() <= 16, "too many edges to enumerate: {}", edges.len());
    let tree_size = vertex_count - 1;
    let mut costs = Vec::new();
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != tree_size {
            continue;
        }
        let chosen: Vec<OracleEdge> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if joins_all(vertex_count, &chosen) {
            costs.push(chosen.iter().map(|(w, _, _)| *w).sum::<i64>());
        }
    }
    costs.sort_unstable();
    let (&mst_cost, rest) = costs.split_first()?;
    Some(OracleOutcome {
        mst_cost,
        second_best_cost: rest.first().copied(),
    })
}

/// Recomputes the MST once per MST edge with that edge removed and takes
/// the cheapest result. Returns `None` when the graph is disconnected.
pub(super) fn exclusion_oracle(vertex_count: usize, edges: &[OracleEdge]) -> Option<OracleOutcome> {
    let (mst_cost, used) = minimum_tree(vertex_count, edges, None)?;
    let second_best_cost = used
        .iter()
        .filter_map(|&excluded| minimum_tree(vertex_count, edges, Some(excluded)))
        .map(|(cost, _)| cost)
        .min();
    Some(OracleOutcome {
        mst_cost,
        second_best_cost,
    })
}

/// Number of connected components spanned by `edges`.
pub(super) fn component_count(vertex_count: usize, edges: &[OracleEdge]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(_, u, v) in edges {
        let left = find_root(&mut parent, u - 1);
        let right = find_root(&mut parent, v - 1);
        if left != right {
            parent[left] = right;
            components -= 1;
        }
    }
    components
}

fn joins_all(vertex_count: usize, edges: &[OracleEdge]) -> bool {
    component_count(vertex_count, edges) == 1
}

/// Plain Kruskal over `edges` minus the edge at `excluded`. Returns the
/// cost and the indices of the accepted edges.
fn minimum_tree(
    vertex_count: usize,
    edges: &[OracleEdge],
    excluded: Option<usize>,
) -> Option<(i64, Vec<usize>)> {
    let mut order: Vec<usize> = (0..edges.len())
        .filter(|&index| Some(index) != excluded)
        .collect();
    order.sort_by_key(|&index| edges[index].0);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut cost = 0_i64;
    let mut used = Vec::with_capacity(vertex_count.saturating_sub(1));
    for index in order {
        let (w, u, v) = edges[index];
        let left = find_root(&mut parent, u - 1);
        let right = find_root(&mut parent, v - 1);
        if left != right {
            parent[left] = right;
            cost += w;
            used.push(index);
        }
    }
    (used.len() + 1 == vertex_count).then_some((cost, used))
}
