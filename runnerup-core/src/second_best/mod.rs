//! Second-best spanning tree selection.
//!
//! Every spanning tree other than the MST can be reached from it by a
//! sequence of single-edge swaps, and the cheapest alternative needs only
//! one: add a non-tree edge `(a, b, w)` and drop the heaviest tree edge on
//! the path from `a` to `b`. The selector evaluates that swap for every
//! non-tree edge and keeps the cheapest.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::{
    Edge, PathMaxima, Result, SpanningTree, TreeStep, error::RunnerupError,
    graph::check_endpoints,
};

/// The single-edge exchange that turns the MST into the second-best tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Swap {
    /// Non-tree edge brought into the tree.
    pub added: Edge,
    /// Tree edge dropped from the cycle closed by `added`.
    pub removed: TreeStep,
}

/// Cost of the second-best spanning tree and the swap producing it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SecondBest {
    /// Total weight of the second-best spanning tree.
    pub cost: i64,
    /// Exchange applied to the MST.
    pub swap: Swap,
}

/// Picks the cheapest single-edge swap over every non-tree edge.
///
/// Tree membership is decided by the `(weight, source, target)` triple, so
/// a parallel edge with a different weight is a candidate. Among candidates
/// of equal cost the earliest in `edges` wins. Returns `Ok(None)` when no
/// non-tree edge exists, i.e. the graph has exactly one spanning tree.
///
/// # Errors
/// Returns [`RunnerupError::InvalidVertex`] for the first edge with an
/// endpoint outside the tree, and [`RunnerupError::CostOverflow`] when a
/// candidate cost does not fit in an `i64`.
///
/// # Panics
/// Panics when `maxima` was built from a tree with fewer vertices than
/// `tree`.
///
/// # Examples
/// ```
/// use runnerup_core::{GraphInput, PathMaxima, PathQuery, TieBreak, kruskal, select_second_best};
///
/// let graph = GraphInput::new(3, [(1, 2, 1), (2, 3, 2), (1, 3, 5)]);
/// let edges = graph.validated_edges()?;
/// let tree = kruskal(3, &edges, TieBreak::InputOrder)?;
/// let maxima = PathMaxima::build(&tree, 1, PathQuery::ParentWalk)?;
/// let best = select_second_best(&edges, &tree, &maxima)?.expect("a swap exists");
/// assert_eq!(best.cost, 6);
/// assert_eq!(best.swap.removed.weight, 2);
/// # Ok::<(), runnerup_core::RunnerupError>(())
/// ```
#[instrument(
    name = "second_best.select",
    err,
    skip_all,
    fields(edges = edges.len(), mst_cost = tree.cost()),
)]
pub fn select_second_best(
    edges: &[Edge],
    tree: &SpanningTree,
    maxima: &PathMaxima,
) -> Result<Option<SecondBest>> {
    let tree_triples: HashSet<_> = tree.edges().iter().map(Edge::triple).collect();
    let mut best: Option<SecondBest> = None;
    let mut candidates = 0_usize;

    for (edge_index, edge) in edges.iter().enumerate() {
        check_endpoints(edge, tree.vertex_count(), edge_index)?;
        if edge.is_self_loop() || tree_triples.contains(&edge.triple()) {
            continue;
        }
        let Some(removed) = maxima.heaviest_edge_on_path(edge.source(), edge.target()) else {
            continue;
        };
        candidates += 1;

        let cost = swap_cost(tree.cost(), removed.weight, edge.weight())?;
        if best.is_none_or(|current| cost < current.cost) {
            best = Some(SecondBest {
                cost,
                swap: Swap {
                    added: *edge,
                    removed,
                },
            });
        }
    }

    debug!(
        candidates,
        found = best.is_some(),
        "second-best selection finished"
    );
    Ok(best)
}

fn swap_cost(mst_cost: i64, removed: i64, added: i64) -> Result<i64> {
    let widened = i128::from(mst_cost) - i128::from(removed) + i128::from(added);
    i64::try_from(widened).map_err(|_| RunnerupError::CostOverflow)
}
