//! Minimum spanning tree construction.
//!
//! Kruskal's algorithm over a validated edge list: edges are sorted by
//! weight with a deterministic tie-break, then accepted greedily whenever
//! they join two different components of a disjoint-set forest.

mod union_find;

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{Edge, Result, error::RunnerupError, graph::check_endpoints};

use self::union_find::DisjointSet;

/// Orders edges of equal weight during the Kruskal sort.
///
/// The choice can change which of several equal-cost trees is selected,
/// but never the minimum or second-best cost.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TieBreak {
    /// Earlier input edges win ties.
    #[default]
    InputOrder,
    /// Ties are ordered by `(source, target)`, then by input order.
    Endpoints,
}

impl TieBreak {
    fn compare(self, left: &Edge, right: &Edge) -> Ordering {
        let by_weight = left.weight().cmp(&right.weight());
        match self {
            Self::InputOrder => by_weight,
            Self::Endpoints => by_weight
                .then_with(|| left.source().cmp(&right.source()))
                .then_with(|| left.target().cmp(&right.target())),
        }
        .then_with(|| left.sequence().cmp(&right.sequence()))
    }
}

/// A minimum spanning tree and its total cost.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    vertex_count: usize,
    cost: i64,
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// Number of vertices the tree spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> i64 { self.cost }

    /// Tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns `true` when an edge with the same `(weight, source, target)`
    /// triple belongs to the tree.
    #[must_use]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges
            .iter()
            .any(|tree_edge| tree_edge.triple() == edge.triple())
    }
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// `edges` would normally come from
/// [`GraphInput::validated_edges`](crate::GraphInput::validated_edges);
/// endpoints are checked again here and self-loops never join the tree.
/// The scan stops as soon as `vertex_count - 1` edges have been accepted.
///
/// # Errors
/// Returns [`RunnerupError::EmptyGraph`] when `vertex_count == 0`,
/// [`RunnerupError::InvalidVertex`] for the first edge with an endpoint
/// outside `1..=vertex_count`,
/// [`RunnerupError::Disconnected`] when fewer than `vertex_count - 1` edges
/// can be accepted, and [`RunnerupError::CostOverflow`] when the total does
/// not fit in an `i64`.
///
/// # Examples
/// ```
/// use runnerup_core::{GraphInput, TieBreak, kruskal};
///
/// let graph = GraphInput::new(3, [(1, 2, 1), (2, 3, 2), (1, 3, 3)]);
/// let edges = graph.validated_edges()?;
/// let tree = kruskal(graph.vertex_count(), &edges, TieBreak::InputOrder)?;
/// assert_eq!(tree.cost(), 3);
/// assert_eq!(tree.edges().len(), 2);
/// # Ok::<(), runnerup_core::RunnerupError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(edges),
    fields(vertices = vertex_count, edges = edges.len()),
)]
pub fn kruskal(vertex_count: usize, edges: &[Edge], tie_break: TieBreak) -> Result<SpanningTree> {
    if vertex_count == 0 {
        return Err(RunnerupError::EmptyGraph);
    }
    for (edge_index, edge) in edges.iter().enumerate() {
        check_endpoints(edge, vertex_count, edge_index)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by(|left, right| tie_break.compare(left, right));

    let wanted = vertex_count - 1;
    let mut components = DisjointSet::new(vertex_count);
    let mut tree_edges = Vec::with_capacity(wanted);
    let mut cost = 0_i64;

    for edge in &sorted {
        if tree_edges.len() == wanted {
            break;
        }
        let (source, target) = edge.indices();
        if components.same_set(source, target) {
            continue;
        }
        components.union(source, target);
        cost = cost
            .checked_add(edge.weight())
            .ok_or(RunnerupError::CostOverflow)?;
        tree_edges.push(*edge);
    }

    if tree_edges.len() < wanted {
        return Err(RunnerupError::Disconnected {
            vertex_count,
            components: components.components(),
        });
    }

    debug!(cost, accepted = tree_edges.len(), "minimum spanning tree built");
    Ok(SpanningTree {
        vertex_count,
        cost,
        edges: tree_edges,
    })
}
