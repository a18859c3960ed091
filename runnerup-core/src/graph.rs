//! Graph input and edge canonicalisation.
//!
//! Vertices are numbered `1..=vertex_count` on the public surface. Edges are
//! undirected and stored with `source <= target`; the input position is kept
//! as a `sequence` so that ties can be broken by input order.

use std::collections::HashSet;

use tracing::debug;

use crate::{Result, error::RunnerupError};

/// A weighted undirected edge in canonical form (`source <= target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
    sequence: usize,
}

impl Edge {
    /// Creates an edge from two endpoints, canonicalising their order.
    ///
    /// # Examples
    /// ```
    /// use runnerup_core::Edge;
    ///
    /// let edge = Edge::new(4, 1, 7, 0);
    /// assert_eq!((edge.source(), edge.target(), edge.weight()), (1, 4, 7));
    /// ```
    #[must_use]
    pub const fn new(left: usize, right: usize, weight: i64, sequence: usize) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
            sequence,
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns the position of the edge in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> usize { self.sequence }

    /// Returns `true` for an edge whose endpoints coincide.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The `(weight, source, target)` triple that identifies the edge.
    ///
    /// Two input edges with the same triple are the same edge; the input
    /// position does not take part in identity.
    #[must_use]
    pub const fn triple(&self) -> (i64, usize, usize) {
        (self.weight, self.source, self.target)
    }

    /// Zero-based endpoint indices for array-backed structures.
    pub(crate) const fn indices(&self) -> (usize, usize) {
        (self.source - 1, self.target - 1)
    }
}

/// A raw graph: a vertex count and `(u, v, w)` triples in input order.
///
/// # Examples
/// ```
/// use runnerup_core::GraphInput;
///
/// let graph = GraphInput::new(3, [(1, 2, 4), (2, 3, 1)]);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphInput {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl GraphInput {
    /// Creates a graph from `(u, v, w)` triples, numbering them in order.
    #[must_use]
    pub fn new(vertex_count: usize, triples: impl IntoIterator<Item = (usize, usize, i64)>) -> Self {
        let edges = triples
            .into_iter()
            .enumerate()
            .map(|(sequence, (u, v, w))| Edge::new(u, v, w, sequence))
            .collect();
        Self {
            vertex_count,
            edges,
        }
    }

    /// Number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Edges in input order, canonicalised but not validated.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Validates the graph and returns the edges that take part in the
    /// spanning-tree computation.
    ///
    /// Self-loops are dropped and repeated `(weight, source, target)`
    /// triples collapse onto their first occurrence. The result keeps input
    /// order.
    ///
    /// # Errors
    /// Returns [`RunnerupError::EmptyGraph`] when `vertex_count == 0` and
    /// [`RunnerupError::InvalidVertex`] for the first endpoint outside
    /// `1..=vertex_count`.
    pub fn validated_edges(&self) -> Result<Vec<Edge>> {
        if self.vertex_count == 0 {
            return Err(RunnerupError::EmptyGraph);
        }

        let mut seen = HashSet::with_capacity(self.edges.len());
        let mut accepted = Vec::with_capacity(self.edges.len());
        let mut skipped = 0_usize;
        for (edge_index, edge) in self.edges.iter().enumerate() {
            check_endpoints(edge, self.vertex_count, edge_index)?;
            if edge.is_self_loop() || !seen.insert(edge.triple()) {
                skipped += 1;
                continue;
            }
            accepted.push(*edge);
        }

        if skipped > 0 {
            debug!(skipped, "dropped self-loops and repeated edges");
        }
        Ok(accepted)
    }
}

/// Rejects an edge with an endpoint outside `1..=vertex_count`.
///
/// `source <= target` holds for every [`Edge`], so a zero endpoint is always
/// the source and an oversized one is always the target.
pub(crate) const fn check_endpoints(
    edge: &Edge,
    vertex_count: usize,
    edge_index: usize,
) -> Result<()> {
    let vertex = if edge.source == 0 {
        0
    } else if edge.target > vertex_count {
        edge.target
    } else {
        return Ok(());
    };
    Err(RunnerupError::InvalidVertex {
        vertex,
        vertex_count,
        edge_index,
    })
}
