//! Fixture types for the pipeline property tests.

use test_strategy::Arbitrary;

use crate::GraphInput;

/// Topology used when generating a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// A bare spanning tree: the MST is the only spanning tree.
    #[weight(1)]
    Tree,
    /// A spanning tree plus a handful of chords.
    #[weight(3)]
    Sparse,
    /// Most vertex pairs joined, up to the scale's edge cap.
    #[weight(2)]
    Dense,
    /// Weights drawn from a pool of one or two values, so that many
    /// spanning trees share the minimum cost.
    #[weight(3)]
    TiedWeights,
    /// Parallel edges, exact repeats and self-loops over a spanning tree.
    #[weight(2)]
    Parallel,
    /// Two or more components with no edge between them.
    #[weight(1)]
    Disconnected,
}

/// Bounds on generated graph size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum FixtureScale {
    /// Few enough edges to enumerate every spanning tree.
    Small,
    /// Larger graphs, checked against the edge-exclusion oracle.
    Medium,
}

impl FixtureScale {
    /// Inclusive vertex count range.
    pub(super) const fn vertex_range(self) -> (usize, usize) {
        match self {
            Self::Small => (1, 8),
            Self::Medium => (8, 40),
        }
    }

    /// Cap on the number of raw input triples.
    pub(super) const fn max_edges(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Medium => 120,
        }
    }
}

/// A generated graph together with the parameters that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices, numbered from 1.
    pub vertex_count: usize,
    /// Raw `(u, v, w)` triples in input order.
    pub triples: Vec<(usize, usize, i64)>,
    /// Topology used during generation.
    pub shape: GraphShape,
    /// Size bounds used during generation.
    pub scale: FixtureScale,
}

impl GraphFixture {
    /// Builds the pipeline input for this fixture.
    pub(super) fn graph(&self) -> GraphInput {
        GraphInput::new(self.vertex_count, self.triples.iter().copied())
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, scale={:?}, vertices={}, edges={}",
            self.shape,
            self.scale,
            self.vertex_count,
            self.triples.len(),
        )
    }
}
