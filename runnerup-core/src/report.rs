//! Result types returned by the pipeline.

use crate::{Edge, Result, SecondBest, SpanningTree, error::RunnerupError};

/// Minimum spanning tree of a graph plus its best alternative, if any.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecondBestReport {
    mst: SpanningTree,
    second_best: Option<SecondBest>,
}

impl SecondBestReport {
    pub(crate) const fn new(mst: SpanningTree, second_best: Option<SecondBest>) -> Self {
        Self { mst, second_best }
    }

    /// The minimum spanning tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mst(&self) -> &SpanningTree { &self.mst }

    /// Cost of the minimum spanning tree.
    #[must_use]
    pub const fn mst_cost(&self) -> i64 {
        self.mst.cost()
    }

    /// The second-best tree, or `None` when the MST is the only spanning
    /// tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second_best(&self) -> Option<&SecondBest> { self.second_best.as_ref() }

    /// Cost of the second-best tree, if one exists.
    #[must_use]
    pub fn second_best_cost(&self) -> Option<i64> {
        self.second_best.map(|best| best.cost)
    }

    /// Returns the second-best tree or an error when none exists.
    ///
    /// # Errors
    /// Returns [`RunnerupError::NoAlternativeTree`] when the graph has a
    /// single spanning tree.
    pub fn require_second_best(&self) -> Result<SecondBest> {
        self.second_best.ok_or(RunnerupError::NoAlternativeTree {
            mst_cost: self.mst.cost(),
        })
    }

    /// Edges of the second-best tree: the MST minus the removed edge, plus
    /// the added one.
    ///
    /// # Examples
    /// ```
    /// use runnerup_core::{GraphInput, Runnerup};
    ///
    /// let graph = GraphInput::new(3, [(1, 2, 1), (2, 3, 2), (1, 3, 5)]);
    /// let report = Runnerup::default().run(&graph)?;
    /// let edges = report.second_best_edges().expect("an alternative exists");
    /// let total: i64 = edges.iter().map(|edge| edge.weight()).sum();
    /// assert_eq!(Some(total), report.second_best_cost());
    /// # Ok::<(), runnerup_core::RunnerupError>(())
    /// ```
    #[must_use]
    pub fn second_best_edges(&self) -> Option<Vec<Edge>> {
        let best = self.second_best?;
        let removed = Edge::new(best.swap.removed.child, best.swap.removed.parent, 0, 0);
        let mut edges: Vec<Edge> = self
            .mst
            .edges()
            .iter()
            .filter(|edge| {
                (edge.source(), edge.target()) != (removed.source(), removed.target())
            })
            .copied()
            .collect();
        edges.push(best.swap.added);
        Some(edges)
    }
}
