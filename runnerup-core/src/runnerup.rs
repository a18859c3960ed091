//! Pipeline orchestration.
//!
//! [`Runnerup`] validates a [`GraphInput`], builds its minimum spanning tree,
//! roots the tree for path-maximum queries, and selects the cheapest
//! single-edge swap.

use tracing::{Span, field, info, instrument};

use crate::{
    GraphInput, PathMaxima, PathQuery, Result, SecondBestReport, TieBreak, builder::DEFAULT_ROOT,
    kruskal, select_second_best,
};

/// Entry point for computing minimum and second-best spanning tree costs.
///
/// # Examples
/// ```
/// use runnerup_core::{GraphInput, Runnerup};
///
/// let graph = GraphInput::new(
///     4,
///     [(1, 2, 1), (2, 3, 2), (3, 4, 3), (4, 1, 4), (1, 3, 5)],
/// );
/// let report = Runnerup::default().run(&graph)?;
/// assert_eq!(report.mst_cost(), 6);
/// assert_eq!(report.second_best_cost(), Some(7));
/// # Ok::<(), runnerup_core::RunnerupError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runnerup {
    tie_break: TieBreak,
    path_query: PathQuery,
    root: usize,
}

impl Default for Runnerup {
    fn default() -> Self {
        Self::new(TieBreak::default(), PathQuery::default(), DEFAULT_ROOT)
    }
}

impl Runnerup {
    pub(crate) const fn new(tie_break: TieBreak, path_query: PathQuery, root: usize) -> Self {
        Self {
            tie_break,
            path_query,
            root,
        }
    }

    /// Returns the tie-break used during Kruskal's sort.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Returns the path-maximum query strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn path_query(&self) -> PathQuery { self.path_query }

    /// Returns the 1-based traversal root.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> usize { self.root }

    /// Runs the full pipeline on `graph`.
    ///
    /// A graph with a single spanning tree is not an error here: the report
    /// carries `None` as its second-best tree.
    ///
    /// # Errors
    /// Returns [`RunnerupError::EmptyGraph`](crate::RunnerupError::EmptyGraph)
    /// and [`RunnerupError::InvalidVertex`](crate::RunnerupError::InvalidVertex)
    /// for malformed input,
    /// [`RunnerupError::Disconnected`](crate::RunnerupError::Disconnected)
    /// when no spanning tree exists,
    /// [`RunnerupError::InvalidRoot`](crate::RunnerupError::InvalidRoot) when
    /// the configured root is outside the graph, and
    /// [`RunnerupError::CostOverflow`](crate::RunnerupError::CostOverflow)
    /// when a cost does not fit in an `i64`.
    #[instrument(
        name = "runnerup.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edges().len(),
            tie_break = ?self.tie_break,
            path_query = ?self.path_query,
            mst_cost = field::Empty,
        ),
    )]
    pub fn run(&self, graph: &GraphInput) -> Result<SecondBestReport> {
        let edges = graph.validated_edges()?;
        let tree = kruskal(graph.vertex_count(), &edges, self.tie_break)?;
        Span::current().record("mst_cost", tree.cost());

        let maxima = PathMaxima::build(&tree, self.root, self.path_query)?;
        let second_best = select_second_best(&edges, &tree, &maxima)?;

        info!(
            mst_cost = tree.cost(),
            second_best_cost = second_best.map(|best| best.cost),
            "second-best search completed"
        );
        Ok(SecondBestReport::new(tree, second_best))
    }
}
