//! Builder for configuring [`Runnerup`] instances.
//!
//! Exposes the tie-break, path-query strategy and traversal root used by the
//! pipeline. None of them changes the reported costs.

use crate::{PathQuery, TieBreak, runnerup::Runnerup};

/// Vertex used as the traversal root unless overridden.
pub const DEFAULT_ROOT: usize = 1;

/// Configures and constructs [`Runnerup`] instances.
///
/// # Examples
/// ```
/// use runnerup_core::{PathQuery, RunnerupBuilder, TieBreak};
///
/// let runnerup = RunnerupBuilder::new()
///     .with_tie_break(TieBreak::Endpoints)
///     .with_path_query(PathQuery::Lifting)
///     .with_root(3)
///     .build();
/// assert_eq!(runnerup.tie_break(), TieBreak::Endpoints);
/// assert_eq!(runnerup.path_query(), PathQuery::Lifting);
/// assert_eq!(runnerup.root(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerupBuilder {
    tie_break: TieBreak,
    path_query: PathQuery,
    root: usize,
}

impl Default for RunnerupBuilder {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            path_query: PathQuery::default(),
            root: DEFAULT_ROOT,
        }
    }
}

impl RunnerupBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use runnerup_core::{PathQuery, RunnerupBuilder, TieBreak};
    ///
    /// let builder = RunnerupBuilder::new();
    /// assert_eq!(builder.tie_break(), TieBreak::InputOrder);
    /// assert_eq!(builder.path_query(), PathQuery::ParentWalk);
    /// assert_eq!(builder.root(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how equal-weight edges are ordered during Kruskal's sort.
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Overrides the path-maximum query strategy.
    #[must_use]
    pub const fn with_path_query(mut self, path_query: PathQuery) -> Self {
        self.path_query = path_query;
        self
    }

    /// Overrides the 1-based traversal root.
    ///
    /// The root is checked against the graph when [`Runnerup::run`] is
    /// called.
    #[must_use]
    pub const fn with_root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }

    /// Returns the configured tie-break.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Returns the configured path-query strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn path_query(&self) -> PathQuery { self.path_query }

    /// Returns the configured traversal root.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> usize { self.root }

    /// Builds a [`Runnerup`] with the configured options.
    #[must_use]
    pub const fn build(self) -> Runnerup {
        Runnerup::new(self.tie_break, self.path_query, self.root)
    }
}
