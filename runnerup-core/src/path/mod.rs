//! Maximum edge weight on tree paths.
//!
//! [`PathMaxima`] roots a spanning tree with one iterative depth-first
//! traversal and records, for every vertex, its parent, the weight of the
//! edge to that parent, and its depth. Queries walk the deeper endpoint
//! towards the root until both endpoints meet, tracking the heaviest edge
//! crossed. The optional [`PathQuery::Lifting`] index answers the same
//! queries with binary lifting.

mod lifting;

use tracing::{debug, instrument};

use crate::{Result, SpanningTree, error::RunnerupError};

use self::lifting::LiftingTable;

/// Strategy used to answer path-maximum queries.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PathQuery {
    /// Walk parent links; linear in the path length per query.
    #[default]
    ParentWalk,
    /// Precompute a binary-lifting table; logarithmic per query.
    Lifting,
}

/// A tree edge seen from its lower endpoint.
///
/// Vertices use the public 1-based numbering.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeStep {
    /// The endpoint further from the traversal root.
    pub child: usize,
    /// The endpoint closer to the traversal root.
    pub parent: usize,
    /// Weight of the tree edge.
    pub weight: i64,
}

/// Keeps the first step unless the second is strictly heavier.
pub(crate) fn heavier(current: Option<TreeStep>, candidate: Option<TreeStep>) -> Option<TreeStep> {
    match (current, candidate) {
        (Some(best), Some(step)) if step.weight > best.weight => Some(step),
        (None, step) => step,
        (best, _) => best,
    }
}

/// Per-vertex `(neighbour, weight)` lists of a spanning tree, zero-based.
#[derive(Clone, Debug)]
pub(crate) struct TreeAdjacency {
    neighbours: Vec<Vec<(usize, i64)>>,
}

impl TreeAdjacency {
    pub(crate) fn from_tree(tree: &SpanningTree) -> Self {
        let mut neighbours = vec![Vec::new(); tree.vertex_count()];
        for edge in tree.edges() {
            let (source, target) = edge.indices();
            neighbours[source].push((target, edge.weight()));
            neighbours[target].push((source, edge.weight()));
        }
        Self { neighbours }
    }

    pub(crate) fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub(crate) fn neighbours(&self, vertex: usize) -> &[(usize, i64)] {
        &self.neighbours[vertex]
    }
}

/// Rooted parent/depth table over a spanning tree.
///
/// # Examples
/// ```
/// use runnerup_core::{GraphInput, PathMaxima, PathQuery, TieBreak, kruskal};
///
/// let graph = GraphInput::new(4, [(1, 2, 5), (2, 3, 1), (3, 4, 3)]);
/// let tree = kruskal(4, &graph.validated_edges()?, TieBreak::InputOrder)?;
/// let maxima = PathMaxima::build(&tree, 1, PathQuery::ParentWalk)?;
/// assert_eq!(maxima.max_edge_on_path(1, 4), Some(5));
/// assert_eq!(maxima.max_edge_on_path(3, 4), Some(3));
/// assert_eq!(maxima.max_edge_on_path(2, 2), None);
/// # Ok::<(), runnerup_core::RunnerupError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PathMaxima {
    root: usize,
    parent: Vec<usize>,
    parent_weight: Vec<i64>,
    depth: Vec<usize>,
    lifting: Option<LiftingTable>,
}

impl PathMaxima {
    /// Roots `tree` at the 1-based vertex `root` and prepares queries.
    ///
    /// # Errors
    /// Returns [`RunnerupError::InvalidRoot`] when `root` is not a vertex of
    /// the tree.
    #[instrument(
        name = "path.build",
        err,
        skip(tree),
        fields(vertices = tree.vertex_count()),
    )]
    pub fn build(tree: &SpanningTree, root: usize, query: PathQuery) -> Result<Self> {
        let vertex_count = tree.vertex_count();
        if root == 0 || root > vertex_count {
            return Err(RunnerupError::InvalidRoot { root, vertex_count });
        }

        let adjacency = TreeAdjacency::from_tree(tree);
        let mut maxima = Self::traverse(&adjacency, root - 1);
        if query == PathQuery::Lifting {
            maxima.lifting = Some(LiftingTable::new(
                &maxima.parent,
                &maxima.parent_weight,
                &maxima.depth,
            ));
        }
        debug!(
            height = maxima.depth.iter().copied().max().unwrap_or(0),
            "path index built"
        );
        Ok(maxima)
    }

    fn traverse(adjacency: &TreeAdjacency, root: usize) -> Self {
        let len = adjacency.len();
        let mut parent: Vec<usize> = (0..len).collect();
        let mut parent_weight = vec![0; len];
        let mut depth = vec![0; len];
        let mut visited = vec![false; len];

        let mut stack = vec![root];
        visited[root] = true;
        while let Some(vertex) = stack.pop() {
            for &(next, weight) in adjacency.neighbours(vertex) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                parent[next] = vertex;
                parent_weight[next] = weight;
                depth[next] = depth[vertex] + 1;
                stack.push(next);
            }
        }

        Self {
            root,
            parent,
            parent_weight,
            depth,
            lifting: None,
        }
    }

    /// The 1-based traversal root.
    #[must_use]
    pub const fn root(&self) -> usize {
        self.root + 1
    }

    /// The 1-based parent of `vertex`, or `None` for the root.
    ///
    /// # Panics
    /// Panics when `vertex` is outside the tree.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        let index = vertex - 1;
        (index != self.root).then(|| self.parent[index] + 1)
    }

    /// Number of edges between `vertex` and the root.
    ///
    /// # Panics
    /// Panics when `vertex` is outside the tree.
    #[must_use]
    pub fn depth(&self, vertex: usize) -> usize {
        self.depth[vertex - 1]
    }

    /// Returns `true` when queries use the binary-lifting index.
    #[must_use]
    pub const fn uses_lifting(&self) -> bool {
        self.lifting.is_some()
    }

    /// Maximum edge weight on the tree path between `u` and `v`.
    ///
    /// `None` means the path is empty (`u == v`); it compares below every
    /// real weight.
    ///
    /// # Panics
    /// Panics when either vertex is outside the tree.
    #[must_use]
    pub fn max_edge_on_path(&self, u: usize, v: usize) -> Option<i64> {
        self.heaviest_edge_on_path(u, v).map(|step| step.weight)
    }

    /// The heaviest tree edge on the path between `u` and `v`.
    ///
    /// When several edges share the maximum weight, which one is returned
    /// depends on the query strategy.
    ///
    /// # Panics
    /// Panics when either vertex is outside the tree.
    #[must_use]
    pub fn heaviest_edge_on_path(&self, u: usize, v: usize) -> Option<TreeStep> {
        match &self.lifting {
            Some(table) => table.heaviest(&self.depth, u - 1, v - 1),
            None => self.walk(u - 1, v - 1),
        }
    }

    fn walk(&self, mut left: usize, mut right: usize) -> Option<TreeStep> {
        let mut best = None;
        while left != right {
            if self.depth[left] < self.depth[right] {
                std::mem::swap(&mut left, &mut right);
            }
            best = heavier(best, Some(self.step(left)));
            left = self.parent[left];
        }
        best
    }

    fn step(&self, child: usize) -> TreeStep {
        TreeStep {
            child: child + 1,
            parent: self.parent[child] + 1,
            weight: self.parent_weight[child],
        }
    }
}
