//! Disjoint-set forest used by Kruskal's scan.
//!
//! Union by rank keeps trees shallow and `find` compresses every visited
//! node onto the root, both iteratively so deep chains cannot overflow the
//! stack.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` when they already share a set.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut root = self.find(left);
        let mut child = self.find(right);
        if root == child {
            return false;
        }
        if self.rank[root] < self.rank[child] {
            std::mem::swap(&mut root, &mut child);
        }
        self.parent[child] = root;
        if self.rank[root] == self.rank[child] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    pub(crate) fn same_set(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    pub(crate) const fn components(&self) -> usize {
        self.components
    }
}
