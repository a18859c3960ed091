//! Binary-lifting index for path-maximum queries.
//!
//! `up[k][v]` is the `2^k`-th ancestor of `v` (the root maps to itself) and
//! `heaviest[k][v]` is the heaviest edge crossed by that jump. Indices are
//! zero-based; the root's `parent` entry is itself.

use super::{TreeStep, heavier};

#[derive(Clone, Debug)]
pub(super) struct LiftingTable {
    up: Vec<Vec<usize>>,
    heaviest: Vec<Vec<Option<TreeStep>>>,
}

impl LiftingTable {
    pub(super) fn new(parent: &[usize], parent_weight: &[i64], depth: &[usize]) -> Self {
        let len = parent.len();
        let levels = level_count(depth.iter().copied().max().unwrap_or(0));

        let base_steps = (0..len)
            .map(|child| {
                (parent[child] != child).then(|| TreeStep {
                    child: child + 1,
                    parent: parent[child] + 1,
                    weight: parent_weight[child],
                })
            })
            .collect();
        let mut up = vec![parent.to_vec()];
        let mut heaviest: Vec<Vec<Option<TreeStep>>> = vec![base_steps];

        for level in 1..levels {
            let previous_up = &up[level - 1];
            let previous_heaviest = &heaviest[level - 1];
            let next_up = (0..len).map(|v| previous_up[previous_up[v]]).collect();
            let next_heaviest = (0..len)
                .map(|v| heavier(previous_heaviest[v], previous_heaviest[previous_up[v]]))
                .collect();
            up.push(next_up);
            heaviest.push(next_heaviest);
        }

        Self { up, heaviest }
    }

    pub(super) fn heaviest(
        &self,
        depth: &[usize],
        mut left: usize,
        mut right: usize,
    ) -> Option<TreeStep> {
        if depth[left] < depth[right] {
            std::mem::swap(&mut left, &mut right);
        }

        let mut best = None;
        let mut gap = depth[left] - depth[right];
        let mut level = 0;
        while gap > 0 {
            if gap & 1 == 1 {
                best = heavier(best, self.heaviest[level][left]);
                left = self.up[level][left];
            }
            gap >>= 1;
            level += 1;
        }
        if left == right {
            return best;
        }

        for level in (0..self.up.len()).rev() {
            if self.up[level][left] != self.up[level][right] {
                best = heavier(best, self.heaviest[level][left]);
                best = heavier(best, self.heaviest[level][right]);
                left = self.up[level][left];
                right = self.up[level][right];
            }
        }
        best = heavier(best, self.heaviest[0][left]);
        heavier(best, self.heaviest[0][right])
    }
}

/// Smallest `k >= 1` with `2^k > max_depth`.
fn level_count(max_depth: usize) -> usize {
    let mut levels = 1;
    while levels < usize::BITS as usize && (1_usize << levels) <= max_depth {
        levels += 1;
    }
    levels
}
