//! Graph generators for the pipeline property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`], so a failing proptest
//! case can be replayed from its seed through [`generate_fixture`].

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::helpers::shuffle;
use super::types::{FixtureScale, GraphFixture, GraphShape};

/// Lower bound for generated weights. Negative weights are in range.
const MIN_WEIGHT: i64 = -20;
/// Upper bound for generated weights.
const MAX_WEIGHT: i64 = 50;
/// Probability of joining a vertex pair in dense graphs.
const DENSE_EDGE_PROBABILITY: f64 = 0.7;

/// Samples fixtures of every shape at the given scale.
pub(super) fn fixture_strategy(scale: FixtureScale) -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(move |(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, scale, &mut rng)
    })
}

/// Generates a fixture for an explicit shape and scale.
pub(super) fn generate_fixture(
    shape: GraphShape,
    scale: FixtureScale,
    rng: &mut SmallRng,
) -> GraphFixture {
    let (min_vertices, max_vertices) = scale.vertex_range();
    let mut builder = TripleBuilder::with_capacity(scale.max_edges());

    let vertex_count = if shape == GraphShape::Disconnected {
        let vertex_count = rng.gen_range(min_vertices.max(2)..=max_vertices);
        generate_disconnected(vertex_count, &mut builder, rng);
        vertex_count
    } else {
        let vertex_count = rng.gen_range(min_vertices..=max_vertices);
        generate_connected(shape, vertex_count, &mut builder, rng);
        vertex_count
    };

    let mut triples = builder.triples;
    shuffle(&mut triples, rng);
    GraphFixture {
        vertex_count,
        triples,
        shape,
        scale,
    }
}

fn random_weight(rng: &mut SmallRng) -> i64 {
    rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT)
}

fn generate_connected(
    shape: GraphShape,
    vertex_count: usize,
    builder: &mut TripleBuilder,
    rng: &mut SmallRng,
) {
    match shape {
        GraphShape::Tree => builder.spanning_tree(1, vertex_count, rng, random_weight),
        GraphShape::Sparse => {
            builder.spanning_tree(1, vertex_count, rng, random_weight);
            builder.chords(1, vertex_count, rng, random_weight);
        }
        GraphShape::Dense => {
            builder.spanning_tree(1, vertex_count, rng, random_weight);
            for u in 1..=vertex_count {
                for v in (u + 1)..=vertex_count {
                    if rng.gen_bool(DENSE_EDGE_PROBABILITY) {
                        let weight = random_weight(rng);
                        builder.push(u, v, weight);
                    }
                }
            }
        }
        GraphShape::TiedWeights => {
            let low = rng.gen_range(1_i64..=3);
            let pool: Vec<i64> = if rng.gen_bool(0.5) {
                vec![low]
            } else {
                vec![low, low + 1]
            };
            let pick = |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];
            builder.spanning_tree(1, vertex_count, rng, pick);
            builder.chords(1, vertex_count, rng, pick);
        }
        GraphShape::Parallel => {
            builder.spanning_tree(1, vertex_count, rng, random_weight);
            let tree = builder.triples.clone();
            for (u, v, w) in tree {
                if rng.gen_bool(0.5) {
                    // A zero offset repeats the tree edge with its endpoints swapped.
                    let offset = rng.gen_range(-2_i64..=2);
                    builder.push(v, u, w + offset);
                }
            }
            let loops = rng.gen_range(0..=2);
            for _ in 0..loops {
                let vertex = rng.gen_range(1..=vertex_count);
                let weight = random_weight(rng);
                builder.push(vertex, vertex, weight);
            }
        }
        GraphShape::Disconnected => unreachable!("disconnected fixtures are generated separately"),
    }
}

/// Splits the vertices into two or three blocks and builds a connected
/// graph inside each block only.
fn generate_disconnected(vertex_count: usize, builder: &mut TripleBuilder, rng: &mut SmallRng) {
    let block_count = rng.gen_range(2..=vertex_count.min(3));
    let mut cuts: Vec<usize> = (2..=vertex_count).collect();
    shuffle(&mut cuts, rng);
    cuts.truncate(block_count - 1);
    cuts.push(1);
    cuts.push(vertex_count + 1);
    cuts.sort_unstable();

    for block in cuts.windows(2) {
        let (first, size) = (block[0], block[1] - block[0]);
        builder.spanning_tree(first, size, rng, random_weight);
        builder.chords(first, size, rng, random_weight);
    }
}

/// Accumulates raw triples up to a fixed cap.
struct TripleBuilder {
    triples: Vec<(usize, usize, i64)>,
    capacity: usize,
}

impl TripleBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            triples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a triple unless the cap has been reached.
    fn push(&mut self, u: usize, v: usize, weight: i64) {
        if self.triples.len() < self.capacity {
            self.triples.push((u, v, weight));
        }
    }

    /// Joins vertices `first..first + size` into a random tree by attaching
    /// each vertex of a random permutation to an earlier one.
    fn spanning_tree(
        &mut self,
        first: usize,
        size: usize,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> i64,
    ) {
        let mut order: Vec<usize> = (first..first + size).collect();
        shuffle(&mut order, rng);
        for (index, &vertex) in order.iter().enumerate().skip(1) {
            let anchor = order[rng.gen_range(0..index)];
            let w = weight(rng);
            self.push(anchor, vertex, w);
        }
    }

    /// Adds up to `size` random edges between distinct vertices of the
    /// block `first..first + size`.
    fn chords(
        &mut self,
        first: usize,
        size: usize,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> i64,
    ) {
        if size < 2 {
            return;
        }
        let count = rng.gen_range(1..=size);
        for _ in 0..count {
            let u = rng.gen_range(first..first + size);
            let v = rng.gen_range(first..first + size);
            if u != v {
                let w = weight(rng);
                self.push(u, v, w);
            }
        }
    }
}
