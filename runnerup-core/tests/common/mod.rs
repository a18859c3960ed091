use runnerup_core::GraphInput;

/// Four-cycle with a diagonal: MST 6, second-best 7.
#[must_use]
pub fn square_with_diagonal() -> GraphInput {
    GraphInput::new(4, [(1, 2, 1), (2, 3, 2), (3, 4, 3), (4, 1, 4), (1, 3, 5)])
}

/// Triangle of unit edges: three spanning trees of cost 2.
#[must_use]
pub fn unit_triangle() -> GraphInput {
    GraphInput::new(3, [(1, 2, 1), (2, 3, 1), (1, 3, 1)])
}

/// A path on three vertices: its only spanning tree is itself.
#[must_use]
pub fn three_vertex_path() -> GraphInput {
    GraphInput::new(3, [(1, 2, 1), (2, 3, 1)])
}
