//! Error types for the runnerup core library.
//!
//! Defines the public error enum, its stable machine-readable codes, and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while validating a graph or computing its spanning
/// trees.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RunnerupError {
    /// The graph has no vertices.
    #[error("cannot compute a spanning tree for a graph with no vertices")]
    EmptyGraph,
    /// An edge referenced a vertex outside `1..=vertex_count`.
    #[error("edge {edge_index} references vertex {vertex}, but vertices are numbered 1..={vertex_count}")]
    InvalidVertex {
        /// The offending vertex id as supplied.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Zero-based position of the edge in the input.
        edge_index: usize,
    },
    /// The graph does not connect every vertex, so no spanning tree exists.
    #[error("graph with {vertex_count} vertices is disconnected ({components} components)")]
    Disconnected {
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Number of connected components left after Kruskal's scan.
        components: usize,
    },
    /// A tree cost or swap candidate does not fit in an `i64`.
    #[error("spanning tree cost overflows a 64-bit signed integer")]
    CostOverflow,
    /// Every spanning tree of the graph is the minimum spanning tree itself.
    #[error("no alternative spanning tree exists (minimum spanning tree cost {mst_cost})")]
    NoAlternativeTree {
        /// Cost of the only spanning tree.
        mst_cost: i64,
    },
    /// The traversal root passed to the builder is not a vertex of the graph.
    #[error("traversal root {root} is not a vertex of a graph with {vertex_count} vertices")]
    InvalidRoot {
        /// Requested root vertex.
        root: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`RunnerupError`] variants.
    enum RunnerupErrorCode for RunnerupError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "RUNNERUP_EMPTY_GRAPH",
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "RUNNERUP_INVALID_VERTEX",
        /// The graph is disconnected.
        Disconnected => Disconnected { .. } => "RUNNERUP_DISCONNECTED",
        /// A cost overflowed `i64`.
        CostOverflow => CostOverflow => "RUNNERUP_COST_OVERFLOW",
        /// No spanning tree other than the MST exists.
        NoAlternativeTree => NoAlternativeTree { .. } => "RUNNERUP_NO_ALTERNATIVE",
        /// The configured traversal root is outside the graph.
        InvalidRoot => InvalidRoot { .. } => "RUNNERUP_INVALID_ROOT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, RunnerupError>;
