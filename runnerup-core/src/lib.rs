//! Runnerup core library.
//!
//! Computes the cost of a graph's minimum spanning tree and of its
//! second-best spanning tree: the cheapest spanning tree that differs from
//! the chosen MST in at least one edge.
//!
//! The pipeline runs Kruskal's algorithm over a disjoint-set forest, roots
//! the resulting tree so that the heaviest edge on any tree path can be
//! found, and then tries every non-tree edge as a replacement for the
//! heaviest edge on the cycle it closes.
//!
//! # Examples
//! ```
//! use runnerup_core::{GraphInput, RunnerupBuilder, RunnerupError};
//!
//! let runnerup = RunnerupBuilder::new().build();
//!
//! let triangle = GraphInput::new(3, [(1, 2, 1), (2, 3, 1), (1, 3, 1)]);
//! let report = runnerup.run(&triangle)?;
//! assert_eq!((report.mst_cost(), report.second_best_cost()), (2, Some(2)));
//!
//! let path = GraphInput::new(3, [(1, 2, 1), (2, 3, 1)]);
//! let report = runnerup.run(&path)?;
//! assert_eq!(
//!     report.require_second_best(),
//!     Err(RunnerupError::NoAlternativeTree { mst_cost: 2 }),
//! );
//! # Ok::<(), RunnerupError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod mst;
mod path;
#[cfg(test)]
mod property;
mod report;
mod runnerup;
mod second_best;

pub use crate::{
    builder::{DEFAULT_ROOT, RunnerupBuilder},
    error::{Result, RunnerupError, RunnerupErrorCode},
    graph::{Edge, GraphInput},
    mst::{SpanningTree, TieBreak, kruskal},
    path::{PathMaxima, PathQuery, TreeStep},
    report::SecondBestReport,
    runnerup::Runnerup,
    second_best::{SecondBest, Swap, select_second_best},
};
