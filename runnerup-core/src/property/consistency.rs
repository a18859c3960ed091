//! Configuration independence and swap consistency.
//!
//! Tie-break order, path-query strategy and traversal root may change which
//! MST and which swap are reported, but never the costs. Whatever swap is
//! reported must turn the MST into a different spanning tree whose weight
//! is the reported cost.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{PathQuery, RunnerupBuilder, SecondBestReport, TieBreak};

use super::helpers::is_spanning_tree;
use super::types::{GraphFixture, GraphShape};

const TIE_BREAKS: [TieBreak; 2] = [TieBreak::InputOrder, TieBreak::Endpoints];
const PATH_QUERIES: [PathQuery; 2] = [PathQuery::ParentWalk, PathQuery::Lifting];

/// Checks that every configuration reports the same costs as the default
/// one, and that repeated runs are identical.
pub(super) fn run_configuration_independence_property(fixture: &GraphFixture) -> TestCaseResult {
    if fixture.shape == GraphShape::Disconnected {
        return Ok(());
    }
    let graph = fixture.graph();
    let baseline = RunnerupBuilder::new()
        .build()
        .run(&graph)
        .map_err(|err| fail(fixture, &format!("default pipeline failed: {err}")))?;

    let roots = [1, fixture.vertex_count.div_ceil(2), fixture.vertex_count];
    for tie_break in TIE_BREAKS {
        for path_query in PATH_QUERIES {
            for root in roots {
                let runnerup = RunnerupBuilder::new()
                    .with_tie_break(tie_break)
                    .with_path_query(path_query)
                    .with_root(root)
                    .build();
                let first = runnerup
                    .run(&graph)
                    .map_err(|err| fail(fixture, &format!("{runnerup:?} failed: {err}")))?;
                let costs = (first.mst_cost(), first.second_best_cost());
                let expected = (baseline.mst_cost(), baseline.second_best_cost());
                if costs != expected {
                    return Err(fail(
                        fixture,
                        &format!("{runnerup:?} reported {costs:?}, default reported {expected:?}"),
                    ));
                }
                let second = runnerup
                    .run(&graph)
                    .map_err(|err| fail(fixture, &format!("{runnerup:?} failed: {err}")))?;
                if first != second {
                    return Err(fail(fixture, &format!("{runnerup:?} is not deterministic")));
                }
            }
        }
    }
    Ok(())
}

/// Checks that the reported swap rebuilds a spanning tree of the reported
/// cost that differs from the MST.
pub(super) fn run_swap_consistency_property(fixture: &GraphFixture) -> TestCaseResult {
    if fixture.shape == GraphShape::Disconnected {
        return Ok(());
    }
    for path_query in PATH_QUERIES {
        let report = RunnerupBuilder::new()
            .with_path_query(path_query)
            .build()
            .run(&fixture.graph())
            .map_err(|err| fail(fixture, &format!("pipeline failed: {err}")))?;
        check_swap(fixture, &report)?;
    }
    Ok(())
}

fn check_swap(fixture: &GraphFixture, report: &SecondBestReport) -> TestCaseResult {
    let Some(best) = report.second_best() else {
        return Ok(());
    };
    if best.cost < report.mst_cost() {
        return Err(fail(
            fixture,
            &format!("second-best {} below MST {}", best.cost, report.mst_cost()),
        ));
    }
    if report.mst().contains(&best.swap.added) {
        return Err(fail(fixture, "added edge already in the MST"));
    }
    if best.swap.added.weight() < best.swap.removed.weight {
        return Err(fail(
            fixture,
            "added edge is lighter than the edge it replaces, so the MST was not minimal",
        ));
    }

    let edges = report
        .second_best_edges()
        .ok_or_else(|| fail(fixture, "second-best edges missing"))?;
    let pairs: Vec<(usize, usize)> = edges
        .iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect();
    if !is_spanning_tree(fixture.vertex_count, &pairs) {
        return Err(fail(fixture, "swap does not yield a spanning tree"));
    }
    let total: i64 = edges.iter().map(|edge| edge.weight()).sum();
    if total != best.cost {
        return Err(fail(
            fixture,
            &format!("swap tree weighs {total}, reported {}", best.cost),
        ));
    }
    Ok(())
}

fn fail(fixture: &GraphFixture, message: &str) -> TestCaseError {
    TestCaseError::fail(format!("{message} ({})", fixture.describe()))
}
