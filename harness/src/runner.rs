//! Timed search driver and verbose report writer.
//!
//! The runner calls `search()` once, measures it with `std::time::Instant`,
//! and snapshots the result accessors into a [`RunSummary`]. Report
//! formatting is separated from running so callers can render the same
//! summary several ways (or not at all).

use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use meridian_search::contract::{SearchState, SearchStrategy};
use meridian_search::stats::SearchStats;

/// Snapshot of one timed `search()` call.
///
/// `depth`, `cost`, and `path` are `Some` exactly when `goal_found` is
/// true.
#[derive(Debug, Clone)]
pub struct RunSummary<S> {
    /// Wall-clock duration of the `search()` call.
    pub elapsed: Duration,
    /// Whether the search ended at the goal.
    pub goal_found: bool,
    /// Goal depth, if found.
    pub depth: Option<u32>,
    /// Accumulated path cost, if found.
    pub cost: Option<f64>,
    /// Root-to-goal path, if found.
    pub path: Option<Vec<S>>,
    /// The strategy's counters for this run.
    pub stats: SearchStats,
}

/// Run `strategy.search()` once under a wall-clock timer and snapshot the
/// result.
pub fn run_timed<S, A>(strategy: &mut A) -> RunSummary<S>
where
    S: SearchState,
    A: SearchStrategy<S>,
{
    let start = Instant::now();
    strategy.search();
    let elapsed = start.elapsed();
    log::debug!(
        "search finished in {elapsed:?}: {}",
        strategy.stats().termination.as_str()
    );

    RunSummary {
        elapsed,
        goal_found: strategy.goal_found(),
        depth: strategy.goal_depth(),
        cost: strategy.goal_cost(),
        path: strategy.goal_path().map(<[S]>::to_vec),
        stats: strategy.stats().clone(),
    }
}

/// Write the classic verbose report for a finished run.
///
/// On success: the time taken, the goal with its cost and depth, and
/// (when `print_path` is set; paths can be long) the path itself. On
/// failure: the time taken and a failure line.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_verbose_report<S, W>(
    writer: &mut W,
    summary: &RunSummary<S>,
    print_path: bool,
) -> io::Result<()>
where
    S: SearchState + fmt::Display,
    W: Write,
{
    writeln!(writer, "Time taken: {}ms", summary.elapsed.as_millis())?;

    let arrived = match (&summary.path, summary.cost, summary.depth) {
        (Some(path), Some(cost), Some(depth)) => path.last().map(|goal| (path, goal, cost, depth)),
        _ => None,
    };
    match arrived {
        Some((path, goal, cost, depth)) => {
            writeln!(writer, "Arrived at {goal} for cost {cost:.2} at depth {depth}")?;
            if print_path {
                let stops: Vec<String> = path.iter().map(ToString::to_string).collect();
                writeln!(writer, "Path taken: {}", stops.join(" -> "))?;
            }
        }
        None => writeln!(writer, "Failed to find the goal!")?,
    }
    Ok(())
}

/// Convenience wrapper: time the search, write the verbose report, return
/// the summary.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn verbose_search<S, A, W>(
    strategy: &mut A,
    writer: &mut W,
    print_path: bool,
) -> io::Result<RunSummary<S>>
where
    S: SearchState + fmt::Display,
    A: SearchStrategy<S>,
    W: Write,
{
    let summary = run_timed(strategy);
    write_verbose_report(writer, &summary, print_path)?;
    Ok(summary)
}
