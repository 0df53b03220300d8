//! JSON rendering of a finished run.

use std::fmt;

use serde_json::json;

use crate::runner::RunSummary;

/// Render a run summary (result plus counters) as a JSON value.
///
/// States are rendered through their `Display` form; absent fields of a
/// failed run become `null`.
#[must_use]
pub fn run_summary_json<S: fmt::Display>(summary: &RunSummary<S>) -> serde_json::Value {
    let path: Option<Vec<String>> = summary
        .path
        .as_ref()
        .map(|path| path.iter().map(ToString::to_string).collect());

    json!({
        "elapsed_ms": u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
        "goal_found": summary.goal_found,
        "depth": summary.depth,
        "cost": summary.cost,
        "path": path,
        "stats": summary.stats.to_json(),
    })
}
