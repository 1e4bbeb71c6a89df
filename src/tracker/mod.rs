//! Issue tracker boundary
//!
//! The [TrackerClient] trait fetches work items for a batch of ids in one
//! request. [http::HttpTrackerClient] talks to the Pivotal Tracker v5 stories
//! endpoint; [mock::MockTrackerClient] serves canned items in tests.

pub mod http;
pub mod mock;

pub use http::HttpTrackerClient;
pub use mock::MockTrackerClient;

use crate::domain::WorkItem;
use crate::error::Result;

/// Batched work item lookup.
pub trait TrackerClient {
    /// Fetch the work items referenced by `ids` in a single request.
    ///
    /// `ids` may contain duplicates. The response may omit unknown ids or
    /// include unrelated items; callers match results by id.
    fn fetch_work_items(&self, ids: &[u64]) -> Result<Vec<WorkItem>>;
}

/// Build the disjunctive search filter for `ids`, e.g. `"12 OR 40 OR 12"`.
pub fn filter_expression(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" OR ")
}
