//! Bump point selection.
//!
//! Given resolved commits ordered oldest to newest, find the newest commit
//! that can be promoted without shipping part of a work item that is still in
//! flux.
//!
//! The scan stops at the first unaccepted commit. Every work item id that shows
//! up on an accepted commit at or after that point is *invalid*: an earlier
//! commit carrying the same id cannot be a stopping point, however far back it
//! sits, because the item landed again past the block. The walk over the
//! accepted prefix halts at the first commit with an invalid id.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::Commit;

/// Index of the oldest commit that is not accepted
pub fn first_unaccepted(commits: &[Commit]) -> Option<usize> {
    commits.iter().position(|c| !c.accepted)
}

/// Work item ids of accepted commits at or after `from`.
///
/// Unaccepted commits and commits without a work item never contribute.
pub fn invalid_work_items(commits: &[Commit], from: usize) -> HashSet<u64> {
    commits
        .get(from..)
        .unwrap_or_default()
        .iter()
        .filter(|c| c.accepted)
        .filter_map(|c| c.work_item_id)
        .collect()
}

/// Hash of the newest commit that is safe to bump to.
///
/// `commits` must be ordered oldest first. Returns `None` for an empty slice
/// or when no prefix commit qualifies.
pub fn find_bump(commits: &[Commit]) -> Option<&str> {
    let Some(blocked_at) = first_unaccepted(commits) else {
        return commits.last().map(|c| c.hash.as_str());
    };

    let invalid = invalid_work_items(commits, blocked_at);
    debug!(blocked_at, invalid = ?invalid, "range is blocked");

    commits[..blocked_at]
        .iter()
        .take_while(|c| c.work_item_id.map_or(true, |id| !invalid.contains(&id)))
        .last()
        .map(|c| c.hash.as_str())
}
