//! Main workflow orchestration logic
//!
//! Runs the bump pipeline against any [Repository] and [TrackerClient], so the
//! binary wires in git2 and HTTP while tests wire in mocks.

use tracing::{debug, info};

use crate::boundary::EmptyOutcome;
use crate::domain::Commit;
use crate::error::Result;
use crate::extractor;
use crate::git::Repository;
use crate::resolver;
use crate::selector;
use crate::tracker::TrackerClient;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOutcome {
    /// Full hash of the newest safe commit
    BumpTo(String),
    /// Nothing to bump to
    Empty(EmptyOutcome),
}

/// Result of a completed bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpReport {
    /// The range that was inspected
    pub range: String,

    /// Resolved commits in log order, newest first
    pub commits: Vec<Commit>,

    pub outcome: BumpOutcome,
}

impl BumpReport {
    /// The hash to bump to, if any
    pub fn bump_hash(&self) -> Option<&str> {
        match &self.outcome {
            BumpOutcome::BumpTo(hash) => Some(hash),
            BumpOutcome::Empty(_) => None,
        }
    }
}

/// Main bump workflow
///
/// 1. Load the hashes in `range` (newest first)
/// 2. Extract subjects and work item ids
/// 3. Query the tracker once for every referenced work item
/// 4. Resolve acceptance per commit
/// 5. Reverse into chronological order and select the bump point
///
/// Any repository or tracker failure aborts the run. An empty range returns
/// early without touching the tracker.
pub fn run_bump_workflow<R, T>(repo: &R, tracker: &T, range: &str) -> Result<BumpReport>
where
    R: Repository,
    T: TrackerClient,
{
    let hashes = repo.commit_hashes(range)?;
    info!(range, commits = hashes.len(), "loaded commit range");

    if hashes.is_empty() {
        return Ok(BumpReport {
            range: range.to_string(),
            commits: Vec::new(),
            outcome: BumpOutcome::Empty(EmptyOutcome::NoCommits {
                range: range.to_string(),
            }),
        });
    }

    let mut commits = extractor::extract_metadata(repo, &hashes)?;

    let ids: Vec<u64> = commits.iter().filter_map(|c| c.work_item_id).collect();
    let work_items = if ids.is_empty() {
        debug!("no commit references a work item, skipping tracker");
        Vec::new()
    } else {
        tracker.fetch_work_items(&ids)?
    };

    resolver::resolve_acceptance(&mut commits, &work_items);

    // log order is newest first; selection needs oldest first
    let mut chronological = commits.clone();
    chronological.reverse();

    let outcome = match selector::find_bump(&chronological) {
        Some(hash) => BumpOutcome::BumpTo(hash.to_string()),
        None => {
            let blocking_hash = selector::first_unaccepted(&chronological)
                .map(|i| chronological[i].hash.clone())
                .unwrap_or_default();
            BumpOutcome::Empty(EmptyOutcome::NoSafeBumpPoint { blocking_hash })
        }
    };
    info!(outcome = ?outcome, "selected bump point");

    Ok(BumpReport {
        range: range.to_string(),
        commits,
        outcome,
    })
}
