//! Commit metadata extraction: subjects and embedded work item ids.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::domain::Commit;
use crate::error::Result;
use crate::git::Repository;

fn work_item_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[#([0-9]+)\]").expect("work item pattern is valid"))
}

/// Parse the work item id referenced by a commit message.
///
/// Looks for the first `[#<digits>]` in `message`. Returns `None` when there is
/// no such reference, when its digits do not fit a `u64`, or when the id is
/// zero. Later references are never consulted, even if the first one is
/// unusable.
///
/// ```
/// use bumper::extractor::parse_work_item_id;
///
/// assert_eq!(parse_work_item_id("fix bug [#1234] done"), Some(1234));
/// assert_eq!(parse_work_item_id("[#abc]"), None);
/// ```
pub fn parse_work_item_id(message: &str) -> Option<u64> {
    work_item_pattern()
        .captures(message)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
        .filter(|id| *id != 0)
}

/// Build commits for `hashes`, filling in subject and work item id.
///
/// Lookups run sequentially in the given order; the first failure aborts
/// the whole batch.
pub fn extract_metadata<R: Repository>(repo: &R, hashes: &[String]) -> Result<Vec<Commit>> {
    let mut commits = Vec::with_capacity(hashes.len());

    for hash in hashes {
        let mut commit = Commit::new(hash.as_str());
        commit.subject = repo.commit_subject(hash)?;
        commit.work_item_id = parse_work_item_id(&repo.commit_message(hash)?);

        debug!(hash = commit.short_hash(), work_item = ?commit.work_item_id, "extracted metadata");
        commits.push(commit);
    }

    Ok(commits)
}
