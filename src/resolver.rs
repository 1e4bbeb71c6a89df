//! Acceptance resolution: merge tracker work items into commits.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Commit, WorkItem};

/// Set `accepted` and the work item name on every commit.
///
/// Commits without a work item are always accepted. Commits whose id is
/// missing from `work_items` end up unaccepted with no name. Items are
/// matched by id only; the order and extent of `work_items` is irrelevant.
/// If the tracker returns one id twice, the later record wins.
pub fn resolve_acceptance(commits: &mut [Commit], work_items: &[WorkItem]) {
    let index: HashMap<u64, &WorkItem> = work_items.iter().map(|item| (item.id, item)).collect();

    for commit in commits.iter_mut() {
        let item = commit.work_item_id.and_then(|id| index.get(&id).copied());
        commit.apply_work_item(item);
    }

    debug!(
        commits = commits.len(),
        accepted = commits.iter().filter(|c| c.accepted).count(),
        "resolved acceptance"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(hash: &str, id: Option<u64>) -> Commit {
        let mut commit = Commit::new(hash);
        commit.work_item_id = id;
        commit
    }

    #[test]
    fn test_commits_without_work_item_are_accepted() {
        let mut commits = vec![commit("a", None), commit("b", None)];
        resolve_acceptance(&mut commits, &[]);
        assert!(commits.iter().all(|c| c.accepted));
        assert!(commits.iter().all(|c| c.work_item_name.is_none()));
    }

    #[test]
    fn test_matches_by_id_not_position() {
        let mut commits = vec![commit("a", Some(2)), commit("b", Some(1))];
        let items = vec![
            WorkItem::new(1, "accepted", "One"),
            WorkItem::new(3, "accepted", "Unrelated"),
            WorkItem::new(2, "started", "Two"),
        ];

        resolve_acceptance(&mut commits, &items);

        assert!(!commits[0].accepted);
        assert_eq!(commits[0].work_item_name.as_deref(), Some("Two"));
        assert!(commits[1].accepted);
        assert_eq!(commits[1].work_item_name.as_deref(), Some("One"));
    }

    #[test]
    fn test_unknown_work_item_stays_unaccepted() {
        let mut commits = vec![commit("a", Some(404))];
        resolve_acceptance(&mut commits, &[WorkItem::new(1, "accepted", "One")]);
        assert!(!commits[0].accepted);
        assert_eq!(commits[0].work_item_name, None);
    }

    #[test]
    fn test_recurring_work_item_resolves_on_each_commit() {
        let mut commits = vec![commit("a", Some(5)), commit("b", None), commit("c", Some(5))];
        resolve_acceptance(&mut commits, &[WorkItem::new(5, "accepted", "Five")]);

        assert!(commits[0].accepted && commits[2].accepted);
        assert_eq!(commits[0].work_item_name, commits[2].work_item_name);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut commits = vec![commit("a", Some(1)), commit("b", Some(2)), commit("c", None)];
        let items = vec![WorkItem::new(1, "accepted", "One"), WorkItem::new(2, "finished", "Two")];

        resolve_acceptance(&mut commits, &items);
        let first = commits.clone();
        resolve_acceptance(&mut commits, &items);

        assert_eq!(first, commits);
    }
}
