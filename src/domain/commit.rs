use crate::domain::WorkItem;

/// A commit in the range being considered for a bump.
///
/// Starts out holding only its hash; subject and work item id are filled in by
/// metadata extraction, `accepted` and the work item name by resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commit {
    pub hash: String,
    pub subject: String,
    /// `None` when the message references no work item
    pub work_item_id: Option<u64>,
    pub work_item_name: Option<String>,
    pub accepted: bool,
}

impl Commit {
    pub fn new(hash: impl Into<String>) -> Self {
        Commit {
            hash: hash.into(),
            ..Default::default()
        }
    }

    /// Builder used by tests and mocks to describe an already-resolved commit.
    pub fn resolved(hash: impl Into<String>, work_item_id: Option<u64>, accepted: bool) -> Self {
        Commit {
            hash: hash.into(),
            work_item_id,
            accepted,
            ..Default::default()
        }
    }

    /// Whether the commit references a tracked work item
    pub fn has_work_item(&self) -> bool {
        self.work_item_id.is_some()
    }

    /// First eight characters of the hash, for listings
    pub fn short_hash(&self) -> &str {
        self.hash.get(..8).unwrap_or(&self.hash)
    }

    /// Recompute `accepted` and the work item name from a tracker lookup.
    ///
    /// `item` is the tracker record matching this commit's id, if any.
    pub fn apply_work_item(&mut self, item: Option<&WorkItem>) {
        self.work_item_name = None;
        self.accepted = false;

        if !self.has_work_item() {
            self.accepted = true;
            return;
        }

        if let Some(item) = item {
            self.work_item_name = Some(item.name.clone());
            self.accepted = item.is_accepted();
        }
    }
}
