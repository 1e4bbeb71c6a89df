use crate::error::{BumperError, Result};
use crate::git::Repository;

#[derive(Debug, Clone)]
struct MockCommit {
    hash: String,
    subject: String,
    message: String,
}

/// Mock repository for testing without actual git operations.
///
/// Commits are added oldest first; `commit_hashes` returns them newest first
/// regardless of the range, like `git log` over the whole mock history.
pub struct MockRepository {
    commits: Vec<MockCommit>,
    failing_hash: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            failing_hash: None,
        }
    }

    /// Append a commit; the message's first line is used as the subject
    pub fn add_commit(&mut self, hash: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        let subject = message.lines().next().unwrap_or_default().to_string();
        self.commits.push(MockCommit {
            hash: hash.into(),
            subject,
            message,
        });
    }

    /// Make every lookup of `hash` fail
    pub fn fail_lookup(&mut self, hash: impl Into<String>) {
        self.failing_hash = Some(hash.into());
    }

    fn find(&self, hash: &str) -> Result<&MockCommit> {
        if self.failing_hash.as_deref() == Some(hash) {
            return Err(BumperError::revision(format!("Lookup failed for {}", hash)));
        }
        self.commits
            .iter()
            .find(|c| c.hash == hash)
            .ok_or_else(|| BumperError::revision(format!("Commit not found: {}", hash)))
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn commit_hashes(&self, _range: &str) -> Result<Vec<String>> {
        Ok(self.commits.iter().rev().map(|c| c.hash.clone()).collect())
    }

    fn commit_subject(&self, hash: &str) -> Result<String> {
        Ok(self.find(hash)?.subject.clone())
    }

    fn commit_message(&self, hash: &str) -> Result<String> {
        Ok(self.find(hash)?.message.clone())
    }
}
