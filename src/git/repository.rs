use crate::error::{BumperError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            BumperError::revision(format!(
                "Not in a git repository ({}): {}",
                path.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn find_commit(&self, hash: &str) -> Result<git2::Commit<'_>> {
        let oid = Oid::from_str(hash)
            .map_err(|e| BumperError::revision(format!("Invalid commit hash '{}': {}", hash, e)))?;

        self.repo
            .find_commit(oid)
            .map_err(|e| BumperError::revision(format!("Cannot find commit '{}': {}", hash, e)))
    }
}

impl super::Repository for Git2Repository {
    fn commit_hashes(&self, range: &str) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        // commit date order, as plain `git log` prints it
        revwalk.set_sorting(Sort::TIME)?;

        if range.contains("..") {
            revwalk.push_range(range).map_err(|e| {
                BumperError::revision(format!("Invalid commit range '{}': {}", range, e))
            })?;
        } else {
            let object = self.repo.revparse_single(range).map_err(|e| {
                BumperError::revision(format!("Unknown revision '{}': {}", range, e))
            })?;
            revwalk.push(object.peel_to_commit()?.id())?;
        }

        let mut hashes = Vec::new();
        for oid_result in revwalk {
            hashes.push(oid_result?.to_string());
        }

        debug!(range, count = hashes.len(), "walked commit range");
        Ok(hashes)
    }

    fn commit_subject(&self, hash: &str) -> Result<String> {
        let commit = self.find_commit(hash)?;
        Ok(commit.summary().unwrap_or_default().to_string())
    }

    fn commit_message(&self, hash: &str) -> Result<String> {
        let commit = self.find_commit(hash)?;
        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }
}
