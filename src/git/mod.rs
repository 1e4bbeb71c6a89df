//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries bumper needs, allowing the pipeline to run against a real
//! repository or against an in-memory mock in tests.
//!
//! # Overview
//!
//! The [Repository] trait covers three lookups:
//!
//! - the hashes in a commit range, newest first (the commit loader)
//! - the one-line subject of a commit
//! - the full message body of a commit
//!
//! Implementations:
//!
//! - [repository::Git2Repository]: backed by the `git2` crate
//! - [mock::MockRepository]: canned commits for tests
//!
//! ```rust
//! # use bumper::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> bumper::Result<()> {
//! for hash in repo.commit_hashes("master..release-elect")? {
//!     println!("{} {}", hash, repo.commit_subject(&hash)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only git queries used by the bump pipeline.
///
/// No method writes to the repository. Every error is fatal to the run.
pub trait Repository {
    /// List commit hashes for a range expression such as `master..release-elect`.
    ///
    /// The start of the range is exclusive, the end inclusive. Hashes come
    /// back newest first, the way `git log` prints them. An empty range is
    /// `Ok(vec![])`.
    fn commit_hashes(&self, range: &str) -> Result<Vec<String>>;

    /// One-line subject of a commit (`git show --pretty=format:%s`)
    fn commit_subject(&self, hash: &str) -> Result<String>;

    /// Full raw message of a commit (`git show --pretty=format:%B`)
    fn commit_message(&self, hash: &str) -> Result<String>;
}
