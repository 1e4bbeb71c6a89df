use std::fmt;

/// Runs that finish without a bump point.
/// These are normal terminal states, reported to the user but not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyOutcome {
    /// The commit range contains no commits
    NoCommits { range: String },
    /// No commit before the first unaccepted one is safe to promote
    NoSafeBumpPoint { blocking_hash: String },
}

impl fmt::Display for EmptyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyOutcome::NoCommits { range } => {
                write!(f, "No commits in range '{}'", range)
            }
            EmptyOutcome::NoSafeBumpPoint { blocking_hash } => {
                let short_hash = blocking_hash.get(..8).unwrap_or(blocking_hash);
                write!(
                    f,
                    "Commit {} is not accepted and no earlier commit is safe to bump to",
                    short_hash
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_commits_display() {
        let outcome = EmptyOutcome::NoCommits {
            range: "master..release-elect".to_string(),
        };
        assert_eq!(outcome.to_string(), "No commits in range 'master..release-elect'");
    }

    #[test]
    fn test_no_safe_bump_point_shortens_hash() {
        let outcome = EmptyOutcome::NoSafeBumpPoint {
            blocking_hash: "abc1234def5678abc1234def5678abc1234def56".to_string(),
        };
        let msg = outcome.to_string();
        assert!(msg.contains("abc1234d"));
        assert!(!msg.contains("abc1234def5678"));
    }
}
