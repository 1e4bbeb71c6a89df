use bumper::boundary::EmptyOutcome;
use bumper::domain::Commit;
use bumper::ui;
use console::strip_ansi_codes;

// ============================================================================
// EmptyOutcome Display Tests
// ============================================================================

#[test]
fn test_no_commits_mentions_range() {
    let outcome = EmptyOutcome::NoCommits {
        range: "master..release-elect".to_string(),
    };

    let display_msg = outcome.to_string();
    assert!(
        display_msg.contains("master..release-elect"),
        "Message should contain the range, got: {}",
        display_msg
    );
}

#[test]
fn test_no_safe_bump_point_mentions_blocker() {
    let outcome = EmptyOutcome::NoSafeBumpPoint {
        blocking_hash: "abc1234def5678".to_string(),
    };

    let display_msg = outcome.to_string();
    assert!(
        display_msg.contains("abc1234d"),
        "Message should contain the shortened hash, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("not accepted"),
        "Message should explain the block, got: {}",
        display_msg
    );
}

#[test]
fn test_no_safe_bump_point_with_short_hash() {
    let outcome = EmptyOutcome::NoSafeBumpPoint {
        blocking_hash: "abc".to_string(),
    };
    assert!(outcome.to_string().contains("abc"));
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn test_listing_lines_share_subject_column() {
    let mut short = Commit::resolved("1111111111", Some(10), true);
    short.subject = "Fix".to_string();
    short.work_item_name = Some("Ten".to_string());
    let mut long = Commit::resolved("2222222222", None, true);
    long.subject = "Refactor the session store".to_string();

    let commits = vec![short, long];
    let width = ui::formatter::subject_width(&commits);
    let mut placeholders = ui::Placeholders::new();

    let lines: Vec<String> = commits
        .iter()
        .map(|c| strip_ansi_codes(&ui::format_commit_line(c, width, &mut placeholders)).into_owned())
        .collect();

    // mark, hash and padded subject occupy the same number of characters
    let prefix = |line: &str| line.chars().take(2 + 9 + width).collect::<String>();
    assert_eq!(prefix(&lines[0]), format!("✓ 11111111 {:<width$}", "Fix", width = width));
    assert_eq!(
        prefix(&lines[1]),
        format!("✓ 22222222 {:<width$}", "Refactor the session store", width = width)
    );
}

#[test]
fn test_display_functions_do_not_panic() {
    ui::display_range("master..release-elect");
    ui::display_commits(&[]);
    ui::display_bump("0123456789abcdef0123456789abcdef01234567");
    ui::display_empty_outcome(&EmptyOutcome::NoCommits {
        range: "a..b".to_string(),
    });
    ui::display_error("test error");
}
