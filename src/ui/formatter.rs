//! Formatting functions for UI output.
//!
//! The commit listing is built as strings by [format_commit_line] so it can be
//! tested; the `display_*` functions only print.

use rand::seq::SliceRandom;

use crate::boundary::EmptyOutcome;
use crate::domain::Commit;
use crate::ui::{blue, extra_red, green, grey, purple, red, yellow};

const SUBJECT_LIMIT: usize = 50;

const DANCERS: [&str; 2] = ["♪┗ (･o･)┓", "┏ (･o･)┛♪"];

/// Filler shown in place of a missing work item name
pub const QUOTES: &[&str] = &[
    "A strong spirit transcends rules.",
    "You can always tell when the groove is working or not.",
    "Everyone has a rock bottom.",
    "The internet's completely over.",
    "So tonight we gonna party like it's 1999.",
];

/// Placeholder source for the listing.
///
/// Commits without a work item get a dancer that alternates from line to
/// line; the alternation state lives here, one value per listing.
#[derive(Debug, Default)]
pub struct Placeholders {
    dancers_shown: usize,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_dancer(&mut self) -> &'static str {
        let dancer = DANCERS[self.dancers_shown % DANCERS.len()];
        self.dancers_shown += 1;
        dancer
    }

    pub fn quote(&self) -> &'static str {
        QUOTES.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
    }
}

/// Cut subjects longer than 50 characters down to 47 plus `...`
pub fn truncate_subject(subject: &str) -> String {
    if subject.chars().count() > SUBJECT_LIMIT {
        let head: String = subject.chars().take(SUBJECT_LIMIT - 3).collect();
        format!("{}...", head)
    } else {
        subject.to_string()
    }
}

/// Column width for subjects in a listing
pub fn subject_width(commits: &[Commit]) -> usize {
    commits
        .iter()
        .map(|c| truncate_subject(&c.subject).chars().count())
        .max()
        .unwrap_or(0)
}

/// One listing line: mark, short hash, subject, work item id, work item name.
pub fn format_commit_line(commit: &Commit, width: usize, placeholders: &mut Placeholders) -> String {
    let mark = if !commit.has_work_item() {
        purple("✓")
    } else if commit.accepted {
        green("✓")
    } else {
        red("✗")
    };

    let subject = format!("{:<width$}", truncate_subject(&commit.subject), width = width);

    let work_item_id = match commit.work_item_id {
        Some(id) => blue(&id.to_string()),
        None => purple(placeholders.next_dancer()),
    };

    let work_item_name = match commit.work_item_name.as_deref() {
        Some(name) if !name.is_empty() => grey(name),
        _ => purple(placeholders.quote()),
    };

    format!(
        "{} {} {} {} {}",
        mark,
        yellow(commit.short_hash()),
        grey(&subject),
        work_item_id,
        work_item_name
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", red("ERROR:"), message);
}

/// Print the range header.
pub fn display_range(range: &str) {
    println!("Bumping the following range of commits: {}\n", extra_red(range));
}

/// Print one line per commit, in the order given.
pub fn display_commits(commits: &[Commit]) {
    let width = subject_width(commits);
    let mut placeholders = Placeholders::new();

    for commit in commits {
        println!("{}", format_commit_line(commit, width, &mut placeholders));
    }
    println!();
}

/// Print the commit to bump to.
pub fn display_bump(hash: &str) {
    println!("This is the commit you should bump to: ");
    println!("{}", extra_red(hash));
}

/// Print the "nothing to bump" message with its reason.
pub fn display_empty_outcome(outcome: &EmptyOutcome) {
    println!("There are no commits to bump!");
    println!("{}", grey(&outcome.to_string()));
}
