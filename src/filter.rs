// src/filter.rs

use crate::model::{ChangeKind, FileChange};
use tracing::debug;

/// Eligibility rules for turning a file change into a pair.
pub struct FilterRules {
    /// Accepted filename suffixes; empty accepts any extension
    pub extensions: Vec<String>,
    /// Inclusive line-count window, applied to both sides independently
    pub min_lines: usize,
    pub max_lines: usize,
}

impl FilterRules {
    /// Pure predicate; rules are checked cheapest-first and short-circuit.
    pub fn is_eligible(&self, change: &FileChange) -> bool {
        if change.kind != ChangeKind::Modified {
            return false;
        }

        let Some(path) = change.path.as_deref() else {
            return false;
        };
        if !self.extension_ok(path) {
            return false;
        }

        let (Some(old), Some(new)) = (change.old_text.as_deref(), change.new_text.as_deref())
        else {
            debug!("skipping {path}: content missing on one side");
            return false;
        };

        if !self.line_count_ok(old) || !self.line_count_ok(new) {
            debug!("skipping {path}: line count outside window");
            return false;
        }

        true
    }

    fn extension_ok(&self, path: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|ext| path.ends_with(ext))
    }

    fn line_count_ok(&self, text: &str) -> bool {
        let lines = line_count(text);
        self.min_lines <= lines && lines <= self.max_lines
    }
}

/// Count lines after stripping trailing newlines, so a trailing blank line
/// doesn't bump the count.
fn line_count(text: &str) -> usize {
    text.trim_end_matches('\n').lines().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(lines: usize) -> String {
        (0..lines).map(|i| format!("line {i}\n")).collect()
    }

    fn modification(path: &str, old_lines: usize, new_lines: usize) -> FileChange {
        FileChange {
            kind: ChangeKind::Modified,
            path: Some(path.to_string()),
            old_text: Some(body(old_lines)),
            new_text: Some(body(new_lines)),
        }
    }

    fn rules() -> FilterRules {
        FilterRules {
            extensions: vec![".java".to_string(), ".py".to_string()],
            min_lines: 25,
            max_lines: 30,
        }
    }

    #[test]
    fn accepts_modification_inside_window() {
        assert!(rules().is_eligible(&modification("src/Foo.java", 27, 29)));
    }

    #[test]
    fn rejects_non_modifications_regardless_of_content() {
        for kind in [
            ChangeKind::Added,
            ChangeKind::Deleted,
            ChangeKind::Renamed,
            ChangeKind::Copied,
            ChangeKind::Other,
        ] {
            let mut change = modification("Bar.py", 27, 27);
            change.kind = kind;
            assert!(!rules().is_eligible(&change), "{kind:?} must be rejected");
        }
    }

    #[test]
    fn rejects_disallowed_extension() {
        assert!(!rules().is_eligible(&modification("notes.md", 27, 27)));
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert!(!rules().is_eligible(&modification("FOO.JAVA", 27, 27)));
    }

    #[test]
    fn empty_allow_list_accepts_any_extension() {
        let rules = FilterRules {
            extensions: vec![],
            min_lines: 25,
            max_lines: 30,
        };
        assert!(rules.is_eligible(&modification("Makefile", 27, 27)));
    }

    #[test]
    fn rejects_missing_path() {
        let mut change = modification("Foo.java", 27, 27);
        change.path = None;
        assert!(!rules().is_eligible(&change));
    }

    #[test]
    fn rejects_when_either_side_is_missing() {
        let mut change = modification("Foo.java", 27, 27);
        change.old_text = None;
        assert!(!rules().is_eligible(&change));

        let mut change = modification("Foo.java", 27, 27);
        change.new_text = None;
        assert!(!rules().is_eligible(&change));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert!(rules().is_eligible(&modification("Foo.java", 25, 30)));
        assert!(!rules().is_eligible(&modification("Foo.java", 24, 27)));
        assert!(!rules().is_eligible(&modification("Foo.java", 27, 31)));
    }

    #[test]
    fn either_side_outside_window_disqualifies() {
        assert!(!rules().is_eligible(&modification("Foo.java", 27, 100)));
        assert!(!rules().is_eligible(&modification("Foo.java", 1, 27)));
    }

    #[test]
    fn trailing_newlines_do_not_inflate_the_count() {
        let mut change = modification("Foo.java", 30, 30);
        // Three trailing blank lines would push 30 past the window if counted.
        change.old_text = Some(format!("{}\n\n\n", body(30).trim_end_matches('\n')));
        assert!(rules().is_eligible(&change));
    }

    #[test]
    fn counts_lines_after_trailing_newline_strip() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("\n\n"), 0);
        assert_eq!(line_count("a\nb\nc"), 3);
        assert_eq!(line_count("a\nb\nc\n\n\n"), 3);
    }
}
