use serde::{Deserialize, Serialize};

/// A shared note: a download link filed under an uppercased subject.
///
/// Identity is the (subject, title) pair. Nothing prevents duplicates;
/// deletion removes every match while edits touch only the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub subject: String,
    pub title: String,
    pub url: String,
}

impl Note {
    /// Match against an already-uppercased subject and an exact title.
    /// Titles are case-sensitive; subjects are stored uppercase.
    pub fn matches(&self, subject_upper: &str, title: &str) -> bool {
        self.subject == subject_upper && self.title == title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_title_case_sensitive() {
        let note = Note {
            subject: "PHY".to_string(),
            title: "Waves".to_string(),
            url: "https://example.com/waves.pdf".to_string(),
        };

        assert!(note.matches("PHY", "Waves"));
        assert!(!note.matches("PHY", "waves"));
        assert!(!note.matches("CHEM", "Waves"));
    }
}
