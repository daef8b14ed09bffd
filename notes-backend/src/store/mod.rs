//! Record Store — three independent flat JSON collections.
//!
//! Every operation loads a collection fully into memory and persists it
//! back in full after any mutation. The collections are independent;
//! there is no cross-collection referential integrity.

mod file_ops;

pub use file_ops::{read_collection, write_collection};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::models::{Note, Suggestion, UsageLogEntry};

/// Paths of the three collection files under the data directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    notes_path: PathBuf,
    logs_path: PathBuf,
    suggestions_path: PathBuf,
}

impl RecordStore {
    /// Bind the store to a data directory, creating it if needed.
    pub fn new(data_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            notes_path: data_dir.join(defaults::NOTES_FILE),
            logs_path: data_dir.join(defaults::LOGS_FILE),
            suggestions_path: data_dir.join(defaults::SUGGESTIONS_FILE),
        })
    }

    pub fn load_notes(&self) -> io::Result<Vec<Note>> {
        file_ops::read_collection(&self.notes_path)
    }

    pub fn save_notes(&self, notes: &[Note]) -> io::Result<()> {
        file_ops::write_collection(&self.notes_path, notes)
    }

    pub fn load_usage_log(&self) -> io::Result<Vec<UsageLogEntry>> {
        file_ops::read_collection(&self.logs_path)
    }

    pub fn save_usage_log(&self, entries: &[UsageLogEntry]) -> io::Result<()> {
        file_ops::write_collection(&self.logs_path, entries)
    }

    pub fn load_suggestions(&self) -> io::Result<Vec<Suggestion>> {
        file_ops::read_collection(&self.suggestions_path)
    }

    pub fn save_suggestions(&self, suggestions: &[Suggestion]) -> io::Result<()> {
        file_ops::write_collection(&self.suggestions_path, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn test_new_creates_data_dir() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("data");

        RecordStore::new(&data_dir).unwrap();
        assert!(data_dir.is_dir());
    }

    #[test]
    fn test_collections_are_independent() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path()).unwrap();

        let notes = vec![Note {
            subject: "PHY".to_string(),
            title: "Waves".to_string(),
            url: "https://example.com/waves.pdf".to_string(),
        }];
        store.save_notes(&notes).unwrap();

        assert_eq!(store.load_notes().unwrap(), notes);
        assert!(store.load_usage_log().unwrap().is_empty());
        assert!(store.load_suggestions().unwrap().is_empty());
    }

    #[test]
    fn test_usage_log_round_trip() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path()).unwrap();

        let entries = vec![UsageLogEntry {
            user: "alice".to_string(),
            user_id: 7,
            command: "/notes".to_string(),
            subject: "PHY".to_string(),
            time_stamp: Utc::now(),
        }];
        store.save_usage_log(&entries).unwrap();

        assert_eq!(store.load_usage_log().unwrap(), entries);
    }

    #[test]
    fn test_usage_log_keeps_wire_field_name() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path()).unwrap();

        store
            .save_usage_log(&[UsageLogEntry {
                user: "alice".to_string(),
                user_id: 7,
                command: "/notes".to_string(),
                subject: "PHY".to_string(),
                time_stamp: Utc::now(),
            }])
            .unwrap();

        let raw = fs::read_to_string(dir.path().join(defaults::LOGS_FILE)).unwrap();
        assert!(raw.contains("\"timeStamp\""));
    }
}
