//! Whole-file JSON collection I/O.
//!
//! Each collection is a single pretty-printed JSON array. Reads load the
//! whole file; writes overwrite it in place. There is no locking and no
//! atomic rename: concurrent writers race and the last one wins.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;

/// Read a collection file, seeding it with an empty array if absent.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> io::Result<Vec<T>> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "[]")?;
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Overwrite a collection file with the full record sequence.
pub fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;
    use tempfile::tempdir;

    #[test]
    fn test_read_seeds_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let notes: Vec<Note> = read_collection(&path).unwrap();
        assert!(notes.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_then_read_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let notes = vec![
            Note {
                subject: "PHY".to_string(),
                title: "Waves".to_string(),
                url: "https://example.com/waves.pdf".to_string(),
            },
            Note {
                subject: "MATH".to_string(),
                title: "Calculus".to_string(),
                url: "https://example.com/calc.pdf".to_string(),
            },
        ];

        write_collection(&path, &notes).unwrap();
        let reloaded: Vec<Note> = read_collection(&path).unwrap();
        assert_eq!(reloaded, notes);
    }

    #[test]
    fn test_write_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let notes = vec![Note {
            subject: "PHY".to_string(),
            title: "Waves".to_string(),
            url: "https://example.com/waves.pdf".to_string(),
        }];

        write_collection(&path, &notes).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  {"));
        assert!(raw.contains("\"subject\": \"PHY\""));
    }
}
