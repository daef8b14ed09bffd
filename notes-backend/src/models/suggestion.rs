use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community-submitted note awaiting curation. Append-only from the
/// submitter side; the bot lists suggestions but never resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub subject: String,
    pub title: String,
    pub url: String,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
}
