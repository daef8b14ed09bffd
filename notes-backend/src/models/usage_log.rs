use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One usage record, appended whenever a subject lookup succeeds.
/// The log is append-only and unbounded; only the most recent ten
/// entries are ever read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageLogEntry {
    pub user: String,
    pub user_id: u64,
    pub command: String,
    pub subject: String,
    #[serde(rename = "timeStamp")]
    pub time_stamp: DateTime<Utc>,
}
