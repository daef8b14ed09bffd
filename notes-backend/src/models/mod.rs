pub mod note;
pub mod suggestion;
pub mod usage_log;

pub use note::Note;
pub use suggestion::Suggestion;
pub use usage_log::UsageLogEntry;
