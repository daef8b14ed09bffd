use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const BOT_TOKEN: &str = "BOT_TOKEN";
    pub const ADMIN_ID: &str = "ADMIN_ID";
    pub const DATA_DIR: &str = "NOTES_DATA_DIR";
}

/// Default values
pub mod defaults {
    pub const DATA_DIR: &str = "./data";
    pub const NOTES_FILE: &str = "notes.json";
    pub const LOGS_FILE: &str = "logs.json";
    pub const SUGGESTIONS_FILE: &str = "suggestions.json";
}

/// Immutable runtime configuration, built once at startup and passed
/// into the command handlers.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    /// The administrator's numeric Telegram id, kept as text.
    /// Authorization compares the sender id rendered as text against it.
    pub admin_id: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bot_token: env::var(env_vars::BOT_TOKEN).expect("BOT_TOKEN must be set"),
            admin_id: env::var(env_vars::ADMIN_ID).expect("ADMIN_ID must be set"),
            data_dir: env::var(env_vars::DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(defaults::DATA_DIR)),
        }
    }

    /// Whether the given Telegram user is the configured administrator.
    pub fn is_admin(&self, user_id: u64) -> bool {
        user_id.to_string() == self.admin_id
    }

    /// The administrator's chat id for out-of-band notifications.
    /// None when ADMIN_ID is not numeric (authorization still works,
    /// since it is a text comparison).
    pub fn admin_chat_id(&self) -> Option<i64> {
        self.admin_id.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_admin(admin_id: &str) -> Config {
        Config {
            bot_token: "test-token".to_string(),
            admin_id: admin_id.to_string(),
            data_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn test_is_admin_compares_as_text() {
        let config = config_with_admin("42");
        assert!(config.is_admin(42));
        assert!(!config.is_admin(7));
        assert!(!config.is_admin(420));
    }

    #[test]
    fn test_admin_chat_id() {
        assert_eq!(config_with_admin("42").admin_chat_id(), Some(42));
        assert_eq!(config_with_admin("not-a-number").admin_chat_id(), None);
    }
}
