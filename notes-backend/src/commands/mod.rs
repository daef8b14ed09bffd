//! Command Router — parse `/command arg ...` message text.
//!
//! Arguments are whitespace-separated with no quoting support: a title
//! or url containing a literal space is truncated at the first token.

pub mod executor;

pub use executor::{CommandOutcome, Reply, Sender, respond};

/// The recognized command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Start,
    Notes,
    Available,
    Suggest,
    Upload,
    Delete,
    Usage,
    Reviews,
    EditSubject,
    EditTitle,
}

impl CommandKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(CommandKind::Start),
            "notes" => Some(CommandKind::Notes),
            "available" => Some(CommandKind::Available),
            "suggest" => Some(CommandKind::Suggest),
            "upload" => Some(CommandKind::Upload),
            "delete" => Some(CommandKind::Delete),
            "usage" => Some(CommandKind::Usage),
            "reviews" => Some(CommandKind::Reviews),
            "edit_subject" => Some(CommandKind::EditSubject),
            "edit_title" => Some(CommandKind::EditTitle),
            _ => None,
        }
    }

    /// Commands reserved for the administrator. Checked before argument
    /// validation, so an unauthorized call gets the denial reply even
    /// when its arguments are missing.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            CommandKind::Upload
                | CommandKind::Delete
                | CommandKind::Usage
                | CommandKind::Reviews
                | CommandKind::EditSubject
                | CommandKind::EditTitle
        )
    }
}

/// A fully parsed command with its arguments bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Notes {
        subject: String,
    },
    Available,
    Suggest {
        subject: String,
        title: String,
        url: String,
    },
    Upload {
        subject: String,
        title: String,
        url: String,
    },
    Delete {
        subject: String,
        title: String,
    },
    Usage,
    Reviews,
    EditSubject {
        old_subject: String,
        title: String,
        new_subject: String,
    },
    EditTitle {
        subject: String,
        old_title: String,
        new_title: String,
    },
}

/// Split raw message text into a command kind and its argument tokens.
/// Returns None unless the text starts with the `/` marker and names a
/// recognized command. An `@botname` suffix on the name is stripped.
pub fn parse_message(text: &str) -> Option<(CommandKind, Vec<&str>)> {
    let mut tokens = text.split_whitespace();
    let name = tokens.next()?.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    let kind = CommandKind::from_name(name)?;
    Some((kind, tokens.collect()))
}

impl Command {
    /// Bind argument tokens to a command, or return the usage line to
    /// reply when required arguments are missing. Extra tokens beyond
    /// the declared count are ignored.
    pub fn from_args(kind: CommandKind, args: &[&str]) -> Result<Command, &'static str> {
        match kind {
            CommandKind::Start => Ok(Command::Start),
            CommandKind::Available => Ok(Command::Available),
            CommandKind::Usage => Ok(Command::Usage),
            CommandKind::Reviews => Ok(Command::Reviews),
            CommandKind::Notes => match args {
                [subject, ..] => Ok(Command::Notes {
                    subject: subject.to_string(),
                }),
                _ => Err("Usage: /notes <subject>"),
            },
            CommandKind::Suggest => match args {
                [subject, title, url, ..] => Ok(Command::Suggest {
                    subject: subject.to_string(),
                    title: title.to_string(),
                    url: url.to_string(),
                }),
                _ => Err("❌ Usage: /suggest <subject> <title> <url>"),
            },
            CommandKind::Upload => match args {
                [subject, title, url, ..] => Ok(Command::Upload {
                    subject: subject.to_string(),
                    title: title.to_string(),
                    url: url.to_string(),
                }),
                _ => Err("Usage: /upload <subject> <title> <url>"),
            },
            CommandKind::Delete => match args {
                [subject, title, ..] => Ok(Command::Delete {
                    subject: subject.to_string(),
                    title: title.to_string(),
                }),
                _ => Err("❌ Usage: /delete <subject> <title>"),
            },
            CommandKind::EditSubject => match args {
                [old_subject, title, new_subject, ..] => Ok(Command::EditSubject {
                    old_subject: old_subject.to_string(),
                    title: title.to_string(),
                    new_subject: new_subject.to_string(),
                }),
                _ => Err("Usage: /edit_subject <old_subject> <title> <new_subject>"),
            },
            CommandKind::EditTitle => match args {
                [subject, old_title, new_title, ..] => Ok(Command::EditTitle {
                    subject: subject.to_string(),
                    old_title: old_title.to_string(),
                    new_title: new_title.to_string(),
                }),
                _ => Err("Usage: /edit_title <subject> <old_title> <new_title>"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_basic() {
        let (kind, args) = parse_message("/upload phy Waves https://x/w.pdf").unwrap();
        assert_eq!(kind, CommandKind::Upload);
        assert_eq!(args, vec!["phy", "Waves", "https://x/w.pdf"]);
    }

    #[test]
    fn test_parse_message_strips_bot_suffix() {
        let (kind, args) = parse_message("/available@student_notes_bot").unwrap();
        assert_eq!(kind, CommandKind::Available);
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_message_collapses_whitespace() {
        let (_, args) = parse_message("/delete  phy   Waves").unwrap();
        assert_eq!(args, vec!["phy", "Waves"]);
    }

    #[test]
    fn test_parse_message_rejects_non_commands() {
        assert!(parse_message("hello there").is_none());
        assert!(parse_message("/frobnicate now").is_none());
        assert!(parse_message("").is_none());
    }

    #[test]
    fn test_from_args_missing_args_yield_usage() {
        let err = Command::from_args(CommandKind::Upload, &["phy", "Waves"]).unwrap_err();
        assert_eq!(err, "Usage: /upload <subject> <title> <url>");

        let err = Command::from_args(CommandKind::Suggest, &[]).unwrap_err();
        assert_eq!(err, "❌ Usage: /suggest <subject> <title> <url>");

        let err = Command::from_args(CommandKind::Delete, &["phy"]).unwrap_err();
        assert_eq!(err, "❌ Usage: /delete <subject> <title>");
    }

    #[test]
    fn test_from_args_ignores_extra_tokens() {
        let command = Command::from_args(CommandKind::Delete, &["phy", "Waves", "extra"]).unwrap();
        assert_eq!(
            command,
            Command::Delete {
                subject: "phy".to_string(),
                title: "Waves".to_string(),
            }
        );
    }

    #[test]
    fn test_admin_only_command_set() {
        assert!(!CommandKind::Start.requires_admin());
        assert!(!CommandKind::Notes.requires_admin());
        assert!(!CommandKind::Available.requires_admin());
        assert!(!CommandKind::Suggest.requires_admin());
        assert!(CommandKind::Upload.requires_admin());
        assert!(CommandKind::Delete.requires_admin());
        assert!(CommandKind::Usage.requires_admin());
        assert!(CommandKind::Reviews.requires_admin());
        assert!(CommandKind::EditSubject.requires_admin());
        assert!(CommandKind::EditTitle.requires_admin());
    }
}
