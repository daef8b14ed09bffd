//! Command execution: authorization, record mutation, reply rendering.
//!
//! Handlers return a [`CommandOutcome`] and the transport layer sends it,
//! so the whole command surface can be exercised without a live Telegram
//! connection. Storage faults are not caught here; they propagate to the
//! dispatcher's error handler.

use chrono::Utc;
use std::io;

use crate::config::Config;
use crate::models::{Note, Suggestion, UsageLogEntry};
use crate::store::RecordStore;

use super::{Command, parse_message};

pub const UNAUTHORIZED: &str = "❌ Unauthorized";

/// Transport-independent view of the message author.
#[derive(Debug, Clone)]
pub struct Sender {
    pub id: u64,
    pub username: Option<String>,
    pub first_name: String,
}

impl Sender {
    /// Name recorded in usage logs and suggestions: username, falling
    /// back to first name, then "Unknown".
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(username) if !username.is_empty() => username.clone(),
            _ if !self.first_name.is_empty() => self.first_name.clone(),
            _ => "Unknown".to_string(),
        }
    }
}

/// A single outgoing reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Plain(String),
    /// Rendered with Telegram Markdown (used for download links).
    Markdown(String),
}

/// Everything a command produced: ordered replies for the requesting
/// chat, plus an optional out-of-band notice for the administrator.
#[derive(Debug, Clone, Default)]
pub struct CommandOutcome {
    pub replies: Vec<Reply>,
    pub admin_notice: Option<String>,
}

impl CommandOutcome {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            replies: vec![Reply::Plain(text.into())],
            admin_notice: None,
        }
    }
}

/// Route one incoming message. Returns None when the text is not a
/// recognized command (the bot stays silent).
pub fn respond(
    store: &RecordStore,
    config: &Config,
    sender: &Sender,
    text: &str,
) -> io::Result<Option<CommandOutcome>> {
    let Some((kind, args)) = parse_message(text) else {
        return Ok(None);
    };

    // Authorization comes before argument validation.
    if kind.requires_admin() && !config.is_admin(sender.id) {
        log::info!("[CMD] Denied {:?} for user {}", kind, sender.id);
        return Ok(Some(CommandOutcome::plain(UNAUTHORIZED)));
    }

    let command = match Command::from_args(kind, &args) {
        Ok(command) => command,
        Err(usage) => return Ok(Some(CommandOutcome::plain(usage))),
    };

    let outcome = match command {
        Command::Start => start(config, sender),
        Command::Notes { subject } => notes(store, sender, &subject)?,
        Command::Available => available(store)?,
        Command::Suggest {
            subject,
            title,
            url,
        } => suggest(store, sender, &subject, &title, &url)?,
        Command::Upload {
            subject,
            title,
            url,
        } => upload(store, &subject, &title, &url)?,
        Command::Delete { subject, title } => delete(store, &subject, &title)?,
        Command::Usage => usage_summary(store)?,
        Command::Reviews => reviews(store)?,
        Command::EditSubject {
            old_subject,
            title,
            new_subject,
        } => edit_subject(store, &old_subject, &title, &new_subject)?,
        Command::EditTitle {
            subject,
            old_title,
            new_title,
        } => edit_title(store, &subject, &old_title, &new_title)?,
    };

    Ok(Some(outcome))
}

fn start(config: &Config, sender: &Sender) -> CommandOutcome {
    let mut message = String::from(
        "👋 Welcome to the Student Notes Bot!\n\n\
         📚 Commands you can use:\n\
         /notes <subject> - Get Notes\n\
         /available - View Subjects and Titles\n\
         /suggest <subject> <title> <url> - Submit your notes for review",
    );

    if config.is_admin(sender.id) {
        message.push_str(
            "\n👩‍🏫 Admin Only:\n\
             /upload <subject> <title> <url> - Add approved notes\n\
             /delete <subject> <title> - Delete a note\n\
             /usage - View usage logs\n\
             /reviews - View pending suggestions\n\
             /edit_subject <old_subject> <title> <new_subject> - Edit note subject\n\
             /edit_title <subject> <old_title> <new_title> - Edit note title",
        );
    }

    CommandOutcome::plain(message)
}

/// List notes for a subject, one Markdown reply per note, and append a
/// usage log entry. Lookups that find nothing are not logged.
fn notes(store: &RecordStore, sender: &Sender, subject: &str) -> io::Result<CommandOutcome> {
    let subject_upper = subject.to_uppercase();
    let matching: Vec<Note> = store
        .load_notes()?
        .into_iter()
        .filter(|note| note.subject == subject_upper)
        .collect();

    if matching.is_empty() {
        return Ok(CommandOutcome::plain("No notes found."));
    }

    let replies = matching
        .iter()
        .map(|note| Reply::Markdown(format!("{} - [Download PDF]({})", note.title, note.url)))
        .collect();

    let mut entries = store.load_usage_log()?;
    entries.push(UsageLogEntry {
        user: sender.display_name(),
        user_id: sender.id,
        command: "/notes".to_string(),
        subject: subject_upper,
        time_stamp: Utc::now(),
    });
    store.save_usage_log(&entries)?;

    Ok(CommandOutcome {
        replies,
        admin_notice: None,
    })
}

fn available(store: &RecordStore) -> io::Result<CommandOutcome> {
    let all = store.load_notes()?;
    if all.is_empty() {
        return Ok(CommandOutcome::plain("No notes available."));
    }

    let mut message = String::from("📚 Available Notes:\n\n");
    for (index, note) in all.iter().enumerate() {
        message.push_str(&format!(
            "{}. Subject: {}, Title: {}\n",
            index + 1,
            note.subject,
            note.title
        ));
    }

    Ok(CommandOutcome::plain(message))
}

fn suggest(
    store: &RecordStore,
    sender: &Sender,
    subject: &str,
    title: &str,
    url: &str,
) -> io::Result<CommandOutcome> {
    let suggestion = Suggestion {
        subject: subject.to_uppercase(),
        title: title.to_string(),
        url: url.to_string(),
        submitted_by: sender.display_name(),
        submitted_at: Utc::now(),
    };

    let mut all = store.load_suggestions()?;
    all.push(suggestion.clone());
    store.save_suggestions(&all)?;

    log::info!(
        "[SUGGEST] {} submitted \"{}\" under {}",
        suggestion.submitted_by,
        suggestion.title,
        suggestion.subject
    );

    let notice = format!(
        "📩 New note suggestion:\nSubject: {}\nTitle: {}\nURL: {}\nFrom: {}",
        suggestion.subject, suggestion.title, suggestion.url, suggestion.submitted_by
    );

    Ok(CommandOutcome {
        replies: vec![Reply::Plain(
            "✅ Your note suggestion has been submitted for review.".to_string(),
        )],
        admin_notice: Some(notice),
    })
}

fn upload(store: &RecordStore, subject: &str, title: &str, url: &str) -> io::Result<CommandOutcome> {
    let subject_upper = subject.to_uppercase();

    let mut all = store.load_notes()?;
    all.push(Note {
        subject: subject_upper.clone(),
        title: title.to_string(),
        url: url.to_string(),
    });
    store.save_notes(&all)?;

    log::info!("[NOTES] Added \"{}\" under {}", title, subject_upper);
    Ok(CommandOutcome::plain(format!(
        "✅ Note added for {}",
        subject_upper
    )))
}

/// Remove every note matching the subject (case-insensitive) and the
/// title (case-sensitive).
fn delete(store: &RecordStore, subject: &str, title: &str) -> io::Result<CommandOutcome> {
    let subject_upper = subject.to_uppercase();

    let mut all = store.load_notes()?;
    let original_len = all.len();
    all.retain(|note| !note.matches(&subject_upper, title));

    if all.len() == original_len {
        return Ok(CommandOutcome::plain(format!(
            "⚠️ No note found with subject \"{}\" and title \"{}\".",
            subject_upper, title
        )));
    }

    store.save_notes(&all)?;

    log::info!(
        "[NOTES] Deleted {} note(s) under {}",
        original_len - all.len(),
        subject_upper
    );
    Ok(CommandOutcome::plain(format!(
        "✅ Note deleted for subject \"{}\", title \"{}\".",
        subject_upper, title
    )))
}

/// The last ten usage log entries, most recent first.
fn usage_summary(store: &RecordStore) -> io::Result<CommandOutcome> {
    let entries = store.load_usage_log()?;
    if entries.is_empty() {
        return Ok(CommandOutcome::plain("No usage yet."));
    }

    let lines: Vec<String> = entries
        .iter()
        .rev()
        .take(10)
        .map(|entry| {
            format!(
                "{} used {} {} at {}",
                entry.user,
                entry.command,
                entry.subject,
                entry.time_stamp.format("%Y-%m-%d %H:%M:%S")
            )
        })
        .collect();

    Ok(CommandOutcome::plain(lines.join("\n")))
}

fn reviews(store: &RecordStore) -> io::Result<CommandOutcome> {
    let all = store.load_suggestions()?;
    if all.is_empty() {
        return Ok(CommandOutcome::plain("No pending suggestions."));
    }

    let mut message = String::from("📃 Pending Suggestions:\n\n");
    for (index, suggestion) in all.iter().enumerate() {
        message.push_str(&format!(
            "#{}\nSubject: {}\nTitle: {}\nURL: {}\nFrom: {}\n\n",
            index + 1,
            suggestion.subject,
            suggestion.title,
            suggestion.url,
            suggestion.submitted_by
        ));
    }

    Ok(CommandOutcome::plain(message))
}

/// Rename the subject on the first note matching (old_subject, title).
fn edit_subject(
    store: &RecordStore,
    old_subject: &str,
    title: &str,
    new_subject: &str,
) -> io::Result<CommandOutcome> {
    let old_upper = old_subject.to_uppercase();

    let mut all = store.load_notes()?;
    match all.iter_mut().find(|note| note.matches(&old_upper, title)) {
        Some(note) => note.subject = new_subject.to_uppercase(),
        None => {
            return Ok(CommandOutcome::plain(format!(
                "No note found with subject \"{}\" and title \"{}\".",
                old_subject, title
            )));
        }
    }
    store.save_notes(&all)?;

    Ok(CommandOutcome::plain(format!(
        "✅ Subject updated from \"{}\" to \"{}\" for title \"{}\".",
        old_subject, new_subject, title
    )))
}

/// Rename the title on the first note matching (subject, old_title).
fn edit_title(
    store: &RecordStore,
    subject: &str,
    old_title: &str,
    new_title: &str,
) -> io::Result<CommandOutcome> {
    let subject_upper = subject.to_uppercase();

    let mut all = store.load_notes()?;
    match all
        .iter_mut()
        .find(|note| note.matches(&subject_upper, old_title))
    {
        Some(note) => note.title = new_title.to_string(),
        None => {
            return Ok(CommandOutcome::plain(format!(
                "No note found with subject \"{}\" and title \"{}\".",
                subject, old_title
            )));
        }
    }
    store.save_notes(&all)?;

    Ok(CommandOutcome::plain(format!(
        "✅ Title updated from \"{}\" to \"{}\" in subject \"{}\".",
        old_title, new_title, subject
    )))
}
