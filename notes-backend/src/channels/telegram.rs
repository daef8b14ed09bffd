//! Telegram transport binding.
//!
//! Wires the command executor to a teloxide dispatcher: incoming message
//! text goes through [`commands::respond`] and the resulting outcome is
//! sent back to the originating chat, plus the out-of-band admin notice
//! when a command produced one. Handler errors (storage faults included)
//! are not caught here; the dispatcher's logging error handler reports
//! them.

use std::sync::Arc;

use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use tokio::signal::unix::{SignalKind, signal};

use crate::commands::{self, Reply, Sender};
use crate::config::Config;
use crate::store::RecordStore;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Shared state handed to every handler invocation.
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
}

/// Run the bot until a termination signal arrives.
pub async fn run(config: Config, store: RecordStore) {
    let bot = Bot::new(config.bot_token.clone());
    let state = Arc::new(AppState { config, store });

    let handler = Update::filter_message().endpoint(handle_message);

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            log::debug!("[TELEGRAM] Unhandled update: {:?}", update);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "[TELEGRAM] Handler error",
        ))
        .build();

    let shutdown = dispatcher.shutdown_token();
    tokio::spawn(async move {
        wait_for_termination().await;
        log::info!("[TELEGRAM] Termination signal received, shutting down");
        if let Ok(done) = shutdown.shutdown() {
            done.await;
        }
    });

    log::info!("[TELEGRAM] Bot is live and running");
    dispatcher.dispatch().await;
}

/// Resolve when either SIGINT or SIGTERM is delivered.
async fn wait_for_termination() {
    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    tokio::select! {
        _ = sigint.recv() => {}
        _ = sigterm.recv() => {}
    }
}

async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(from) = msg.from() else {
        return Ok(());
    };

    let sender = Sender {
        id: from.id.0,
        username: from.username.clone(),
        first_name: from.first_name.clone(),
    };

    let Some(outcome) = commands::respond(&state.store, &state.config, &sender, text)? else {
        return Ok(());
    };

    for reply in &outcome.replies {
        match reply {
            Reply::Plain(body) => {
                bot.send_message(msg.chat.id, body.as_str()).await?;
            }
            Reply::Markdown(body) => {
                bot.send_message(msg.chat.id, body.as_str())
                    .parse_mode(ParseMode::Markdown)
                    .await?;
            }
        }
    }

    if let Some(notice) = &outcome.admin_notice {
        match state.config.admin_chat_id() {
            Some(chat_id) => {
                bot.send_message(ChatId(chat_id), notice.as_str()).await?;
            }
            None => log::warn!(
                "[TELEGRAM] ADMIN_ID is not a numeric chat id, dropping suggestion notice"
            ),
        }
    }

    Ok(())
}
