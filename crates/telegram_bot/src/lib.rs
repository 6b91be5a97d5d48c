//! Telegram bot.
//!
//! The bot is conversational plumbing only: it parses single-shot commands,
//! calls the ledger engine, and relays the engine's strings and numbers
//! back to the chat. All data transformation lives in `engine`.

use engine::{CategoryRegistry, Ledger};
use teloxide::{dptree, prelude::*};

mod commands;
mod handlers;
mod ui;

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct ConfigParameters {
    pub(crate) ledger: Ledger,
    pub(crate) categories: CategoryRegistry,
}

pub struct Bot {
    token: String,
    ledger: Ledger,
    categories: CategoryRegistry,
}

impl Bot {
    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        let parameters = ConfigParameters {
            ledger: self.ledger.clone(),
            categories: self.categories.clone(),
        };

        let handler = dptree::entry()
            .branch(handlers::entry::schema())
            .branch(handlers::income::schema())
            .branch(handlers::budget::schema())
            .branch(handlers::estimate::schema())
            .branch(handlers::categories::schema())
            .branch(handlers::user::schema());

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

/// The builder for `Bot`
#[derive(Default)]
pub struct BotBuilder {
    token: String,
    ledger: Option<Ledger>,
    categories: Option<CategoryRegistry>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn ledger(mut self, ledger: Ledger) -> BotBuilder {
        self.ledger = Some(ledger);
        self
    }

    pub fn categories(mut self, categories: CategoryRegistry) -> BotBuilder {
        self.categories = Some(categories);
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        if self.token.is_empty() {
            return Err("missing telegram token".to_string());
        }
        let ledger = self.ledger.ok_or_else(|| "missing ledger".to_string())?;
        let categories = self
            .categories
            .ok_or_else(|| "missing category registry".to_string())?;

        Ok(Bot {
            token: self.token,
            ledger,
            categories,
        })
    }
}
