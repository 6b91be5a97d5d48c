//! Handler for recording and reviewing transactions

use engine::{Currency, LedgerError, Transaction, TransactionUpdate, TransactionVerdict};
use teloxide::{RequestError, dispatching::UpdateHandler, prelude::*};

use crate::{ConfigParameters, commands::EntryCommands, ui};

use super::{GENERIC_ERROR, NO_RECORDS};

/// Build the schema for EntryCommands commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<EntryCommands>()
        .endpoint(handle_entry)
}

async fn handle_entry(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: EntryCommands,
) -> ResponseResult<()> {
    let user_id = msg.chat.id.to_string();

    match cmd {
        EntryCommands::Help => {
            bot.send_message(msg.chat.id, ui::help_text()).await?;
        }
        EntryCommands::Add {
            date,
            category,
            amount,
            currency,
        } => {
            handle_add(&bot, &cfg, &msg, &user_id, &date, &category, &amount, &currency).await?;
        }
        EntryCommands::History => match cfg.ledger.history(&user_id) {
            Ok(Some(history)) => {
                let currency = cfg.ledger.preferred_currency(&user_id).unwrap_or_default();
                bot.send_message(msg.chat.id, ui::render_history(&history, currency))
                    .await?;
            }
            Ok(None) => {
                bot.send_message(msg.chat.id, NO_RECORDS).await?;
            }
            Err(err) => {
                tracing::error!("failed to load history: {err}");
                bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
            }
        },
        EntryCommands::Edit {
            position,
            field,
            value,
        } => {
            handle_edit(&bot, &cfg, &msg, &user_id, &position, &field, &value).await?;
        }
        EntryCommands::Erase => match cfg.ledger.delete_history(&user_id) {
            Ok(()) => {
                bot.send_message(msg.chat.id, "History has been deleted!")
                    .await?;
            }
            Err(LedgerError::KeyNotFound(_)) => {
                bot.send_message(msg.chat.id, NO_RECORDS).await?;
            }
            Err(err) => {
                tracing::error!("failed to erase history: {err}");
                bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
            }
        },
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn handle_add(
    bot: &Bot,
    cfg: &ConfigParameters,
    msg: &Message,
    user_id: &str,
    date: &str,
    category: &str,
    amount: &str,
    currency: &str,
) -> ResponseResult<()> {
    let Ok(date) = engine::parse_date(date) else {
        bot.send_message(msg.chat.id, "The date is incorrect").await?;
        return Ok(());
    };
    let Ok(amount) = engine::parse_amount(amount) else {
        bot.send_message(msg.chat.id, "Invalid amount. Please enter numeric values only.")
            .await?;
        return Ok(());
    };
    let currency = if currency.is_empty() {
        None
    } else {
        match Currency::try_from(currency) {
            Ok(currency) => Some(currency),
            Err(_) => {
                bot.send_message(
                    msg.chat.id,
                    format!("Sorry, {currency} is not a supported currency!"),
                )
                .await?;
                return Ok(());
            }
        }
    };

    let tx = match Transaction::new(date, category, amount, currency) {
        Ok(tx) => tx,
        Err(err) => {
            bot.send_message(msg.chat.id, err.to_string()).await?;
            return Ok(());
        }
    };
    let recorded = format!(
        "The following expenditure has been recorded: You have spent ${} for {} on {}",
        engine::display_amount(tx.amount),
        tx.category,
        tx.date.format("%d-%b-%Y"),
    );

    match cfg.ledger.add_transaction(user_id, tx) {
        Ok(TransactionVerdict::Accepted) => {
            bot.send_message(msg.chat.id, recorded).await?;
        }
        Ok(TransactionVerdict::Warned(warning)) => {
            bot.send_message(msg.chat.id, warning).await?;
            bot.send_message(msg.chat.id, recorded).await?;
        }
        Ok(TransactionVerdict::Rejected(rejection)) => {
            bot.send_message(msg.chat.id, rejection).await?;
        }
        Err(err @ LedgerError::UnsupportedConversion { .. }) => {
            bot.send_message(msg.chat.id, err.to_string()).await?;
        }
        Err(err) => {
            tracing::error!("failed to record transaction: {err}");
            bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
        }
    }

    Ok(())
}

async fn handle_edit(
    bot: &Bot,
    cfg: &ConfigParameters,
    msg: &Message,
    user_id: &str,
    position: &str,
    field: &str,
    value: &str,
) -> ResponseResult<()> {
    let index = match position.parse::<usize>() {
        Ok(position) if position > 0 => position - 1,
        _ => {
            bot.send_message(msg.chat.id, "Select expense to be edited:")
                .await?;
            return Ok(());
        }
    };

    let (update, confirmation) = match field.to_ascii_lowercase().as_str() {
        "date" => match engine::parse_date(value) {
            Ok(date) => (TransactionUpdate::Date(date), "Date is updated"),
            Err(_) => {
                bot.send_message(msg.chat.id, "The date is incorrect").await?;
                return Ok(());
            }
        },
        "category" => (
            TransactionUpdate::Category(value.to_string()),
            "Category is updated",
        ),
        "amount" | "cost" => match engine::parse_amount(value) {
            Ok(amount) => (TransactionUpdate::Amount(amount), "Expense amount is updated"),
            Err(_) => {
                bot.send_message(msg.chat.id, "The cost is invalid").await?;
                return Ok(());
            }
        },
        _ => {
            bot.send_message(msg.chat.id, "What do you want to update?")
                .await?;
            return Ok(());
        }
    };

    match cfg.ledger.edit_transaction(user_id, index, update) {
        Ok(()) => {
            bot.send_message(msg.chat.id, confirmation).await?;
        }
        Err(LedgerError::KeyNotFound(_)) => {
            bot.send_message(msg.chat.id, NO_RECORDS).await?;
        }
        Err(err) => {
            tracing::error!("failed to edit transaction: {err}");
            bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
        }
    }

    Ok(())
}
