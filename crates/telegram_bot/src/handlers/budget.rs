//! Handler for budget commands

use engine::LedgerError;
use teloxide::{RequestError, dispatching::UpdateHandler, prelude::*};

use crate::{ConfigParameters, commands::BudgetCommands, ui};

use super::GENERIC_ERROR;

const INVALID_AMOUNT: &str = "Invalid amount. Please enter numeric values only.";

/// Build the schema for BudgetCommands commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<BudgetCommands>()
        .endpoint(handle_budget)
}

async fn handle_budget(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: BudgetCommands,
) -> ResponseResult<()> {
    let user_id = msg.chat.id.to_string();

    match cmd {
        BudgetCommands::Budget => match cfg.ledger.budget_view(&user_id) {
            Ok(view) => {
                bot.send_message(msg.chat.id, ui::render_budget(&view)).await?;
            }
            Err(err @ LedgerError::BudgetNotConfigured) => {
                bot.send_message(msg.chat.id, err.to_string()).await?;
            }
            Err(err) => {
                tracing::error!("failed to load budget: {err}");
                bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
            }
        },
        BudgetCommands::UpdateBudget { amount } => {
            let Ok(amount) = engine::parse_amount(&amount) else {
                bot.send_message(msg.chat.id, INVALID_AMOUNT).await?;
                return Ok(());
            };
            match cfg.ledger.set_overall_budget(&user_id, amount) {
                Ok(()) => {
                    bot.send_message(msg.chat.id, "Budget Updated!").await?;
                }
                Err(err) => {
                    tracing::error!("failed to set overall budget: {err}");
                    bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
                }
            }
        }
        BudgetCommands::CategoryBudget { category, amount } => {
            let Ok(amount) = engine::parse_amount(&amount) else {
                bot.send_message(msg.chat.id, INVALID_AMOUNT).await?;
                return Ok(());
            };
            match cfg.ledger.set_category_budget(&user_id, &category, amount) {
                Ok(()) => {
                    bot.send_message(msg.chat.id, "Budget Updated!").await?;
                }
                Err(err) => {
                    tracing::error!("failed to set category budget: {err}");
                    bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
                }
            }
        }
        BudgetCommands::MaxSpend { amount } => {
            let Ok(amount) = engine::parse_amount(&amount) else {
                bot.send_message(msg.chat.id, INVALID_AMOUNT).await?;
                return Ok(());
            };
            match cfg.ledger.set_max_transaction_limit(&user_id, amount) {
                Ok(()) => {
                    bot.send_message(msg.chat.id, "Max Limit Updated!").await?;
                }
                Err(err) => {
                    tracing::error!("failed to set max transaction limit: {err}");
                    bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
                }
            }
        }
    }

    Ok(())
}
