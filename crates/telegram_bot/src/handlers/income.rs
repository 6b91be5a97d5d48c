//! Handler for income commands

use teloxide::{RequestError, dispatching::UpdateHandler, prelude::*};

use crate::{ConfigParameters, commands::IncomeCommands};

use super::GENERIC_ERROR;

/// Build the schema for IncomeCommands commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<IncomeCommands>()
        .endpoint(handle_income)
}

async fn handle_income(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: IncomeCommands,
) -> ResponseResult<()> {
    let user_id = msg.chat.id.to_string();

    match cmd {
        IncomeCommands::Income { amount } => {
            // Any numeric value is accepted here, zero and negative included;
            // the affordability check is where a zero income starts to bite.
            let Ok(income) = amount.trim().parse::<f64>() else {
                bot.send_message(
                    msg.chat.id,
                    "Invalid input. Please enter a numeric value for your income.",
                )
                .await?;
                return Ok(());
            };

            match cfg.ledger.set_income(&user_id, income) {
                Ok(()) => {
                    bot.send_message(
                        msg.chat.id,
                        format!(
                            "Your monthly income has been set to ${}.",
                            engine::display_amount(income)
                        ),
                    )
                    .await?;
                }
                Err(err) => {
                    tracing::error!("failed to set income: {err}");
                    bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
                }
            }
        }
        IncomeCommands::Remaining => match cfg.ledger.remaining_budget(&user_id, None) {
            Ok(remaining) => {
                bot.send_message(
                    msg.chat.id,
                    format!(
                        "Your remaining budget is ${}",
                        engine::display_amount(remaining)
                    ),
                )
                .await?;
            }
            Err(err) => {
                tracing::error!("failed to compute remaining budget: {err}");
                bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
            }
        },
    }

    Ok(())
}
