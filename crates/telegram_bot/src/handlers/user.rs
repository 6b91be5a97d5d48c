//! Handler for start and per-user preference commands

use engine::Currency;
use teloxide::{RequestError, dispatching::UpdateHandler, prelude::*};

use crate::{ConfigParameters, commands::UserCommands, ui};

use super::GENERIC_ERROR;

/// Build the schema for UserCommands commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<UserCommands>()
        .endpoint(handle_user)
}

async fn handle_user(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: UserCommands,
) -> ResponseResult<()> {
    let user_id = msg.chat.id.to_string();

    match cmd {
        UserCommands::Start => {
            bot.send_message(msg.chat.id, ui::welcome_text()).await?;
        }
        UserCommands::SetCurrency { code } => {
            let Ok(currency) = Currency::try_from(code.as_str()) else {
                bot.send_message(
                    msg.chat.id,
                    format!("Sorry, {} is not a supported currency!", code.trim()),
                )
                .await?;
                return Ok(());
            };
            match cfg.ledger.set_preferred_currency(&user_id, currency) {
                Ok(()) => {
                    bot.send_message(
                        msg.chat.id,
                        format!("Preferred currency set to {currency}!"),
                    )
                    .await?;
                }
                Err(err) => {
                    tracing::error!("failed to set preferred currency: {err}");
                    bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
                }
            }
        }
    }

    Ok(())
}
