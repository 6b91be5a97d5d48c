//! Handler for spending estimates

use teloxide::{RequestError, dispatching::UpdateHandler, prelude::*};

use crate::{ConfigParameters, commands::EstimateCommands, ui};

use super::GENERIC_ERROR;

/// Build the schema for EstimateCommands commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<EstimateCommands>()
        .endpoint(handle_estimate)
}

async fn handle_estimate(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: EstimateCommands,
) -> ResponseResult<()> {
    let user_id = msg.chat.id.to_string();
    let EstimateCommands::Estimate { period } = cmd;

    let (days, label) = match period.trim().to_ascii_lowercase().as_str() {
        "day" => (1, "next day"),
        "month" => (30, "next month"),
        _ => {
            bot.send_message(
                msg.chat.id,
                format!("Sorry I can't show an estimate for \"{period}\"!"),
            )
            .await?;
            return Ok(());
        }
    };

    match cfg.ledger.history(&user_id) {
        Ok(Some(history)) => {
            let report = engine::project_spending(&history, days);
            bot.send_message(msg.chat.id, ui::render_estimate(&report, label))
                .await?;
        }
        Ok(None) => {
            bot.send_message(
                msg.chat.id,
                "Oops! Looks like you do not have any spending records!",
            )
            .await?;
        }
        Err(err) => {
            tracing::error!("failed to load history for estimate: {err}");
            bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
        }
    }

    Ok(())
}
