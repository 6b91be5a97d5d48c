//! Handler for category registry commands

use engine::LedgerError;
use teloxide::{RequestError, dispatching::UpdateHandler, prelude::*};

use crate::{ConfigParameters, commands::CategoryCommands};

use super::GENERIC_ERROR;

/// Build the schema for CategoryCommands commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<CategoryCommands>()
        .endpoint(handle_categories)
}

async fn handle_categories(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: CategoryCommands,
) -> ResponseResult<()> {
    match cmd {
        CategoryCommands::Categories => match cfg.categories.list() {
            Ok(categories) if categories.is_empty() => {
                bot.send_message(msg.chat.id, "You have no categories yet!")
                    .await?;
            }
            Ok(categories) => {
                bot.send_message(msg.chat.id, categories.join("\n")).await?;
            }
            Err(err) => {
                tracing::error!("failed to list categories: {err}");
                bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
            }
        },
        CategoryCommands::AddCategory { name } => {
            let name = name.trim().to_string();
            match cfg.categories.add(&name) {
                Ok(()) => {
                    bot.send_message(
                        msg.chat.id,
                        format!("Add category \"{name}\" successfully!"),
                    )
                    .await?;
                }
                Err(LedgerError::ExistingKey(_)) => {
                    bot.send_message(
                        msg.chat.id,
                        format!("Category \"{name}\" already exists!"),
                    )
                    .await?;
                }
                Err(err @ LedgerError::InvalidRecord(_)) => {
                    bot.send_message(msg.chat.id, err.to_string()).await?;
                }
                Err(err) => {
                    tracing::error!("failed to add category: {err}");
                    bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
                }
            }
        }
        CategoryCommands::DeleteCategory { name } => {
            let name = name.trim().to_string();
            match cfg.categories.delete(&name) {
                Ok(()) => {
                    bot.send_message(
                        msg.chat.id,
                        format!("Delete category \"{name}\" successfully!"),
                    )
                    .await?;
                }
                Err(LedgerError::KeyNotFound(_)) => {
                    bot.send_message(
                        msg.chat.id,
                        format!("Category \"{name}\" does not exist!"),
                    )
                    .await?;
                }
                Err(err) => {
                    tracing::error!("failed to delete category: {err}");
                    bot.send_message(msg.chat.id, GENERIC_ERROR).await?;
                }
            }
        }
    }

    Ok(())
}
