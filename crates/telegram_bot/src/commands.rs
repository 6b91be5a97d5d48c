//! Command structs

use teloxide::utils::command::{BotCommands, ParseError};

pub fn split_transaction(input: String) -> Result<(String, String, String, String), ParseError> {
    let args: Vec<&str> = input.split_whitespace().collect();

    match args.len() {
        3 => Ok((
            args[0].to_string(),
            args[1].to_string(),
            args[2].to_string(),
            String::new(),
        )),
        4 => Ok((
            args[0].to_string(),
            args[1].to_string(),
            args[2].to_string(),
            args[3].to_string(),
        )),
        _ => Err(ParseError::Custom("Failed to parse the transaction".into())),
    }
}

pub fn split_edit(input: String) -> Result<(String, String, String), ParseError> {
    let args: Vec<&str> = input.split_whitespace().collect();

    if args.len() < 3 {
        Err(ParseError::Custom("Failed to parse the edit".into()))
    } else {
        Ok((
            args[0].to_string(),
            args[1].to_string(),
            args[2..].join(" "),
        ))
    }
}

pub fn split_category_budget(input: String) -> Result<(String, String), ParseError> {
    let args: Vec<&str> = input.split_whitespace().collect();

    if args.len() != 2 {
        Err(ParseError::Custom("Failed to parse the category budget".into()))
    } else {
        Ok((args[0].to_string(), args[1].to_string()))
    }
}

/// Commands to record and review spending
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Commands to manage your spending:")]
pub enum EntryCommands {
    #[command(description = "Show this message.")]
    Help,
    #[command(
        description = "Record a transaction: date category amount [currency].",
        parse_with = split_transaction
    )]
    Add {
        date: String,
        category: String,
        amount: String,
        currency: String,
    },
    #[command(description = "Show your spending history.")]
    History,
    #[command(
        description = "Edit a recorded transaction: position field value.",
        parse_with = split_edit
    )]
    Edit {
        position: String,
        field: String,
        value: String,
    },
    #[command(description = "Erase your whole spending history.")]
    Erase,
}

/// Commands to manage income
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Commands to manage your income:")]
pub enum IncomeCommands {
    #[command(description = "Set your monthly income.")]
    Income { amount: String },
    #[command(description = "Show how much of your income is left.")]
    Remaining,
}

/// Commands to manage budgets
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Commands to manage your budget:")]
pub enum BudgetCommands {
    #[command(description = "Show the configured budget.")]
    Budget,
    #[command(description = "Set the overall budget.")]
    UpdateBudget { amount: String },
    #[command(
        description = "Set a per-category budget: category amount.",
        parse_with = split_category_budget
    )]
    CategoryBudget { category: String, amount: String },
    #[command(description = "Set the max limit per transaction.")]
    MaxSpend { amount: String },
}

/// Commands for spending estimates
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Commands for spending estimates:")]
pub enum EstimateCommands {
    #[command(description = "Estimate future spending: day or month.")]
    Estimate { period: String },
}

/// Commands to manage spend categories
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Commands to manage categories:")]
pub enum CategoryCommands {
    #[command(description = "List the spend categories.")]
    Categories,
    #[command(description = "Add a spend category.")]
    AddCategory { name: String },
    #[command(description = "Delete a spend category.")]
    DeleteCategory { name: String },
}

/// Start and per-user preference commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum UserCommands {
    Start,
    #[command(description = "Set your preferred currency.")]
    SetCurrency { code: String },
}
