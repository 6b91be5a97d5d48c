use engine::{BudgetView, Currency, Transaction, display_amount};
use teloxide::utils::command::BotCommands;

use crate::commands::{
    BudgetCommands, CategoryCommands, EntryCommands, EstimateCommands, IncomeCommands,
};

pub(crate) fn help_text() -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}\n\n{}",
        EntryCommands::descriptions(),
        IncomeCommands::descriptions(),
        BudgetCommands::descriptions(),
        EstimateCommands::descriptions(),
        CategoryCommands::descriptions(),
    )
}

pub(crate) fn welcome_text() -> String {
    format!(
        "Welcome! I keep track of what you spend, your income and your budgets.\n\n{}",
        help_text()
    )
}

pub(crate) fn render_history(history: &[Transaction], currency: Currency) -> String {
    let mut text = format!(
        "Here is your spending history (converted to {currency}): \nDATE, CATEGORY, AMOUNT\n----------------------\n"
    );
    for tx in history {
        text.push_str(&tx.to_string());
        text.push('\n');
    }
    text
}

pub(crate) fn render_estimate(report: &[(String, f64)], period: &str) -> String {
    let mut text = format!(
        "Here are your estimated spendings for the {period}:\nCATEGORIES,AMOUNT \n----------------------\n"
    );
    for (category, amount) in report {
        text.push_str(&format!("{category} ${}\n", display_amount(*amount)));
    }
    text
}

pub(crate) fn render_budget(view: &BudgetView) -> String {
    match view {
        BudgetView::Overall(amount) => format!("Overall Budget: ${}", display_amount(*amount)),
        BudgetView::Category(categories) => {
            let mut text = String::from("Budget Summary\n");
            for (category, amount) in categories {
                text.push_str(&format!("{category}: ${}\n", display_amount(*amount)));
            }
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn history_lists_raw_records_under_the_header() {
        let history: Vec<Transaction> = [
            "01-Jan-2021,Food,100,USD",
            "15-Feb-2021,Transport,50,USD",
        ]
        .iter()
        .map(|line| line.parse().unwrap())
        .collect();

        let text = render_history(&history, Currency::Usd);
        assert_eq!(
            text,
            "Here is your spending history (converted to USD): \n\
             DATE, CATEGORY, AMOUNT\n\
             ----------------------\n\
             01-Jan-2021,Food,100.0,USD\n\
             15-Feb-2021,Transport,50.0,USD\n"
        );
    }

    #[test]
    fn estimate_report_matches_the_legacy_framing() {
        let report = vec![("Food".to_string(), 25.0), ("Transport".to_string(), 5.0)];
        assert_eq!(
            render_estimate(&report, "next day"),
            "Here are your estimated spendings for the next day:\n\
             CATEGORIES,AMOUNT \n\
             ----------------------\n\
             Food $25.0\nTransport $5.0\n"
        );
    }

    #[test]
    fn budget_rendering_covers_both_views() {
        assert_eq!(
            render_budget(&BudgetView::Overall(1000.0)),
            "Overall Budget: $1000.0"
        );

        let mut categories = BTreeMap::new();
        categories.insert("Food".to_string(), 200.0);
        categories.insert("Transport".to_string(), 150.0);
        assert_eq!(
            render_budget(&BudgetView::Category(categories)),
            "Budget Summary\nFood: $200.0\nTransport: $150.0\n"
        );
    }
}
