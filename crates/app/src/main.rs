use engine::{CategoryRegistry, Ledger, LedgerStore, RateTable};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "centsible={level},telegram_bot={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let ledger = Ledger::new(LedgerStore::new(&settings.store.path), RateTable::default());
    let categories = CategoryRegistry::new(&settings.store.categories);

    if let Some(telegram) = settings.telegram {
        tracing::info!("Found telegram settings...");
        match telegram_bot::Bot::builder()
            .token(&telegram.token)
            .ledger(ledger)
            .categories(categories)
            .build()
        {
            Ok(bot) => bot.run().await,
            Err(err) => tracing::error!("failed to initialize telegram bot: {err}"),
        }
    } else {
        tracing::warn!("No telegram settings found, nothing to run.");
    }

    Ok(())
}
