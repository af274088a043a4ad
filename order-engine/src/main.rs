use chrono::Local;
use order_engine::utils::logger::init_logger;
use order_engine::{CartLedger, Config, RedbKvStore, active_window};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config.log_level);

    tracing::info!("Amogha ordering engine starting");

    std::fs::create_dir_all(&config.work_dir)?;
    let store = Arc::new(RedbKvStore::open(
        Path::new(&config.work_dir).join("engine.redb"),
    )?);

    let ledger = CartLedger::restore(store);
    tracing::info!(
        lines = ledger.lines().len(),
        items = ledger.item_count(),
        "cart restored"
    );

    let totals = ledger.checkout_totals(None, &config.delivery_policy());
    tracing::info!(
        subtotal = totals.subtotal,
        delivery_fee = totals.delivery_fee,
        discount = totals.discount,
        total = totals.total,
        "checkout breakdown"
    );

    let now = Local::now();
    match active_window(&config.happy_hours, &now) {
        Some(window) => {
            tracing::info!(label = %window.label, discount = window.discount, "happy hour active")
        }
        None => tracing::info!("no happy hour active"),
    }

    Ok(())
}
