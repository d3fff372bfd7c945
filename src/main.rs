use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use trading_journal::analytics::filter_by_timeframe;
use trading_journal::card::ShareCard;
use trading_journal::config::Config;
use trading_journal::fees::PlatformRegistry;
use trading_journal::format::Currency;
use trading_journal::report::JournalReport;
use trading_journal::store::{JournalStore, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let registry = PlatformRegistry::builtin().shared();
    let store = JsonFileStore::open(cfg.journal_path.as_str(), registry)?;

    let trades = store.list_by_user(&cfg.user_id).await?;
    let trades = filter_by_timeframe(&trades, cfg.default_timeframe, chrono::Utc::now());

    let report = JournalReport::from_trades(&trades, cfg.display_timezone);
    report.print_summary();

    let card = ShareCard::build(&trades, cfg.default_timeframe, Currency::Usd);
    println!(
        "\n  {} | {} trades | {} | ROI {} | WR {}",
        card.period_label,
        card.total_trades,
        card.net_pnl_display,
        card.roi_display,
        card.win_rate_display
    );

    Ok(())
}
