use chrono::{DateTime, TimeZone, Utc};

use crate::models::{AssetType, OrderType, TradeRecord};

/// Fixture trade on 2024-01-15 at `hour`:00 UTC with the given stored net
/// PnL. Entry 100 x 10 units, so every fixture carries 1000 entry notional;
/// fees are zero so gross equals net.
pub fn make_trade(id: &str, net_pnl: f64, tags: &[&str], hour: u32) -> TradeRecord {
    let mut trade = make_trade_on(id, net_pnl, 2024, 1, 15, hour);
    trade.tags = tags.iter().map(|t| t.to_string()).collect();
    trade
}

/// Fixture trade at an explicit UTC date and hour.
pub fn make_trade_on(id: &str, net_pnl: f64, year: i32, month: u32, day: u32, hour: u32) -> TradeRecord {
    let created_at: DateTime<Utc> = Utc
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .unwrap();

    TradeRecord {
        id: id.to_string(),
        user_id: "test".to_string(),
        asset_name: "BTC".to_string(),
        asset_type: AssetType::Crypto,
        platform_id: "binance".to_string(),
        order_type: OrderType::Long,
        entry_price: 100.0,
        exit_price: 100.0 + net_pnl / 10.0,
        quantity: 10.0,
        gross_pnl: net_pnl,
        total_fee: 0.0,
        net_pnl,
        notes: None,
        tags: Vec::new(),
        created_at,
        updated_at: None,
    }
}
