//! Share-card summary: the display strings the social card exporter
//! consumes. Rendering and rasterization live elsewhere; this stays a pure
//! function of the (already timeframe-filtered) trades.

use serde::{Deserialize, Serialize};

use crate::analytics::{total_roi, TradingStats};
use crate::format::{format_currency, format_percentage, Currency};
use crate::models::{TimeframeFilter, TradeRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareCard {
    pub period_label: String,
    pub total_trades: usize,
    pub net_pnl: f64,
    pub roi: f64,
    pub win_rate: f64,
    // Pre-rendered strings for the exporter.
    pub net_pnl_display: String,
    pub roi_display: String,
    pub win_rate_display: String,
}

impl ShareCard {
    pub fn build(trades: &[TradeRecord], timeframe: TimeframeFilter, currency: Currency) -> Self {
        let stats = TradingStats::from_trades(trades);
        let roi = total_roi(trades);

        Self {
            period_label: timeframe.label().to_string(),
            total_trades: stats.total_trades,
            net_pnl: stats.total_net_pnl,
            roi,
            win_rate: stats.win_rate,
            net_pnl_display: format_currency(stats.total_net_pnl, currency),
            roi_display: format_percentage(roi),
            win_rate_display: format!("{:.1}%", stats.win_rate),
        }
    }
}
