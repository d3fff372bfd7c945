use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::TradeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Calendar date in the journal's display timezone.
    pub date: NaiveDate,
    pub trades: usize,
    pub wins: usize,
    pub total_pnl: f64,
    pub win_rate: f64,
}

/// Per-day performance, sorted by date ascending. Days without trades are
/// simply absent; the grid renderer fills the gaps.
pub fn daily_stats(trades: &[TradeRecord], tz: Tz) -> Vec<DailyStats> {
    let mut grouped: HashMap<NaiveDate, (usize, usize, f64)> = HashMap::new();

    for t in trades {
        let date = t.created_at.with_timezone(&tz).date_naive();
        let entry = grouped.entry(date).or_insert((0, 0, 0.0));
        entry.0 += 1;
        if t.net_pnl > 0.0 {
            entry.1 += 1;
        }
        entry.2 += t.net_pnl;
    }

    let mut stats: Vec<DailyStats> = grouped
        .into_iter()
        .map(|(date, (trades, wins, total_pnl))| DailyStats {
            date,
            trades,
            wins,
            total_pnl,
            win_rate: wins as f64 / trades as f64 * 100.0,
        })
        .collect();

    stats.sort_by_key(|s| s.date);
    stats
}

/// Stats for a single day, if any trades landed on it.
pub fn stats_for_day(trades: &[TradeRecord], tz: Tz, date: NaiveDate) -> Option<DailyStats> {
    daily_stats(trades, tz).into_iter().find(|s| s.date == date)
}
