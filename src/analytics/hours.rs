use chrono::Timelike;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::TradeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HourStats {
    /// Hour of day 0-23 in the journal's display timezone.
    pub hour: u32,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
}

/// Per-hour performance, ranked best first: win rate descending, total PnL
/// as the tie-break. Consumers take the head and tail for the best/worst
/// trading windows.
pub fn hourly_stats(trades: &[TradeRecord], tz: Tz) -> Vec<HourStats> {
    let mut grouped: HashMap<u32, HourStats> = HashMap::new();

    for t in trades {
        let hour = t.created_at.with_timezone(&tz).hour();
        let entry = grouped.entry(hour).or_insert_with(|| HourStats {
            hour,
            ..HourStats::default()
        });
        entry.trades += 1;
        entry.total_pnl += t.net_pnl;
        if t.net_pnl > 0.0 {
            entry.wins += 1;
        }
        if t.net_pnl < 0.0 {
            entry.losses += 1;
        }
    }

    let mut stats: Vec<HourStats> = grouped
        .into_values()
        .map(|mut s| {
            s.win_rate = s.wins as f64 / s.trades as f64 * 100.0;
            s.avg_pnl = s.total_pnl / s.trades as f64;
            s
        })
        .collect();

    stats.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.total_pnl
                    .partial_cmp(&a.total_pnl)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
    stats
}

/// 12-hour clock label for an hour-of-day, e.g. 0 -> "12 AM", 13 -> "1 PM".
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{hour} AM"),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}
