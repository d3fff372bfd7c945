use chrono::{DateTime, Duration, Utc};

use crate::models::{TimeframeFilter, TradeRecord};

/// Subset of trades inside the symbolic window. `now` is passed in so
/// repeated calls over the same input stay deterministic.
///
/// Windowed variants keep trades with `created_at` in `[now - N days, now]`,
/// both ends inclusive. `LastTrade` is the most recent record (or nothing).
pub fn filter_by_timeframe(
    trades: &[TradeRecord],
    timeframe: TimeframeFilter,
    now: DateTime<Utc>,
) -> Vec<TradeRecord> {
    match timeframe {
        TimeframeFilter::AllTime => trades.to_vec(),
        TimeframeFilter::LastTrade => trades
            .iter()
            .max_by_key(|t| t.created_at)
            .cloned()
            .into_iter()
            .collect(),
        _ => {
            // days_back is Some for every remaining variant.
            let days = timeframe.days_back().unwrap_or(0);
            let cutoff = now - Duration::days(days);
            trades
                .iter()
                .filter(|t| t.created_at >= cutoff && t.created_at <= now)
                .cloned()
                .collect()
        }
    }
}
