pub mod calendar;
pub mod filter;
pub mod hours;
pub mod mistakes;
pub mod stats;

pub use calendar::{daily_stats, stats_for_day, DailyStats};
pub use filter::filter_by_timeframe;
pub use hours::{format_hour, hourly_stats, HourStats};
pub use mistakes::{bucket_for_tag, stats_by_tag, MistakeReport, TagBucket};
pub use stats::{total_investment, total_roi, TradingStats};
