use chrono_tz::Tz;
use std::collections::HashMap;

use crate::analytics::{format_hour, hourly_stats, HourStats, MistakeReport, TradingStats};
use crate::format::{format_currency, Currency};
use crate::models::TradeRecord;

#[derive(Debug, Clone, Default)]
pub struct PlatformStats {
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub total_net_pnl: f64,
}

/// Terminal summary of a journal slice: headline stats, psychology costs,
/// hour ranking, per-platform breakdown.
#[derive(Debug, Clone)]
pub struct JournalReport {
    pub stats: TradingStats,
    pub mistakes: MistakeReport,
    pub hours: Vec<HourStats>,
    pub platform_stats: HashMap<String, PlatformStats>,
}

impl JournalReport {
    pub fn from_trades(trades: &[TradeRecord], tz: Tz) -> Self {
        let mut platform_stats: HashMap<String, PlatformStats> = HashMap::new();
        for t in trades {
            let entry = platform_stats.entry(t.platform_id.clone()).or_default();
            entry.trades += 1;
            entry.total_net_pnl += t.net_pnl;
            if t.net_pnl > 0.0 {
                entry.wins += 1;
            } else if t.net_pnl < 0.0 {
                entry.losses += 1;
            }
        }
        for stats in platform_stats.values_mut() {
            stats.win_rate = if stats.trades > 0 {
                stats.wins as f64 / stats.trades as f64 * 100.0
            } else {
                0.0
            };
        }

        JournalReport {
            stats: TradingStats::from_trades(trades),
            mistakes: MistakeReport::from_trades(trades),
            hours: hourly_stats(trades, tz),
            platform_stats,
        }
    }

    pub fn print_summary(&self) {
        let money = |v: f64| format_currency(v, Currency::Usd);

        println!("\n{}", "=".repeat(70));
        println!("  JOURNAL SUMMARY");
        println!("{}", "=".repeat(70));
        println!();
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Trades:      {}", self.stats.total_trades);
        println!(
            "  Win/Loss:    {} / {}",
            self.stats.winning_trades, self.stats.losing_trades
        );
        println!("  Win Rate:    {:.1}%", self.stats.win_rate);
        println!("  Gross PnL:   {}", money(self.stats.total_gross_pnl));
        println!("  Fees Paid:   {}", money(self.stats.total_fees_paid));
        println!("  Net PnL:     {}", money(self.stats.total_net_pnl));
        println!("  Avg Trade:   {}", money(self.stats.avg_pnl_per_trade));
        println!("  Best:        {}", money(self.stats.best_trade));
        println!("  Worst:       {}", money(self.stats.worst_trade));

        if self.mistakes.mistakes.trades > 0 || self.mistakes.disciplined.trades > 0 {
            println!();
            println!("  PSYCHOLOGY");
            println!("  ───────────────────────────────────");
            println!(
                "  Mistakes:    {} trades | WR {:.0}% | PnL {}",
                self.mistakes.mistakes.trades,
                self.mistakes.mistakes.win_rate,
                money(self.mistakes.mistakes.total_net_pnl)
            );
            println!(
                "  Disciplined: {} trades | WR {:.0}% | PnL {}",
                self.mistakes.disciplined.trades,
                self.mistakes.disciplined.win_rate,
                money(self.mistakes.disciplined.total_net_pnl)
            );
            println!(
                "  Potential savings: {}",
                money(self.mistakes.potential_savings())
            );
        }

        if !self.hours.is_empty() {
            println!();
            println!("  BY HOUR");
            println!("  ───────────────────────────────────");
            for stats in self.hours.iter().take(3) {
                println!(
                    "  {:>5}: {} trades | WR {:.0}% | PnL {}",
                    format_hour(stats.hour),
                    stats.trades,
                    stats.win_rate,
                    money(stats.total_pnl)
                );
            }
            if self.hours.len() > 3 {
                println!("  ...");
                for stats in self.hours.iter().rev().take(3).rev() {
                    println!(
                        "  {:>5}: {} trades | WR {:.0}% | PnL {}",
                        format_hour(stats.hour),
                        stats.trades,
                        stats.win_rate,
                        money(stats.total_pnl)
                    );
                }
            }
        }

        if !self.platform_stats.is_empty() {
            println!();
            println!("  BY PLATFORM");
            println!("  ───────────────────────────────────");
            let mut platforms: Vec<_> = self.platform_stats.iter().collect();
            platforms.sort_by(|a, b| b.1.total_net_pnl.partial_cmp(&a.1.total_net_pnl).unwrap());
            for (platform, stats) in platforms {
                println!(
                    "  {:>20}: {} trades | WR {:.0}% | PnL {}",
                    platform,
                    stats.trades,
                    stats.win_rate,
                    money(stats.total_net_pnl)
                );
            }
        }

        println!("{}", "=".repeat(70));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_trade;

    #[test]
    fn platform_breakdown() {
        let mut t1 = make_trade("1", 50.0, &[], 9);
        t1.platform_id = "binance".to_string();
        let mut t2 = make_trade("2", -20.0, &[], 10);
        t2.platform_id = "binance".to_string();
        let mut t3 = make_trade("3", 5.0, &[], 11);
        t3.platform_id = "ajaib".to_string();

        let report = JournalReport::from_trades(&[t1, t2, t3], chrono_tz::UTC);
        assert_eq!(report.platform_stats.len(), 2);
        let binance = &report.platform_stats["binance"];
        assert_eq!(binance.trades, 2);
        assert_eq!(binance.wins, 1);
        assert!((binance.win_rate - 50.0).abs() < 1e-9);
        assert_eq!(report.stats.total_trades, 3);
        assert_eq!(report.hours.len(), 3);
    }
}
