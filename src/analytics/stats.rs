use serde::{Deserialize, Serialize};

use crate::models::TradeRecord;

/// Headline dashboard stats over a set of trades. Wins are net PnL > 0,
/// losses < 0; breakeven trades count toward the total only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TradingStats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate: f64,
    pub total_gross_pnl: f64,
    pub total_fees_paid: f64,
    pub total_net_pnl: f64,
    pub avg_pnl_per_trade: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
}

impl TradingStats {
    pub fn from_trades(trades: &[TradeRecord]) -> Self {
        if trades.is_empty() {
            return Self::default();
        }

        let total_trades = trades.len();
        let winning_trades = trades.iter().filter(|t| t.net_pnl > 0.0).count();
        let losing_trades = trades.iter().filter(|t| t.net_pnl < 0.0).count();
        let total_gross_pnl: f64 = trades.iter().map(|t| t.gross_pnl).sum();
        let total_fees_paid: f64 = trades.iter().map(|t| t.total_fee).sum();
        let total_net_pnl: f64 = trades.iter().map(|t| t.net_pnl).sum();

        let best_trade = trades.iter().map(|t| t.net_pnl).fold(f64::NEG_INFINITY, f64::max);
        let worst_trade = trades.iter().map(|t| t.net_pnl).fold(f64::INFINITY, f64::min);

        Self {
            total_trades,
            winning_trades,
            losing_trades,
            win_rate: winning_trades as f64 / total_trades as f64 * 100.0,
            total_gross_pnl,
            total_fees_paid,
            total_net_pnl,
            avg_pnl_per_trade: total_net_pnl / total_trades as f64,
            best_trade,
            worst_trade,
        }
    }
}

/// Entry notional summed across trades, the basis for aggregate ROI.
pub fn total_investment(trades: &[TradeRecord]) -> f64 {
    trades.iter().map(|t| t.entry_price * t.quantity).sum()
}

/// Aggregate ROI: total net PnL over total entry notional, in percent.
/// Zero for an empty (or zero-notional) set, never NaN.
pub fn total_roi(trades: &[TradeRecord]) -> f64 {
    let investment = total_investment(trades);
    if investment > 0.0 {
        trades.iter().map(|t| t.net_pnl).sum::<f64>() / investment * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_trade;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_input_is_all_zeros() {
        let stats = TradingStats::from_trades(&[]);
        assert_eq!(stats, TradingStats::default());
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(total_roi(&[]), 0.0);
    }

    #[test]
    fn counts_and_rates() {
        let trades = vec![
            make_trade("1", 50.0, &[], 9),
            make_trade("2", -20.0, &[], 10),
            make_trade("3", 30.0, &[], 11),
            make_trade("4", 0.0, &[], 12),
        ];
        let stats = TradingStats::from_trades(&trades);
        assert_eq!(stats.total_trades, 4);
        assert_eq!(stats.winning_trades, 2);
        assert_eq!(stats.losing_trades, 1);
        assert!((stats.win_rate - 50.0).abs() < EPS);
        assert!((stats.total_net_pnl - 60.0).abs() < EPS);
        assert!((stats.avg_pnl_per_trade - 15.0).abs() < EPS);
        assert!((stats.best_trade - 50.0).abs() < EPS);
        assert!((stats.worst_trade + 20.0).abs() < EPS);
    }

    #[test]
    fn aggregate_roi_uses_entry_notional() {
        // make_trade fixtures enter at 100.0 x 10 = 1000 notional each.
        let trades = vec![
            make_trade("1", 100.0, &[], 9),
            make_trade("2", -50.0, &[], 10),
        ];
        assert!((total_investment(&trades) - 2000.0).abs() < EPS);
        assert!((total_roi(&trades) - 2.5).abs() < EPS);
    }
}
