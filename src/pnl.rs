use serde::{Deserialize, Serialize};

use crate::fees::{calculate_fees, FeeCalculation, PlatformRegistry};
use crate::models::{inputs_valid, OrderType, ProfitLoss};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PnlCalculation {
    pub gross_pnl: f64,
    pub fees: FeeCalculation,
    pub net_pnl: f64,
    /// Net PnL as a percent of the entry notional.
    pub roi: f64,
    /// Entry notional, the ROI basis for both directions.
    pub total_value: f64,
    pub profit_loss: ProfitLoss,
}

impl PnlCalculation {
    /// The documented fallback for invalid input: every field zero,
    /// classification neutral.
    pub fn neutral() -> Self {
        Self {
            gross_pnl: 0.0,
            fees: FeeCalculation::zero(),
            net_pnl: 0.0,
            roi: 0.0,
            total_value: 0.0,
            profit_loss: ProfitLoss::Neutral,
        }
    }
}

/// Complete financial summary for one trade. Pure and deterministic, so it
/// can run on every form keystroke and in test fixtures.
///
/// Upstream form validation is expected to reject bad numbers first; the
/// neutral fallback here is a second line of defense, not an error path.
pub fn calculate_pnl(
    registry: &PlatformRegistry,
    entry_price: f64,
    exit_price: f64,
    quantity: f64,
    platform_id: &str,
    order_type: OrderType,
) -> PnlCalculation {
    if !inputs_valid(entry_price, exit_price, quantity) {
        return PnlCalculation::neutral();
    }

    // Long profits when price rises, short when it falls.
    let gross_pnl = match order_type {
        OrderType::Long => (exit_price - entry_price) * quantity,
        OrderType::Short => (entry_price - exit_price) * quantity,
    };

    let fees = calculate_fees(
        registry,
        platform_id,
        entry_price,
        exit_price,
        quantity,
        order_type,
    );

    let net_pnl = gross_pnl - fees.total_fee;
    let total_value = entry_price * quantity;
    let roi = if total_value > 0.0 {
        net_pnl / total_value * 100.0
    } else {
        0.0
    };

    PnlCalculation {
        gross_pnl,
        fees,
        net_pnl,
        roi,
        total_value,
        profit_loss: ProfitLoss::from_net_pnl(net_pnl),
    }
}
