use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::fees::registry::{FeeRule, PlatformRegistry};
use crate::models::OrderType;

/// Leg amounts and effective percentages, for display alongside the fees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub buy_percentage: f64,
    pub sell_percentage: f64,
    pub buy_amount: f64,
    pub sell_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeCalculation {
    pub buy_fee: f64,
    pub sell_fee: f64,
    pub total_fee: f64,
    pub breakdown: FeeBreakdown,
}

impl FeeCalculation {
    pub fn zero() -> Self {
        Self {
            buy_fee: 0.0,
            sell_fee: 0.0,
            total_fee: 0.0,
            breakdown: FeeBreakdown {
                buy_percentage: 0.0,
                sell_percentage: 0.0,
                buy_amount: 0.0,
                sell_amount: 0.0,
            },
        }
    }
}

/// Absolute fee for one leg. `units` only matters to the tiered model.
pub fn leg_fee(rule: &FeeRule, amount: f64, units: f64) -> f64 {
    match *rule {
        FeeRule::Percentage { rate } => amount * rate / 100.0,
        FeeRule::Flat { base, step } => match step {
            Some(step) if amount >= step.threshold => step.amount,
            _ => base,
        },
        FeeRule::Tiered {
            per_unit,
            min_fee,
            max_rate,
        } => {
            // Floor applied after the cap; a floor above the cap wins,
            // matching the published schedule.
            let per_unit_fee = units * per_unit;
            min_fee.max(per_unit_fee.min(amount * max_rate))
        }
    }
}

/// Full buy/sell fee breakdown for a trade. The buy leg is always the
/// entry notional and the sell leg the exit notional, for both long and
/// short positions (every position is two transactions). Unknown platforms
/// charge nothing and must never block the PnL result.
pub fn calculate_fees(
    registry: &PlatformRegistry,
    platform_id: &str,
    entry_price: f64,
    exit_price: f64,
    quantity: f64,
    _order_type: OrderType,
) -> FeeCalculation {
    let Some(platform) = registry.lookup(platform_id) else {
        warn!("platform {} not found, using 0% fees", platform_id);
        return FeeCalculation::zero();
    };

    let buy_amount = entry_price * quantity;
    let sell_amount = exit_price * quantity;

    let buy_fee = leg_fee(&platform.buy, buy_amount, quantity);
    let sell_fee = leg_fee(&platform.sell, sell_amount, quantity);

    let buy_percentage = if buy_amount > 0.0 {
        buy_fee / buy_amount * 100.0
    } else {
        0.0
    };
    let sell_percentage = if sell_amount > 0.0 {
        sell_fee / sell_amount * 100.0
    } else {
        0.0
    };

    FeeCalculation {
        buy_fee,
        sell_fee,
        total_fee: buy_fee + sell_fee,
        breakdown: FeeBreakdown {
            buy_percentage,
            sell_percentage,
            buy_amount,
            sell_amount,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::registry::FlatStep;

    const EPS: f64 = 1e-9;

    #[test]
    fn percentage_fee_basic() {
        let registry = PlatformRegistry::builtin();
        // Binance 0.1% both sides: entry 100 x 10 = 1000 -> 1.00,
        // exit 110 x 10 = 1100 -> 1.10
        let fees = calculate_fees(&registry, "binance", 100.0, 110.0, 10.0, OrderType::Long);
        assert!((fees.buy_fee - 1.0).abs() < EPS);
        assert!((fees.sell_fee - 1.1).abs() < EPS);
        assert!((fees.total_fee - 2.1).abs() < EPS);
        assert!((fees.breakdown.buy_amount - 1000.0).abs() < EPS);
        assert!((fees.breakdown.sell_amount - 1100.0).abs() < EPS);
        assert!((fees.breakdown.buy_percentage - 0.1).abs() < EPS);
    }

    #[test]
    fn percentage_fee_scales_linearly() {
        let registry = PlatformRegistry::builtin();
        let small = calculate_fees(&registry, "ajaib", 50.0, 60.0, 10.0, OrderType::Long);
        let double = calculate_fees(&registry, "ajaib", 100.0, 120.0, 10.0, OrderType::Long);
        assert!((double.buy_fee - 2.0 * small.buy_fee).abs() < EPS);
        assert!((double.sell_fee - 2.0 * small.sell_fee).abs() < EPS);
    }

    #[test]
    fn fee_legs_ignore_direction() {
        let registry = PlatformRegistry::builtin();
        let long = calculate_fees(&registry, "ajaib", 100.0, 90.0, 10.0, OrderType::Long);
        let short = calculate_fees(&registry, "ajaib", 100.0, 90.0, 10.0, OrderType::Short);
        assert_eq!(long, short);
        // Buy side keyed to the entry leg even though a short opens by selling.
        assert!((short.buy_fee - 1000.0 * 0.15 / 100.0).abs() < EPS);
        assert!((short.sell_fee - 900.0 * 0.25 / 100.0).abs() < EPS);
    }

    #[test]
    fn flat_fee_steps_at_threshold() {
        let rule = FeeRule::Flat {
            base: 0.99,
            step: Some(FlatStep {
                threshold: 1000.0,
                amount: 1.99,
            }),
        };
        assert!((leg_fee(&rule, 999.99, 1.0) - 0.99).abs() < EPS);
        assert!((leg_fee(&rule, 1000.0, 1.0) - 1.99).abs() < EPS);
        assert!((leg_fee(&rule, 5000.0, 1.0) - 1.99).abs() < EPS);

        let plain = FeeRule::Flat {
            base: 2.5,
            step: None,
        };
        assert!((leg_fee(&plain, 10.0, 1.0) - 2.5).abs() < EPS);
        assert!((leg_fee(&plain, 1_000_000.0, 1.0) - 2.5).abs() < EPS);
    }

    #[test]
    fn tiered_fee_clamps() {
        let rule = FeeRule::Tiered {
            per_unit: 0.005,
            min_fee: 1.0,
            max_rate: 0.01,
        };
        // 100 shares -> $0.50 per-unit, under the $1 floor
        assert!((leg_fee(&rule, 10_000.0, 100.0) - 1.0).abs() < EPS);
        // 1000 shares -> $5.00, inside [floor, 1% of 10_000 = $100]
        assert!((leg_fee(&rule, 10_000.0, 1000.0) - 5.0).abs() < EPS);
        // 100_000 shares -> $500, capped at 1% of 10_000 = $100
        assert!((leg_fee(&rule, 10_000.0, 100_000.0) - 100.0).abs() < EPS);
    }

    #[test]
    fn tiered_floor_beats_cap() {
        // Tiny amount: cap (1% of $50 = $0.50) sits below the $1 floor.
        // The floor wins; the schedule does not special-case this.
        let rule = FeeRule::Tiered {
            per_unit: 0.005,
            min_fee: 1.0,
            max_rate: 0.01,
        };
        assert!((leg_fee(&rule, 50.0, 10.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn unknown_platform_charges_nothing() {
        let registry = PlatformRegistry::builtin();
        let fees = calculate_fees(&registry, "etoro", 100.0, 110.0, 10.0, OrderType::Long);
        assert_eq!(fees, FeeCalculation::zero());
    }
}
