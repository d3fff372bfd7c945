use std::sync::Arc;

use crate::models::AssetType;

/// Fee rule for one side (buy or sell) of a trade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeeRule {
    /// Percent of the leg amount.
    Percentage { rate: f64 },
    /// Fixed charge per trade, with an optional higher charge at/above an
    /// amount threshold.
    Flat { base: f64, step: Option<FlatStep> },
    /// Per-unit charge clamped between an absolute floor and a fraction of
    /// the leg amount.
    Tiered {
        per_unit: f64,
        min_fee: f64,
        max_rate: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatStep {
    pub threshold: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformFeeSchedule {
    pub id: &'static str,
    pub name: &'static str,
    pub asset_type: AssetType,
    pub buy: FeeRule,
    pub sell: FeeRule,
}

impl PlatformFeeSchedule {
    /// Human-readable fee summary for platform pickers. Presentational
    /// only; the calculator never consumes this.
    pub fn fee_range_summary(&self) -> String {
        match (self.buy, self.sell) {
            (FeeRule::Percentage { rate: b }, FeeRule::Percentage { rate: s }) => {
                if b == 0.0 && s == 0.0 {
                    "FREE".to_string()
                } else if b == s {
                    format!("{b}% per trade")
                } else {
                    format!("Buy {b}% | Sell {s}%")
                }
            }
            (FeeRule::Flat { base, step }, _) => match step {
                Some(step) => format!("${base:.2} - ${:.2} per trade", step.amount),
                None => format!("${base:.2} per trade"),
            },
            (
                FeeRule::Tiered {
                    per_unit,
                    min_fee,
                    max_rate,
                },
                _,
            ) => format!(
                "${per_unit}/unit | Min ${min_fee:.2} | Max {}%",
                max_rate * 100.0
            ),
            // Mixed models across sides do not occur in the built-in table;
            // fall back to the buy side description.
            (FeeRule::Percentage { rate }, _) => format!("Buy {rate}%"),
        }
    }
}

/// Immutable platform table, built once at startup. Registration order is
/// stable and drives UI listings.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    platforms: Vec<PlatformFeeSchedule>,
}

fn pct(rate: f64) -> FeeRule {
    FeeRule::Percentage { rate }
}

impl PlatformRegistry {
    /// The supported platform set with their published fee schedules.
    pub fn builtin() -> Self {
        let platforms = vec![
            // Stock brokers
            PlatformFeeSchedule {
                id: "ajaib",
                name: "Ajaib",
                asset_type: AssetType::Stock,
                buy: pct(0.15),
                sell: pct(0.25),
            },
            PlatformFeeSchedule {
                id: "stockbit",
                name: "Stockbit",
                asset_type: AssetType::Stock,
                buy: pct(0.15),
                sell: pct(0.25),
            },
            PlatformFeeSchedule {
                id: "ipot",
                name: "IPOT",
                asset_type: AssetType::Stock,
                buy: pct(0.19),
                sell: pct(0.29),
            },
            PlatformFeeSchedule {
                id: "mirae",
                name: "Mirae Asset",
                asset_type: AssetType::Stock,
                buy: pct(0.15),
                sell: pct(0.25),
            },
            PlatformFeeSchedule {
                id: "gotrade",
                name: "Gotrade",
                asset_type: AssetType::Stock,
                buy: FeeRule::Flat {
                    base: 0.99,
                    step: Some(FlatStep {
                        threshold: 1000.0,
                        amount: 1.99,
                    }),
                },
                sell: FeeRule::Flat {
                    base: 0.99,
                    step: Some(FlatStep {
                        threshold: 1000.0,
                        amount: 1.99,
                    }),
                },
            },
            PlatformFeeSchedule {
                id: "interactive_brokers",
                name: "Interactive Brokers",
                asset_type: AssetType::Stock,
                buy: FeeRule::Tiered {
                    per_unit: 0.005,
                    min_fee: 1.0,
                    max_rate: 0.01,
                },
                sell: FeeRule::Tiered {
                    per_unit: 0.005,
                    min_fee: 1.0,
                    max_rate: 0.01,
                },
            },
            // Crypto exchanges
            PlatformFeeSchedule {
                id: "binance",
                name: "Binance",
                asset_type: AssetType::Crypto,
                buy: pct(0.1),
                sell: pct(0.1),
            },
            PlatformFeeSchedule {
                id: "bybit",
                name: "Bybit",
                asset_type: AssetType::Crypto,
                buy: pct(0.1),
                sell: pct(0.1),
            },
            PlatformFeeSchedule {
                id: "tokocrypto",
                name: "Tokocrypto",
                asset_type: AssetType::Crypto,
                buy: pct(0.1),
                sell: pct(0.1),
            },
            PlatformFeeSchedule {
                id: "indodax",
                name: "Indodax",
                asset_type: AssetType::Crypto,
                buy: pct(0.21),
                sell: pct(0.21),
            },
            PlatformFeeSchedule {
                id: "okx",
                name: "OKX",
                asset_type: AssetType::Crypto,
                buy: pct(0.1),
                sell: pct(0.1),
            },
            PlatformFeeSchedule {
                id: "reku",
                name: "Reku",
                asset_type: AssetType::Crypto,
                buy: pct(0.15),
                sell: pct(0.15),
            },
            PlatformFeeSchedule {
                id: "pintu",
                name: "Pintu",
                asset_type: AssetType::Crypto,
                buy: pct(0.15),
                sell: pct(0.15),
            },
        ];

        Self { platforms }
    }

    /// None means "unknown platform" and is an expected outcome, handled by
    /// callers as zero fee plus a warning.
    pub fn lookup(&self, id: &str) -> Option<&PlatformFeeSchedule> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn by_asset_type(&self, asset_type: AssetType) -> Vec<&PlatformFeeSchedule> {
        self.platforms
            .iter()
            .filter(|p| p.asset_type == asset_type)
            .collect()
    }

    pub fn all(&self) -> &[PlatformFeeSchedule] {
        &self.platforms
    }

    pub fn fee_range_summary(&self, id: &str) -> Option<String> {
        self.lookup(id).map(|p| p.fee_range_summary())
    }

    pub fn shared(self) -> Arc<PlatformRegistry> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        let registry = PlatformRegistry::builtin();
        let binance = registry.lookup("binance").unwrap();
        assert_eq!(binance.name, "Binance");
        assert_eq!(binance.asset_type, AssetType::Crypto);
        assert!(registry.lookup("robinhood").is_none());
    }

    #[test]
    fn listing_preserves_registration_order() {
        let registry = PlatformRegistry::builtin();
        let stocks: Vec<&str> = registry
            .by_asset_type(AssetType::Stock)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(
            stocks,
            vec!["ajaib", "stockbit", "ipot", "mirae", "gotrade", "interactive_brokers"]
        );

        let cryptos = registry.by_asset_type(AssetType::Crypto);
        assert_eq!(cryptos.len(), 7);
        assert_eq!(cryptos[0].id, "binance");
    }

    #[test]
    fn fee_range_summaries() {
        let registry = PlatformRegistry::builtin();
        assert_eq!(
            registry.lookup("ajaib").unwrap().fee_range_summary(),
            "Buy 0.15% | Sell 0.25%"
        );
        assert_eq!(
            registry.lookup("binance").unwrap().fee_range_summary(),
            "0.1% per trade"
        );
        assert_eq!(
            registry.lookup("gotrade").unwrap().fee_range_summary(),
            "$0.99 - $1.99 per trade"
        );
        assert_eq!(
            registry.lookup("interactive_brokers").unwrap().fee_range_summary(),
            "$0.005/unit | Min $1.00 | Max 1%"
        );

        let free = PlatformFeeSchedule {
            id: "zero",
            name: "Zero",
            asset_type: AssetType::Crypto,
            buy: pct(0.0),
            sell: pct(0.0),
        };
        assert_eq!(free.fee_range_summary(), "FREE");
    }
}
