use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Crypto,
    Stock,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Crypto => write!(f, "crypto"),
            AssetType::Stock => write!(f, "stock"),
        }
    }
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Crypto => "crypto",
            AssetType::Stock => "stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Long,
    Short,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Long => write!(f, "long"),
            OrderType::Short => write!(f, "short"),
        }
    }
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Long => "long",
            OrderType::Short => "short",
        }
    }
}

/// Sign of net PnL after fees. Neutral covers the exact-zero and
/// invalid-input cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitLoss {
    Profit,
    Loss,
    Neutral,
}

impl fmt::Display for ProfitLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitLoss::Profit => write!(f, "profit"),
            ProfitLoss::Loss => write!(f, "loss"),
            ProfitLoss::Neutral => write!(f, "neutral"),
        }
    }
}

impl ProfitLoss {
    pub fn from_net_pnl(net_pnl: f64) -> Self {
        if net_pnl > 0.0 {
            ProfitLoss::Profit
        } else if net_pnl < 0.0 {
            ProfitLoss::Loss
        } else {
            ProfitLoss::Neutral
        }
    }
}
