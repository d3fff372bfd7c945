use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fees::PlatformRegistry;
use crate::models::{AssetType, OrderType};
use crate::pnl::{calculate_pnl, PnlCalculation};

/// One completed trade as persisted in the journal. The financial fields
/// are computed once at creation time and stored; they are the system of
/// record, with `recompute` available for transient display/export use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,
    pub user_id: String,

    pub asset_name: String,
    pub asset_type: AssetType,
    pub platform_id: String,

    pub order_type: OrderType,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: f64,

    pub gross_pnl: f64,
    pub total_fee: f64,
    pub net_pnl: f64,

    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TradeRecord {
    /// Re-derive the full financial summary from the raw trade fields.
    /// Stored values win for accounting; this exists for live previews and
    /// card export.
    pub fn recompute(&self, registry: &PlatformRegistry) -> PnlCalculation {
        calculate_pnl(
            registry,
            self.entry_price,
            self.exit_price,
            self.quantity,
            &self.platform_id,
            self.order_type,
        )
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Creation payload: everything the user supplies. The store assigns the
/// id and timestamps and computes the financials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrade {
    pub asset_name: String,
    pub asset_type: AssetType,
    pub platform_id: String,
    pub order_type: OrderType,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// True when every numeric input is usable by the calculators.
/// NaN fails the `> 0.0` comparisons, so only finiteness needs an
/// explicit check.
pub fn inputs_valid(entry_price: f64, exit_price: f64, quantity: f64) -> bool {
    entry_price > 0.0
        && entry_price.is_finite()
        && exit_price > 0.0
        && exit_price.is_finite()
        && quantity > 0.0
        && quantity.is_finite()
}

/// Form-level validation: one message per failed field, empty when valid.
pub fn validate_inputs(entry_price: f64, exit_price: f64, quantity: f64) -> Vec<String> {
    let mut errors = Vec::new();

    if !entry_price.is_finite() {
        errors.push("Entry price must be a valid number".to_string());
    } else if entry_price <= 0.0 {
        errors.push("Entry price must be greater than 0".to_string());
    }

    if !exit_price.is_finite() {
        errors.push("Exit price must be a valid number".to_string());
    } else if exit_price <= 0.0 {
        errors.push("Exit price must be greater than 0".to_string());
    }

    if !quantity.is_finite() {
        errors.push("Quantity must be a valid number".to_string());
    } else if quantity <= 0.0 {
        errors.push("Quantity must be greater than 0".to_string());
    }

    errors
}
