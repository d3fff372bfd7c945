use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::JournalError;
use crate::fees::PlatformRegistry;
use crate::models::{validate_inputs, NewTrade, TradeRecord};
use crate::pnl::calculate_pnl;
use crate::store::JournalStore;

/// Local JSON-file journal. Loads the whole file on open and rewrites it on
/// every create; plenty for a personal journal.
pub struct JsonFileStore {
    path: PathBuf,
    registry: Arc<PlatformRegistry>,
    trades: Vec<TradeRecord>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>, registry: Arc<PlatformRegistry>) -> Result<Self, JournalError> {
        let path = path.into();
        let trades: Vec<TradeRecord> = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            Vec::new()
        };

        debug!("loaded {} trades from {}", trades.len(), path.display());
        Ok(Self {
            path,
            registry,
            trades,
        })
    }

    fn persist(&self) -> Result<(), JournalError> {
        let raw = serde_json::to_string_pretty(&self.trades)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn sorted_for_user(&self, user_id: &str) -> Vec<TradeRecord> {
        let mut trades: Vec<TradeRecord> = self
            .trades
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        trades.sort_by_key(|t| t.created_at);
        trades
    }
}

#[async_trait]
impl JournalStore for JsonFileStore {
    async fn create(&mut self, user_id: &str, new_trade: NewTrade) -> Result<TradeRecord> {
        let errors = validate_inputs(
            new_trade.entry_price,
            new_trade.exit_price,
            new_trade.quantity,
        );
        if !errors.is_empty() {
            return Err(JournalError::InvalidTrade(errors.join("; ")).into());
        }

        let pnl = calculate_pnl(
            &self.registry,
            new_trade.entry_price,
            new_trade.exit_price,
            new_trade.quantity,
            &new_trade.platform_id,
            new_trade.order_type,
        );

        let record = TradeRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            asset_name: new_trade.asset_name,
            asset_type: new_trade.asset_type,
            platform_id: new_trade.platform_id,
            order_type: new_trade.order_type,
            entry_price: new_trade.entry_price,
            exit_price: new_trade.exit_price,
            quantity: new_trade.quantity,
            gross_pnl: pnl.gross_pnl,
            total_fee: pnl.fees.total_fee,
            net_pnl: pnl.net_pnl,
            notes: new_trade.notes,
            tags: new_trade.tags,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.trades.push(record.clone());
        self.persist()?;
        info!(
            "recorded {} {} on {} (net {:.2})",
            record.order_type, record.asset_name, record.platform_id, record.net_pnl
        );
        Ok(record)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TradeRecord>> {
        Ok(self.sorted_for_user(user_id))
    }

    async fn list_by_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TradeRecord>> {
        Ok(self
            .sorted_for_user(user_id)
            .into_iter()
            .filter(|t| t.created_at >= start && t.created_at <= end)
            .collect())
    }
}
