pub mod json_file;

pub use json_file::JsonFileStore;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{NewTrade, TradeRecord};

/// Persistence collaborator. The hosted backend sits behind this seam; the
/// core only ever sees plain record lists.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Persist a new trade, computing its financials at creation time.
    async fn create(&mut self, user_id: &str, new_trade: NewTrade) -> Result<TradeRecord>;

    /// All trades for a user, oldest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TradeRecord>>;

    /// Trades for a user created within `[start, end]`, oldest first.
    async fn list_by_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TradeRecord>>;
}
