pub mod direction;
pub mod timeframe;
pub mod trade;

pub use direction::*;
pub use timeframe::TimeframeFilter;
pub use trade::{inputs_valid, validate_inputs, NewTrade, TradeRecord};
