pub mod calculator;
pub mod registry;

pub use calculator::{calculate_fees, leg_fee, FeeBreakdown, FeeCalculation};
pub use registry::{FeeRule, FlatStep, PlatformFeeSchedule, PlatformRegistry};
