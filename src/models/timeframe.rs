use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic reporting window for dashboard stats and share cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeframeFilter {
    #[serde(rename = "last_trade")]
    LastTrade,
    #[serde(rename = "7d")]
    Days7,
    #[serde(rename = "1m")]
    Month1,
    #[serde(rename = "3m")]
    Month3,
    #[serde(rename = "4m")]
    Month4,
    #[serde(rename = "12m")]
    Month12,
    #[serde(rename = "all_time")]
    AllTime,
}

impl TimeframeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeframeFilter::LastTrade => "last_trade",
            TimeframeFilter::Days7 => "7d",
            TimeframeFilter::Month1 => "1m",
            TimeframeFilter::Month3 => "3m",
            TimeframeFilter::Month4 => "4m",
            TimeframeFilter::Month12 => "12m",
            TimeframeFilter::AllTime => "all_time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeframeFilter::LastTrade => "Last Trade",
            TimeframeFilter::Days7 => "7 Days",
            TimeframeFilter::Month1 => "1 Month",
            TimeframeFilter::Month3 => "3 Months",
            TimeframeFilter::Month4 => "4 Months",
            TimeframeFilter::Month12 => "12 Months",
            TimeframeFilter::AllTime => "All Time",
        }
    }

    /// Window width in days; None for the non-windowed variants.
    pub fn days_back(&self) -> Option<i64> {
        match self {
            TimeframeFilter::Days7 => Some(7),
            TimeframeFilter::Month1 => Some(30),
            TimeframeFilter::Month3 => Some(90),
            TimeframeFilter::Month4 => Some(120),
            TimeframeFilter::Month12 => Some(365),
            TimeframeFilter::LastTrade | TimeframeFilter::AllTime => None,
        }
    }

    pub fn from_str_loose(s: &str) -> Option<TimeframeFilter> {
        match s {
            "last_trade" => Some(TimeframeFilter::LastTrade),
            "7d" => Some(TimeframeFilter::Days7),
            "1m" => Some(TimeframeFilter::Month1),
            "3m" => Some(TimeframeFilter::Month3),
            "4m" => Some(TimeframeFilter::Month4),
            "12m" => Some(TimeframeFilter::Month12),
            "all_time" => Some(TimeframeFilter::AllTime),
            _ => None,
        }
    }
}

impl fmt::Display for TimeframeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_str() {
        for tf in [
            TimeframeFilter::LastTrade,
            TimeframeFilter::Days7,
            TimeframeFilter::Month1,
            TimeframeFilter::Month3,
            TimeframeFilter::Month4,
            TimeframeFilter::Month12,
            TimeframeFilter::AllTime,
        ] {
            assert_eq!(TimeframeFilter::from_str_loose(tf.as_str()), Some(tf));
        }
        assert_eq!(TimeframeFilter::from_str_loose("2w"), None);
    }

    #[test]
    fn windowed_variants_have_days() {
        assert_eq!(TimeframeFilter::Days7.days_back(), Some(7));
        assert_eq!(TimeframeFilter::Month12.days_back(), Some(365));
        assert_eq!(TimeframeFilter::AllTime.days_back(), None);
        assert_eq!(TimeframeFilter::LastTrade.days_back(), None);
    }
}
