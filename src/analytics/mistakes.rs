use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::TradeRecord;
use crate::tags::MISTAKE_TAGS;

/// Stats for one tag partition. Membership is "tag present in the record's
/// tag set"; a trade can sit in several partitions at once.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TagBucket {
    pub trades: usize,
    pub wins: usize,
    pub total_net_pnl: f64,
    pub win_rate: f64,
}

impl TagBucket {
    fn from_subset<'a>(trades: impl Iterator<Item = &'a TradeRecord>) -> Self {
        let mut bucket = TagBucket::default();
        for t in trades {
            bucket.trades += 1;
            bucket.total_net_pnl += t.net_pnl;
            if t.net_pnl > 0.0 {
                bucket.wins += 1;
            }
        }
        bucket.win_rate = if bucket.trades > 0 {
            bucket.wins as f64 / bucket.trades as f64 * 100.0
        } else {
            0.0
        };
        bucket
    }
}

pub fn bucket_for_tag(trades: &[TradeRecord], tag: &str) -> TagBucket {
    TagBucket::from_subset(trades.iter().filter(|t| t.has_tag(tag)))
}

/// Per-tag stats for every tag that appears in the set, known vocabulary
/// or not.
pub fn stats_by_tag(trades: &[TradeRecord]) -> HashMap<String, TagBucket> {
    let mut grouped: HashMap<String, Vec<&TradeRecord>> = HashMap::new();
    for t in trades {
        for tag in &t.tags {
            grouped.entry(tag.clone()).or_default().push(t);
        }
    }

    grouped
        .into_iter()
        .map(|(tag, subset)| (tag, TagBucket::from_subset(subset.into_iter())))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MistakeReport {
    /// Trades carrying any mistake tag.
    pub mistakes: TagBucket,
    pub fomo: TagBucket,
    pub revenge: TagBucket,
    pub disciplined: TagBucket,
}

impl MistakeReport {
    pub fn from_trades(trades: &[TradeRecord]) -> Self {
        let mistakes = TagBucket::from_subset(
            trades
                .iter()
                .filter(|t| MISTAKE_TAGS.iter().any(|tag| t.has_tag(tag))),
        );

        Self {
            mistakes,
            fomo: bucket_for_tag(trades, "fomo"),
            revenge: bucket_for_tag(trades, "revenge_trade"),
            disciplined: bucket_for_tag(trades, "disciplined"),
        }
    }

    /// What eliminating the tagged mistakes would have been worth.
    pub fn potential_savings(&self) -> f64 {
        self.mistakes.total_net_pnl.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_trade;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_input() {
        let report = MistakeReport::from_trades(&[]);
        assert_eq!(report.mistakes, TagBucket::default());
        assert_eq!(report.mistakes.win_rate, 0.0);
        assert_eq!(report.potential_savings(), 0.0);
    }

    #[test]
    fn partitions_by_tag_presence() {
        let trades = vec![
            make_trade("1", -80.0, &["fomo"], 9),
            make_trade("2", -40.0, &["revenge_trade"], 10),
            make_trade("3", 60.0, &["disciplined"], 11),
            make_trade("4", 25.0, &["disciplined", "planned"], 12),
            make_trade("5", 10.0, &[], 13),
        ];

        let report = MistakeReport::from_trades(&trades);
        assert_eq!(report.mistakes.trades, 2);
        assert!((report.mistakes.total_net_pnl + 120.0).abs() < EPS);
        assert_eq!(report.mistakes.win_rate, 0.0);
        assert!((report.potential_savings() - 120.0).abs() < EPS);

        assert_eq!(report.fomo.trades, 1);
        assert_eq!(report.revenge.trades, 1);
        assert_eq!(report.disciplined.trades, 2);
        assert!((report.disciplined.total_net_pnl - 85.0).abs() < EPS);
        assert!((report.disciplined.win_rate - 100.0).abs() < EPS);
    }

    #[test]
    fn trade_may_belong_to_multiple_partitions() {
        let trades = vec![make_trade("1", -30.0, &["fomo", "revenge_trade"], 9)];
        let report = MistakeReport::from_trades(&trades);
        // Counted once in the combined partition, once in each tag bucket.
        assert_eq!(report.mistakes.trades, 1);
        assert_eq!(report.fomo.trades, 1);
        assert_eq!(report.revenge.trades, 1);
        assert!((report.mistakes.total_net_pnl + 30.0).abs() < EPS);
    }

    #[test]
    fn stats_by_tag_covers_unknown_tags() {
        let trades = vec![
            make_trade("1", 10.0, &["disciplined", "custom_tag"], 9),
            make_trade("2", -5.0, &["custom_tag"], 10),
        ];
        let by_tag = stats_by_tag(&trades);
        assert_eq!(by_tag.len(), 2);
        let custom = &by_tag["custom_tag"];
        assert_eq!(custom.trades, 2);
        assert!((custom.total_net_pnl - 5.0).abs() < EPS);
        assert!((custom.win_rate - 50.0).abs() < EPS);
    }
}
