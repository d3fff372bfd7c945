//! Psychology tag vocabulary used for behavioral analysis.
//!
//! Records store tags as plain strings so unknown ids stay tolerated; this
//! table is the fixed vocabulary the UI offers and the analyzers key on.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagCategory::Positive => write!(f, "positive"),
            TagCategory::Negative => write!(f, "negative"),
            TagCategory::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub category: TagCategory,
}

pub const PSYCHOLOGY_TAGS: &[TagInfo] = &[
    // Positive
    TagInfo { id: "disciplined", label: "Disciplined", category: TagCategory::Positive },
    TagInfo { id: "planned", label: "Planned", category: TagCategory::Positive },
    TagInfo { id: "patience", label: "Patient", category: TagCategory::Positive },
    TagInfo { id: "analytical", label: "Analytical", category: TagCategory::Positive },
    // Negative (mistakes and emotional states)
    TagInfo { id: "fomo", label: "FOMO", category: TagCategory::Negative },
    TagInfo { id: "revenge_trade", label: "Revenge Trade", category: TagCategory::Negative },
    TagInfo { id: "greed", label: "Greedy", category: TagCategory::Negative },
    TagInfo { id: "fear", label: "Fearful", category: TagCategory::Negative },
    TagInfo { id: "overconfident", label: "Overconfident", category: TagCategory::Negative },
    TagInfo { id: "impulsive", label: "Impulsive", category: TagCategory::Negative },
    TagInfo { id: "emotional", label: "Emotional", category: TagCategory::Negative },
    // Neutral
    TagInfo { id: "fearful", label: "Cautious", category: TagCategory::Neutral },
];

/// The tags the mistake-cost analyzer treats as outright mistakes.
pub const MISTAKE_TAGS: &[&str] = &["fomo", "revenge_trade"];

pub fn tag_by_id(id: &str) -> Option<&'static TagInfo> {
    PSYCHOLOGY_TAGS.iter().find(|t| t.id == id)
}

pub fn tags_by_category(category: TagCategory) -> Vec<&'static TagInfo> {
    PSYCHOLOGY_TAGS
        .iter()
        .filter(|t| t.category == category)
        .collect()
}

pub fn is_mistake_tag(id: &str) -> bool {
    MISTAKE_TAGS.contains(&id)
}
