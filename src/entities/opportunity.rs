//! Opportunity entity - growth openings with metrics and recommended actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Resource, Trajectory};

/// Upside potential band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Potential {
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for Potential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Potential::High => write!(f, "high"),
            Potential::Medium => write!(f, "medium"),
            Potential::Low => write!(f, "low"),
        }
    }
}

impl Potential {
    pub const ALL: &'static [Potential] = &[Potential::High, Potential::Medium, Potential::Low];
}

/// Horizon for acting on the opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Medium-term")]
    MediumTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timeframe::ShortTerm => write!(f, "Short-term"),
            Timeframe::MediumTerm => write!(f, "Medium-term"),
            Timeframe::LongTerm => write!(f, "Long-term"),
        }
    }
}

impl Timeframe {
    pub const ALL: &'static [Timeframe] =
        &[Timeframe::ShortTerm, Timeframe::MediumTerm, Timeframe::LongTerm];
}

/// A supporting metric; `value` is a display string ("2.4M", "68%")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub potential: Potential,

    /// Confidence, 0-100
    pub confidence_score: f64,
    pub timeframe: Timeframe,
    pub category: String,
    pub trend: Trajectory,

    #[serde(default)]
    pub key_metrics: Vec<KeyMetric>,

    #[serde(default)]
    pub recommended_actions: Vec<String>,

    pub is_active: bool,
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityDraft {
    pub title: String,
    pub description: String,
    pub potential: Potential,
    pub confidence_score: f64,
    pub timeframe: Timeframe,
    pub category: String,
    pub trend: Trajectory,
    pub key_metrics: Vec<KeyMetric>,
    pub recommended_actions: Vec<String>,
    pub is_active: bool,
    pub order: i64,
}

impl Opportunity {
    pub fn draft(&self) -> OpportunityDraft {
        OpportunityDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            potential: self.potential,
            confidence_score: self.confidence_score,
            timeframe: self.timeframe,
            category: self.category.clone(),
            trend: self.trend,
            key_metrics: self.key_metrics.clone(),
            recommended_actions: self.recommended_actions.clone(),
            is_active: self.is_active,
            order: self.order,
        }
    }
}

impl Resource for Opportunity {
    const ENDPOINT: &'static str = "opportunities";
    const LABEL: &'static str = "opportunity";

    type Draft = OpportunityDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn magnitude(&self) -> f64 {
        self.confidence_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_wire_format() {
        assert_eq!(
            serde_json::to_string(&Timeframe::ShortTerm).unwrap(),
            "\"Short-term\""
        );
        let back: Timeframe = serde_json::from_str("\"Long-term\"").unwrap();
        assert_eq!(back, Timeframe::LongTerm);
    }
}
