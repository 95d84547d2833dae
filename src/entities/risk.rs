//! Risk entity - monitored threats with indicators and mitigations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Resource, Trajectory};

/// Risk severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskSeverity::Critical => write!(f, "critical"),
            RiskSeverity::High => write!(f, "high"),
            RiskSeverity::Medium => write!(f, "medium"),
            RiskSeverity::Low => write!(f, "low"),
        }
    }
}

impl RiskSeverity {
    pub const ALL: &'static [RiskSeverity] = &[
        RiskSeverity::Critical,
        RiskSeverity::High,
        RiskSeverity::Medium,
        RiskSeverity::Low,
    ];
}

/// A tracked signal backing the risk assessment.
///
/// Duplicate labels are permitted; the list is edited by add/remove and
/// displayed in entry order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskIndicator {
    pub label: String,
    pub value: f64,
    pub change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: RiskSeverity,

    /// Likelihood, 0-100
    pub probability: f64,
    pub impact_assessment: String,
    pub trend: Trajectory,

    #[serde(default)]
    pub indicators: Vec<RiskIndicator>,

    #[serde(default)]
    pub mitigation_strategy: Vec<String>,

    pub is_active: bool,
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskDraft {
    pub title: String,
    pub description: String,
    pub severity: RiskSeverity,
    pub probability: f64,
    pub impact_assessment: String,
    pub trend: Trajectory,
    pub indicators: Vec<RiskIndicator>,
    pub mitigation_strategy: Vec<String>,
    pub is_active: bool,
    pub order: i64,
}

impl Risk {
    pub fn draft(&self) -> RiskDraft {
        RiskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            severity: self.severity,
            probability: self.probability,
            impact_assessment: self.impact_assessment.clone(),
            trend: self.trend,
            indicators: self.indicators.clone(),
            mitigation_strategy: self.mitigation_strategy.clone(),
            is_active: self.is_active,
            order: self.order,
        }
    }
}

impl Resource for Risk {
    const ENDPOINT: &'static str = "risks";
    const LABEL: &'static str = "risk";

    type Draft = RiskDraft;

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
        self.probability
    }
}
