//! Priority action entity - AI-recommended actions with a workflow status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Icon, Resource, Trajectory};

/// Action priority band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Critical,
    High,
    #[default]
    Medium,
}

impl std::fmt::Display for ActionPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionPriority::Critical => write!(f, "critical"),
            ActionPriority::High => write!(f, "high"),
            ActionPriority::Medium => write!(f, "medium"),
        }
    }
}

impl ActionPriority {
    pub const ALL: &'static [ActionPriority] = &[
        ActionPriority::Critical,
        ActionPriority::High,
        ActionPriority::Medium,
    ];
}

/// Expected impact of taking the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Impact {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Critical => write!(f, "Critical"),
            Impact::High => write!(f, "High"),
            Impact::Medium => write!(f, "Medium"),
            Impact::Low => write!(f, "Low"),
        }
    }
}

impl Impact {
    pub const ALL: &'static [Impact] = &[Impact::Critical, Impact::High, Impact::Medium, Impact::Low];
}

/// Estimated effort to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Effort {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Effort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effort::Low => write!(f, "Low"),
            Effort::Medium => write!(f, "Medium"),
            Effort::High => write!(f, "High"),
        }
    }
}

impl Effort {
    pub const ALL: &'static [Effort] = &[Effort::Low, Effort::Medium, Effort::High];
}

/// Workflow status, independent of the rest of the record.
///
/// Editable on its own through the narrow status endpoint; a missing
/// value reads as not-started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActionStatus {
    #[default]
    #[serde(rename = "not-started")]
    NotStarted,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionStatus::NotStarted => write!(f, "not-started"),
            ActionStatus::InProgress => write!(f, "in-progress"),
            ActionStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ActionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not-started" => Ok(ActionStatus::NotStarted),
            "in-progress" => Ok(ActionStatus::InProgress),
            "completed" => Ok(ActionStatus::Completed),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

impl ActionStatus {
    pub const ALL: &'static [ActionStatus] = &[
        ActionStatus::NotStarted,
        ActionStatus::InProgress,
        ActionStatus::Completed,
    ];

    /// Badge label shown on cards
    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::NotStarted => "Not Started",
            ActionStatus::InProgress => "In Progress",
            ActionStatus::Completed => "Completed",
        }
    }
}

/// A recommended priority action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityAction {
    pub id: String,
    pub priority: ActionPriority,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub effort: Effort,
    pub recommendation: String,
    pub mentions: u64,
    pub sentiment: f64,
    pub trend: Trajectory,
    pub icon: Icon,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Form payload for create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDraft {
    pub priority: ActionPriority,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub effort: Effort,
    pub recommendation: String,
    pub mentions: u64,
    pub sentiment: f64,
    pub trend: Trajectory,
    pub icon: Icon,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActionStatus>,
}

impl PriorityAction {
    /// Form payload pre-filled from this record
    pub fn draft(&self) -> ActionDraft {
        ActionDraft {
            priority: self.priority,
            title: self.title.clone(),
            description: self.description.clone(),
            impact: self.impact,
            effort: self.effort,
            recommendation: self.recommendation.clone(),
            mentions: self.mentions,
            sentiment: self.sentiment,
            trend: self.trend,
            icon: self.icon,
            status: self.status,
        }
    }

    /// Plain-text share rendering (copy / email body)
    pub fn share_text(&self) -> String {
        format!(
            "Priority Action: {}\n\n{}\n\nRecommendation: {}",
            self.title, self.description, self.recommendation
        )
    }
}

impl Resource for PriorityAction {
    const ENDPOINT: &'static str = "priority-actions";
    const LABEL: &'static str = "priority action";

    type Draft = ActionDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    // No order/is_active on the wire; trait defaults give every action a
    // stable position with mentions as the tiebreak.
    fn magnitude(&self) -> f64 {
        self.mentions as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ActionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: ActionStatus = serde_json::from_str("\"not-started\"").unwrap();
        assert_eq!(back, ActionStatus::NotStarted);
    }

    #[test]
    fn test_impact_wire_format_is_capitalized() {
        assert_eq!(serde_json::to_string(&Impact::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Effort::Low).unwrap(), "\"Low\"");
    }

    #[test]
    fn test_share_text_shape() {
        let action = PriorityAction {
            id: "1".into(),
            priority: ActionPriority::High,
            title: "Fix packaging".into(),
            description: "Broken on arrival complaints are rising.".into(),
            impact: Impact::High,
            effort: Effort::Medium,
            recommendation: "Switch to reinforced mailers.".into(),
            mentions: 2847,
            sentiment: -0.68,
            trend: Trajectory::Increasing,
            icon: Icon::Package,
            status: None,
            created_at: None,
            updated_at: None,
        };
        let text = action.share_text();
        assert!(text.starts_with("Priority Action: Fix packaging\n\n"));
        assert!(text.ends_with("Recommendation: Switch to reinforced mailers."));
    }

    #[test]
    fn test_deserializes_record_without_status() {
        let json = r#"{
            "id": "abc", "priority": "critical", "title": "T", "description": "D",
            "impact": "High", "effort": "Low", "recommendation": "R",
            "mentions": 10, "sentiment": 0.5, "trend": "stable", "icon": "Zap"
        }"#;
        let action: PriorityAction = serde_json::from_str(json).unwrap();
        assert!(action.status.is_none());
        assert_eq!(action.icon, Icon::Zap);
    }
}
