//! Conversation cluster entity - grouped discussion themes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Resource;

/// Cluster volume trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClusterTrend {
    Up,
    Down,
    #[default]
    Stable,
}

impl std::fmt::Display for ClusterTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterTrend::Up => write!(f, "up"),
            ClusterTrend::Down => write!(f, "down"),
            ClusterTrend::Stable => write!(f, "stable"),
        }
    }
}

impl ClusterTrend {
    pub const ALL: &'static [ClusterTrend] =
        &[ClusterTrend::Up, ClusterTrend::Down, ClusterTrend::Stable];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationCluster {
    pub id: String,
    pub theme: String,

    /// Mention count
    pub size: u64,

    /// Average sentiment, conventionally -1..1
    pub sentiment: f64,
    pub trend: ClusterTrend,

    #[serde(default)]
    pub keywords: Vec<String>,

    pub is_active: bool,
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterDraft {
    pub theme: String,
    pub size: u64,
    pub sentiment: f64,
    pub trend: ClusterTrend,
    pub keywords: Vec<String>,
    pub is_active: bool,
    pub order: i64,
}

impl ConversationCluster {
    pub fn draft(&self) -> ClusterDraft {
        ClusterDraft {
            theme: self.theme.clone(),
            size: self.size,
            sentiment: self.sentiment,
            trend: self.trend,
            keywords: self.keywords.clone(),
            is_active: self.is_active,
            order: self.order,
        }
    }
}

impl Resource for ConversationCluster {
    const ENDPOINT: &'static str = "conversation-clusters";
    const LABEL: &'static str = "conversation cluster";

    type Draft = ClusterDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.theme
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn magnitude(&self) -> f64 {
        self.size as f64
    }
}
