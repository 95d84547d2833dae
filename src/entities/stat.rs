//! Dashboard stat entity - a pure display card
//!
//! `value` and `change` are free-text display strings, not derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Icon, Resource};

/// Direction of the change badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatTrend {
    #[default]
    Up,
    Down,
}

impl std::fmt::Display for StatTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatTrend::Up => write!(f, "up"),
            StatTrend::Down => write!(f, "down"),
        }
    }
}

impl StatTrend {
    pub const ALL: &'static [StatTrend] = &[StatTrend::Up, StatTrend::Down];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStat {
    pub id: String,
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: StatTrend,
    pub icon: Icon,
    pub order: i64,
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatDraft {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: StatTrend,
    pub icon: Icon,
    pub order: i64,
    pub is_active: bool,
}

impl DashboardStat {
    pub fn draft(&self) -> StatDraft {
        StatDraft {
            label: self.label.clone(),
            value: self.value.clone(),
            change: self.change.clone(),
            trend: self.trend,
            icon: self.icon,
            order: self.order,
            is_active: self.is_active,
        }
    }
}

impl Resource for DashboardStat {
    const ENDPOINT: &'static str = "dashboard-stats";
    const LABEL: &'static str = "dashboard stat";

    type Draft = StatDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.label
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
