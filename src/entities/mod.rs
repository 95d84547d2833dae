//! Entity types - the eight dashboard resources and their common trait

pub mod action;
pub mod cluster;
pub mod competitor;
pub mod opportunity;
pub mod risk;
pub mod stat;
pub mod topic;
pub mod trend;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Common trait for all manageable resources.
///
/// `ENDPOINT` is the URL path segment of the REST family; `Draft` is the
/// form payload (the entity minus id and timestamps). `order` and
/// `is_active` default for entities that don't carry them on the wire
/// (priority actions).
pub trait Resource: Serialize + DeserializeOwned + Clone {
    const ENDPOINT: &'static str;
    const LABEL: &'static str;

    type Draft: Serialize + Clone;

    /// Backend-assigned opaque identifier, immutable once assigned
    fn id(&self) -> &str;

    /// Human-readable title/name/label/theme
    fn title(&self) -> &str;

    /// Manual display precedence, ascending
    fn order(&self) -> i64 {
        0
    }

    /// Visibility in end-user dashboard views, independent of existence
    fn is_active(&self) -> bool {
        true
    }

    /// Secondary sort key breaking `order` ties, descending
    fn magnitude(&self) -> f64 {
        0.0
    }
}

/// Display-layer sort: `order` ascending, ties broken by magnitude
/// descending. This is not a stored invariant - the backend returns its
/// own ordering and the client re-sorts.
pub fn display_sort<R: Resource>(items: &mut [&R]) {
    items.sort_by(|a, b| {
        a.order()
            .cmp(&b.order())
            .then_with(|| b.magnitude().total_cmp(&a.magnitude()))
    });
}

/// Trend trajectory shared by actions, risks, and opportunities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trajectory {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl std::fmt::Display for Trajectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trajectory::Increasing => write!(f, "increasing"),
            Trajectory::Decreasing => write!(f, "decreasing"),
            Trajectory::Stable => write!(f, "stable"),
        }
    }
}

impl std::str::FromStr for Trajectory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increasing" => Ok(Trajectory::Increasing),
            "decreasing" => Ok(Trajectory::Decreasing),
            "stable" => Ok(Trajectory::Stable),
            _ => Err(format!("Unknown trend: {}", s)),
        }
    }
}

impl Trajectory {
    pub const ALL: &'static [Trajectory] =
        &[Trajectory::Increasing, Trajectory::Decreasing, Trajectory::Stable];
}

/// Closed set of permitted icon identifiers.
///
/// The wire carries the identifier as a string; unrecognized values
/// resolve to the `BarChart3` fallback rather than failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Users,
    TrendingUp,
    TrendingDown,
    AlertTriangle,
    #[default]
    BarChart3,
    Activity,
    Percent,
    Eye,
    Package,
    MessageSquare,
    Zap,
    Target,
}

impl Icon {
    /// Permitted identifiers for dashboard stat cards
    pub const STAT_SET: &'static [Icon] = &[
        Icon::Users,
        Icon::TrendingUp,
        Icon::TrendingDown,
        Icon::AlertTriangle,
        Icon::BarChart3,
        Icon::Activity,
        Icon::Percent,
        Icon::Eye,
    ];

    /// Permitted identifiers for priority action cards
    pub const ACTION_SET: &'static [Icon] = &[
        Icon::Package,
        Icon::MessageSquare,
        Icon::Zap,
        Icon::AlertTriangle,
        Icon::Target,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Users => "Users",
            Icon::TrendingUp => "TrendingUp",
            Icon::TrendingDown => "TrendingDown",
            Icon::AlertTriangle => "AlertTriangle",
            Icon::BarChart3 => "BarChart3",
            Icon::Activity => "Activity",
            Icon::Percent => "Percent",
            Icon::Eye => "Eye",
            Icon::Package => "Package",
            Icon::MessageSquare => "MessageSquare",
            Icon::Zap => "Zap",
            Icon::Target => "Target",
        }
    }

    /// Static lookup from the wire identifier; `None` for unrecognized
    pub fn from_name(name: &str) -> Option<Icon> {
        match name {
            "Users" => Some(Icon::Users),
            "TrendingUp" => Some(Icon::TrendingUp),
            "TrendingDown" => Some(Icon::TrendingDown),
            "AlertTriangle" => Some(Icon::AlertTriangle),
            "BarChart3" => Some(Icon::BarChart3),
            "Activity" => Some(Icon::Activity),
            "Percent" => Some(Icon::Percent),
            "Eye" => Some(Icon::Eye),
            "Package" => Some(Icon::Package),
            "MessageSquare" => Some(Icon::MessageSquare),
            "Zap" => Some(Icon::Zap),
            "Target" => Some(Icon::Target),
            _ => None,
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Icon::from_name(&name).unwrap_or_default()
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::topic::DiscussionTopic;

    fn topic(id: &str, order: i64, volume: u64) -> DiscussionTopic {
        DiscussionTopic {
            id: id.to_string(),
            name: id.to_string(),
            volume,
            sentiment_score: 0.0,
            color: String::new(),
            is_active: true,
            order,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_display_sort_order_then_magnitude() {
        let a = topic("a", 2, 10);
        let b = topic("b", 0, 5);
        let c = topic("c", 0, 50);
        let mut refs = vec![&a, &b, &c];
        display_sort(&mut refs);
        let ids: Vec<&str> = refs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_icon_roundtrip() {
        let json = serde_json::to_string(&Icon::MessageSquare).unwrap();
        assert_eq!(json, "\"MessageSquare\"");
        let back: Icon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Icon::MessageSquare);
    }

    #[test]
    fn test_unrecognized_icon_falls_back() {
        let icon: Icon = serde_json::from_str("\"Sparkles\"").unwrap();
        assert_eq!(icon, Icon::BarChart3);
    }

    #[test]
    fn test_trajectory_parse() {
        assert_eq!("Increasing".parse::<Trajectory>().unwrap(), Trajectory::Increasing);
        assert!("sideways".parse::<Trajectory>().is_err());
    }
}
