//! Sentiment trend entity - a named time series with summary percentages
//!
//! The three summary percentages are entered independently and are not
//! constrained to sum to 100. Each series point stores only positive and
//! negative; the neutral share is derived at display time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Resource;

/// One point of the series. `date` is a display label ("Nov 5"), not a
/// parsed timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub date: String,
    pub positive: f64,
    pub negative: f64,
}

impl SentimentPoint {
    /// Neutral share derived as the remainder of the point
    pub fn neutral(&self) -> f64 {
        100.0 - self.positive - self.negative
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentTrend {
    pub id: String,
    pub title: String,
    pub period: String,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub neutral_percent: f64,

    #[serde(default)]
    pub trend_data: Vec<SentimentPoint>,

    pub is_active: bool,
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDraft {
    pub title: String,
    pub period: String,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub neutral_percent: f64,
    pub trend_data: Vec<SentimentPoint>,
    pub is_active: bool,
    pub order: i64,
}

impl SentimentTrend {
    pub fn draft(&self) -> TrendDraft {
        TrendDraft {
            title: self.title.clone(),
            period: self.period.clone(),
            positive_percent: self.positive_percent,
            negative_percent: self.negative_percent,
            neutral_percent: self.neutral_percent,
            trend_data: self.trend_data.clone(),
            is_active: self.is_active,
            order: self.order,
        }
    }
}

impl Resource for SentimentTrend {
    const ENDPOINT: &'static str = "sentiment-trends";
    const LABEL: &'static str = "sentiment trend";

    type Draft = TrendDraft;

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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_neutral_is_remainder() {
        let point = SentimentPoint {
            date: "Nov 25".into(),
            positive: 58.0,
            negative: 32.0,
        };
        assert_eq!(point.neutral(), 10.0);
    }
}
