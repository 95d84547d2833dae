//! Discussion topic entity - what people are talking about

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionTopic {
    pub id: String,
    pub name: String,

    /// Mention count
    pub volume: u64,

    /// Average sentiment, conventionally -1..1
    pub sentiment_score: f64,

    /// CSS gradient string used by the web dashboard; free text here
    pub color: String,

    pub is_active: bool,
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDraft {
    pub name: String,
    pub volume: u64,
    pub sentiment_score: f64,
    pub color: String,
    pub is_active: bool,
    pub order: i64,
}

impl DiscussionTopic {
    pub fn draft(&self) -> TopicDraft {
        TopicDraft {
            name: self.name.clone(),
            volume: self.volume,
            sentiment_score: self.sentiment_score,
            color: self.color.clone(),
            is_active: self.is_active,
            order: self.order,
        }
    }
}

impl Resource for DiscussionTopic {
    const ENDPOINT: &'static str = "discussion-topics";
    const LABEL: &'static str = "discussion topic";

    type Draft = TopicDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn magnitude(&self) -> f64 {
        self.volume as f64
    }
}
