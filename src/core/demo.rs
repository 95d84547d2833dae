//! Built-in demo datasets for dashboard widgets
//!
//! Every display widget falls back to its demo dataset when the backing
//! fetch fails or returns no active records, so a first-time or
//! unconfigured deployment never renders a blank dashboard.

use crate::entities::cluster::{ClusterTrend, ConversationCluster};
use crate::entities::competitor::CompetitiveAnalysis;
use crate::entities::opportunity::{KeyMetric, Opportunity, Potential, Timeframe};
use crate::entities::risk::{Risk, RiskIndicator, RiskSeverity};
use crate::entities::stat::{DashboardStat, StatTrend};
use crate::entities::topic::DiscussionTopic;
use crate::entities::trend::{SentimentPoint, SentimentTrend};
use crate::entities::{Icon, Trajectory};

/// The four stat cards shown before any real stats are configured
pub fn stats() -> Vec<DashboardStat> {
    let seed = [
        ("Conversations Analyzed", "847.2K", "+12.5%", StatTrend::Up, Icon::Users),
        ("Sentiment Score", "72", "-3.2%", StatTrend::Down, Icon::TrendingDown),
        ("Active Issues", "23", "+8", StatTrend::Up, Icon::AlertTriangle),
        ("Engagement Rate", "8.4%", "+2.1%", StatTrend::Up, Icon::TrendingUp),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(i, (label, value, change, trend, icon))| DashboardStat {
            id: format!("default-{}", i),
            label: label.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            trend,
            icon,
            order: i as i64,
            is_active: true,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

/// The 7-point demo sentiment series with its 58/32/10 summary split
pub fn sentiment_trend() -> SentimentTrend {
    let series = [
        ("Nov 1", 68.0, 22.0),
        ("Nov 5", 72.0, 18.0),
        ("Nov 9", 75.0, 15.0),
        ("Nov 13", 71.0, 19.0),
        ("Nov 17", 65.0, 25.0),
        ("Nov 21", 62.0, 28.0),
        ("Nov 25", 58.0, 32.0),
    ];
    SentimentTrend {
        id: "default".to_string(),
        title: "Overall Sentiment".to_string(),
        period: "Last 30 days".to_string(),
        positive_percent: 58.0,
        negative_percent: 32.0,
        neutral_percent: 10.0,
        trend_data: series
            .into_iter()
            .map(|(date, positive, negative)| SentimentPoint {
                date: date.to_string(),
                positive,
                negative,
            })
            .collect(),
        is_active: true,
        order: 0,
        created_at: None,
        updated_at: None,
    }
}

/// Demo discussion topics ranked by volume
pub fn topics() -> Vec<DiscussionTopic> {
    let seed = [
        ("Packaging", 2847u64, -0.68),
        ("Customer Service", 2341, -0.54),
        ("Product Quality", 1923, 0.71),
        ("Shipping Speed", 1654, 0.32),
        ("Price Value", 1432, 0.45),
        ("Mobile App", 892, 0.12),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(i, (name, volume, sentiment_score))| DiscussionTopic {
            id: format!("default-{}", i),
            name: name.to_string(),
            volume,
            sentiment_score,
            color: "from-violet-500 to-cyan-500".to_string(),
            is_active: true,
            order: i as i64,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

/// Demo conversation clusters
pub fn clusters() -> Vec<ConversationCluster> {
    let seed: [(&str, u64, f64, ClusterTrend, &[&str]); 4] = [
        (
            "Packaging Damage Issues",
            2847,
            -0.68,
            ClusterTrend::Up,
            &["broken", "damaged", "poor packaging", "arrived broken"],
        ),
        (
            "Excellent Product Quality",
            1923,
            0.71,
            ClusterTrend::Stable,
            &["high quality", "durable", "worth it", "exceeded expectations"],
        ),
        (
            "Customer Support Delays",
            2341,
            -0.54,
            ClusterTrend::Up,
            &["slow response", "waiting", "no reply", "poor support"],
        ),
        (
            "Fast Shipping Praise",
            1654,
            0.32,
            ClusterTrend::Down,
            &["quick delivery", "fast shipping", "arrived early", "prompt"],
        ),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(i, (theme, size, sentiment, trend, keywords))| ConversationCluster {
            id: format!("default-{}", i + 1),
            theme: theme.to_string(),
            size,
            sentiment,
            trend,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            is_active: true,
            order: i as i64,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

/// Demo risks for the risks column
pub fn risks() -> Vec<Risk> {
    vec![
        Risk {
            id: "default-1".to_string(),
            title: "Declining Brand Sentiment".to_string(),
            description: "Negative sentiment increased by 14% over the last 7 days".to_string(),
            severity: RiskSeverity::High,
            probability: 85.0,
            impact_assessment: "Brand reputation".to_string(),
            trend: Trajectory::Increasing,
            indicators: vec![
                RiskIndicator { label: "Customer Service".to_string(), value: -0.54, change: -12.0 },
                RiskIndicator { label: "Product Quality".to_string(), value: -0.28, change: -8.0 },
                RiskIndicator { label: "Packaging".to_string(), value: -0.68, change: -23.0 },
            ],
            mitigation_strategy: vec![
                "Monitor sentiment trends daily for early warning signs".to_string(),
                "Prepare response communication templates".to_string(),
                "Engage customer support team for rapid response".to_string(),
            ],
            is_active: true,
            order: 0,
            created_at: None,
            updated_at: None,
        },
        Risk {
            id: "default-2".to_string(),
            title: "Competitor Gaining Market Share".to_string(),
            description: "Competitor B's share of voice increased 8% this month".to_string(),
            severity: RiskSeverity::Medium,
            probability: 72.0,
            impact_assessment: "Market position".to_string(),
            trend: Trajectory::Increasing,
            indicators: vec![
                RiskIndicator { label: "Social Mentions".to_string(), value: 24.0, change: 8.0 },
                RiskIndicator { label: "Engagement Rate".to_string(), value: 7.8, change: 12.0 },
                RiskIndicator { label: "Positive Sentiment".to_string(), value: 75.0, change: 6.0 },
            ],
            mitigation_strategy: vec![],
            is_active: true,
            order: 1,
            created_at: None,
            updated_at: None,
        },
        Risk {
            id: "default-3".to_string(),
            title: "Product Launch Backlash Risk".to_string(),
            description: "Early feedback on new feature shows 42% negative response".to_string(),
            severity: RiskSeverity::Critical,
            probability: 68.0,
            impact_assessment: "Product adoption".to_string(),
            trend: Trajectory::Stable,
            indicators: vec![
                RiskIndicator { label: "Usability Issues".to_string(), value: 156.0, change: 45.0 },
                RiskIndicator { label: "Performance Complaints".to_string(), value: 89.0, change: 23.0 },
                RiskIndicator { label: "Design Criticism".to_string(), value: 67.0, change: 12.0 },
            ],
            mitigation_strategy: vec![],
            is_active: true,
            order: 2,
            created_at: None,
            updated_at: None,
        },
    ]
}

/// Demo opportunities for the opportunities column
pub fn opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: "default-1".to_string(),
            title: "Sustainability Movement Alignment".to_string(),
            description: "34% of conversations mention eco-friendly preferences".to_string(),
            potential: Potential::High,
            confidence_score: 88.0,
            timeframe: Timeframe::ShortTerm,
            category: "Product positioning".to_string(),
            trend: Trajectory::Increasing,
            key_metrics: vec![
                KeyMetric { label: "Conversation Volume".to_string(), value: "4,521".to_string() },
                KeyMetric { label: "Growth Rate".to_string(), value: "34%".to_string() },
                KeyMetric { label: "Sentiment Score".to_string(), value: "0.76".to_string() },
            ],
            recommended_actions: vec![
                "Launch eco-friendly product line".to_string(),
                "Highlight sustainable practices".to_string(),
                "Partner with environmental organizations".to_string(),
            ],
            is_active: true,
            order: 0,
            created_at: None,
            updated_at: None,
        },
        Opportunity {
            id: "default-2".to_string(),
            title: "Untapped Mobile User Segment".to_string(),
            description: "Mobile users show 2.3x higher engagement but underserved".to_string(),
            potential: Potential::High,
            confidence_score: 91.0,
            timeframe: Timeframe::MediumTerm,
            category: "Market expansion".to_string(),
            trend: Trajectory::Increasing,
            key_metrics: vec![
                KeyMetric { label: "Segment Size".to_string(), value: "156,000".to_string() },
                KeyMetric { label: "Engagement Rate".to_string(), value: "12.4%".to_string() },
                KeyMetric { label: "Conversion Potential".to_string(), value: "68%".to_string() },
            ],
            recommended_actions: vec![
                "Optimize mobile app experience".to_string(),
                "Create mobile-first features".to_string(),
                "Target mobile advertising".to_string(),
            ],
            is_active: true,
            order: 1,
            created_at: None,
            updated_at: None,
        },
        Opportunity {
            id: "default-3".to_string(),
            title: "Influencer Partnership Gap".to_string(),
            description: "Competitors have 3x more influencer mentions".to_string(),
            potential: Potential::Medium,
            confidence_score: 79.0,
            timeframe: Timeframe::ShortTerm,
            category: "Brand awareness".to_string(),
            trend: Trajectory::Stable,
            key_metrics: vec![
                KeyMetric { label: "Current Influencers".to_string(), value: "12".to_string() },
                KeyMetric { label: "Competitor Average".to_string(), value: "36".to_string() },
                KeyMetric { label: "Potential Reach".to_string(), value: "2.4M".to_string() },
            ],
            recommended_actions: vec![
                "Identify micro-influencer partners".to_string(),
                "Launch influencer campaign".to_string(),
                "Create ambassador program".to_string(),
            ],
            is_active: true,
            order: 2,
            created_at: None,
            updated_at: None,
        },
    ]
}

/// Demo competitor comparison, "Your Brand" first
pub fn competitors() -> Vec<CompetitiveAnalysis> {
    let seed = [
        ("Your Brand", 32.0, 72.0, 8.4),
        ("Competitor A", 28.0, 68.0, 7.2),
        ("Competitor B", 24.0, 75.0, 6.8),
        ("Competitor C", 16.0, 65.0, 5.9),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(i, (name, share_of_voice, sentiment, engagement))| CompetitiveAnalysis {
            id: format!("default-{}", i),
            name: name.to_string(),
            share_of_voice,
            sentiment,
            engagement,
            position: String::new(),
            gap_to_leader: String::new(),
            is_active: true,
            order: i as i64,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

/// Summary-card fallbacks when the resolved brand has blank fields
pub const DEFAULT_POSITION: &str = "#1 in Share of Voice";
pub const DEFAULT_GAP_TO_LEADER: &str = "Leading by 4%";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_demo_summary_split() {
        let trend = sentiment_trend();
        assert_eq!(trend.positive_percent, 58.0);
        assert_eq!(trend.negative_percent, 32.0);
        assert_eq!(trend.neutral_percent, 10.0);
        assert_eq!(trend.trend_data.len(), 7);
        // Every demo point happens to leave a 10% neutral remainder
        for point in &trend.trend_data {
            assert_eq!(point.neutral(), 10.0);
        }
    }

    #[test]
    fn test_demo_datasets_are_active() {
        assert!(stats().iter().all(|s| s.is_active));
        assert!(risks().iter().all(|r| r.is_active));
        assert!(opportunities().iter().all(|o| o.is_active));
        assert_eq!(clusters().len(), 4);
        assert_eq!(topics().len(), 6);
        assert_eq!(competitors().len(), 4);
    }
}
