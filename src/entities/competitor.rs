//! Competitive analysis entity and primary-brand resolution

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitiveAnalysis {
    pub id: String,
    pub name: String,

    /// Share of voice, 0-100
    pub share_of_voice: f64,
    pub sentiment: f64,
    pub engagement: f64,

    /// Market position text ("#1 in Share of Voice"); conventionally
    /// filled only for the operator's own brand
    pub position: String,

    /// Gap-to-leader text ("Leading by 4%")
    pub gap_to_leader: String,

    pub is_active: bool,
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorDraft {
    pub name: String,
    pub share_of_voice: f64,
    pub sentiment: f64,
    pub engagement: f64,
    pub position: String,
    pub gap_to_leader: String,
    pub is_active: bool,
    pub order: i64,
}

impl CompetitiveAnalysis {
    pub fn draft(&self) -> CompetitorDraft {
        CompetitorDraft {
            name: self.name.clone(),
            share_of_voice: self.share_of_voice,
            sentiment: self.sentiment,
            engagement: self.engagement,
            position: self.position.clone(),
            gap_to_leader: self.gap_to_leader.clone(),
            is_active: self.is_active,
            order: self.order,
        }
    }
}

impl Resource for CompetitiveAnalysis {
    const ENDPOINT: &'static str = "competitive-analyses";
    const LABEL: &'static str = "competitive analysis";

    type Draft = CompetitorDraft;

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
        self.share_of_voice
    }
}

/// Name fragments that identify the operator's own brand
const OWN_BRAND_PATTERNS: &[&str] = &["your brand", "yourbrand", "our brand", "ourbrand"];

/// Pick the record standing in for "your brand" among active analyses.
///
/// `analyses` must already be in display order. First match wins:
/// 1. position AND gap_to_leader both non-blank,
/// 2. name contains an own-brand pattern (case-insensitive),
/// 3. order == 0,
/// 4. first record.
pub fn resolve_primary_brand<'a>(
    analyses: &[&'a CompetitiveAnalysis],
) -> Option<&'a CompetitiveAnalysis> {
    if let Some(found) = analyses
        .iter()
        .find(|a| !a.position.trim().is_empty() && !a.gap_to_leader.trim().is_empty())
        .copied()
    {
        return Some(found);
    }

    if let Some(found) = analyses
        .iter()
        .find(|a| {
            let name = a.name.to_lowercase();
            OWN_BRAND_PATTERNS.iter().any(|p| name.contains(p))
        })
        .copied()
    {
        return Some(found);
    }

    analyses
        .iter()
        .find(|a| a.order == 0)
        .or_else(|| analyses.first())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str, order: i64, position: &str, gap: &str) -> CompetitiveAnalysis {
        CompetitiveAnalysis {
            id: name.to_lowercase(),
            name: name.to_string(),
            share_of_voice: 20.0,
            sentiment: 70.0,
            engagement: 7.0,
            position: position.to_string(),
            gap_to_leader: gap.to_string(),
            is_active: true,
            order,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_filled_summary_fields_win_over_order_zero() {
        let acme = brand("Acme", 1, "", "");
        let ours = brand("Our Brand", 0, "#1", "+4%");
        let refs = vec![&ours, &acme];
        let resolved = resolve_primary_brand(&refs).unwrap();
        assert_eq!(resolved.name, "Our Brand");
    }

    #[test]
    fn test_name_pattern_matches_case_insensitively() {
        let a = brand("Acme", 1, "", "");
        let b = brand("YOURBRAND Inc", 2, "", "");
        let refs = vec![&a, &b];
        let resolved = resolve_primary_brand(&refs).unwrap();
        assert_eq!(resolved.name, "YOURBRAND Inc");
    }

    #[test]
    fn test_order_zero_fallback() {
        let a = brand("Acme", 2, "", "");
        let b = brand("Beta", 0, "", "");
        let refs = vec![&a, &b];
        assert_eq!(resolve_primary_brand(&refs).unwrap().name, "Beta");
    }

    #[test]
    fn test_first_record_fallback() {
        let a = brand("Acme", 3, "", "");
        let b = brand("Beta", 5, "", "");
        let refs = vec![&a, &b];
        assert_eq!(resolve_primary_brand(&refs).unwrap().name, "Acme");
    }

    #[test]
    fn test_blank_position_does_not_satisfy_rule_one() {
        // Whitespace-only position falls through to the name rule
        let a = brand("Our Brand", 1, "  ", "+4%");
        let b = brand("Acme", 0, "", "");
        let refs = vec![&b, &a];
        assert_eq!(resolve_primary_brand(&refs).unwrap().name, "Our Brand");
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_primary_brand(&[]).is_none());
    }
}
