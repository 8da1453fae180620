use crate::types::catalog::Direction;
use crate::types::{Grade, Weight};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

/// One ranked direction, scored against the shared per-answer-set ceiling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionScore {
    pub direction: Direction,
    /// Raw accumulated points, including the preferred-grade bonus. Not
    /// clamped; it can exceed `max_possible_score` when catalog weights
    /// exceed the assumed per-trait cap.
    pub score: f64,
    /// Normalization denominator, identical across one call's results.
    pub max_possible_score: f64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub version: String,
    pub generated_at: String,
    pub grade: Grade,
    pub recommendations: Vec<DirectionScore>,
    pub profile: BTreeMap<String, Weight>,
}

impl RecommendationReport {
    pub fn new(
        grade: Grade,
        recommendations: Vec<DirectionScore>,
        profile: BTreeMap<String, Weight>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            grade,
            recommendations,
            profile,
        }
    }
}

/// One trait expressed as a share of the student's strongest trait.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitShare {
    pub name: String,
    pub value: Weight,
    pub percentage: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub version: String,
    pub generated_at: String,
    pub profile: BTreeMap<String, Weight>,
    pub top_traits: Vec<TraitShare>,
}

impl ProfileReport {
    /// Derives the top-3 traits, each as a percentage of the single highest
    /// trait value. Presentation-side math; the raw profile stays as-is.
    pub fn new(profile: BTreeMap<String, Weight>) -> Self {
        let max = profile.values().fold(0.0_f64, |acc, value| acc.max(*value));
        let mut ranked: Vec<(&String, &Weight)> = profile.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(a.1));

        let top_traits = ranked
            .into_iter()
            .take(3)
            .map(|(name, value)| TraitShare {
                name: name.clone(),
                value: *value,
                percentage: if max > 0.0 {
                    (value / max * 100.0).round() as i64
                } else {
                    0
                },
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            profile,
            top_traits,
        }
    }
}

/// A catalog lint finding.
#[derive(Debug, Clone)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        blocking: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            blocking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_report_ranks_top_traits_against_strongest() {
        let mut profile = BTreeMap::new();
        profile.insert("technology".to_string(), 8.0);
        profile.insert("logical".to_string(), 4.0);
        profile.insert("creativity".to_string(), 2.0);
        profile.insert("visual".to_string(), 1.0);

        let report = ProfileReport::new(profile);
        assert_eq!(report.top_traits.len(), 3);
        assert_eq!(report.top_traits[0].name, "technology");
        assert_eq!(report.top_traits[0].percentage, 100);
        assert_eq!(report.top_traits[1].name, "logical");
        assert_eq!(report.top_traits[1].percentage, 50);
        assert_eq!(report.top_traits[2].name, "creativity");
        assert_eq!(report.top_traits[2].percentage, 25);
    }

    #[test]
    fn profile_report_handles_empty_profile() {
        let report = ProfileReport::new(BTreeMap::new());
        assert!(report.top_traits.is_empty());
    }

    #[test]
    fn profile_report_breaks_value_ties_alphabetically() {
        let mut profile = BTreeMap::new();
        profile.insert("visual".to_string(), 3.0);
        profile.insert("artistic".to_string(), 3.0);

        let report = ProfileReport::new(profile);
        assert_eq!(report.top_traits[0].name, "artistic");
        assert_eq!(report.top_traits[1].name, "visual");
        assert_eq!(report.top_traits[0].percentage, 100);
    }
}
