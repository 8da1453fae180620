use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::{Direction, TraitWeights};
    use crate::types::report::{DirectionScore, RecommendationReport};
    use std::collections::BTreeMap;

    #[test]
    fn json_report_uses_camel_case_wire_names() {
        let direction = Direction {
            id: 1,
            name: "Robotics".to_string(),
            description: "robots".to_string(),
            grades: vec![9, 10],
            preferred_grades: vec![10],
            link: None,
            tags: TraitWeights::default(),
        };
        let report = RecommendationReport::new(
            10,
            vec![DirectionScore {
                direction,
                score: 36.0,
                max_possible_score: 40.0,
                percentage: 90,
            }],
            BTreeMap::new(),
        );

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"maxPossibleScore\": 40.0"));
        assert!(rendered.contains("\"percentage\": 90"));
        assert!(rendered.contains("\"preferredGrades\""));
        assert!(rendered.contains("\"generatedAt\""));
    }
}
