use crate::types::{Grade, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed 8-trait weight vector every direction carries. Missing fields
/// in the catalog JSON default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitWeights {
    pub creativity: Weight,
    pub technology: Weight,
    pub visual: Weight,
    pub artistic: Weight,
    pub logical: Weight,
    pub practical: Weight,
    pub competition: Weight,
    pub presentation: Weight,
}

impl TraitWeights {
    pub const NAMES: [&'static str; 8] = [
        "creativity",
        "technology",
        "visual",
        "artistic",
        "logical",
        "practical",
        "competition",
        "presentation",
    ];

    /// Weight for a trait by name; 0 for names outside the fixed schema.
    pub fn weight(&self, name: &str) -> Weight {
        match name {
            "creativity" => self.creativity,
            "technology" => self.technology,
            "visual" => self.visual,
            "artistic" => self.artistic,
            "logical" => self.logical,
            "practical" => self.practical,
            "competition" => self.competition,
            "presentation" => self.presentation,
            _ => 0.0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Weight)> + '_ {
        Self::NAMES.iter().map(|name| (*name, self.weight(name)))
    }
}

/// A candidate career/study track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Direction {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Grades this direction accepts; membership test, not a range.
    pub grades: Vec<Grade>,
    /// Subset of `grades` granting the flat preferred-grade bonus.
    #[serde(default)]
    pub preferred_grades: Vec<Grade>,
    /// Absent link means the UI shows a coming-soon placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub tags: TraitWeights,
}

impl Direction {
    pub fn eligible_for(&self, grade: Grade) -> bool {
        self.grades.contains(&grade)
    }

    pub fn prefers(&self, grade: Grade) -> bool {
        self.preferred_grades.contains(&grade)
    }
}

/// Question discriminator. Exactly one question per catalog is `grade`;
/// every other type scores as a generic choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Grade,
    #[serde(other)]
    Choice,
}

impl QuestionKind {
    pub fn is_grade(self) -> bool {
        matches!(self, QuestionKind::Grade)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub required: bool,
    /// Parsed but not scored: multi-select answers never match an option
    /// by exact value, so they fall through the skip rules.
    #[serde(default)]
    pub multiple: bool,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: AnswerValue,
    pub label: String,
    /// Sparse trait contributions; options on the grade question carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, Weight>>,
}

/// Option values and answer values are either integers or strings on the
/// wire; equality between the two is the answer-matching key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Int(i64),
    Text(String),
}

impl AnswerValue {
    /// Reads the value as an integer school grade, parsing text values.
    pub fn as_grade(&self) -> Option<Grade> {
        match self {
            AnswerValue::Int(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Int(n) => write!(f, "{n}"),
            AnswerValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One selected option for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub value: AnswerValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_camel_case_catalog_json() {
        let json = r#"{
            "id": 1,
            "name": "Robotics",
            "description": "Build and program robots",
            "grades": [7, 8, 9],
            "preferredGrades": [8],
            "link": "https://example.org/robotics",
            "tags": { "technology": 5, "practical": 4, "logical": 3 }
        }"#;
        let direction: Direction = serde_json::from_str(json).expect("direction should parse");
        assert_eq!(direction.id, 1);
        assert_eq!(direction.preferred_grades, vec![8]);
        assert_eq!(direction.tags.technology, 5.0);
        // Unlisted traits default to zero.
        assert_eq!(direction.tags.creativity, 0.0);
        assert!(direction.eligible_for(9));
        assert!(!direction.eligible_for(10));
        assert!(direction.prefers(8));
    }

    #[test]
    fn direction_without_link_or_preferred_grades_parses() {
        let json = r#"{
            "id": 2,
            "name": "Design",
            "description": "Visual design",
            "grades": [9],
            "tags": {}
        }"#;
        let direction: Direction = serde_json::from_str(json).expect("direction should parse");
        assert!(direction.link.is_none());
        assert!(direction.preferred_grades.is_empty());
        assert_eq!(direction.tags, TraitWeights::default());
    }

    #[test]
    fn question_kind_grade_is_distinguished() {
        let json = r#"{
            "id": 1,
            "type": "grade",
            "question": "Which grade are you in?",
            "options": [
                { "value": 7, "label": "7th" },
                { "value": 8, "label": "8th" }
            ]
        }"#;
        let question: Question = serde_json::from_str(json).expect("question should parse");
        assert!(question.kind.is_grade());
        assert!(!question.multiple);
        assert!(question.options[0].tags.is_none());
    }

    #[test]
    fn unknown_question_type_falls_back_to_choice() {
        let json = r#"{
            "id": 2,
            "type": "single",
            "question": "Pick one",
            "options": []
        }"#;
        let question: Question = serde_json::from_str(json).expect("question should parse");
        assert_eq!(question.kind, QuestionKind::Choice);
    }

    #[test]
    fn answer_value_matches_int_and_text() {
        let int: AnswerValue = serde_json::from_str("7").expect("int should parse");
        let text: AnswerValue = serde_json::from_str("\"code\"").expect("text should parse");
        assert_eq!(int, AnswerValue::Int(7));
        assert_eq!(text, AnswerValue::Text("code".to_string()));
        assert_ne!(int, text);
    }

    #[test]
    fn answer_value_as_grade_parses_text() {
        assert_eq!(AnswerValue::Int(9).as_grade(), Some(9));
        assert_eq!(AnswerValue::Text("10".to_string()).as_grade(), Some(10));
        assert_eq!(AnswerValue::Text("tenth".to_string()).as_grade(), None);
    }

    #[test]
    fn trait_weights_defensive_lookup_returns_zero_for_unknown() {
        let tags = TraitWeights {
            logical: 3.0,
            ..TraitWeights::default()
        };
        assert_eq!(tags.weight("logical"), 3.0);
        assert_eq!(tags.weight("charisma"), 0.0);
    }

    #[test]
    fn answer_parses_camel_case() {
        let answer: Answer = serde_json::from_str(r#"{"questionId": 3, "value": "art"}"#)
            .expect("answer should parse");
        assert_eq!(answer.question_id, 3);
        assert_eq!(answer.value, AnswerValue::Text("art".to_string()));
    }
}
