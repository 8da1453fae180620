pub mod eligibility;
pub mod profile;
pub mod score;

use crate::catalog::Catalog;
use crate::error::{CompassError, Result};
use crate::types::catalog::{Answer, Question};
use crate::types::report::DirectionScore;
use crate::types::{Grade, Weight};
use std::collections::BTreeMap;
use tracing::debug;

/// At most this many directions are returned per call.
pub const TOP_RECOMMENDATIONS: usize = 3;

/// Ranks the eligible directions against one answer set.
///
/// Pure function of its inputs: the catalog is read-only and no state is kept
/// between calls. Fails only when the grade question is unanswered or its
/// value is not an integer grade; unresolvable answers are skipped.
pub fn recommend(catalog: &Catalog, answers: &[Answer]) -> Result<Vec<DirectionScore>> {
    let grade = find_grade(&catalog.questions, answers)?;
    let eligible = eligibility::eligible_directions(&catalog.directions, grade);
    debug!(grade, eligible = eligible.len(), "scoring directions");

    // One ceiling per answer set, shared by every direction so percentages
    // are directly comparable.
    let denominator = score::max_possible_score(&catalog.questions, answers);

    let mut scored: Vec<DirectionScore> = eligible
        .into_iter()
        .map(|direction| {
            let raw = score::direction_score(direction, &catalog.questions, answers)
                + score::age_bonus(direction, grade);
            let percentage = if denominator > 0.0 {
                (raw / denominator * 100.0).round() as i64
            } else {
                0
            };
            DirectionScore {
                direction: direction.clone(),
                score: raw,
                max_possible_score: denominator,
                percentage,
            }
        })
        .collect();

    // Stable sort: equal raw scores keep catalog order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(TOP_RECOMMENDATIONS);
    Ok(scored)
}

/// Finds the answered grade. The grade answer must exist before any
/// recommendation can be produced; there is no sensible default.
pub fn find_grade(questions: &[Question], answers: &[Answer]) -> Result<Grade> {
    let answer = answers
        .iter()
        .find(|answer| {
            questions
                .iter()
                .find(|question| question.id == answer.question_id)
                .is_some_and(|question| question.kind.is_grade())
        })
        .ok_or(CompassError::MissingGradeAnswer)?;

    answer
        .value
        .as_grade()
        .ok_or_else(|| CompassError::InvalidGradeAnswer(answer.value.to_string()))
}

/// Shared skip rules for every scorable answer: the question must exist and
/// not be the grade question, the selected option must match by exact value,
/// and the option must carry tags. Anything else contributes nothing.
pub(crate) fn tagged_option<'a>(
    questions: &'a [Question],
    answer: &Answer,
) -> Option<&'a BTreeMap<String, Weight>> {
    let question = questions
        .iter()
        .find(|question| question.id == answer.question_id)?;
    if question.kind.is_grade() {
        return None;
    }
    let option = question
        .options
        .iter()
        .find(|option| option.value == answer.value)?;
    option.tags.as_ref()
}
