use crate::engine::tagged_option;
use crate::types::catalog::{Answer, Direction, Question};
use crate::types::Grade;

/// Assumed maximum per-trait weight a direction can carry. Baked into the
/// normalization denominator, not derived from the catalog; weights above it
/// push percentages past 100 and are deliberately left un-clamped.
pub const MAX_TRAIT_WEIGHT: f64 = 5.0;

/// Flat bonus when the answered grade is in a direction's preferred set.
/// Not scaled by answer count: a fixed tie-breaker favoring grade-appropriate
/// directions however short the quiz.
pub const PREFERRED_GRADE_BONUS: f64 = 10.0;

/// Raw score for one direction: the weighted dot product of each answer's
/// trait contributions against the direction's trait vector, accumulated
/// answer by answer.
pub fn direction_score(direction: &Direction, questions: &[Question], answers: &[Answer]) -> f64 {
    let mut total = 0.0;
    for answer in answers {
        let Some(tags) = tagged_option(questions, answer) else {
            continue;
        };
        for (name, answer_weight) in tags {
            total += answer_weight * direction.tags.weight(name);
        }
    }
    total
}

pub fn age_bonus(direction: &Direction, grade: Grade) -> f64 {
    if direction.prefers(grade) {
        PREFERRED_GRADE_BONUS
    } else {
        0.0
    }
}

/// Direction-independent ceiling for one answer set: every tag contribution
/// at the assumed maximum direction weight, plus the bonus unconditionally.
pub fn max_possible_score(questions: &[Question], answers: &[Answer]) -> f64 {
    let mut max = 0.0;
    for answer in answers {
        let Some(tags) = tagged_option(questions, answer) else {
            continue;
        };
        for answer_weight in tags.values() {
            max += answer_weight * MAX_TRAIT_WEIGHT;
        }
    }
    max + PREFERRED_GRADE_BONUS
}
