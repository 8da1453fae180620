use crate::engine::tagged_option;
use crate::types::catalog::{Answer, Question};
use crate::types::Weight;
use std::collections::BTreeMap;

/// Sums answer tag weights per trait name across all scorable answers.
/// Direction-independent; the grade question is excluded entirely. The raw
/// mapping is the contract — deriving "top traits" from it is the report
/// layer's job.
pub fn trait_profile(questions: &[Question], answers: &[Answer]) -> BTreeMap<String, Weight> {
    let mut profile = BTreeMap::new();
    for answer in answers {
        let Some(tags) = tagged_option(questions, answer) else {
            continue;
        };
        for (name, weight) in tags {
            *profile.entry(name.clone()).or_insert(0.0) += weight;
        }
    }
    profile
}
