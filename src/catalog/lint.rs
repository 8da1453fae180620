use crate::catalog::Catalog;
use crate::engine::score::MAX_TRAIT_WEIGHT;
use crate::types::catalog::TraitWeights;
use crate::types::report::Finding;
use std::collections::HashSet;

/// Checks a loaded catalog for structural problems. Blocking findings mean
/// the engine cannot score it meaningfully; warnings describe sharp edges
/// that are deliberately not fixed up at runtime.
pub fn lint_catalog(catalog: &Catalog) -> Vec<Finding> {
    let mut findings = Vec::new();

    lint_directions(catalog, &mut findings);
    lint_questions(catalog, &mut findings);

    findings
}

fn lint_directions(catalog: &Catalog, findings: &mut Vec<Finding>) {
    let mut seen_ids = HashSet::new();
    for direction in &catalog.directions {
        if !seen_ids.insert(direction.id) {
            findings.push(Finding::new(
                "catalog.duplicate_direction_id",
                "Duplicate direction id",
                format!("direction id {} appears more than once", direction.id),
                true,
            ));
        }

        for grade in &direction.preferred_grades {
            if !direction.grades.contains(grade) {
                findings.push(Finding::new(
                    "catalog.preferred_outside_grades",
                    "Preferred grade outside eligibility",
                    format!(
                        "direction '{}' prefers grade {grade} but does not accept it; \
                         the bonus can never apply",
                        direction.name
                    ),
                    false,
                ));
            }
        }

        for (name, weight) in direction.tags.iter() {
            if weight > MAX_TRAIT_WEIGHT {
                findings.push(Finding::new(
                    "catalog.tag_above_cap",
                    "Trait weight above assumed maximum",
                    format!(
                        "direction '{}' carries {name} = {weight}; match percentages \
                         can exceed 100",
                        direction.name
                    ),
                    false,
                ));
            }
        }

        if direction.link.is_none() {
            findings.push(Finding::new(
                "catalog.missing_link",
                "Direction has no link",
                format!(
                    "direction '{}' has no link; consumers show a coming-soon placeholder",
                    direction.name
                ),
                false,
            ));
        }
    }
}

fn lint_questions(catalog: &Catalog, findings: &mut Vec<Finding>) {
    let mut seen_ids = HashSet::new();
    let mut grade_questions = 0usize;

    for question in &catalog.questions {
        if !seen_ids.insert(question.id) {
            findings.push(Finding::new(
                "catalog.duplicate_question_id",
                "Duplicate question id",
                format!("question id {} appears more than once", question.id),
                true,
            ));
        }

        if question.kind.is_grade() {
            grade_questions += 1;
        }

        if question.multiple {
            findings.push(Finding::new(
                "catalog.multi_select_question",
                "Multi-select question",
                format!(
                    "question {} allows multiple selections; scoring matches single \
                     values only, so collection answers are skipped",
                    question.id
                ),
                false,
            ));
        }

        let mut seen_values = HashSet::new();
        for option in &question.options {
            if !seen_values.insert(option.value.to_string()) {
                findings.push(Finding::new(
                    "catalog.duplicate_option_value",
                    "Duplicate option value",
                    format!(
                        "question {} has more than one option with value '{}'",
                        question.id, option.value
                    ),
                    true,
                ));
            }

            let Some(tags) = &option.tags else {
                continue;
            };

            if question.kind.is_grade() {
                findings.push(Finding::new(
                    "catalog.tagged_grade_option",
                    "Grade option carries tags",
                    format!(
                        "option '{}' on the grade question has tags; the grade \
                         question never contributes to scoring",
                        option.value
                    ),
                    false,
                ));
            }

            for (name, weight) in tags {
                if *weight < 0.0 {
                    findings.push(Finding::new(
                        "catalog.negative_tag_weight",
                        "Negative option tag weight",
                        format!(
                            "question {} option '{}' weights {name} at {weight}; \
                             weights must be non-negative",
                            question.id, option.value
                        ),
                        true,
                    ));
                }
                if !TraitWeights::NAMES.contains(&name.as_str()) {
                    findings.push(Finding::new(
                        "catalog.unknown_trait",
                        "Tag outside the trait schema",
                        format!(
                            "question {} option '{}' tags unknown trait '{name}'; it \
                             scores 0 against every direction but still raises the \
                             normalization ceiling",
                            question.id, option.value
                        ),
                        false,
                    ));
                }
            }
        }
    }

    if grade_questions == 0 {
        findings.push(Finding::new(
            "catalog.missing_grade_question",
            "No grade question",
            "the catalog has no grade-type question; recommendations cannot run".to_string(),
            true,
        ));
    } else if grade_questions > 1 {
        findings.push(Finding::new(
            "catalog.multiple_grade_questions",
            "More than one grade question",
            format!("expected exactly one grade-type question, found {grade_questions}"),
            true,
        ));
    }
}
