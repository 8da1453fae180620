pub mod lint;

use crate::config::CompassConfig;
use crate::error::{CompassError, Result};
use crate::types::catalog::{Answer, Direction, Question};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_DIRECTIONS_FILE: &str = "directions.json";
pub const DEFAULT_QUESTIONS_FILE: &str = "questions.json";

/// The immutable quiz catalog: loaded once, read-only afterwards, passed
/// explicitly into the engine.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub directions: Vec<Direction>,
    pub questions: Vec<Question>,
}

#[derive(Deserialize)]
struct DirectionsFile {
    directions: Vec<Direction>,
}

#[derive(Deserialize)]
struct QuestionsFile {
    questions: Vec<Question>,
}

pub fn load_catalog(root: &Path, config: Option<&CompassConfig>) -> Result<Catalog> {
    let directions_file = config
        .and_then(|cfg| cfg.catalog.directions.as_deref())
        .unwrap_or(DEFAULT_DIRECTIONS_FILE);
    let questions_file = config
        .and_then(|cfg| cfg.catalog.questions.as_deref())
        .unwrap_or(DEFAULT_QUESTIONS_FILE);

    let directions: DirectionsFile = read_json(&root.join(directions_file))?;
    let questions: QuestionsFile = read_json(&root.join(questions_file))?;

    debug!(
        directions = directions.directions.len(),
        questions = questions.questions.len(),
        "catalog loaded"
    );

    Ok(Catalog {
        directions: directions.directions,
        questions: questions.questions,
    })
}

/// Answers are a bare JSON array of `{"questionId": …, "value": …}` entries,
/// one per answered question.
pub fn load_answers(path: &Path) -> Result<Vec<Answer>> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CompassError::CatalogNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| CompassError::CatalogParse(format!("{}: {}", path.display(), e)))
}
