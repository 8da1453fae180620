pub mod json;
pub mod md;

use crate::error::CompassError;
use crate::types::report::{ProfileReport, RecommendationReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_recommendations(
    report: &RecommendationReport,
    format: OutputFormat,
) -> Result<String, CompassError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CompassError::Json),
        OutputFormat::Md => Ok(md::recommendations_to_markdown(report)),
    }
}

pub fn render_profile(
    report: &ProfileReport,
    format: OutputFormat,
) -> Result<String, CompassError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CompassError::Json),
        OutputFormat::Md => Ok(md::profile_to_markdown(report)),
    }
}
