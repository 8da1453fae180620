use crate::types::report::{ProfileReport, RecommendationReport};

pub fn recommendations_to_markdown(report: &RecommendationReport) -> String {
    let mut output = String::new();
    output.push_str("# Direction Recommendations\n\n");
    output.push_str(&format!("Grade: {}\n\n", report.grade));

    output.push_str("## Top Matches\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none: no direction accepts this grade\n\n");
    } else {
        for (rank, result) in report.recommendations.iter().enumerate() {
            output.push_str(&format!(
                "{}. **{}** ({}% match, score {:.0} of {:.0})\n",
                rank + 1,
                result.direction.name,
                result.percentage,
                result.score,
                result.max_possible_score
            ));
            output.push_str(&format!("   {}\n", result.direction.description));
            match &result.direction.link {
                Some(link) => output.push_str(&format!("   More: {link}\n")),
                None => output.push_str("   More: coming soon\n"),
            }
        }
        output.push('\n');
    }

    output.push_str("## Trait Profile\n\n");
    if report.profile.is_empty() {
        output.push_str("- none\n");
    } else {
        for (name, value) in &report.profile {
            output.push_str(&format!("- {name}: {value:.0}\n"));
        }
    }

    output
}

pub fn profile_to_markdown(report: &ProfileReport) -> String {
    let mut output = String::new();
    output.push_str("# Trait Profile\n\n");

    output.push_str("## Top Traits\n\n");
    if report.top_traits.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for share in &report.top_traits {
            output.push_str(&format!(
                "- {}: {}% ({:.0} points)\n",
                share.name, share.percentage, share.value
            ));
        }
        output.push('\n');
    }

    output.push_str("## All Traits\n\n");
    if report.profile.is_empty() {
        output.push_str("- none\n");
    } else {
        for (name, value) in &report.profile {
            output.push_str(&format!("- {name}: {value:.0}\n"));
        }
    }

    output
}
