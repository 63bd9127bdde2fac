use crate::config::AnalysisPromptConfig;

use super::retrieve::TrendRecord;

/// Returned verbatim when no records were collected; the pipeline still
/// renders a report around it.
pub const NO_TRENDS_MESSAGE: &str = "No trends found for analysis.";

/// Renders the analysis prompt: context and instruction, records grouped
/// by category in first-seen order, then the configured topics and
/// requirements. Pure string construction; record fields are inserted
/// as-is, without escaping.
pub fn build_analysis_prompt(records: &[TrendRecord], config: &AnalysisPromptConfig) -> String {
    if records.is_empty() {
        return NO_TRENDS_MESSAGE.to_string();
    }

    let mut prompt = format!(
        "{}\n{}\n\n",
        config.system_context, config.main_instruction
    );

    for (category, group) in group_by_category(records) {
        prompt.push_str(&format!("\n## Category: {category}\n"));
        for record in group {
            prompt.push_str(&format!("\nSource: {}\n", record.link));
            prompt.push_str(&format!("- {}\n", record.title));
            prompt.push_str(&format!("  {}\n", record.snippet));
        }
    }

    prompt.push_str("\n## Topics for Analysis:\n");
    for topic in &config.topics {
        prompt.push_str(&format!("- {}\n", topic.name));
    }

    prompt.push_str("\n## Analysis Requirements:\n");
    for requirement in &config.requirements {
        prompt.push_str(&format!("- {requirement}\n"));
    }

    prompt
}

/// Groups records by category, preserving first-seen category order and
/// insertion order within each group.
fn group_by_category(records: &[TrendRecord]) -> Vec<(&str, Vec<&TrendRecord>)> {
    let mut groups: Vec<(&str, Vec<&TrendRecord>)> = Vec::new();
    for record in records {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == record.category)
        {
            Some((_, group)) => group.push(record),
            None => groups.push((record.category.as_str(), vec![record])),
        }
    }
    groups
}
