//! Plain-text summary of a run.

use crate::model::RunResult;

/// Longest excerpt of refined text shown per subsection.
const EXCERPT_CHARS: usize = 160;

/// Render a short human-readable listing of the ranked sections.
pub fn to_summary(result: &RunResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Persona: {}\n", result.metadata.persona));
    out.push_str(&format!("Job: {}\n", result.metadata.job));
    out.push_str(&format!(
        "Documents: {}\n\n",
        result.metadata.documents.len()
    ));

    if result.extracted_sections.is_empty() {
        out.push_str("No relevant pages found.\n");
        return out;
    }

    for section in &result.extracted_sections {
        out.push_str(&format!(
            "{:>3}. {} p.{} - {}\n",
            section.importance_rank, section.document, section.page, section.section_title
        ));
    }

    for sub in &result.subsection_analysis {
        out.push_str(&format!("\n[{} p.{}]\n", sub.document, sub.page));
        out.push_str(&excerpt(&sub.refined_text));
        out.push('\n');
    }

    out
}

fn excerpt(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RankedSection, RunMetadata, Subsection};
    use chrono::Utc;

    #[test]
    fn test_summary_lists_ranks() {
        let result = RunResult {
            metadata: RunMetadata::new(vec!["a.pdf".into()], "Student", "Exam", Utc::now()),
            extracted_sections: vec![RankedSection {
                document: "a.pdf".into(),
                page: 2,
                section_title: "Collision Theory".into(),
                importance_rank: 1,
            }],
            subsection_analysis: vec![Subsection {
                document: "a.pdf".into(),
                page: 2,
                refined_text: "Molecules\nmust   collide".into(),
            }],
        };

        let summary = to_summary(&result);
        assert!(summary.starts_with("Persona: Student\nJob: Exam\nDocuments: 1\n\n"));
        assert!(summary.contains("  1. a.pdf p.2 - Collision Theory\n"));
        assert!(summary.ends_with("[a.pdf p.2]\nMolecules must collide\n"));
    }

    #[test]
    fn test_summary_empty() {
        let result = RunResult {
            metadata: RunMetadata::new(vec![], "P", "J", Utc::now()),
            extracted_sections: vec![],
            subsection_analysis: vec![],
        };
        assert!(to_summary(&result).contains("No relevant pages found."));
    }

    #[test]
    fn test_excerpt_truncates() {
        let long = "word ".repeat(100);
        let short = excerpt(&long);
        assert!(short.ends_with("..."));
        assert!(short.chars().count() <= EXCERPT_CHARS + 3);
    }
}
