//! Statement of Reasons text template.

use std::fmt::Write;

use super::Citation;
use crate::domain::incident::Incident;

/// Renders the formal Statement of Reasons for a decision.
///
/// `findings` must end with the ladder's conclusion; the RECOMMENDATION
/// line repeats that last entry.
pub fn generate_statement_of_reasons(
    incident: &Incident,
    findings: &[String],
    citations: &[Citation],
) -> String {
    let mut sor = String::from("STATEMENT OF REASONS\n");
    // Writing into a String cannot fail.
    let _ = writeln!(sor, "Subject: {}", incident.subject_name());
    let _ = writeln!(sor, "Incident Reference: {}", incident.report_id());
    let _ = writeln!(sor, "Date of Incident: {}", incident.date());
    sor.push('\n');

    sor.push_str("FINDINGS:\n");
    for (i, finding) in findings.iter().enumerate() {
        let _ = writeln!(sor, "{}. {}", i + 1, finding);
    }

    if !citations.is_empty() {
        sor.push_str("\nLEGAL BASIS:\n");
        for citation in citations {
            let _ = writeln!(sor, "• {} ({})", citation.guideline, citation.source_paragraph);
        }
    }

    sor.push_str("\nRECOMMENDATION:\n");
    let conclusion = findings.last().map(String::as_str).unwrap_or_default();
    let _ = write!(
        sor,
        "Based on the above findings, this case is classified for {}",
        conclusion
    );

    sor
}
