//! Plain-text rendering of pipeline results for the terminal.

use std::fmt::Write;

use crate::domain::adjudication::AdjudicationDecision;
use crate::domain::foundation::SubjectId;
use crate::domain::guidelines::{Guideline, GuidelineMatch};
use crate::domain::incident::Incident;
use crate::domain::legacy::{LegacyStatus, SoapEnvelope};

const RULE_WIDTH: usize = 70;
const NARRATIVE_PREVIEW_CHARS: usize = 200;

/// Section banner framed by `=` rules.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\n  {title}\n{rule}\n")
}

/// Extracted record as shown after ingestion.
pub fn incident_summary(incident: &Incident) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Extracted Data:");
    let _ = writeln!(out, "   Report ID: {}", incident.report_id());
    let _ = writeln!(out, "   Subject: {}", incident.subject_name());
    let _ = writeln!(out, "   Date: {}", incident.date());
    let _ = writeln!(out, "   Location: {}", incident.location().unwrap_or("Unknown"));
    let _ = writeln!(
        out,
        "   Alcohol Involved: {}",
        if incident.alcohol_involved() { "Yes" } else { "No" }
    );

    let _ = writeln!(out, "\n   Charges ({}):", incident.charge_count());
    for (i, charge) in incident.charges().iter().enumerate() {
        let _ = writeln!(out, "     {}. [{}] {}", i + 1, charge.severity(), charge.description());
        let _ = writeln!(out, "        Statute: {}", charge.statute().unwrap_or("None"));
    }

    let _ = writeln!(out, "\n   Narrative:");
    let _ = writeln!(out, "   {}", preview(incident.narrative_summary(), NARRATIVE_PREVIEW_CHARS));
    out
}

/// Recommendation, citations and the full Statement of Reasons.
pub fn decision_summary(decision: &AdjudicationDecision, max_risk_score: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Decision Summary:");
    let _ = writeln!(out, "   Recommendation: {}", decision.recommendation);
    let _ = writeln!(out, "   Risk Score: {}/{:.1}", decision.risk_score, max_risk_score);
    let _ = writeln!(out, "   Timestamp: {}", decision.timestamp.to_rfc3339());

    let related: Vec<&str> = decision.related_guidelines.iter().map(|c| c.letter()).collect();
    if !related.is_empty() {
        let _ = writeln!(out, "   Related Guidelines: {}", related.join(", "));
    }

    let _ = writeln!(out, "\nLegal Citations ({}):", decision.citations.len());
    for citation in &decision.citations {
        let _ = writeln!(out, "   * {}", citation.guideline);
        let _ = writeln!(out, "     {}", citation.text);
        let _ = writeln!(out, "     Source: {}\n", citation.source_paragraph);
    }

    let rule = "-".repeat(RULE_WIDTH);
    let _ = writeln!(out, "Statement of Reasons:");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", decision.generated_sor);
    let _ = write!(out, "{rule}");
    out
}

/// Side-by-side view of what each system currently shows.
pub fn legacy_status(subject_id: &SubjectId, status: &LegacyStatus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Anti-Corruption Layer ({}):", subject_id);
    let _ = writeln!(out, "   - Local Status: {} (Immediate)", status.local_status());
    if status.is_pending() {
        let _ = writeln!(
            out,
            "   - Mainframe Status: {} (Pending batch sync)",
            status.mainframe_status()
        );
    } else {
        let _ = writeln!(out, "   - Mainframe Status: {} (Synchronized)", status.mainframe_status());
    }
    let _ = writeln!(out, "   - Sync Lag: {} hours", status.sync_lag_hours());
    let last_sync = status
        .last_sync()
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "Never".to_string());
    let _ = write!(out, "   - Last Sync: {}", last_sync);
    out
}

/// Transmitted SOAP message.
pub fn envelope(envelope: &SoapEnvelope) -> String {
    format!("SOAP Envelope (MessageID {}):\n{}", envelope.message_id, envelope.xml)
}

/// Full guideline excerpt.
pub fn guideline_detail(guideline: &Guideline) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", guideline.title);
    let _ = writeln!(out, "{}\n", guideline.citation);
    let _ = writeln!(out, "Concern:\n   {}\n", guideline.concern);
    let _ = writeln!(out, "Disqualifying Conditions:");
    for condition in guideline.disqualifying_conditions {
        let _ = writeln!(out, "   - {}", condition);
    }
    let _ = writeln!(out, "\nMitigating Conditions:");
    for condition in guideline.mitigating_conditions {
        let _ = writeln!(out, "   - {}", condition);
    }
    out
}

/// Keyword lookup results, one line per guideline.
pub fn guideline_matches(query: &str, matches: &[GuidelineMatch]) -> String {
    if matches.is_empty() {
        return format!("No guidelines matched \"{}\".", query);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Guidelines matching \"{}\":", query);
    for m in matches {
        let _ = writeln!(
            out,
            "   {} [keyword: {}] ({})",
            m.guideline.title, m.keyword, m.guideline.citation
        );
    }
    out
}

fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Scenario;
    use crate::domain::adjudication::AdjudicationEngine;
    use crate::domain::guidelines::{guideline, search_guidelines, GuidelineCode};
    use crate::domain::legacy::ClearanceStatus;

    #[test]
    fn banner_frames_title() {
        let text = banner("PHASE 1: VLM Ingestion");
        assert!(text.contains("  PHASE 1: VLM Ingestion"));
        assert_eq!(text.matches(&"=".repeat(70)).count(), 2);
    }

    #[test]
    fn incident_summary_lists_charges() {
        let incident = Scenario::Dui.incident().unwrap();
        let text = incident_summary(&incident);
        assert!(text.contains("Report ID: LEA-2024-8892"));
        assert!(text.contains("Charges (2):"));
        assert!(text.contains("1. [Misdemeanor] Driving Under Influence of Alcohol"));
        assert!(text.contains("Statute: VC 23103"));
        assert!(text.contains("Alcohol Involved: Yes"));
        assert!(text.contains("..."));
    }

    #[test]
    fn decision_summary_includes_sor() {
        let incident = Scenario::Dui.incident().unwrap();
        let decision = AdjudicationEngine::new().adjudicate_case(&incident);
        let text = decision_summary(&decision, 10.0);
        assert!(text.contains("Recommendation: REVOKE"));
        assert!(text.contains("Risk Score: 4.0/10.0"));
        assert!(text.contains("Legal Citations (2):"));
        assert!(text.contains("STATEMENT OF REASONS"));
    }

    #[test]
    fn legacy_status_marks_pending() {
        let subject = SubjectId::new("SUBJ-12345").unwrap();
        let status = LegacyStatus::new(ClearanceStatus::Revoked, 96);
        let text = legacy_status(&subject, &status);
        assert!(text.contains("Local Status: REVOKED (Immediate)"));
        assert!(text.contains("Mainframe Status: ACTIVE (Pending batch sync)"));
        assert!(text.contains("Sync Lag: 96 hours"));
        assert!(text.contains("Last Sync: Never"));
    }

    #[test]
    fn guideline_detail_shows_conditions() {
        let text = guideline_detail(guideline(GuidelineCode::G));
        assert!(text.starts_with("Guideline G: Alcohol Consumption"));
        assert!(text.contains("Disqualifying Conditions:"));
        assert!(text.contains("Mitigating Conditions:"));
    }

    #[test]
    fn guideline_matches_reports_empty_result() {
        assert_eq!(
            guideline_matches("parking ticket", &search_guidelines("parking ticket")),
            "No guidelines matched \"parking ticket\"."
        );
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("héllo", 2), "hé...");
        assert_eq!(preview("short", 10), "short");
    }
}
