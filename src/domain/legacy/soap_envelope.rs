//! Translation of a decision into the mainframe's SOAP/XML update message.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::domain::adjudication::AdjudicationDecision;
use crate::domain::foundation::{SubjectId, Timestamp};

const SOAP_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const CLEARANCE_NS: &str = "http://nbis.gov/schema/clearance/v2";

/// A rendered status-update envelope ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapEnvelope {
    /// Unix seconds at build time.
    pub message_id: i64,
    pub subject_id: SubjectId,
    pub xml: String,
}

/// Builds the `ClearanceStatusUpdate` envelope for a decision.
pub fn build_status_update(
    subject_id: &SubjectId,
    decision: &AdjudicationDecision,
    at: Timestamp,
) -> SoapEnvelope {
    let message_id = at.as_unix_secs();
    let mut xml = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(xml, r#"<soap:Envelope xmlns:soap="{}">"#, SOAP_NS);
    let _ = writeln!(xml, "  <soap:Header>");
    let _ = writeln!(xml, "    <MessageID>{}</MessageID>", message_id);
    let _ = writeln!(xml, "    <Timestamp>{}</Timestamp>", at.to_rfc3339());
    let _ = writeln!(xml, "  </soap:Header>");
    let _ = writeln!(xml, "  <soap:Body>");
    let _ = writeln!(xml, r#"    <ClearanceStatusUpdate xmlns="{}">"#, CLEARANCE_NS);
    let _ = writeln!(xml, "      <SubjectID>{}</SubjectID>", escape_text(subject_id.as_str()));
    let _ = writeln!(xml, "      <NewStatus>{}</NewStatus>", decision.recommendation);
    let _ = writeln!(xml, "      <RiskScore>{}</RiskScore>", decision.risk_score);
    let _ = writeln!(xml, "      <Justification>");
    let _ = writeln!(xml, "        <StatementOfReasons>");
    let _ = writeln!(xml, "          {}", cdata(&decision.generated_sor));
    let _ = writeln!(xml, "        </StatementOfReasons>");
    let _ = writeln!(xml, "      </Justification>");
    let _ = writeln!(xml, "      <Citations>");
    for citation in &decision.citations {
        let _ = writeln!(xml, "        <Citation>");
        let _ = writeln!(xml, "          <Guideline>{}</Guideline>", escape_text(&citation.guideline));
        let _ = writeln!(xml, "          <Source>{}</Source>", escape_text(&citation.source_paragraph));
        let _ = writeln!(xml, "        </Citation>");
    }
    let _ = writeln!(xml, "      </Citations>");
    let _ = writeln!(xml, "    </ClearanceStatusUpdate>");
    let _ = writeln!(xml, "  </soap:Body>");
    let _ = write!(xml, "</soap:Envelope>");

    SoapEnvelope {
        message_id,
        subject_id: subject_id.clone(),
        xml,
    }
}

/// Escapes the five XML special characters.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Wraps text in a CDATA section, splitting any embedded terminator.
fn cdata(raw: &str) -> String {
    format!("<![CDATA[{}]]>", raw.replace("]]>", "]]]]><![CDATA[>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adjudication::AdjudicationEngine;
    use crate::domain::foundation::ReportId;
    use crate::domain::incident::{Charge, Incident, Severity};

    fn decision() -> AdjudicationDecision {
        let incident = Incident::new(
            ReportId::new("LEA-2024-8892").unwrap(),
            Incident::parse_date("2024-05-12").unwrap(),
            "John Doe",
            "Odor of alcoholic beverage.",
            vec![
                Charge::new("DUI", Severity::Misdemeanor, None).unwrap(),
                Charge::new("Reckless Driving", Severity::Misdemeanor, None).unwrap(),
            ],
            true,
        )
        .unwrap();
        AdjudicationEngine::new().adjudicate_case(&incident)
    }

    #[test]
    fn envelope_carries_status_and_citations() {
        let subject = SubjectId::new("SUBJ-12345").unwrap();
        let at = Timestamp::now();
        let envelope = build_status_update(&subject, &decision(), at);

        assert_eq!(envelope.message_id, at.as_unix_secs());
        assert!(envelope.xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(envelope.xml.contains("<SubjectID>SUBJ-12345</SubjectID>"));
        assert!(envelope.xml.contains("<NewStatus>REVOKE</NewStatus>"));
        assert!(envelope.xml.contains("<RiskScore>4.0</RiskScore>"));
        assert_eq!(envelope.xml.matches("<Citation>").count(), 2);
        assert!(envelope.xml.contains("<Guideline>Guideline G</Guideline>"));
        assert!(envelope.xml.contains("<![CDATA[STATEMENT OF REASONS"));
        assert!(envelope.xml.ends_with("</soap:Envelope>"));
    }

    #[test]
    fn escape_text_handles_markup() {
        assert_eq!(escape_text("A&B <x> \"q\" 'a'"), "A&amp;B &lt;x&gt; &quot;q&quot; &apos;a&apos;");
    }

    #[test]
    fn cdata_splits_terminator() {
        assert_eq!(cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
    }

    #[test]
    fn subject_id_is_escaped() {
        let subject = SubjectId::new("SUBJ<1>").unwrap();
        let envelope = build_status_update(&subject, &decision(), Timestamp::now());
        assert!(envelope.xml.contains("<SubjectID>SUBJ&lt;1&gt;</SubjectID>"));
    }
}
