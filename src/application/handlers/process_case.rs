//! ProcessCaseHandler - Runs one case file through the whole pipeline.
//!
//! extraction -> guideline lookup and rules -> local cache and sync queue

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::application::AntiCorruptionLayer;
use crate::domain::adjudication::{AdjudicationDecision, AdjudicationEngine, DecisionLogEntry};
use crate::domain::foundation::{ErrorCode, SubjectId};
use crate::domain::incident::Incident;
use crate::domain::legacy::{AclError, LegacyStatus};
use crate::ports::{DocumentExtractor, ExtractionError};

/// Command to adjudicate an uploaded case file.
#[derive(Debug, Clone)]
pub struct ProcessCaseCommand {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ProcessCaseCommand {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Everything the pipeline produced for one case.
#[derive(Debug, Clone)]
pub struct ProcessCaseResult {
    pub subject_id: SubjectId,
    pub incident: Incident,
    pub decision: AdjudicationDecision,
    pub status: LegacyStatus,
}

/// Errors from any pipeline stage.
#[derive(Debug, Clone, Error)]
pub enum ProcessCaseError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Legacy(#[from] AclError),
}

impl ProcessCaseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProcessCaseError::Extraction(_) => ErrorCode::ExtractionFailed,
            ProcessCaseError::Legacy(e) => e.code(),
        }
    }
}

/// Handler for processing case files.
pub struct ProcessCaseHandler {
    extractor: Arc<dyn DocumentExtractor>,
    engine: Mutex<AdjudicationEngine>,
    acl: Arc<AntiCorruptionLayer>,
}

impl ProcessCaseHandler {
    pub fn new(
        extractor: Arc<dyn DocumentExtractor>,
        engine: AdjudicationEngine,
        acl: Arc<AntiCorruptionLayer>,
    ) -> Self {
        Self {
            extractor,
            engine: Mutex::new(engine),
            acl,
        }
    }

    pub async fn handle(&self, cmd: ProcessCaseCommand) -> Result<ProcessCaseResult, ProcessCaseError> {
        // 1. Identify the subject
        let subject_id = SubjectId::from_file_name(&cmd.file_name);

        // 2. Extract the structured record
        let incident = self.extractor.extract(&cmd.file_name, &cmd.bytes).await?;

        // 3. Adjudicate
        let decision = self.engine.lock().await.adjudicate_case(&incident);

        // 4. Cache locally and queue for the mainframe
        let status = self.acl.publish_decision(&subject_id, &decision).await?;

        info!(
            subject_id = %subject_id,
            report_id = %incident.report_id(),
            recommendation = %decision.recommendation,
            risk_score = %decision.risk_score,
            "case processed"
        );

        Ok(ProcessCaseResult {
            subject_id,
            incident,
            decision,
            status,
        })
    }

    /// Audit trail of every decision made through this handler.
    pub async fn decision_log(&self) -> Vec<DecisionLogEntry> {
        self.engine.lock().await.decision_log().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, MockMainframe, SimulatedVlmExtractor};
    use crate::application::AclSettings;
    use crate::domain::adjudication::Recommendation;
    use crate::domain::legacy::ClearanceStatus;
    use crate::domain::foundation::ValidationError;
    use async_trait::async_trait;

    struct RejectingExtractor;

    #[async_trait]
    impl DocumentExtractor for RejectingExtractor {
        async fn extract(&self, _: &str, _: &[u8]) -> Result<Incident, ExtractionError> {
            Err(ValidationError::empty_field("subject_name").into())
        }
    }

    fn handler_with(extractor: Arc<dyn DocumentExtractor>) -> (ProcessCaseHandler, Arc<AntiCorruptionLayer>) {
        let acl = Arc::new(AntiCorruptionLayer::new(
            Arc::new(MockMainframe::new()),
            Arc::new(InMemoryEventBus::new()),
            AclSettings::default(),
        ));
        let handler = ProcessCaseHandler::new(extractor, AdjudicationEngine::new(), acl.clone());
        (handler, acl)
    }

    #[tokio::test]
    async fn dui_case_is_revoked_locally_only() {
        let (handler, acl) = handler_with(Arc::new(SimulatedVlmExtractor::new()));
        let result = handler
            .handle(ProcessCaseCommand::new("arrest_report_scanned.pdf", b"fake".to_vec()))
            .await
            .unwrap();

        assert_eq!(result.subject_id, SubjectId::from_file_name("arrest_report_scanned.pdf"));
        assert_eq!(result.decision.recommendation, Recommendation::Revoke);
        assert_eq!(result.status.local_status(), ClearanceStatus::Revoked);
        assert_eq!(result.status.mainframe_status(), ClearanceStatus::Active);
        assert_eq!(acl.sync_queue_size().await, 1);
    }

    #[tokio::test]
    async fn decisions_are_logged() {
        let (handler, _) = handler_with(Arc::new(SimulatedVlmExtractor::new()));
        handler.handle(ProcessCaseCommand::new("clean_record.pdf", Vec::new())).await.unwrap();
        handler.handle(ProcessCaseCommand::new("drug_report.pdf", Vec::new())).await.unwrap();

        let log = handler.decision_log().await;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].recommendation, Recommendation::Grant);
        assert_eq!(log[1].recommendation, Recommendation::ManualReview);
    }

    #[tokio::test]
    async fn extraction_failure_queues_nothing() {
        let (handler, acl) = handler_with(Arc::new(RejectingExtractor));
        let err = handler
            .handle(ProcessCaseCommand::new("dui.pdf", Vec::new()))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ExtractionFailed);
        assert_eq!(acl.sync_queue_size().await, 0);
        assert!(handler.decision_log().await.is_empty());
    }
}
