//! Event handler that writes every received event to the log.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Logs each event as a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventHandler;

#[async_trait]
impl EventHandler for TracingEventHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            subject_id = %event.aggregate_id,
            occurred_at = %event.occurred_at,
            "domain event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "TracingEventHandler"
    }
}
