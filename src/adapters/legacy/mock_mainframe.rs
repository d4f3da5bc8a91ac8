//! Mock mainframe endpoint.
//!
//! Accepts envelopes after a configurable delay and keeps a copy of each
//! one. Can be switched into a rejecting mode to exercise error paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::legacy::SoapEnvelope;
use crate::ports::{Acknowledgement, LegacyMainframe};

/// In-process stand-in for the batch-processed system of record.
#[derive(Debug, Default)]
pub struct MockMainframe {
    latency: Duration,
    offline: AtomicBool,
    received: Mutex<Vec<SoapEnvelope>>,
}

impl MockMainframe {
    /// Creates a mainframe that acknowledges immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulated transmission delay.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// When offline every transmission is rejected.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Envelopes accepted so far, oldest first.
    pub fn received(&self) -> Vec<SoapEnvelope> {
        self.lock_received().clone()
    }

    pub fn received_count(&self) -> usize {
        self.lock_received().len()
    }

    fn lock_received(&self) -> MutexGuard<'_, Vec<SoapEnvelope>> {
        self.received.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl LegacyMainframe for MockMainframe {
    async fn transmit(&self, envelope: &SoapEnvelope) -> Result<Acknowledgement, DomainError> {
        debug!(
            subject_id = %envelope.subject_id,
            message_id = envelope.message_id,
            bytes = envelope.xml.len(),
            "transmitting SOAP envelope"
        );

        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        if self.offline.load(Ordering::SeqCst) {
            warn!(subject_id = %envelope.subject_id, "mainframe offline, envelope rejected");
            return Err(DomainError::new(
                ErrorCode::LegacyTransmissionFailed,
                "mainframe is offline",
            )
            .with_detail("subject_id", envelope.subject_id.as_str()));
        }

        self.lock_received().push(envelope.clone());

        Ok(Acknowledgement {
            message_id: envelope.message_id,
            received_at: Timestamp::now(),
        })
    }
}
