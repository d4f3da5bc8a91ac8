//! Legacy mainframe port.
//!
//! Contract for handing a SOAP status update to the batch-processed
//! system of record.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::legacy::SoapEnvelope;

/// Receipt returned by the mainframe for an accepted envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message_id: i64,
    pub received_at: Timestamp,
}

/// Port for transmitting status updates to the mainframe.
#[async_trait]
pub trait LegacyMainframe: Send + Sync {
    /// Transmits one envelope and waits for acknowledgement.
    ///
    /// # Errors
    ///
    /// - `LegacyTransmissionFailed` if the mainframe rejects or drops the message
    async fn transmit(&self, envelope: &SoapEnvelope) -> Result<Acknowledgement, DomainError>;
}
