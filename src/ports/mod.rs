//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentExtractor` - Case file to structured incident record
//! - `LegacyMainframe` - SOAP status updates to the system of record
//! - `EventPublisher` / `EventSubscriber` - Domain event publication

mod document_extractor;
mod event_publisher;
mod event_subscriber;
mod legacy_mainframe;

pub use document_extractor::{DocumentExtractor, ExtractionError};
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use legacy_mainframe::{Acknowledgement, LegacyMainframe};
