//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus
//! - `TracingEventHandler` - Subscriber that logs every event

mod in_memory;
mod tracing_handler;

pub use in_memory::InMemoryEventBus;
pub use tracing_handler::TracingEventHandler;
