use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventSinkError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Hand-off point for events leaving the service.
///
/// Delivery is at-least-once from the engine's point of view; consumers
/// dedupe on the event identity.
#[async_trait]
pub trait EventSink<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn publish(&self, event: Event) -> Result<(), EventSinkError>;
}

pub mod in_memory;
