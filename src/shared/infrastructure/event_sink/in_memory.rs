use crate::shared::infrastructure::event_sink::{EventSink, EventSinkError};
use tokio::sync::Mutex;

pub struct InMemoryEventSink<Event: Clone + Send + Sync + 'static> {
    events: Mutex<Vec<Event>>,
    is_offline: bool,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventSink<Event> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            is_offline: false,
        }
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventSink<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn published(&self) -> Vec<Event> {
        self.events.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl<Event> EventSink<Event> for InMemoryEventSink<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn publish(&self, event: Event) -> Result<(), EventSinkError> {
        if self.is_offline {
            return Err(EventSinkError::Backend("Event sink offline".into()));
        }
        self.events.lock().await.push(event);
        Ok(())
    }
}
