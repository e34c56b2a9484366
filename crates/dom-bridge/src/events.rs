use std::sync::Arc;

use tokio::sync::broadcast;

use promptstash_core_types::KeyEvent;

/// Page-level events the browser bridge forwards into the core.
#[derive(Clone, Debug)]
pub enum PageEvent {
    /// The document's `selectionchange` fired.
    SelectionChanged,
    KeyDown(KeyEvent),
}

/// Broadcast bus carrying [`PageEvent`]s from the bridge to subscribers.
///
/// Publishing is fire-and-forget: an event with no live subscribers is
/// simply dropped, the same as a DOM event nobody listens for.
pub struct DomEvents {
    sender: broadcast::Sender<PageEvent>,
}

impl DomEvents {
    pub fn new(capacity: usize) -> Arc<Self> {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Arc::new(Self { sender })
    }

    pub fn publish(&self, event: PageEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PageEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_subscriber() {
        let bus = DomEvents::new(8);
        let mut rx = bus.subscribe();
        bus.publish(PageEvent::SelectionChanged);
        match rx.recv().await {
            Ok(PageEvent::SelectionChanged) => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = DomEvents::new(8);
        bus.publish(PageEvent::SelectionChanged);
    }
}
