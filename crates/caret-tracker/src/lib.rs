//! Tracks which DOM node the user's caret currently occupies.
//!
//! A single subscription on the page's selection-change signal recomputes
//! the state on every event, no debouncing; key handlers need the freshest
//! caret on every keystroke. The tracker never writes to the page.
//!
//! The exposed node is `None` unless the selection anchors inside the
//! host's designated input surface. Selections inside the extension's own
//! overlay, or collapsed onto `document.body` (some host frameworks park
//! the selection there transiently), also resolve to `None`; consumers
//! treat that as "no safe insertion point" and refuse to inject.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::trace;

use dom_bridge::{DomEvents, DomPort, NodeId, PageEvent};
use site_adapters::{select_input, SiteCapability};

pub struct CaretTracker {
    dom: Arc<dyn DomPort>,
    capability: &'static SiteCapability,
    /// Root of the extension's own mounted UI, excluded from tracking.
    overlay_root: RwLock<Option<NodeId>>,
    state: Arc<RwLock<Option<NodeId>>>,
    events: Arc<DomEvents>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl CaretTracker {
    pub fn new(
        dom: Arc<dyn DomPort>,
        events: Arc<DomEvents>,
        capability: &'static SiteCapability,
    ) -> Self {
        Self {
            dom,
            capability,
            overlay_root: RwLock::new(None),
            state: Arc::new(RwLock::new(None)),
            events,
            task: Mutex::new(None),
        }
    }

    /// Mark the extension overlay's container so selections inside it are
    /// ignored even when that subtree is focused.
    pub fn set_overlay_root(&self, node: Option<NodeId>) {
        *self.overlay_root.write() = node;
    }

    /// Subscribe to selection changes. Called on mount; idempotent, a
    /// second call replaces the previous subscription.
    pub fn start(self: &Arc<Self>) {
        let mut slot = self.task.lock();
        if let Some(old) = slot.take() {
            old.abort();
        }
        let tracker = Arc::clone(self);
        let mut rx = self.events.subscribe();
        *slot = Some(tokio::spawn(async move {
            while let Ok(event) = rx.recv().await {
                if matches!(event, PageEvent::SelectionChanged) {
                    tracker.recompute();
                }
            }
        }));
    }

    /// Drop the subscription. Called on unmount so no observer leaks into
    /// a detached page.
    pub fn stop(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }

    /// Recompute from the live selection and publish the new state.
    /// Also callable directly so key handlers see the current caret
    /// without waiting for event delivery.
    pub fn recompute(&self) -> Option<NodeId> {
        let next = self.locate();
        trace!(caret = ?next, "caret state recomputed");
        *self.state.write() = next;
        next
    }

    /// The node under the caret, as of the last selection change.
    pub fn node_at_caret(&self) -> Option<NodeId> {
        *self.state.read()
    }

    fn locate(&self) -> Option<NodeId> {
        let dom = self.dom.as_ref();
        let anchor = dom.selection_anchor()?;
        if dom.is_body(anchor) {
            return None;
        }
        if let Some(overlay) = *self.overlay_root.read() {
            if dom.contains(overlay, anchor) {
                return None;
            }
        }
        // The surface is re-resolved on every recompute; host re-renders
        // replace input nodes at will.
        let input = select_input(dom, self.capability)?;
        dom.contains(input, anchor).then_some(anchor)
    }
}

impl Drop for CaretTracker {
    fn drop(&mut self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_bridge::PageSim;
    use site_adapters::resolve;

    fn tracker_over(sim: &PageSim) -> Arc<CaretTracker> {
        let cap = resolve("chatgpt.com", "/").unwrap();
        Arc::new(CaretTracker::new(
            Arc::new(sim.clone()),
            DomEvents::new(8),
            cap,
        ))
    }

    #[test]
    fn caret_inside_surface_is_reported() {
        let sim = PageSim::new();
        let rich = sim.add_rich_text("#prompt-textarea");
        let text = sim.add_text_child(rich);
        sim.set_selection_anchor(Some(text));

        let tracker = tracker_over(&sim);
        assert_eq!(tracker.recompute(), Some(text));
        assert_eq!(tracker.node_at_caret(), Some(text));
    }

    #[test]
    fn caret_outside_surface_is_null() {
        let sim = PageSim::new();
        let _rich = sim.add_rich_text("#prompt-textarea");
        let sidebar = sim.add_div("#sidebar");
        sim.set_selection_anchor(Some(sidebar));

        let tracker = tracker_over(&sim);
        assert_eq!(tracker.recompute(), None);
    }

    #[test]
    fn body_and_overlay_selections_are_ignored() {
        let sim = PageSim::new();
        let rich = sim.add_rich_text("#prompt-textarea");
        let _ = rich;
        let overlay = sim.add_div("#promptstash-root");
        let overlay_text = sim.add_text_child(overlay);

        let tracker = tracker_over(&sim);

        sim.set_selection_anchor(Some(sim.body()));
        assert_eq!(tracker.recompute(), None);

        tracker.set_overlay_root(Some(overlay));
        sim.set_selection_anchor(Some(overlay_text));
        assert_eq!(tracker.recompute(), None);
    }

    #[test]
    fn no_selection_means_no_caret() {
        let sim = PageSim::new();
        let _rich = sim.add_rich_text("#prompt-textarea");
        let tracker = tracker_over(&sim);
        sim.set_selection_anchor(None);
        assert_eq!(tracker.recompute(), None);
    }

    #[tokio::test]
    async fn selection_events_drive_recomputation() {
        let sim = PageSim::new();
        let rich = sim.add_rich_text("#prompt-textarea");
        let text = sim.add_text_child(rich);

        let events = DomEvents::new(8);
        let cap = resolve("chatgpt.com", "/").unwrap();
        let tracker = Arc::new(CaretTracker::new(
            Arc::new(sim.clone()),
            Arc::clone(&events),
            cap,
        ));
        tracker.start();

        sim.set_selection_anchor(Some(text));
        events.publish(PageEvent::SelectionChanged);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(tracker.node_at_caret(), Some(text));

        tracker.stop();
        sim.set_selection_anchor(None);
        events.publish(PageEvent::SelectionChanged);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        // Stopped tracker no longer observes events.
        assert_eq!(tracker.node_at_caret(), Some(text));
    }
}
