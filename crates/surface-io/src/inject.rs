use tracing::debug;

use dom_bridge::{DomPort, NodeId};
use promptstash_core_types::InsertionMode;

use crate::classify::{classify, SurfaceKind};
use crate::errors::InjectError;

/// One injection attempt. `caret` is the node the caret tracker currently
/// reports; it must lie inside `surface` or the attempt is refused.
#[derive(Clone, Copy, Debug)]
pub struct InjectRequest<'a> {
    pub surface: NodeId,
    pub caret: Option<NodeId>,
    pub text: &'a str,
    pub mode: InsertionMode,
}

/// Write `text` into the surface using the adapter-selected strategy.
///
/// Modern: set the content property, then dispatch a synthetic input event
/// so the host's reactive framework observes the change. Legacy: focus,
/// select all, then the insert-text command, for hosts that silently
/// revert direct property writes. On any precondition failure nothing is
/// mutated.
pub fn inject(dom: &dyn DomPort, req: InjectRequest<'_>) -> Result<(), InjectError> {
    if !dom.is_attached(req.surface) {
        return Err(InjectError::SurfaceDetached);
    }
    let kind = classify(dom, req.surface).ok_or(InjectError::NotEditable)?;

    let caret = req.caret.ok_or(InjectError::CaretOutsideSurface)?;
    if !dom.contains(req.surface, caret) {
        debug!(surface = ?req.surface, ?caret, "caret left the surface, refusing to inject");
        return Err(InjectError::CaretOutsideSurface);
    }

    match req.mode {
        InsertionMode::Modern => {
            match kind {
                SurfaceKind::TextInput | SurfaceKind::TextArea => {
                    dom.set_value(req.surface, req.text)?
                }
                SurfaceKind::RichText => dom.set_inner_text(req.surface, req.text)?,
            }
            dom.dispatch_input_event(req.surface)?;
        }
        InsertionMode::Legacy => {
            dom.focus(req.surface)?;
            dom.select_all(req.surface)?;
            dom.insert_text_command(req.surface, req.text)?;
        }
    }
    debug!(surface = ?req.surface, mode = ?req.mode, len = req.text.len(), "injected text");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_bridge::PageSim;

    #[test]
    fn modern_injection_sets_value_and_fires_input_event() {
        let sim = PageSim::new();
        let area = sim.add_textarea("#prompt");
        sim.set_selection_anchor(Some(area));

        inject(
            &sim,
            InjectRequest {
                surface: area,
                caret: Some(area),
                text: "hello",
                mode: InsertionMode::Modern,
            },
        )
        .unwrap();

        assert_eq!(sim.value(area).unwrap(), "hello");
        assert_eq!(sim.input_events(), vec![area]);
    }

    #[test]
    fn legacy_injection_survives_reverting_host() {
        let sim = PageSim::new();
        let rich = sim.add_rich_text("[contenteditable]");
        sim.set_reverts_direct_writes(rich, true);
        let text = sim.add_text_child(rich);

        inject(
            &sim,
            InjectRequest {
                surface: rich,
                caret: Some(text),
                text: "hello",
                mode: InsertionMode::Legacy,
            },
        )
        .unwrap();

        assert_eq!(sim.inner_text(rich).unwrap(), "hello");
        assert_eq!(sim.focused(), Some(rich));
    }

    #[test]
    fn refuses_when_caret_is_missing_or_elsewhere() {
        let sim = PageSim::new();
        let area = sim.add_textarea("#prompt");
        let other = sim.add_div("#sidebar");

        let missing = inject(
            &sim,
            InjectRequest {
                surface: area,
                caret: None,
                text: "x",
                mode: InsertionMode::Modern,
            },
        );
        assert!(matches!(missing, Err(InjectError::CaretOutsideSurface)));

        let outside = inject(
            &sim,
            InjectRequest {
                surface: area,
                caret: Some(other),
                text: "x",
                mode: InsertionMode::Modern,
            },
        );
        assert!(matches!(outside, Err(InjectError::CaretOutsideSurface)));
        assert_eq!(sim.value(area).unwrap(), "");
    }

    #[test]
    fn refuses_detached_surface() {
        let sim = PageSim::new();
        let area = sim.add_textarea("#prompt");
        sim.detach(area);

        let result = inject(
            &sim,
            InjectRequest {
                surface: area,
                caret: Some(area),
                text: "x",
                mode: InsertionMode::Modern,
            },
        );
        assert!(matches!(result, Err(InjectError::SurfaceDetached)));
    }
}
