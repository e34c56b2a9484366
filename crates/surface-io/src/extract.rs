use dom_bridge::{DomPort, NodeId};

use crate::classify::{classify, SurfaceKind};

/// Line endings and non-breaking spaces vary by host renderer; everything
/// downstream (variable parsing, matching) expects plain LF text.
fn normalize(text: String) -> String {
    text.replace("\r\n", "\n").replace('\u{a0}', " ")
}

/// Read the `value` property of an input or textarea.
pub fn read_value(dom: &dyn DomPort, node: NodeId) -> Option<String> {
    dom.value(node).map(normalize)
}

/// Read the normalized text of a rich-text region.
pub fn read_rich_text(dom: &dyn DomPort, node: NodeId) -> Option<String> {
    dom.inner_text(node).map(normalize)
}

/// Classify the surface and read it the appropriate way.
pub fn read_surface(dom: &dyn DomPort, node: NodeId) -> Option<String> {
    match classify(dom, node)? {
        SurfaceKind::TextInput | SurfaceKind::TextArea => read_value(dom, node),
        SurfaceKind::RichText => read_rich_text(dom, node),
    }
}
