use dom_bridge::{DomPort, NodeId};

/// The three editable-surface kinds the core knows how to read and write.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SurfaceKind {
    TextInput,
    TextArea,
    RichText,
}

/// `<input type="...">` values treated as text-bearing. Anything else
/// (checkbox, file, color, ...) is not an editable surface for us.
const INPUT_TYPE_SAFELIST: &[&str] = &[
    "text",
    "url",
    "number",
    "search",
    "date",
    "datetime-local",
    "time",
    "month",
    "week",
];

/// Classify `node`, or `None` when it is not an editable surface.
pub fn classify(dom: &dyn DomPort, node: NodeId) -> Option<SurfaceKind> {
    let tag = dom.tag_name(node)?;
    match tag.as_str() {
        "input" => {
            // A missing type attribute means type="text".
            let input_type = dom.input_type(node).unwrap_or_else(|| "text".to_string());
            INPUT_TYPE_SAFELIST
                .contains(&input_type.as_str())
                .then_some(SurfaceKind::TextInput)
        }
        "textarea" => Some(SurfaceKind::TextArea),
        _ => dom.is_content_editable(node).then_some(SurfaceKind::RichText),
    }
}
