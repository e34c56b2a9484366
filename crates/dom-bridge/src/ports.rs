use crate::errors::DomError;

/// Opaque handle to one node in the host page's document.
///
/// Handles are only meaningful to the [`DomPort`] that issued them and may
/// go stale at any time; the host framework re-renders whenever it likes.
/// Callers re-resolve surfaces per operation instead of caching handles.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub u64);

/// Synchronous access to the live host DOM.
///
/// Every method runs within one turn of the host page's event loop; there
/// is nothing to await at this boundary. Reads on a stale handle return
/// `None`/`false` rather than erroring, mirroring how detached DOM nodes
/// behave in the browser.
pub trait DomPort: Send + Sync {
    /// First currently-attached element matching `selector`, if any.
    fn query_selector(&self, selector: &str) -> Option<NodeId>;

    fn is_attached(&self, node: NodeId) -> bool;
    fn is_visible(&self, node: NodeId) -> bool;
    fn tag_name(&self, node: NodeId) -> Option<String>;

    /// Value of the `type` attribute for `<input>` elements.
    fn input_type(&self, node: NodeId) -> Option<String>;
    fn is_content_editable(&self, node: NodeId) -> bool;
    fn is_body(&self, node: NodeId) -> bool;

    /// `value` property of input/textarea elements.
    fn value(&self, node: NodeId) -> Option<String>;
    fn set_value(&self, node: NodeId, text: &str) -> Result<(), DomError>;

    /// Normalized text content of a rich-text region.
    fn inner_text(&self, node: NodeId) -> Option<String>;
    fn set_inner_text(&self, node: NodeId, text: &str) -> Result<(), DomError>;

    fn focus(&self, node: NodeId) -> Result<(), DomError>;

    /// Select the node's whole content so a following insert replaces it.
    fn select_all(&self, node: NodeId) -> Result<(), DomError>;

    /// The browser's built-in insert-text command. Writes through the
    /// host framework's native input-observation path, replacing the
    /// current selection.
    fn insert_text_command(&self, node: NodeId, text: &str) -> Result<(), DomError>;

    /// Dispatch a synthetic input event so reactive hosts observe a
    /// direct property write.
    fn dispatch_input_event(&self, node: NodeId) -> Result<(), DomError>;

    /// Start container of the current selection range, if one exists.
    fn selection_anchor(&self) -> Option<NodeId>;

    /// Whether `node` is `ancestor` or lies inside its subtree.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;
}
