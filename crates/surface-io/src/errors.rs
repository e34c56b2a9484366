use thiserror::Error;

use dom_bridge::DomError;
use promptstash_core_types::CoreError;

#[derive(Debug, Error, Clone)]
pub enum InjectError {
    /// The tracked caret is missing or lies outside the resolved surface.
    /// Injection never guesses an alternate insertion point.
    #[error("caret is outside the target surface")]
    CaretOutsideSurface,
    #[error("target surface is no longer attached")]
    SurfaceDetached,
    #[error("target node is not an editable surface")]
    NotEditable,
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl From<InjectError> for CoreError {
    fn from(err: InjectError) -> Self {
        CoreError::new(err.to_string())
    }
}
