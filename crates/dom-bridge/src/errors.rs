use thiserror::Error;

use promptstash_core_types::CoreError;

#[derive(Debug, Error, Clone)]
pub enum DomError {
    #[error("node is no longer attached to the document")]
    NodeDetached,
    #[error("node does not accept text writes")]
    NotWritable,
}

impl From<DomError> for CoreError {
    fn from(err: DomError) -> Self {
        CoreError::new(err.to_string())
    }
}
