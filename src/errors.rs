use thiserror::Error;

use promptstash_core_types::{CoreError, PromptId};
use surface_io::InjectError;

#[derive(Debug, Error)]
pub enum PromptStashError {
    #[error("prompt not found: {0}")]
    PromptNotFound(PromptId),
    #[error(transparent)]
    Inject(#[from] InjectError),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for PromptStashError {
    fn from(err: CoreError) -> Self {
        PromptStashError::Storage(err.to_string())
    }
}
