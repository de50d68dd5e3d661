use thiserror::Error;
use valxml_model::ModelError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Maximum render depth of {limit} exceeded")]
    DepthExceeded { limit: usize },

    #[error("Value model error: {0}")]
    Model(#[from] ModelError),
}
