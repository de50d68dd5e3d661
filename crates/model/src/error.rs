use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Record adaptation expected a value with named fields, got {kind}")]
    NotARecord { kind: String },
}
