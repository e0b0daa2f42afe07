use thiserror::Error;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Failed to decode the migration definition document: {0}")]
    Decode(#[from] serde_json::Error),
}
