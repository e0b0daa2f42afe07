use model::DefinitionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the definition file: {0}")]
    ConfigFileRead(#[from] std::io::Error),

    #[error("Failed to decode the migration definition: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Failed to parse the expression fragment as JSON: {0}")]
    ExprParse(#[from] serde_json::Error),

    #[error("Failed to serialize the report to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
