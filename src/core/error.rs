use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridwireError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Cannot parse table request: {0}")]
    ParseError(String),
    #[error("Incomplete table response: {0}")]
    ValidationError(String),
    #[error("Cannot serialize table response: {0}")]
    SerializationError(String),
    #[error("Dataset error: {0}")]
    DatasetError(String),
}

impl From<std::io::Error> for GridwireError {
    fn from(err: std::io::Error) -> Self {
        GridwireError::IoError(err.to_string())
    }
}
