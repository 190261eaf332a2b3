use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    #[error("Export error: {0}")]
    Export(serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
