use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown speaker role: {0}")]
    UnknownRole(String),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown segment source: {0}")]
    UnknownSource(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
