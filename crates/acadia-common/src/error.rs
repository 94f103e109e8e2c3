use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcadiaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<toml::de::Error> for AcadiaError {
    fn from(err: toml::de::Error) -> Self {
        AcadiaError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AcadiaError>;
