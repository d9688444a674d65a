use thiserror::Error;

/// Reasons a submission is rejected before any brick is built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("memory required")]
    MemoryRequired,

    #[error("memory too long")]
    MemoryTooLong,

    #[error("image too large")]
    ImageTooLarge,

    #[error("unknown color")]
    UnknownColor,
}

impl ValidationError {
    /// Longer, user-facing explanation shown under the rejection title.
    pub fn hint(&self) -> &'static str {
        match self {
            ValidationError::MemoryRequired => "Please share your football memory.",
            ValidationError::MemoryTooLong => "Please keep your memory under 200 characters.",
            ValidationError::ImageTooLarge => "Please choose an image smaller than 5MB.",
            ValidationError::UnknownColor => "Please pick one of the six brick colors.",
        }
    }
}

#[derive(Error, Debug)]
pub enum FanbrickError {
    #[error("Invalid brick: {0}")]
    Validation(#[from] ValidationError),

    #[error("Brick not found: {0}")]
    BrickNotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FanbrickError>;
