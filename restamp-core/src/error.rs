use crate::script::Script;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestampError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Input mismatch: {regions} regions but {texts} texts")]
    InputMismatch { regions: usize, texts: usize },

    #[error("No loadable font for script '{script}' (tried: {})", tried.join(", "))]
    FontResolution { script: Script, tried: Vec<String> },

    #[error("Font load error: {0}")]
    FontLoad(String),

    #[error("Measurement error: {0}")]
    Measurement(String),
}

pub type Result<T> = std::result::Result<T, RestampError>;
