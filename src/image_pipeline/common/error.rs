use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to decode input image: {0}")]
    DecodeError(String),

    #[error("Failed to write output image: {0}")]
    WriteError(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
