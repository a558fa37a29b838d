use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid icon size {0}: side length must be at least one pixel")]
    InvalidSize(u32),

    #[error("rendering backend not available; rebuild with `--features render` to draw launcher icons")]
    RenderUnavailable,

    #[error("malformed PNG data: {0}")]
    MalformedPng(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
