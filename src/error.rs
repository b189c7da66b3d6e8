use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoinflipError {
    #[error("Invalid viewport '{0}': expected WIDTHxHEIGHT in pixels, e.g. 1024x768")]
    InvalidViewport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
