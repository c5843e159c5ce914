/// Error types for the tetris-duel library
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TetrisError>;

/// Errors that can occur while setting up or driving a game
///
/// Board commands themselves never fail: a blocked move or rotation simply
/// leaves the board unchanged. These errors cover setup and the outer surfaces.
#[derive(Debug, Error)]
pub enum TetrisError {
    /// Configuration rejected by [`GameConfig::validate`](crate::GameConfig::validate)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Gravity clock created outside of a tokio runtime
    #[error("Runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    /// No drawing surface to render on
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
