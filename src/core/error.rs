//! Error taxonomy.
//!
//! The domain is closed (six faces, two directions, a fixed 3×3 grid), so
//! every error here is a caller contract violation rather than recoverable
//! puzzle state. Rotation and scrambling never fail.

use thiserror::Error;

/// Errors raised by the cube engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A grid coordinate outside `0..3`.
    #[error("Facelet coordinate out of range: row {row}, col {col} (expected 0..3)")]
    OutOfRange { row: usize, col: usize },

    /// An action index outside `0..12`.
    #[error("Invalid action {0}, expected a value between 0 and 11")]
    InvalidAction(usize),

    /// A facelet array that cannot be a cube state.
    #[error("Invalid facelets: {0}")]
    InvalidFacelets(String),

    /// A move in standard notation that failed to parse.
    #[error("Invalid move notation: {0:?}")]
    InvalidMove(String),

    /// An environment configuration that cannot run an episode.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Binary encoding or decoding of a record failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CubeError>;
