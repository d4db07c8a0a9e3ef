//! # cube-rl
//!
//! A 3×3×3 twisty-puzzle engine built to sit inside reinforcement-learning
//! training loops.
//!
//! ## Design Principles
//!
//! 1. **Closed Domain**: Faces, directions and moves are exhaustive enums;
//!    topology is a set of `static` tables indexed by enum ordinal.
//!
//! 2. **Consistent Snapshots**: A rotation reads every sticker it moves from
//!    the state before the turn, never from a half-updated grid.
//!
//! 3. **Explicit Randomness**: Scrambles draw from a caller-owned, seeded
//!    `CubeRng`. Same seed, same scramble.
//!
//! ## Architecture
//!
//! - **Value-Type State**: `FaceletGrid` is 54 bytes and `Copy`; a snapshot
//!   is an assignment, and every episode owns its own grid.
//!
//! - **Action Codec**: The 12 quarter turns map onto `0..12` for agents.
//!
//! ## Modules
//!
//! - `core`: Faces, directions, moves, action codec, errors, RNG
//! - `cube`: Facelet grid, topology tables, rotation engine, scrambler
//! - `nn`: Observation encoders for neural network input
//! - `env`: Step-based environment adapter for training loops

pub mod core;
pub mod cube;
pub mod env;
pub mod nn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    decode, encode, Axis, CubeError, CubeRng, CubeRngState, Face, Move, Result,
    RotationDirection, ACTION_COUNT,
};

pub use crate::cube::{
    is_solved, random_move, rotate, scramble, scramble_with_history, FaceletGrid, FACELET_COUNT,
};

pub use crate::env::{CubeEnv, EnvConfig, RewardConfig, Transition};

pub use crate::nn::{EncodedState, OneHotEncoder, RawEncoder, ScaledEncoder, StateEncoder};
