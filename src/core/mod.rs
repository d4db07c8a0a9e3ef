//! Core types: faces, directions, moves, the action codec, errors and RNG.
//!
//! Nothing in this module touches a grid; the [`cube`](crate::cube) module
//! builds the state machine on top of these definitions.

pub mod action;
pub mod error;
pub mod face;
pub mod rng;

pub use action::{decode, encode, Move, ACTION_COUNT};
pub use error::{CubeError, Result};
pub use face::{Axis, Face, RotationDirection};
pub use rng::{CubeRng, CubeRngState};
