//! Observation encoding for neural network agents.
//!
//! - **Tensor**: `EncodedState`, a flat `f32` buffer plus shape
//! - **Encoders**: `RawEncoder`, `ScaledEncoder`, `OneHotEncoder`
//!
//! ## Usage
//!
//! ```
//! use cube_rl::cube::FaceletGrid;
//! use cube_rl::nn::{OneHotEncoder, StateEncoder};
//!
//! let encoded = OneHotEncoder.encode(&FaceletGrid::solved());
//! assert_eq!(encoded.shape, vec![54, 6]);
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::{min_max_scale, OneHotEncoder, RawEncoder, ScaledEncoder, StateEncoder};
pub use tensor::EncodedState;
