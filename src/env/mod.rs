//! Environment adapter for training loops.
//!
//! Packages the engine contract as a step function: decode an action,
//! snapshot, rotate, check for a solve and report a [`Transition`].
//!
//! ```
//! use cube_rl::env::{CubeEnv, EnvConfig};
//!
//! let mut env = CubeEnv::new(EnvConfig::new().with_scramble_depth(10).with_seed(42));
//! let transition = env.step(3).unwrap();
//! assert_eq!(transition.action(), 3);
//! if transition.done() {
//!     env.reset();
//! }
//! ```

pub mod config;
pub mod environment;

pub use config::{EnvConfig, RewardConfig};
pub use environment::{CubeEnv, Transition};
