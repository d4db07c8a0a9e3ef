//! The puzzle engine: facelet grid, topology tables, rotations, scrambles.
//!
//! ## Usage
//!
//! ```
//! use cube_rl::core::{CubeRng, Face, RotationDirection};
//! use cube_rl::cube::{scramble, FaceletGrid};
//!
//! let mut grid = FaceletGrid::solved();
//! grid.rotate(Face::Front, RotationDirection::Clockwise);
//! assert!(!grid.is_solved());
//! grid.rotate(Face::Front, RotationDirection::CounterClockwise);
//! assert!(grid.is_solved());
//!
//! let mut rng = CubeRng::new(42);
//! scramble(&mut grid, 20, &mut rng);
//! assert_eq!(grid.value_counts(), [9; 6]);
//! ```

pub mod grid;
pub mod rotation;
pub mod scramble;
pub mod topology;

pub use grid::{is_solved, FaceBlock, FaceletGrid, FACELETS_PER_FACE, FACELET_COUNT};
pub use rotation::rotate;
pub use scramble::{random_move, scramble, scramble_with_history};
pub use topology::{line_kind, topology, BoundaryLine, FaceTopology, LineKind, TOPOLOGY};
