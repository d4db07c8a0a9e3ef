//! Python bindings for the cube engine.
//!
//! # Quick Start
//!
//! ```python
//! import cube_rl
//!
//! env = cube_rl.CubeEnv(scramble_depth=5, seed=42)
//! state = env.reset()
//! transition = env.step(3)
//! if transition.done:
//!     env.reset()
//!
//! face, direction = cube_rl.decode_action(11)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;

pub use py_core::*;
pub use py_env::*;

/// cube_rl: a 3x3x3 puzzle engine for reinforcement learning.
#[pymodule]
fn cube_rl(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCube>()?;
    m.add_class::<PyCubeEnv>()?;
    m.add_class::<PyTransition>()?;

    m.add_function(wrap_pyfunction!(encode_action, m)?)?;
    m.add_function(wrap_pyfunction!(decode_action, m)?)?;

    m.add("ACTION_COUNT", crate::core::ACTION_COUNT)?;

    Ok(())
}
