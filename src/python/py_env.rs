//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::env::{CubeEnv, EnvConfig, RewardConfig, Transition};
use crate::nn::{OneHotEncoder, StateEncoder};

use super::py_core::{to_py_err, PyCube};

/// Python wrapper for Transition.
#[pyclass(name = "Transition")]
#[derive(Clone)]
pub struct PyTransition(pub Transition);

#[pymethods]
impl PyTransition {
    /// Grid before the move.
    #[getter]
    fn state<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, &self.0.state.to_flat())
    }

    /// Action index taken.
    #[getter]
    fn action(&self) -> usize {
        self.0.action()
    }

    /// Reward for the step.
    #[getter]
    fn reward(&self) -> f32 {
        self.0.reward
    }

    /// Grid after the move.
    #[getter]
    fn next_state<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, &self.0.next_state.to_flat())
    }

    #[getter]
    fn solved(&self) -> bool {
        self.0.solved
    }

    #[getter]
    fn truncated(&self) -> bool {
        self.0.truncated
    }

    #[getter]
    fn done(&self) -> bool {
        self.0.done()
    }

    fn __repr__(&self) -> String {
        format!(
            "Transition(action={}, move={}, reward={}, solved={})",
            self.0.action(), self.0.mv, self.0.reward, self.0.solved
        )
    }
}

/// Python wrapper for CubeEnv.
#[pyclass(name = "CubeEnv")]
pub struct PyCubeEnv(pub CubeEnv);

#[pymethods]
impl PyCubeEnv {
    /// Create an environment.
    #[new]
    #[pyo3(signature = (scramble_depth=50, max_episode_steps=1000, solved_reward=1000.0, unsolved_reward=0.0, seed=0))]
    fn new(
        scramble_depth: usize,
        max_episode_steps: usize,
        solved_reward: f32,
        unsolved_reward: f32,
        seed: u64,
    ) -> PyResult<Self> {
        if max_episode_steps == 0 {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "max_episode_steps must be at least 1",
            ));
        }
        let config = EnvConfig::new()
            .with_scramble_depth(scramble_depth)
            .with_max_episode_steps(max_episode_steps)
            .with_rewards(RewardConfig {
                solved: solved_reward,
                unsolved: unsolved_reward,
            })
            .with_seed(seed);
        Ok(Self(CubeEnv::new(config)))
    }

    /// Start a new episode; returns the scrambled state.
    fn reset<'py>(&mut self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let grid = self.0.reset();
        PyArray1::from_slice_bound(py, &grid.to_flat())
    }

    /// Apply an action index.
    fn step(&mut self, action: usize) -> PyResult<PyTransition> {
        self.0.step(action).map(PyTransition).map_err(to_py_err)
    }

    /// One-hot observation of the current grid, flat.
    fn observe_one_hot<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        let encoded = OneHotEncoder.encode(self.0.grid());
        PyArray1::from_slice_bound(py, &encoded.tensor)
    }

    /// Change the scramble depth for later resets.
    fn set_scramble_depth(&mut self, depth: usize) {
        self.0.set_scramble_depth(depth);
    }

    /// Copy of the current grid.
    #[getter]
    fn cube(&self) -> PyCube {
        PyCube(*self.0.grid())
    }

    #[getter]
    fn steps(&self) -> usize {
        self.0.steps()
    }

    #[getter]
    fn episodes(&self) -> u64 {
        self.0.episodes()
    }

    fn __repr__(&self) -> String {
        format!(
            "CubeEnv(episode={}, steps={}, solved={})",
            self.0.episodes(),
            self.0.steps(),
            self.0.is_solved()
        )
    }
}
