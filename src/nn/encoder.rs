//! Observation encoders.
//!
//! Turn a [`FaceletGrid`] into the numeric observation an agent consumes.
//! The sticker order is always [`FaceletGrid::to_flat`]: face-major, then
//! row-major within a face.

use crate::core::{Face, ACTION_COUNT};
use crate::cube::{FaceletGrid, FACELET_COUNT};
use crate::nn::tensor::EncodedState;

/// Encodes a grid into a tensor for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the grid.
    fn encode(&self, grid: &FaceletGrid) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output vector.
    fn action_space_size(&self) -> usize {
        ACTION_COUNT
    }
}

/// Raw sticker values (1..=6) as floats, shape `[54]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawEncoder;

impl StateEncoder for RawEncoder {
    fn encode(&self, grid: &FaceletGrid) -> EncodedState {
        let tensor = grid.to_flat().iter().map(|&v| f32::from(v)).collect();
        EncodedState::new(tensor, vec![FACELET_COUNT])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![FACELET_COUNT]
    }
}

/// Sticker values min-max scaled into `[0, 1]`, shape `[54]`.
#[derive(Clone, Copy, Debug)]
pub struct ScaledEncoder {
    min_val: f32,
    max_val: f32,
}

impl Default for ScaledEncoder {
    fn default() -> Self {
        Self {
            min_val: 1.0,
            max_val: Face::COUNT as f32,
        }
    }
}

impl ScaledEncoder {
    /// Create a scaler over the sticker value range 1..=6.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the scaling range.
    ///
    /// # Panics
    /// Panics if `max_val <= min_val`.
    pub fn with_range(mut self, min_val: f32, max_val: f32) -> Self {
        assert!(max_val > min_val, "Scaling range must be non-empty");
        self.min_val = min_val;
        self.max_val = max_val;
        self
    }
}

/// Scale `values` from `[min_val, max_val]` into `[0, 1]`.
pub fn min_max_scale(values: &[u8], min_val: f32, max_val: f32) -> Vec<f32> {
    let span = max_val - min_val;
    values
        .iter()
        .map(|&v| (f32::from(v) - min_val) / span)
        .collect()
}

impl StateEncoder for ScaledEncoder {
    fn encode(&self, grid: &FaceletGrid) -> EncodedState {
        let tensor = min_max_scale(&grid.to_flat(), self.min_val, self.max_val);
        EncodedState::new(tensor, vec![FACELET_COUNT])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![FACELET_COUNT]
    }
}

/// One-hot sticker colors, shape `[54, 6]`.
///
/// Row `i` is sticker `i`; column `v - 1` is set for sticker value `v`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneHotEncoder;

impl StateEncoder for OneHotEncoder {
    fn encode(&self, grid: &FaceletGrid) -> EncodedState {
        let mut state = EncodedState::zeros(self.output_shape());
        for (i, &value) in grid.to_flat().iter().enumerate() {
            if let Some(color) = (value as usize).checked_sub(1).filter(|&c| c < Face::COUNT) {
                state.tensor[i * Face::COUNT + color] = 1.0;
            }
        }
        state
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![FACELET_COUNT, Face::COUNT]
    }
}
