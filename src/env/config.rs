//! Environment configuration.

use serde::{Deserialize, Serialize};

use crate::core::CubeError;

/// Reward paid after each step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Reward when the step leaves the cube solved.
    pub solved: f32,
    /// Reward for every other step.
    pub unsolved: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            solved: 1000.0,
            unsolved: 0.0,
        }
    }
}

impl RewardConfig {
    /// Reward for a step ending in the given solved state.
    #[must_use]
    pub fn reward(&self, solved: bool) -> f32 {
        if solved {
            self.solved
        } else {
            self.unsolved
        }
    }
}

/// Configuration for a [`CubeEnv`](super::CubeEnv).
///
/// Deserialization applies the same checks as the builders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EnvConfigData")]
pub struct EnvConfig {
    /// Random moves applied on every reset.
    pub scramble_depth: usize,

    /// Steps after which an episode is truncated.
    pub max_episode_steps: usize,

    /// Reward table.
    pub rewards: RewardConfig,

    /// Seed for the scramble stream.
    pub seed: u64,
}

#[derive(Deserialize)]
struct EnvConfigData {
    scramble_depth: usize,
    max_episode_steps: usize,
    rewards: RewardConfig,
    seed: u64,
}

impl TryFrom<EnvConfigData> for EnvConfig {
    type Error = CubeError;

    fn try_from(data: EnvConfigData) -> Result<Self, Self::Error> {
        if data.max_episode_steps == 0 {
            return Err(CubeError::InvalidConfig(
                "max_episode_steps must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            scramble_depth: data.scramble_depth,
            max_episode_steps: data.max_episode_steps,
            rewards: data.rewards,
            seed: data.seed,
        })
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            scramble_depth: 50,
            max_episode_steps: 1000,
            rewards: RewardConfig::default(),
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scramble depth.
    #[must_use]
    pub fn with_scramble_depth(mut self, depth: usize) -> Self {
        self.scramble_depth = depth;
        self
    }

    /// Set the episode step limit.
    ///
    /// # Panics
    /// Panics if `steps` is zero.
    #[must_use]
    pub fn with_max_episode_steps(mut self, steps: usize) -> Self {
        assert!(steps > 0, "Episode step limit must be at least 1");
        self.max_episode_steps = steps;
        self
    }

    /// Set the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
