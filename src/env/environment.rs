//! Step-based environment around a single cube.
//!
//! One `CubeEnv` owns one grid and one RNG stream; run parallel episodes by
//! giving each worker its own env (see [`CubeEnv::fork`]).

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{CubeError, CubeRng, Move, Result};
use crate::cube::{scramble, FaceletGrid};
use crate::nn::{EncodedState, StateEncoder};

use super::config::EnvConfig;

/// Everything the training loop needs from one step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Grid before the move.
    pub state: FaceletGrid,
    /// The move that was applied.
    pub mv: Move,
    /// Reward for this step.
    pub reward: f32,
    /// Grid after the move.
    pub next_state: FaceletGrid,
    /// Whether `next_state` is solved.
    pub solved: bool,
    /// Whether the episode hit its step limit on this step.
    pub truncated: bool,
}

impl Transition {
    /// Action index of the applied move.
    #[must_use]
    pub fn action(&self) -> usize {
        self.mv.to_action()
    }

    /// True if the episode ends with this step.
    #[must_use]
    pub fn done(&self) -> bool {
        self.solved || self.truncated
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| CubeError::Serialization(e.to_string()))
    }

    /// Decode a transition written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| CubeError::Serialization(e.to_string()))
    }
}

/// A scrambled cube that agents solve one action at a time.
#[derive(Clone, Debug)]
pub struct CubeEnv {
    config: EnvConfig,
    grid: FaceletGrid,
    rng: CubeRng,
    steps: usize,
    episodes: u64,
}

impl CubeEnv {
    /// Create an environment and scramble the first episode.
    pub fn new(config: EnvConfig) -> Self {
        let rng = CubeRng::new(config.seed).for_context("scramble");
        Self::with_rng(config, rng)
    }

    fn with_rng(config: EnvConfig, rng: CubeRng) -> Self {
        let mut env = Self {
            config,
            grid: FaceletGrid::solved(),
            rng,
            steps: 0,
            episodes: 0,
        };
        env.reset();
        env
    }

    /// A new environment with the same config and an independent RNG stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let rng = self.rng.fork();
        Self::with_rng(self.config.clone(), rng)
    }

    /// Start a new episode from a fresh scramble and return its grid.
    pub fn reset(&mut self) -> FaceletGrid {
        self.grid.initialize_solved();
        scramble(&mut self.grid, self.config.scramble_depth, &mut self.rng);
        self.steps = 0;
        self.episodes += 1;
        debug!(
            "Episode {} reset with scramble depth {}",
            self.episodes, self.config.scramble_depth
        );
        self.grid
    }

    /// Apply `action` and report what happened.
    ///
    /// Fails with [`CubeError::InvalidAction`] outside `0..12`, leaving the
    /// grid and step counter untouched. The caller decides when to
    /// [`reset`](Self::reset).
    pub fn step(&mut self, action: usize) -> Result<Transition> {
        let mv = Move::from_action(action)?;

        let state = self.grid.snapshot();
        self.grid.apply_move(mv);
        self.steps += 1;

        let solved = self.grid.is_solved();
        let truncated = !solved && self.steps >= self.config.max_episode_steps;
        let reward = self.config.rewards.reward(solved);

        trace!("Step {}: {} (action {}), reward {}", self.steps, mv, action, reward);
        if solved {
            debug!("Episode {} solved after {} steps", self.episodes, self.steps);
        } else if truncated {
            debug!("Episode {} truncated after {} steps", self.episodes, self.steps);
        }

        Ok(Transition {
            state,
            mv,
            reward,
            next_state: self.grid,
            solved,
            truncated,
        })
    }

    /// Encode the current grid.
    pub fn observe<E: StateEncoder + ?Sized>(&self, encoder: &E) -> EncodedState {
        encoder.encode(&self.grid)
    }

    /// Change the scramble depth used by later resets.
    pub fn set_scramble_depth(&mut self, depth: usize) {
        self.config.scramble_depth = depth;
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &FaceletGrid {
        &self.grid
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Steps taken in the current episode.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Episodes started so far, including the current one.
    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    /// True if the current grid is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{encode, Face, RotationDirection};
    use crate::nn::RawEncoder;

    fn solved_env() -> CubeEnv {
        CubeEnv::new(EnvConfig::new().with_scramble_depth(0))
    }

    #[test]
    fn test_new_env_is_scrambled_deterministically() {
        let a = CubeEnv::new(EnvConfig::new().with_seed(11));
        let b = CubeEnv::new(EnvConfig::new().with_seed(11));
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.episodes(), 1);
        assert_eq!(a.steps(), 0);
    }

    #[test]
    fn test_step_records_before_and_after() {
        let mut env = solved_env();
        let action = encode(Face::Front, RotationDirection::Clockwise);
        let t = env.step(action).unwrap();

        assert_eq!(t.state, FaceletGrid::solved());
        assert_eq!(&t.next_state, env.grid());
        assert_eq!(t.mv, Move::clockwise(Face::Front));
        assert_eq!(t.action(), action);
        assert!(!t.solved);
        assert_eq!(t.reward, 0.0);
        assert!(!t.done());
    }

    #[test]
    fn test_solving_step_pays_reward() {
        let mut env = solved_env();
        env.step(encode(Face::Top, RotationDirection::Clockwise)).unwrap();
        let t = env
            .step(encode(Face::Top, RotationDirection::CounterClockwise))
            .unwrap();

        assert!(t.solved);
        assert!(t.done());
        assert_eq!(t.reward, 1000.0);
        assert_eq!(env.steps(), 2);
    }

    #[test]
    fn test_invalid_action_leaves_env_untouched() {
        let mut env = CubeEnv::new(EnvConfig::new().with_scramble_depth(5));
        let before = *env.grid();
        assert_eq!(env.step(12).unwrap_err(), CubeError::InvalidAction(12));
        assert_eq!(env.grid(), &before);
        assert_eq!(env.steps(), 0);
    }

    #[test]
    fn test_truncation() {
        let mut env = CubeEnv::new(
            EnvConfig::new()
                .with_scramble_depth(0)
                .with_max_episode_steps(2),
        );
        let first = env.step(0).unwrap();
        let second = env.step(0).unwrap();
        assert!(!first.truncated);
        assert!(second.truncated);
        assert!(second.done());

        env.reset();
        assert_eq!(env.steps(), 0);
        assert_eq!(env.episodes(), 2);
    }

    #[test]
    fn test_set_scramble_depth() {
        let mut env = CubeEnv::new(EnvConfig::new().with_scramble_depth(0));
        assert!(env.is_solved());
        env.set_scramble_depth(1);
        env.reset();
        assert!(!env.is_solved());
    }

    #[test]
    fn test_fork_is_independent() {
        let mut env = CubeEnv::new(EnvConfig::new().with_seed(3));
        let mut forked = env.fork();
        assert_eq!(forked.config(), env.config());

        forked.step(0).unwrap();
        assert_eq!(env.steps(), 0);
    }

    #[test]
    fn test_observe() {
        let env = solved_env();
        let encoded = env.observe(&RawEncoder);
        assert_eq!(encoded.shape, vec![54]);
    }

    #[test]
    fn test_transition_bytes() {
        let mut env = CubeEnv::new(EnvConfig::new().with_scramble_depth(4));
        let t = env.step(7).unwrap();
        let bytes = t.to_bytes().unwrap();
        assert_eq!(Transition::from_bytes(&bytes).unwrap(), t);
        assert!(matches!(
            Transition::from_bytes(&bytes[..3]),
            Err(CubeError::Serialization(_))
        ));
    }

    #[test]
    fn test_transition_bytes_keep_action_and_move_in_step() {
        let mut env = solved_env();
        let mut t = env.step(0).unwrap();
        t.mv = Move::counter_clockwise(Face::Back);

        let decoded = Transition::from_bytes(&t.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.action(), 11);
        assert_eq!(Move::from_action(decoded.action()), Ok(decoded.mv));
    }

    #[test]
    fn test_transition_bytes_reject_corrupt_grid() {
        let mut env = solved_env();
        let t = env.step(0).unwrap();
        let mut bytes = t.to_bytes().unwrap();
        // bincode: u64 length prefix, then the 54 `state` values.
        bytes[8] = 9;
        assert!(matches!(
            Transition::from_bytes(&bytes),
            Err(CubeError::Serialization(_))
        ));
    }
}
