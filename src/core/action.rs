//! Moves and the action codec.
//!
//! A [`Move`] is a `(Face, RotationDirection)` pair. Agents choose moves by
//! integer index in `0..ACTION_COUNT`:
//!
//! - idx 0..=5  : clockwise turn of face `idx`
//! - idx 6..=11 : counter-clockwise turn of face `idx - 6`
//!
//! ```
//! use cube_rl::core::{decode, encode, Face, RotationDirection};
//!
//! let action = encode(Face::Back, RotationDirection::CounterClockwise);
//! assert_eq!(action, 11);
//! assert_eq!(decode(action).unwrap(), (Face::Back, RotationDirection::CounterClockwise));
//! assert!(decode(12).is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CubeError, Result};
use super::face::{Face, RotationDirection};

/// Size of the action space: 6 faces × 2 directions.
pub const ACTION_COUNT: usize = Face::COUNT * RotationDirection::COUNT;

/// Encode a rotation as an action index in `0..ACTION_COUNT`.
#[must_use]
pub const fn encode(face: Face, direction: RotationDirection) -> usize {
    direction.index() * Face::COUNT + face.index()
}

/// Decode an action index back into the rotation it names.
///
/// Fails with [`CubeError::InvalidAction`] outside `0..ACTION_COUNT`.
pub fn decode(action: usize) -> Result<(Face, RotationDirection)> {
    let mv = Move::from_action(action)?;
    Ok((mv.face, mv.direction))
}

/// A single quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The face being turned.
    pub face: Face,

    /// Direction of the turn, seen from outside the face.
    pub direction: RotationDirection,
}

impl Move {
    /// Every move, in action-index order.
    pub const ALL: [Move; ACTION_COUNT] = {
        let mut moves = [Move::new(Face::Top, RotationDirection::Clockwise); ACTION_COUNT];
        let mut i = 0;
        while i < ACTION_COUNT {
            let face = Face::ALL[i % Face::COUNT];
            let direction = RotationDirection::ALL[i / Face::COUNT];
            moves[i] = Move::new(face, direction);
            i += 1;
        }
        moves
    };

    /// Create a new move.
    #[must_use]
    pub const fn new(face: Face, direction: RotationDirection) -> Self {
        Self { face, direction }
    }

    /// Clockwise turn of `face`.
    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, RotationDirection::Clockwise)
    }

    /// Counter-clockwise turn of `face`.
    #[must_use]
    pub const fn counter_clockwise(face: Face) -> Self {
        Self::new(face, RotationDirection::CounterClockwise)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }

    /// Action index of this move.
    #[must_use]
    pub const fn to_action(self) -> usize {
        encode(self.face, self.direction)
    }

    /// Move named by an action index.
    pub fn from_action(action: usize) -> Result<Self> {
        Self::ALL
            .get(action)
            .copied()
            .ok_or(CubeError::InvalidAction(action))
    }

    /// The sequence that undoes `moves`: reversed order, each move inverted.
    #[must_use]
    pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Parse a whitespace-separated sequence in standard notation.
    ///
    /// Accepts `X`, `X'` and `X2` (expanded to two quarter turns).
    pub fn parse_sequence(notation: &str) -> Result<Vec<Move>> {
        let mut moves = Vec::new();
        for token in notation.split_whitespace() {
            if let Some(base) = token.strip_suffix('2') {
                let mv: Move = base.parse()?;
                moves.push(mv);
                moves.push(mv);
            } else {
                moves.push(token.parse()?);
            }
        }
        Ok(moves)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            RotationDirection::Clockwise => write!(f, "{}", self.face.letter()),
            RotationDirection::CounterClockwise => write!(f, "{}'", self.face.letter()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| CubeError::InvalidMove(s.to_string()))?;
        let direction = match chars.as_str() {
            "" => RotationDirection::Clockwise,
            "'" => RotationDirection::CounterClockwise,
            _ => return Err(CubeError::InvalidMove(s.to_string())),
        };
        Ok(Move::new(face, direction))
    }
}

impl From<(Face, RotationDirection)> for Move {
    fn from((face, direction): (Face, RotationDirection)) -> Self {
        Self::new(face, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_bijection() {
        let mut seen = [false; ACTION_COUNT];
        for face in Face::ALL {
            for direction in RotationDirection::ALL {
                let action = encode(face, direction);
                assert!(action < ACTION_COUNT);
                assert!(!seen[action], "duplicate action {}", action);
                seen[action] = true;
                assert_eq!(decode(action).unwrap(), (face, direction));
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(decode(12), Err(CubeError::InvalidAction(12)));
        assert_eq!(decode(usize::MAX), Err(CubeError::InvalidAction(usize::MAX)));
    }

    #[test]
    fn test_back_counter_clockwise() {
        let action = encode(Face::Back, RotationDirection::CounterClockwise);
        assert_eq!(
            decode(action).unwrap(),
            (Face::Back, RotationDirection::CounterClockwise)
        );
    }

    #[test]
    fn test_all_moves_in_action_order() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.to_action(), i);
            assert_eq!(Move::from_action(i).unwrap(), *mv);
        }
    }

    #[test]
    fn test_move_inverse() {
        let mv = Move::clockwise(Face::Right);
        assert_eq!(mv.inverse(), Move::counter_clockwise(Face::Right));
        assert_eq!(mv.inverse().inverse(), mv);
    }

    #[test]
    fn test_invert_sequence() {
        let moves = vec![Move::clockwise(Face::Front), Move::counter_clockwise(Face::Top)];
        let inverted = Move::invert_sequence(&moves);
        assert_eq!(
            inverted,
            vec![Move::clockwise(Face::Top), Move::counter_clockwise(Face::Front)]
        );
    }

    #[test]
    fn test_notation() {
        assert_eq!(Move::clockwise(Face::Top).to_string(), "U");
        assert_eq!(Move::counter_clockwise(Face::Bottom).to_string(), "D'");
        assert_eq!("R'".parse::<Move>().unwrap(), Move::counter_clockwise(Face::Right));
        assert!("Q".parse::<Move>().is_err());
        assert!("R''".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_parse_sequence() {
        let moves = Move::parse_sequence("R U2 F'").unwrap();
        assert_eq!(
            moves,
            vec![
                Move::clockwise(Face::Right),
                Move::clockwise(Face::Top),
                Move::clockwise(Face::Top),
                Move::counter_clockwise(Face::Front),
            ]
        );
        assert_eq!(
            Move::parse_sequence("R X"),
            Err(CubeError::InvalidMove("X".to_string()))
        );
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::counter_clockwise(Face::Left);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
