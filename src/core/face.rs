//! Face, rotation direction and spatial axis enumerations.
//!
//! All three are closed enums with `#[repr(u8)]` ordinals so they can index
//! the static topology tables directly.

use serde::{Deserialize, Serialize};

/// One of the six faces of the cube.
///
/// The ordinal doubles as the index into a [`FaceletGrid`](crate::cube::FaceletGrid);
/// the sticker value of a face in the solved state is `ordinal + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
    Front = 4,
    Back = 5,
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// All faces in ordinal order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Get the face for an ordinal in `0..6`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Get the ordinal of this face.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sticker value this face carries when the cube is solved (1..=6).
    #[must_use]
    pub const fn solved_value(self) -> u8 {
        self as u8 + 1
    }

    /// The spatial axis this face lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Top | Face::Bottom => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Singmaster letter for this face (`U`, `D`, `L`, `R`, `F`, `B`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Top => 'U',
            Face::Bottom => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Parse a Singmaster letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::Top),
            'D' => Some(Face::Bottom),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            _ => None,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Top => "Top",
            Face::Bottom => "Bottom",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Front => "Front",
            Face::Back => "Back",
        };
        f.write_str(name)
    }
}

/// Direction of a quarter turn, as seen looking at the face from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum RotationDirection {
    Clockwise = 0,
    CounterClockwise = 1,
}

impl RotationDirection {
    /// Number of directions.
    pub const COUNT: usize = 2;

    /// Both directions in ordinal order.
    pub const ALL: [RotationDirection; 2] =
        [RotationDirection::Clockwise, RotationDirection::CounterClockwise];

    /// Get the direction for an ordinal in `0..2`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(RotationDirection::Clockwise),
            1 => Some(RotationDirection::CounterClockwise),
            _ => None,
        }
    }

    /// Get the ordinal of this direction.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

impl std::fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationDirection::Clockwise => f.write_str("Clockwise"),
            RotationDirection::CounterClockwise => f.write_str("CounterClockwise"),
        }
    }
}

/// Spatial axis a face is perpendicular to.
///
/// X runs Left to Right, Y runs Bottom to Top, Z runs Back to Front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// Get the ordinal of this axis.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index_roundtrip() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(*face));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn test_solved_values() {
        assert_eq!(Face::Top.solved_value(), 1);
        assert_eq!(Face::Back.solved_value(), 6);
    }

    #[test]
    fn test_opposite_shares_axis() {
        for face in Face::ALL {
            let opposite = face.opposite();
            assert_ne!(face, opposite);
            assert_eq!(opposite.opposite(), face);
            assert_eq!(face.axis(), opposite.axis());
        }
    }

    #[test]
    fn test_letters() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn test_direction_inverse() {
        for dir in RotationDirection::ALL {
            assert_ne!(dir.inverse(), dir);
            assert_eq!(dir.inverse().inverse(), dir);
        }
    }

    #[test]
    fn test_face_serialization() {
        let json = serde_json::to_string(&Face::Front).unwrap();
        let face: Face = serde_json::from_str(&json).unwrap();
        assert_eq!(face, Face::Front);
    }
}
