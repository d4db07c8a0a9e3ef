//! The facelet grid: 6 faces × 3×3 stickers.
//!
//! ## Layout
//!
//! `facelets[face][row][col]`, each face viewed from outside the cube with
//! row 0 at the top and column 0 on the left. Top is viewed with Back at the
//! top of the view, Bottom with Front at the top, the four side faces with
//! Top at the top. Laid out as a net:
//!
//! ```text
//!         Top
//!  Left  Front  Right  Back
//!        Bottom
//! ```
//!
//! A sticker's value is the ordinal of the face it started on plus one, so a
//! solved grid holds value `i + 1` everywhere on face `i`.

use serde::{Deserialize, Serialize};

use crate::core::{CubeError, Face, Result};

/// Number of stickers on one face.
pub const FACELETS_PER_FACE: usize = 9;

/// Number of stickers on the cube.
pub const FACELET_COUNT: usize = Face::COUNT * FACELETS_PER_FACE;

/// One face's 3×3 block.
pub type FaceBlock = [[u8; 3]; 3];

/// The complete sticker state of a cube.
///
/// `Copy` and 54 bytes, so snapshots are plain assignments. Every public
/// mutation is a rotation, which permutes stickers, so each value 1..=6
/// always appears exactly 9 times.
///
/// Serializes as the flat 54-value list; deserializing goes through
/// [`from_flat`](Self::from_flat), so it cannot bypass that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct FaceletGrid {
    pub(crate) facelets: [FaceBlock; 6],
}

impl FaceletGrid {
    /// Create a solved grid.
    #[must_use]
    pub fn solved() -> Self {
        let mut facelets = [[[0; 3]; 3]; 6];
        for face in Face::ALL {
            facelets[face.index()] = [[face.solved_value(); 3]; 3];
        }
        Self { facelets }
    }

    /// Reset every sticker to the solved assignment.
    pub fn initialize_solved(&mut self) {
        *self = Self::solved();
    }

    /// Build a grid from 54 values in face-major, row-major order.
    ///
    /// Fails with [`CubeError::InvalidFacelets`] unless there are exactly 54
    /// values, each in 1..=6, each appearing 9 times.
    pub fn from_flat(values: &[u8]) -> Result<Self> {
        if values.len() != FACELET_COUNT {
            return Err(CubeError::InvalidFacelets(format!(
                "expected {} values, got {}",
                FACELET_COUNT,
                values.len()
            )));
        }

        let mut counts = [0usize; Face::COUNT];
        for &value in values {
            if !(1..=Face::COUNT as u8).contains(&value) {
                return Err(CubeError::InvalidFacelets(format!(
                    "value {} outside 1..=6",
                    value
                )));
            }
            counts[value as usize - 1] += 1;
        }
        if let Some(bad) = counts.iter().position(|&c| c != FACELETS_PER_FACE) {
            return Err(CubeError::InvalidFacelets(format!(
                "value {} appears {} times, expected {}",
                bad + 1,
                counts[bad],
                FACELETS_PER_FACE
            )));
        }

        let mut facelets = [[[0; 3]; 3]; 6];
        for (i, &value) in values.iter().enumerate() {
            let face = i / FACELETS_PER_FACE;
            let cell = i % FACELETS_PER_FACE;
            facelets[face][cell / 3][cell % 3] = value;
        }
        Ok(Self { facelets })
    }

    /// Read one sticker.
    ///
    /// Fails with [`CubeError::OutOfRange`] if `row` or `col` is not in `0..3`.
    pub fn read(&self, face: Face, row: usize, col: usize) -> Result<u8> {
        if row >= 3 || col >= 3 {
            return Err(CubeError::OutOfRange { row, col });
        }
        Ok(self.facelets[face.index()][row][col])
    }

    /// Borrow one face's block.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceBlock {
        &self.facelets[face.index()]
    }

    /// Independent copy for before/after bookkeeping.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        *self
    }

    /// True if every face is monochrome.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.facelets.iter().all(is_uniform)
    }

    /// Number of monochrome faces (0..=6).
    #[must_use]
    pub fn solved_faces(&self) -> usize {
        self.facelets.iter().filter(|block| is_uniform(block)).count()
    }

    /// How many times each value 1..=6 occurs, indexed by `value - 1`.
    #[must_use]
    pub fn value_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &value in self.facelets.iter().flatten().flatten() {
            if let Some(color) = (value as usize).checked_sub(1).filter(|&c| c < Face::COUNT) {
                counts[color] += 1;
            }
        }
        counts
    }

    /// All 54 values in face-major, row-major order.
    #[must_use]
    pub fn to_flat(&self) -> [u8; FACELET_COUNT] {
        let mut flat = [0; FACELET_COUNT];
        for (dst, src) in flat.iter_mut().zip(self.facelets.iter().flatten().flatten()) {
            *dst = *src;
        }
        flat
    }
}

impl Default for FaceletGrid {
    fn default() -> Self {
        Self::solved()
    }
}

impl TryFrom<Vec<u8>> for FaceletGrid {
    type Error = CubeError;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        Self::from_flat(&values)
    }
}

impl From<FaceletGrid> for Vec<u8> {
    fn from(grid: FaceletGrid) -> Self {
        grid.to_flat().to_vec()
    }
}

/// True if every face of `grid` is monochrome.
#[must_use]
pub fn is_solved(grid: &FaceletGrid) -> bool {
    grid.is_solved()
}

fn is_uniform(block: &FaceBlock) -> bool {
    let first = block[0][0];
    block.iter().flatten().all(|&v| v == first)
}

impl std::fmt::Display for FaceletGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row_of = |face: Face, row: usize| {
            let r = self.facelets[face.index()][row];
            format!("{} {} {}", r[0], r[1], r[2])
        };

        for row in 0..3 {
            writeln!(f, "      {}", row_of(Face::Top, row))?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row_of(Face::Left, row),
                row_of(Face::Front, row),
                row_of(Face::Right, row),
                row_of(Face::Back, row)
            )?;
        }
        for row in 0..3 {
            writeln!(f, "      {}", row_of(Face::Bottom, row))?;
        }
        Ok(())
    }
}
