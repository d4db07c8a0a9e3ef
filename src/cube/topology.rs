//! Static topology tables.
//!
//! For every face: its four neighbors in clockwise order (seen from outside
//! the face), and the line of stickers on each neighbor that borders it.
//! Whether that line is a row or a column depends only on the pair of axes
//! involved, see [`AXIS_TRANSITION`]. The line's index and orientation are
//! fixed per entry.
//!
//! Boundary cells are listed in clockwise order around the rotating face, so
//! a quarter turn moves cell `k` of one neighbor's line onto cell `k` of the
//! next neighbor's line.

use crate::core::{Axis, Face};

/// Whether a boundary line is a row or a column of its face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Row,
    Column,
}

/// `AXIS_TRANSITION[rotating axis][neighbor axis]`.
///
/// The diagonal is unreachable: a face never borders a face on its own axis.
pub const AXIS_TRANSITION: [[LineKind; 3]; 3] = [
    // X: Left / Right turns move columns of Top, Bottom, Front and Back.
    [LineKind::Column, LineKind::Column, LineKind::Column],
    // Y: Top / Bottom turns move rows of the four side faces.
    [LineKind::Row, LineKind::Row, LineKind::Row],
    // Z: Front / Back turns move rows of Top / Bottom, columns of Left / Right.
    [LineKind::Column, LineKind::Row, LineKind::Column],
];

/// Row or column selection for a pair of axes.
#[must_use]
pub const fn line_kind(rotating: Axis, neighbor: Axis) -> LineKind {
    AXIS_TRANSITION[rotating.index()][neighbor.index()]
}

/// The stickers of one neighbor that move when a face turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryLine {
    /// The neighbor face.
    pub face: Face,
    /// Row or column.
    pub kind: LineKind,
    /// Row or column index on the neighbor, 0..3.
    pub index: usize,
    /// `(row, col)` of the three cells, clockwise around the rotating face.
    pub cells: [(usize, usize); 3],
}

impl BoundaryLine {
    const fn new(rotating: Face, face: Face, index: usize, reversed: bool) -> Self {
        let kind = line_kind(rotating.axis(), face.axis());
        let mut cells = [(0, 0); 3];
        let mut k = 0;
        while k < 3 {
            let along = if reversed { 2 - k } else { k };
            cells[k] = match kind {
                LineKind::Row => (index, along),
                LineKind::Column => (along, index),
            };
            k += 1;
        }
        Self {
            face,
            kind,
            index,
            cells,
        }
    }
}

/// Topology of one face.
#[derive(Clone, Copy, Debug)]
pub struct FaceTopology {
    /// The face this entry describes.
    pub face: Face,
    /// Axis the face lies on.
    pub axis: Axis,
    /// Bordering lines, neighbors in clockwise order.
    pub lines: [BoundaryLine; 4],
}

impl FaceTopology {
    const fn new(face: Face, neighbors: [(Face, usize, bool); 4]) -> Self {
        let mut lines = [BoundaryLine::new(face, neighbors[0].0, neighbors[0].1, neighbors[0].2); 4];
        let mut i = 1;
        while i < 4 {
            let (neighbor, index, reversed) = neighbors[i];
            lines[i] = BoundaryLine::new(face, neighbor, index, reversed);
            i += 1;
        }
        Self {
            face,
            axis: face.axis(),
            lines,
        }
    }

    /// Neighbor faces in clockwise order.
    #[must_use]
    pub fn neighbors(&self) -> [Face; 4] {
        self.lines.map(|line| line.face)
    }
}

/// Topology for every face, indexed by face ordinal.
pub static TOPOLOGY: [FaceTopology; 6] = [
    FaceTopology::new(
        Face::Top,
        [
            (Face::Back, 0, true),
            (Face::Right, 0, true),
            (Face::Front, 0, true),
            (Face::Left, 0, true),
        ],
    ),
    FaceTopology::new(
        Face::Bottom,
        [
            (Face::Front, 2, false),
            (Face::Right, 2, false),
            (Face::Back, 2, false),
            (Face::Left, 2, false),
        ],
    ),
    FaceTopology::new(
        Face::Left,
        [
            (Face::Top, 0, false),
            (Face::Front, 0, false),
            (Face::Bottom, 0, false),
            (Face::Back, 2, true),
        ],
    ),
    FaceTopology::new(
        Face::Right,
        [
            (Face::Top, 2, true),
            (Face::Back, 0, false),
            (Face::Bottom, 2, true),
            (Face::Front, 2, true),
        ],
    ),
    FaceTopology::new(
        Face::Front,
        [
            (Face::Top, 2, false),
            (Face::Right, 0, false),
            (Face::Bottom, 0, true),
            (Face::Left, 2, true),
        ],
    ),
    FaceTopology::new(
        Face::Back,
        [
            (Face::Top, 0, true),
            (Face::Left, 0, false),
            (Face::Bottom, 2, false),
            (Face::Right, 2, true),
        ],
    ),
];

/// Topology entry for `face`.
#[must_use]
pub fn topology(face: Face) -> &'static FaceTopology {
    &TOPOLOGY[face.index()]
}
