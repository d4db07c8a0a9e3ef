//! The rotation engine.
//!
//! A quarter turn does two things:
//!
//! 1. Rotates the turning face's own 3×3 block by 90°.
//! 2. Cycles the boundary lines of its four neighbors one step around the
//!    face, in the direction of the turn.
//!
//! Both steps read from a snapshot taken before the first write, so a
//! neighbor is never updated from an already-updated neighbor.

use crate::core::{Face, Move, RotationDirection};

use super::grid::{FaceBlock, FaceletGrid};
use super::topology::topology;

const CLOCKWISE_ORDER: [usize; 4] = [0, 1, 2, 3];
const COUNTER_CLOCKWISE_ORDER: [usize; 4] = [3, 2, 1, 0];

impl FaceletGrid {
    /// Turn `face` a quarter turn in `direction`.
    ///
    /// Total over its domain; the grid is only ever observed before or after
    /// the whole turn.
    pub fn rotate(&mut self, face: Face, direction: RotationDirection) {
        let before = self.facelets;

        self.facelets[face.index()] = rotate_block(&before[face.index()], direction);

        // Reversing the neighbor order lets the same predecessor shift serve
        // both directions.
        let order = match direction {
            RotationDirection::Clockwise => CLOCKWISE_ORDER,
            RotationDirection::CounterClockwise => COUNTER_CLOCKWISE_ORDER,
        };
        let lines = &topology(face).lines;

        for position in 0..4 {
            let target = &lines[order[position]];
            let source = &lines[order[(position + 3) % 4]];
            for (&(row, col), &(src_row, src_col)) in target.cells.iter().zip(source.cells.iter()) {
                self.facelets[target.face.index()][row][col] =
                    before[source.face.index()][src_row][src_col];
            }
        }
    }

    /// Apply a single move.
    pub fn apply_move(&mut self, mv: Move) {
        self.rotate(mv.face, mv.direction);
    }

    /// Apply moves in order.
    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }

    /// Undo `moves`, assuming they were the last moves applied.
    pub fn undo_moves(&mut self, moves: &[Move]) {
        for mv in moves.iter().rev() {
            self.apply_move(mv.inverse());
        }
    }
}

/// Turn `face` of `grid` a quarter turn in `direction`.
pub fn rotate(grid: &mut FaceletGrid, face: Face, direction: RotationDirection) {
    grid.rotate(face, direction);
}

/// Rotate a face block 90° as seen from outside the cube.
fn rotate_block(block: &FaceBlock, direction: RotationDirection) -> FaceBlock {
    let mut rotated = [[0; 3]; 3];
    for (i, row) in rotated.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = match direction {
                RotationDirection::Clockwise => block[2 - j][i],
                RotationDirection::CounterClockwise => block[j][2 - i],
            };
        }
    }
    rotated
}
