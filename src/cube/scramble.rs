//! Random scrambles from an explicit, seeded RNG.

use log::trace;

use crate::core::{CubeRng, Face, Move, RotationDirection};

use super::grid::FaceletGrid;

/// Sample one move: face and direction drawn independently and uniformly.
pub fn random_move(rng: &mut CubeRng) -> Move {
    let face = Face::ALL[rng.gen_index(Face::COUNT)];
    let direction = RotationDirection::ALL[rng.gen_index(RotationDirection::COUNT)];
    Move::new(face, direction)
}

/// Apply `rotation_count` random moves to `grid`.
///
/// `rotation_count == 0` leaves the grid untouched. The same seed always
/// produces the same scramble.
pub fn scramble(grid: &mut FaceletGrid, rotation_count: usize, rng: &mut CubeRng) {
    for _ in 0..rotation_count {
        grid.apply_move(random_move(rng));
    }
    trace!("Scrambled grid with {} moves", rotation_count);
}

/// Like [`scramble`], but also returns the applied moves.
///
/// Draws from `rng` exactly as `scramble` does, so both produce the same
/// grid from the same RNG state.
pub fn scramble_with_history(
    grid: &mut FaceletGrid,
    rotation_count: usize,
    rng: &mut CubeRng,
) -> Vec<Move> {
    let mut history = Vec::with_capacity(rotation_count);
    for _ in 0..rotation_count {
        let mv = random_move(rng);
        grid.apply_move(mv);
        history.push(mv);
    }
    trace!("Scrambled grid with {} recorded moves", rotation_count);
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rotations_is_noop() {
        let mut grid = FaceletGrid::solved();
        let mut rng = CubeRng::new(42);
        scramble(&mut grid, 0, &mut rng);
        assert_eq!(grid, FaceletGrid::solved());
    }

    #[test]
    fn test_scramble_is_deterministic() {
        let mut a = FaceletGrid::solved();
        let mut b = FaceletGrid::solved();
        scramble(&mut a, 25, &mut CubeRng::new(7));
        scramble(&mut b, 25, &mut CubeRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = FaceletGrid::solved();
        let mut b = FaceletGrid::solved();
        scramble(&mut a, 25, &mut CubeRng::new(1));
        scramble(&mut b, 25, &mut CubeRng::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_history_matches_scramble() {
        let mut plain = FaceletGrid::solved();
        let mut recorded = FaceletGrid::solved();
        scramble(&mut plain, 30, &mut CubeRng::new(99));
        let history = scramble_with_history(&mut recorded, 30, &mut CubeRng::new(99));

        assert_eq!(history.len(), 30);
        assert_eq!(plain, recorded);

        recorded.undo_moves(&history);
        assert!(recorded.is_solved());
    }

    #[test]
    fn test_scramble_preserves_counts() {
        let mut grid = FaceletGrid::solved();
        scramble(&mut grid, 200, &mut CubeRng::new(3));
        assert_eq!(grid.value_counts(), [9; 6]);
    }

    #[test]
    fn test_random_move_covers_action_space() {
        let mut rng = CubeRng::new(5);
        let mut seen = [false; 12];
        for _ in 0..1000 {
            seen[random_move(&mut rng).to_action()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
