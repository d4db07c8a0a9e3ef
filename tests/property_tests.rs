//! Property tests over random move sequences.

use proptest::prelude::*;

use cube_rl::core::{decode, CubeError, Move, ACTION_COUNT};
use cube_rl::cube::FaceletGrid;

fn move_sequence(max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(0..ACTION_COUNT, 0..max_len)
        .prop_map(|actions| actions.into_iter().map(|a| Move::ALL[a]).collect())
}

proptest! {
    #[test]
    fn prop_sequence_then_undo_restores(moves in move_sequence(64)) {
        let mut grid = FaceletGrid::solved();
        grid.apply_moves(&moves);
        grid.apply_moves(&Move::invert_sequence(&moves));
        prop_assert_eq!(grid, FaceletGrid::solved());
    }

    #[test]
    fn prop_undo_from_arbitrary_start(prefix in move_sequence(32), moves in move_sequence(32)) {
        let mut start = FaceletGrid::solved();
        start.apply_moves(&prefix);

        let mut grid = start;
        grid.apply_moves(&moves);
        grid.undo_moves(&moves);
        prop_assert_eq!(grid, start);
    }

    #[test]
    fn prop_cardinality_preserved(moves in move_sequence(128)) {
        let mut grid = FaceletGrid::solved();
        grid.apply_moves(&moves);
        prop_assert_eq!(grid.value_counts(), [9; 6]);

        // Any reachable grid round-trips through the validated constructor.
        let rebuilt = FaceletGrid::from_flat(&grid.to_flat()).unwrap();
        prop_assert_eq!(rebuilt, grid);
    }

    #[test]
    fn prop_four_fold_from_any_state(prefix in move_sequence(32), action in 0..ACTION_COUNT) {
        let mut start = FaceletGrid::solved();
        start.apply_moves(&prefix);

        let mut grid = start;
        for _ in 0..4 {
            grid.apply_move(Move::ALL[action]);
        }
        prop_assert_eq!(grid, start);
    }

    #[test]
    fn prop_decode_rejects_out_of_range(action in ACTION_COUNT..usize::MAX) {
        prop_assert_eq!(decode(action), Err(CubeError::InvalidAction(action)));
    }

    #[test]
    fn prop_notation_roundtrip(moves in move_sequence(16)) {
        let notation = moves.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(Move::parse_sequence(&notation).unwrap(), moves);
    }
}
