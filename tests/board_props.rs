use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use torpedo::{Board, BoardError, CellState, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, SHIPS, TOTAL_SHIP_CELLS};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(&SHIPS);
    board.place_fleet(&mut rng, MAX_PLACEMENT_ATTEMPTS).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_is_disjoint_and_in_bounds(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);

        let ships: Vec<_> = board.ships().collect();
        prop_assert_eq!(ships.len(), SHIPS.len());
        for (i, a) in ships.iter().enumerate() {
            prop_assert_eq!(a.mask().count_ones(), SHIPS[i].length());
            // contiguous run from the origin
            let (row, col) = a.origin();
            for k in 0..SHIPS[i].length() {
                let (r, c) = a.orientation().step(row, col, k);
                prop_assert!(r < GRID_SIZE && c < GRID_SIZE);
                prop_assert!(a.contains(r, c));
            }
            for b in ships.iter().skip(i + 1) {
                prop_assert!((a.mask() & b.mask()).is_empty());
            }
        }
    }

    #[test]
    fn guess_is_final(seed in any::<u64>(), row in 0..GRID_SIZE, col in 0..GRID_SIZE) {
        let mut board = random_board(seed);
        let occupied = board.ship_at(row, col).is_some();
        board.guess(row, col).unwrap();

        let expected = if occupied { CellState::Hit } else { CellState::Miss };
        prop_assert_eq!(board.cell(row, col).unwrap(), expected);
        prop_assert_eq!(board.guess(row, col).unwrap_err(), BoardError::AlreadyGuessed);
        prop_assert_eq!(board.cell(row, col).unwrap(), expected);
        prop_assert!((board.hits() & !board.ship_map()).is_empty());
    }
}
