//! Random fire control: shoots uniformly at unfired cells until the game ends.

use rand::Rng;

use crate::board::Board;
use crate::game::{GameSession, GameStatus};
use crate::presenter::Presenter;

/// A uniformly random cell that has not been fired upon, if any remain.
pub fn pick_target<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let open = board.unfired();
    let count = open.count_ones();
    if count == 0 {
        return None;
    }
    let k = rng.random_range(0..count);
    open.iter_set_bits().nth(k)
}

/// Fires at random targets until `session` reaches a terminal status,
/// reporting each shot to `presenter`.
pub fn play_out<S: Rng, R: Rng>(
    session: &mut GameSession<S>,
    rng: &mut R,
    presenter: &mut dyn Presenter,
) -> GameStatus {
    while !session.is_over() {
        let Some((row, col)) = pick_target(session.board(), rng) else {
            break;
        };
        let result = session.fire_at(row, col);
        presenter.present(&result);
    }
    session.status()
}
