use crate::game::{GameSnapshot, GameStatus, ShotOutcome, ShotResult};

/// Receives game events for rendering, audio, popups and the like.
///
/// Every hook defaults to doing nothing; implement the ones you care about.
/// Nothing a presenter does feeds back into the session.
pub trait Presenter {
    /// A fresh game was dealt.
    fn new_game(&mut self, _snapshot: &GameSnapshot) {}

    /// The first accepted shot of a game. Fires before the shot's own hook.
    fn first_shot(&mut self) {}

    fn miss(&mut self, _target: (usize, usize)) {}

    /// A ship was hit and is still afloat.
    fn hit(&mut self, _target: (usize, usize), _ship: &'static str) {}

    /// A ship took its final hit.
    fn sunk(&mut self, _target: (usize, usize), _ship: &'static str) {}

    fn ignored(&mut self, _target: (usize, usize)) {}

    /// The shot ended the game.
    fn game_over(&mut self, _status: GameStatus) {}

    /// Dispatch a shot result to the individual hooks.
    fn present(&mut self, result: &ShotResult) {
        if result.first_shot {
            self.first_shot();
        }
        match result.outcome {
            ShotOutcome::Ignored => {
                self.ignored(result.target);
                return;
            }
            ShotOutcome::Miss => self.miss(result.target),
            ShotOutcome::Hit { ship, sunk: false } => self.hit(result.target, ship),
            ShotOutcome::Hit { ship, sunk: true } => self.sunk(result.target, ship),
        }
        if result.status.is_over() {
            self.game_over(result.status);
        }
    }
}

/// Presenter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {}
