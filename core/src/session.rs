use serde::{Deserialize, Serialize};

use crate::*;

/// Explicit fold over the incoming action stream: holds the current board and
/// replaces it on every dispatch. This is the whole wiring between input
/// translation and rendering; both sides live outside this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    move_count: u32,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            move_count: 0,
        }
    }

    pub fn random(config: BoardConfig, seed: u64) -> Self {
        Self::new(Board::random(config, seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// `current = apply(current, action)`, reporting what changed so the
    /// consumer can skip unchanged frames.
    pub fn dispatch(&mut self, action: Action) -> Result<ApplyOutcome> {
        let (next, outcome) = self.board.apply(action)?;
        if outcome.has_update() {
            self.move_count += 1;
        }
        self.board = next;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord2, mines: &[Coord2]) -> GameSession {
        GameSession::new(Board::new(
            Minefield::from_mine_coords(size, mines).unwrap(),
        ))
    }

    #[test]
    fn dispatch_folds_actions_into_the_current_board() {
        let mut session = session((2, 1), &[(0, 0)]);

        assert_eq!(
            session.dispatch(Action::uncover(1, 0)),
            Ok(ApplyOutcome::Uncovered)
        );
        assert_eq!(
            session.dispatch(Action::toggle_mark(0, 0)),
            Ok(ApplyOutcome::Won)
        );
        assert!(session.board().is_game_won());
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn noop_dispatches_do_not_count_as_moves() {
        let mut session = session((2, 1), &[(0, 0)]);
        session.dispatch(Action::uncover(1, 0)).unwrap();
        session.dispatch(Action::toggle_mark(0, 0)).unwrap();

        assert_eq!(
            session.dispatch(Action::uncover(0, 0)),
            Ok(ApplyOutcome::NoChange)
        );
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn dispatch_surfaces_out_of_bounds_errors() {
        let mut session = session((2, 2), &[(0, 0)]);
        assert_eq!(
            session.dispatch(Action::uncover(5, 5)),
            Err(GameError::OutOfBounds { x: 5, y: 5 })
        );
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn random_session_matches_its_config() {
        let session = GameSession::random(BoardConfig::beginner(), 9);
        assert_eq!(session.board().size(), (8, 8));
        assert_eq!(session.board().total_mines(), 10);
        assert!(!session.board().is_game_over());
    }
}
