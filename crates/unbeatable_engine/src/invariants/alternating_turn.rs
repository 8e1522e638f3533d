//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::session::GameSession;
use crate::types::{Mark, Square};

/// Invariant: Marks alternate turns, starting with X.
///
/// The square at the i-th history entry holds X for even i and O for odd
/// i. While the game is in progress the mark to move follows the same
/// parity.
pub struct AlternatingTurnInvariant;

fn mark_for_turn(turn: usize) -> Mark {
    if turn % 2 == 0 { Mark::X } else { Mark::O }
}

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let placed_in_order = history.iter().enumerate().all(|(turn, &index)| {
            session.board().get(index) == Some(Square::Occupied(mark_for_turn(turn)))
        });
        if !placed_in_order {
            return false;
        }

        session.is_over() || session.to_move() == mark_for_turn(history.len())
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;

    #[test]
    fn test_alternation_holds() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        for index in [8, 0, 4] {
            session.play(index).unwrap();
            assert!(AlternatingTurnInvariant::holds(&session));
        }
    }

    #[test]
    fn test_wrong_mark_to_move_violates() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        session.play(8).unwrap();
        session.to_move = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_finished_game_keeps_last_mover() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        assert!(session.is_over());
        assert_eq!(session.to_move(), Mark::X);
        assert!(AlternatingTurnInvariant::holds(&session));
    }
}
