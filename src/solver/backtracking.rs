use crate::data::Occupant;
use crate::moves::{Move, Moves};
use crate::state::State;

// Terminology:
// move = changing agent position by one tile
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// Turns a path of consecutive states (initial first) into moves
pub(crate) fn reconstruct_moves(path: &[State]) -> Moves {
    let mut moves = Moves::default();
    for pair in path.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let dir = match next.last_move() {
            Some(dir) => dir,
            None => continue,
        };
        let is_push = match prev.occupant(next.agent().pos) {
            Some(Occupant::Box(_)) => true,
            _ => false,
        };
        moves.add(Move::new(dir, is_push));
    }
    moves
}
