use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::moves::{Move, Moves};
use crate::state::State;

/// Every expanded state mapped to the state it was reached from (`None` for the initial one).
pub(crate) type Prevs<'a, H> = HashMap<&'a State, Option<(&'a State, Move)>, H>;

/// Follows the chain of previous states from `final_state` back to the initial one.
pub(crate) fn reconstruct_moves<H: BuildHasher>(prevs: &Prevs<'_, H>, final_state: &State) -> Moves {
    let mut moves = Vec::new();
    let mut cur = final_state;
    while let Some((prev, mov)) = *prevs
        .get(cur)
        .expect("Every expanded state must have a prev entry")
    {
        moves.push(mov);
        cur = prev;
    }
    moves.reverse();
    Moves::new(moves)
}
