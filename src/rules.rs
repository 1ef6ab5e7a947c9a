// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

use crate::data::{Dir, DIRECTIONS};
use crate::map::GoalMap;
use crate::moves::Move;
use crate::state::State;

/// Result of moving the player one cell in `dir`, `None` if the move is illegal.
///
/// Never modifies `state`. Exactly one box changes position if the move is a push.
pub(crate) fn apply(map: &GoalMap, state: &State, dir: Dir) -> Option<(State, Move)> {
    let new_player_pos = state.player_pos + dir;
    if map.is_wall(new_player_pos) {
        return None;
    }

    if !state.has_box(new_player_pos) {
        return Some((state.with_player(new_player_pos), Move::new(dir, false)));
    }

    let push_dest = new_player_pos + dir;
    if map.is_wall(push_dest) || state.has_box(push_dest) {
        return None;
    }
    let new_state = state.with_moved_box(new_player_pos, new_player_pos, push_dest);
    Some((new_state, Move::new(dir, true)))
}

/// Same checks as `apply` but without building the new state.
pub(crate) fn is_legal(map: &GoalMap, state: &State, dir: Dir) -> bool {
    let new_player_pos = state.player_pos + dir;
    if map.is_wall(new_player_pos) {
        return false;
    }
    if !state.has_box(new_player_pos) {
        return true;
    }
    let push_dest = new_player_pos + dir;
    !map.is_wall(push_dest) && !state.has_box(push_dest)
}

pub(crate) fn legal_actions(map: &GoalMap, state: &State) -> Vec<Dir> {
    DIRECTIONS
        .iter()
        .cloned()
        .filter(|&dir| is_legal(map, state, dir))
        .collect()
}
