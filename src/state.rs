use crate::data::Pos;

/// The dynamic part of a level and the identity used for deduplication.
///
/// Cost is not part of it - two states reached by paths of different lengths are the same
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub(crate) player_pos: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub(crate) fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort(); // sort to detect equal states when we reorder boxes
        State { player_pos, boxes }
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub(crate) fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// Replaces one box and keeps the rest sorted.
    pub(crate) fn with_moved_box(&self, player_pos: Pos, from: Pos, to: Pos) -> State {
        let mut boxes = self.boxes.clone();
        let index = boxes
            .binary_search(&from)
            .unwrap_or_else(|_| panic!("No box at {}", from));
        boxes.remove(index);
        let index = boxes.binary_search(&to).unwrap_or_else(|i| i);
        boxes.insert(index, to);
        State { player_pos, boxes }
    }

    pub(crate) fn with_player(&self, player_pos: Pos) -> State {
        State {
            player_pos,
            boxes: self.boxes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn box_order_is_irrelevant() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(2, 2), Pos::new(1, 3)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(1, 3), Pos::new(2, 2)]);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn moving_boxes_keeps_order() {
        let state = State::new(
            Pos::new(1, 1),
            vec![Pos::new(1, 2), Pos::new(3, 3), Pos::new(5, 1)],
        );
        assert!(state.has_box(Pos::new(3, 3)));
        assert!(!state.has_box(Pos::new(3, 4)));

        let moved = state.with_moved_box(Pos::new(1, 2), Pos::new(1, 2), Pos::new(4, 0));
        assert_eq!(moved.player_pos(), Pos::new(1, 2));
        assert_eq!(
            moved.boxes(),
            &[Pos::new(3, 3), Pos::new(4, 0), Pos::new(5, 1)]
        );
        assert_eq!(
            moved,
            State::new(
                Pos::new(1, 2),
                vec![Pos::new(5, 1), Pos::new(4, 0), Pos::new(3, 3)]
            )
        );

        let stepped = state.with_player(Pos::new(2, 1));
        assert_eq!(stepped.boxes(), state.boxes());
        assert_ne!(stepped, state);
    }
}
