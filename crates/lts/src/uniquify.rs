use rustc_hash::FxHashMap;

use crate::LabelledTransitionSystem;
use crate::StateId;

/// The side a transition system takes in a comparison. Uniquified state ids
/// of the left system are exactly the even integers, those of the right
/// system exactly the odd integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Maps a local state id to its globally unique id for this side.
    pub fn apply(self, id: StateId) -> StateId {
        match self {
            Side::Left => 2 * id,
            Side::Right => 2 * id + 1,
        }
    }

    /// Recovers the side of a uniquified state id from its parity.
    pub fn of(id: StateId) -> Side {
        if id % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Recovers the local state id that [Side::apply] mapped to the given
/// uniquified id.
pub fn original_id(id: StateId) -> StateId {
    id / 2
}

/// Relabels all state ids of the given transition system such that they are
/// disjoint from any transition system uniquified to the other side. Total
/// over any finite id set.
pub fn uniquify<L, P>(
    lts: LabelledTransitionSystem<L, P>,
    side: Side,
) -> LabelledTransitionSystem<L, P> {
    let (states, mut transitions) = lts.into_parts();

    let states: FxHashMap<_, _> = states
        .into_iter()
        .map(|(id, state)| (side.apply(id), state))
        .collect();

    for transition in &mut transitions {
        transition.source = side.apply(transition.source);
        transition.target = side.apply(transition.target);
    }

    LabelledTransitionSystem::new(states, transitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;
    use test_log::test;

    use crate::random_lts;

    #[test_case(Side::Left ; "left")]
    #[test_case(Side::Right ; "right")]
    fn test_uniquify_roundtrip(side: Side) {
        let lts = uniquify(random_lts(25, 3, 3), side);

        for (id, _) in lts.iter_states() {
            assert_eq!(Side::of(id), side);
            assert_eq!(side.apply(original_id(id)), id);
        }

        for transition in lts.transitions() {
            assert_eq!(Side::of(transition.source), side);
            assert_eq!(Side::of(transition.target), side);
        }
    }

    #[test]
    fn test_uniquify_disjoint() {
        let lts = random_lts(25, 3, 3);
        let left = uniquify(lts.clone(), Side::Left);
        let right = uniquify(lts, Side::Right);

        for (id, _) in left.iter_states() {
            assert!(!right.contains_state(id));
        }
    }
}
