use rand::Rng;
use rustc_hash::FxHashMap;

use crate::LabelledTransitionSystem;
use crate::State;
use crate::StateId;
use crate::Transition;

/// Generates a monolithic LTS with the desired number of states, labels and
/// out degree for all the states.
pub fn random_lts(
    num_of_states: usize,
    num_of_labels: u32,
    outdegree: usize,
) -> LabelledTransitionSystem<String> {
    // Introduce lower case letters for the labels.
    let labels: Vec<String> = (0..num_of_labels)
        .map(|i| char::from_digit(i + 10, 36).unwrap().to_string())
        .collect();

    let states: FxHashMap<StateId, State> = (0..num_of_states)
        .map(|id| (id, State::default()))
        .collect();

    let mut rng = rand::rng();
    let mut transitions = Vec::new();

    for source in 0..num_of_states {
        // Introduce outgoing transitions for this state based on the desired out degree.
        for _ in 0..rng.random_range(0..=outdegree) {
            transitions.push(Transition {
                source,
                label: labels[rng.random_range(0..labels.len())].clone(),
                target: rng.random_range(0..num_of_states),
            });
        }
    }

    LabelledTransitionSystem::new(states, transitions)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_random_lts() {
        let lts = random_lts(10, 3, 3);

        assert_eq!(lts.num_of_states(), 10);
    }
}
