use std::fmt;

use rustc_hash::FxHashMap;

/// The identifier of a state.
///
/// Identifiers are local to a single transition system until [uniquify] has
/// been applied, after which they are globally unique and their parity
/// encodes the side they came from.
///
/// [uniquify]: crate::uniquify
pub type StateId = usize;

/// A directed edge from `source` to `target` carrying an action label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<L> {
    pub source: StateId,
    pub label: L,
    pub target: StateId,
}

/// A single state carrying an opaque payload, which is never inspected by the
/// refinement engine, and a flag indicating that the exploration bound was
/// reached in this state. The flag is only consumed by visualisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State<P = ()> {
    pub payload: P,
    pub bound_reached: bool,
}

/// Represents a labelled transition system consisting of states with directed
/// labelled edges.
///
/// The label type `L` is opaque, algorithms on the transition system only
/// require it to be equality comparable and hashable.
#[derive(Clone, PartialEq, Eq)]
pub struct LabelledTransitionSystem<L, P = ()> {
    states: FxHashMap<StateId, State<P>>,
    transitions: Vec<Transition<L>>,
}

impl<L, P> LabelledTransitionSystem<L, P> {
    pub fn new(
        states: FxHashMap<StateId, State<P>>,
        transitions: Vec<Transition<L>>,
    ) -> LabelledTransitionSystem<L, P> {
        // Check that every transition connects known states.
        debug_assert!(
            transitions
                .iter()
                .all(|transition| states.contains_key(&transition.source)
                    && states.contains_key(&transition.target)),
            "Every transition must connect states of the transition system."
        );

        LabelledTransitionSystem {
            states,
            transitions,
        }
    }

    /// Iterate over all (state_id, state) in the labelled transition system.
    pub fn iter_states(&self) -> impl Iterator<Item = (StateId, &State<P>)> + '_ {
        self.states.iter().map(|(&id, state)| (id, state))
    }

    /// Returns access to the given state.
    pub fn state(&self, id: StateId) -> &State<P> {
        &self.states[&id]
    }

    /// Returns true iff the given state id belongs to this transition system.
    pub fn contains_state(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    /// Returns the list of transitions.
    pub fn transitions(&self) -> &[Transition<L>] {
        &self.transitions
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Decomposes the transition system into its state map and transitions.
    pub fn into_parts(self) -> (FxHashMap<StateId, State<P>>, Vec<Transition<L>>) {
        (self.states, self.transitions)
    }
}

impl<L, P> fmt::Display for LabelledTransitionSystem<L, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print some information about the LTS.
        writeln!(f, "Number of states: {}", self.states.len())?;
        writeln!(f, "Number of transitions: {}", self.transitions.len())
    }
}

impl<L: fmt::Debug, P> fmt::Debug for LabelledTransitionSystem<L, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of states: {}", self.states.len())?;

        for Transition {
            source,
            label,
            target,
        } in &self.transitions
        {
            writeln!(f, "{source} --[{label:?}]-> {target}")?;
        }

        Ok(())
    }
}
