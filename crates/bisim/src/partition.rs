//!
//! A partition keeps track of a number of blocks within a fixed set of
//! states.
//!
//! The invariants are that the union of all blocks is the merged state set of
//! both transition systems, and that no two blocks share a state.

use std::fmt;
use std::hash::Hash;

use ahash::AHashSet;
use rustc_hash::FxHashMap;

use ltscmp_lts::LabelledTransitionSystem;
use ltscmp_lts::Side;
use ltscmp_lts::StateId;

/// The identifier of a block. Identifiers are allocated monotonically and
/// never reused within the lifetime of one partition.
pub type BlockId = usize;

/// A candidate equivalence class: a set of states with a unique identifier.
#[derive(Clone, Debug)]
pub struct Block {
    id: BlockId,
    states: AHashSet<StateId>,
}

impl Block {
    fn new(id: BlockId) -> Block {
        Block {
            id,
            states: AHashSet::new(),
        }
    }

    /// Returns the identifier of this block.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Returns the number of states in this block.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns true iff the given state belongs to this block.
    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// Returns an iterator over the states of this block.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// Returns true iff this block contains at least one state of either
    /// side, determined by the parity of the uniquified state ids.
    pub fn is_mixed(&self) -> bool {
        self.iter().any(|state| Side::of(state) == Side::Left)
            && self.iter().any(|state| Side::of(state) == Side::Right)
    }

    pub(crate) fn insert(&mut self, state: StateId) {
        self.states.insert(state);
    }
}

/// A partition of the merged state set of two uniquified transition systems.
///
/// Next to the blocks themselves it carries two indices: the block containing
/// every state, and the list of transitions carrying every label. The label
/// index is built once, afterwards the raw transition lists are never
/// scanned again.
pub struct Partition<L> {
    blocks: FxHashMap<BlockId, Block>,
    state_to_block: FxHashMap<StateId, BlockId>,
    transitions_by_label: FxHashMap<L, Vec<(StateId, StateId)>>,
    next_block_id: BlockId,
}

impl<L: Eq + Hash + Clone> Partition<L> {
    /// Create an initial partition where the states of both transition
    /// systems are in a single block.
    ///
    /// Both systems must have been uniquified to opposite sides beforehand,
    /// such that their state sets are disjoint.
    pub fn new<P>(
        left: &LabelledTransitionSystem<L, P>,
        right: &LabelledTransitionSystem<L, P>,
    ) -> Partition<L> {
        debug_assert!(
            left.num_of_states() + right.num_of_states() > 0,
            "Cannot partition the empty set"
        );
        debug_assert!(
            left.iter_states().all(|(id, _)| !right.contains_state(id)),
            "The state sets of both transition systems must be disjoint"
        );

        let mut partition = Partition {
            blocks: FxHashMap::default(),
            state_to_block: FxHashMap::default(),
            transitions_by_label: FxHashMap::default(),
            next_block_id: 0,
        };

        let mut block = partition.fresh_block();
        for (id, _) in left.iter_states().chain(right.iter_states()) {
            block.insert(id);
            partition.state_to_block.insert(id, block.id());
        }
        partition.blocks.insert(block.id(), block);

        for transition in left.transitions().iter().chain(right.transitions()) {
            partition
                .transitions_by_label
                .entry(transition.label.clone())
                .or_default()
                .push((transition.source, transition.target));
        }

        partition
    }
}

impl<L: Eq + Hash> Partition<L> {
    /// Returns a reference to the given block.
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[&id]
    }

    /// Returns an iterator over all current blocks.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.values()
    }

    /// Returns the identifiers of all current blocks.
    pub fn block_ids(&self) -> Vec<BlockId> {
        self.blocks.keys().copied().collect()
    }

    /// Returns the number of blocks in the partition.
    pub fn num_of_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of states covered by the partition.
    pub fn num_of_states(&self) -> usize {
        self.state_to_block.len()
    }

    /// Returns the identifier of the block containing the given state.
    pub fn block_of(&self, state: StateId) -> BlockId {
        self.state_to_block[&state]
    }

    /// Returns an iterator over all labels occurring in either transition
    /// system.
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.transitions_by_label.keys()
    }

    /// Returns the (source, target) pairs of all transitions carrying the
    /// given label.
    pub fn transitions_with_label(&self, label: &L) -> &[(StateId, StateId)] {
        self.transitions_by_label
            .get(label)
            .map_or(&[], |transitions| transitions.as_slice())
    }

    /// Allocates an empty block with a fresh identifier.
    pub(crate) fn fresh_block(&mut self) -> Block {
        let block = Block::new(self.next_block_id);
        self.next_block_id += 1;
        block
    }

    /// Installs the result of a split: removes the old block and inserts both
    /// replacements, repointing the state index for all affected states.
    pub fn replace_block(&mut self, old: BlockId, first: Block, second: Block) {
        let Some(removed) = self.blocks.remove(&old) else {
            unreachable!("Block {old} is not part of this partition");
        };
        debug_assert_eq!(
            removed.len(),
            first.len() + second.len(),
            "The replacement blocks must cover exactly the replaced block"
        );

        for state in first.iter() {
            self.state_to_block.insert(state, first.id());
        }
        for state in second.iter() {
            self.state_to_block.insert(state, second.id());
        }

        self.blocks.insert(first.id(), first);
        self.blocks.insert(second.id(), second);

        debug_assert!(
            self.is_consistent(),
            "After splitting the partition {self:?} is inconsistent"
        );
    }

    /// Returns true iff the invariants of a partition hold.
    fn is_consistent(&self) -> bool {
        let mut seen: AHashSet<StateId> = AHashSet::new();

        for block in self.blocks.values() {
            for state in block.iter() {
                if !seen.insert(state) {
                    // This state belongs to another block as well.
                    return false;
                }

                if self.state_to_block.get(&state) != Some(&block.id()) {
                    return false;
                }
            }
        }

        // Check that every state belongs to a block.
        seen.len() == self.state_to_block.len()
    }
}

impl<L> fmt::Debug for Partition<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;

        let mut first_block = true;
        for block in self.blocks.values() {
            if !first_block {
                write!(f, ", ")?;
            }
            write!(f, "{{")?;

            let mut first = true;
            for state in block.iter() {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{state}")?;
                first = false;
            }

            write!(f, "}}")?;
            first_block = false;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use ltscmp_lts::random_lts;
    use ltscmp_lts::uniquify;

    #[test]
    fn test_initial_partition() {
        let left = uniquify(random_lts(10, 3, 3), Side::Left);
        let right = uniquify(random_lts(5, 3, 3), Side::Right);

        let partition = Partition::new(&left, &right);

        assert_eq!(partition.num_of_blocks(), 1);
        assert_eq!(partition.num_of_states(), 15);

        // All states point to the single initial block.
        let block = partition.block(partition.block_ids()[0]);
        for (id, _) in left.iter_states().chain(right.iter_states()) {
            assert!(block.contains(id));
            assert_eq!(partition.block_of(id), block.id());
        }
    }

    #[test]
    fn test_replace_block() {
        let left = uniquify(random_lts(10, 3, 3), Side::Left);
        let right = uniquify(random_lts(5, 3, 3), Side::Right);

        let mut partition = Partition::new(&left, &right);
        let old = partition.block_ids()[0];

        // Move the left states into one block and the right states into another.
        let mut first = partition.fresh_block();
        let mut second = partition.fresh_block();
        for state in partition.block(old).iter().collect::<Vec<_>>() {
            match Side::of(state) {
                Side::Left => first.insert(state),
                Side::Right => second.insert(state),
            }
        }

        partition.replace_block(old, first, second);

        assert_eq!(partition.num_of_blocks(), 2);
        for (id, _) in left.iter_states() {
            assert!(partition.block(partition.block_of(id)).contains(id));
        }
    }
}
