use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use ltscmp_lts::LabelledTransitionSystem;
use ltscmp_lts::Side;
use ltscmp_lts::StateId;

use crate::refine;
use crate::Partition;

/// The number of an equivalence class in the resulting bisimulation. Class
/// numbers carry no meaning beyond grouping, their assignment order is
/// implementation defined.
pub type ClassId = usize;

/// The coarsest bisimulation between two transition systems: a total mapping
/// from every uniquified state to its equivalence class.
pub type Bisimulation = FxHashMap<StateId, ClassId>;

/// Derives the verdict from a stable partition.
///
/// The two systems are bisimilar iff every block contains states of both
/// sides. Returns the resulting bisimulation, or None when some block is
/// pure. The latter is the expected outcome for non bisimilar inputs, not an
/// error.
pub fn bisimulation<L: Eq + Hash>(partition: &Partition<L>) -> Option<Bisimulation> {
    let mut relation = Bisimulation::default();

    for (class, block) in partition.iter_blocks().enumerate() {
        if !block.is_mixed() {
            debug!("Block {} contains states of only one side", block.id());
            return None;
        }

        for state in block.iter() {
            relation.insert(state, class);
        }
    }

    Some(relation)
}

/// Decides strong bisimilarity between two uniquified transition systems and
/// returns the coarsest bisimulation between their states, or None when they
/// are not bisimilar.
pub fn strong_bisim<L: Eq + Hash + Clone, P>(
    left: &LabelledTransitionSystem<L, P>,
    right: &LabelledTransitionSystem<L, P>,
) -> Option<Bisimulation> {
    debug_assert!(
        left.iter_states().all(|(id, _)| Side::of(id) == Side::Left),
        "The left system must be uniquified to the left side"
    );
    debug_assert!(
        right.iter_states().all(|(id, _)| Side::of(id) == Side::Right),
        "The right system must be uniquified to the right side"
    );

    let mut partition = Partition::new(left, right);
    refine(&mut partition);

    bisimulation(&partition)
}
