use std::hash::Hash;

use ahash::AHashSet;

use ltscmp_lts::StateId;

use crate::BlockId;
use crate::Partition;

/// The type of a destination signature: the sorted, duplicate free list of
/// blocks reachable from a state under one label. We use sorted vectors such
/// that signatures can be compared structurally regardless of the iteration
/// order in which destinations were found.
pub type Signature = Vec<BlockId>;

/// Returns the signature sig(s, a) = { pi(t) | s -a-> t in T } for the
/// current partition pi.
///
/// Only the label index of the partition is consulted, never the raw
/// transition lists.
pub fn signature<L: Eq + Hash>(partition: &Partition<L>, state: StateId, label: &L) -> Signature {
    let mut destinations: AHashSet<BlockId> = AHashSet::new();

    for &(source, target) in partition.transitions_with_label(label) {
        if source == state {
            destinations.insert(partition.block_of(target));
        }
    }

    // Compute the flat signature, which is compact and structurally comparable.
    let mut signature: Signature = destinations.drain().collect();
    signature.sort_unstable();

    signature
}
