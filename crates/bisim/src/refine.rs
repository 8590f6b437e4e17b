use std::hash::Hash;

use log::debug;
use log::trace;

use crate::signature;
use crate::Block;
use crate::BlockId;
use crate::Partition;

/// Attempts to split the given block with respect to the given label.
///
/// Picks an arbitrary representative of the block and separates the states
/// whose signature equals that of the representative from the rest. Returns
/// None when the block is already stable for this label, in which case no
/// block ids have been allocated. Otherwise returns the two replacement
/// blocks; installing them with [Partition::replace_block] is the caller's
/// responsibility.
pub fn split<L: Eq + Hash>(
    partition: &mut Partition<L>,
    block_id: BlockId,
    label: &L,
) -> Option<(Block, Block)> {
    let members: Vec<_> = partition.block(block_id).iter().collect();
    let representative = *members.first()?;

    let reference = signature(partition, representative, label);

    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for &state in &members {
        if signature(partition, state, label) == reference {
            matching.push(state);
        } else {
            rest.push(state);
        }
    }

    if rest.is_empty() {
        // Every state agrees with the representative, the block is stable.
        return None;
    }

    let mut first = partition.fresh_block();
    for state in matching {
        first.insert(state);
    }

    let mut second = partition.fresh_block();
    for state in rest {
        second.insert(state);
    }

    Some((first, second))
}

/// Refines the partition until it is stable: no block can be split with
/// respect to any label.
///
/// Restarts the scan over all (block, label) pairs after every applied split,
/// since signatures computed before the split may refer to replaced blocks.
/// Terminates because every applied split strictly increases the number of
/// blocks, which is bounded by the number of states.
pub fn refine<L: Eq + Hash + Clone>(partition: &mut Partition<L>) {
    let labels: Vec<L> = partition.labels().cloned().collect();

    let mut changed = true;
    while changed {
        changed = false;

        'scan: for block_id in partition.block_ids() {
            for label in &labels {
                if let Some((first, second)) = split(partition, block_id, label) {
                    trace!(
                        "Split block {} into blocks {} and {}",
                        block_id,
                        first.id(),
                        second.id()
                    );

                    partition.replace_block(block_id, first, second);
                    changed = true;
                    break 'scan;
                }
            }
        }

        debug!("Scan complete, found {} blocks", partition.num_of_blocks());

        debug_assert!(
            partition.num_of_blocks() <= partition.num_of_states(),
            "There can never be more blocks than states"
        );
    }

    debug_assert!(
        is_stable(partition),
        "The partition {partition:?} is not stable after refinement"
    );
}

/// Returns true iff no block of the partition can be split any further: all
/// states within one block have equal signatures for every label.
pub fn is_stable<L: Eq + Hash>(partition: &Partition<L>) -> bool {
    let mut pairs = Vec::new();
    for block in partition.iter_blocks() {
        let mut members = block.iter();

        if let Some(representative) = members.next() {
            for state in members {
                pairs.push((representative, state));
            }
        }
    }

    let labels: Vec<&L> = partition.labels().collect();
    pairs.iter().all(|&(representative, state)| {
        labels.iter().all(|&label| {
            signature(partition, representative, label) == signature(partition, state, label)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use ltscmp_lts::random_lts;
    use ltscmp_lts::uniquify;
    use ltscmp_lts::Side;

    #[test]
    fn test_refine_random() {
        let left = uniquify(random_lts(10, 3, 3), Side::Left);
        let right = uniquify(random_lts(10, 3, 3), Side::Right);

        let mut partition = Partition::new(&left, &right);
        refine(&mut partition);

        assert!(is_stable(&partition));
        assert!(partition.num_of_blocks() <= partition.num_of_states());
    }

    #[test]
    fn test_monotonic_growth() {
        let left = uniquify(random_lts(10, 3, 3), Side::Left);
        let right = uniquify(random_lts(10, 3, 3), Side::Right);

        let mut partition = Partition::new(&left, &right);
        let labels: Vec<String> = partition.labels().cloned().collect();

        // Apply splits one at a time, the block count must strictly increase
        // on every applied split and never decrease.
        let mut applied = true;
        while applied {
            applied = false;

            'scan: for block_id in partition.block_ids() {
                for label in &labels {
                    let before = partition.num_of_blocks();

                    if let Some((first, second)) = split(&mut partition, block_id, label) {
                        partition.replace_block(block_id, first, second);

                        assert_eq!(partition.num_of_blocks(), before + 1);
                        applied = true;
                        break 'scan;
                    }

                    assert_eq!(partition.num_of_blocks(), before);
                }
            }
        }

        assert!(is_stable(&partition));
    }
}
