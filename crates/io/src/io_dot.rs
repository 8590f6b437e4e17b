use std::fmt::Display;
use std::io;
use std::io::Write;

use ltscmp_bisim::Bisimulation;
use ltscmp_lts::original_id;
use ltscmp_lts::LabelledTransitionSystem;
use ltscmp_lts::StateId;

/// Writes one side of a comparison as a GraphViz digraph in which every state
/// is drawn as its equivalence class in the given bisimulation.
///
/// The initial state is marked with a double border and states in which the
/// exploration bound was reached with a triple border. States are emitted in
/// increasing id order such that the output is deterministic.
pub fn write_dot<L: Display, P>(
    writer: &mut impl Write,
    lts: &LabelledTransitionSystem<L, P>,
    relation: &Bisimulation,
) -> io::Result<()> {
    let mut states: Vec<StateId> = lts.iter_states().map(|(id, _)| id).collect();
    states.sort_unstable();

    writeln!(writer, "digraph {{")?;

    for state in states {
        let class = relation[&state];

        let mut attributes = String::new();
        if lts.state(state).bound_reached {
            attributes.push_str("peripheries=3,");
        } else if original_id(state) == 0 {
            attributes.push_str("peripheries=2,");
        }

        writeln!(writer, "    {class} [{attributes}label=\"{class}\"]")?;
    }

    writeln!(writer)?;

    for transition in lts.transitions() {
        writeln!(
            writer,
            "    {} -> {} [label=\"{}\"]",
            relation[&transition.source], relation[&transition.target], transition.label
        )?;
    }

    writeln!(writer, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use ltscmp_bisim::strong_bisim;
    use ltscmp_lts::random_lts;
    use ltscmp_lts::uniquify;
    use ltscmp_lts::Side;

    #[test]
    fn test_write_dot() {
        let lts = random_lts(10, 3, 3);
        let left = uniquify(lts.clone(), Side::Left);
        let right = uniquify(lts, Side::Right);

        let relation = strong_bisim(&left, &right).expect("The systems are bisimilar");

        let mut buffer = Vec::new();
        write_dot(&mut buffer, &left, &relation).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("digraph {"));
        assert!(output.ends_with("}\n"));
        assert!(output.contains("peripheries=2"));
        assert_eq!(
            output.matches("->").count(),
            left.num_of_transitions()
        );
    }
}
