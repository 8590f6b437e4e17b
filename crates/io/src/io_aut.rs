use std::io::Read;
use std::num::ParseIntError;

use log::trace;
use log::warn;
use regex::Regex;
use rustc_hash::FxHashMap;
use streaming_iterator::StreamingIterator;
use thiserror::Error;

use ltscmp_lts::LabelledTransitionSystem;
use ltscmp_lts::State;
use ltscmp_lts::StateId;
use ltscmp_lts::Transition;

use crate::line_iterator::LineIterator;

#[derive(Error, Debug)]
pub enum AutError {
    #[error("Invalid .aut header: {0}")]
    InvalidHeader(&'static str),

    #[error("Invalid transition line: {0}")]
    InvalidTransition(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),
}

/// Loads a labelled transition system in the Aldebaran format from the given
/// reader.
///
/// The Aldebaran format consists of a header:
///     `des (<initial>: Nat, <num_of_transitions>: Nat, <num_of_states>: Nat)`
///
/// And one line for every transition:
///     `(<from>: Nat, "<label>": Str, <to>: Nat)`
///     `(<from>: Nat, <label>: Str, <to>: Nat)`
pub fn read_aut(reader: impl Read) -> Result<LabelledTransitionSystem<String>, AutError> {
    let mut lines = LineIterator::new(reader);
    lines.advance();
    let header = lines.get().ok_or(AutError::InvalidHeader(
        "the first line should be the header",
    ))?;

    // Regex for des (<initial>: Nat, <num_of_transitions>: Nat, <num_of_states>: Nat)
    let header_regex = Regex::new(r#"des\s*\(\s*([0-9]*)\s*,\s*([0-9]*)\s*,\s*([0-9]*)\s*\)\s*"#)
        .expect("Regex compilation should not fail");

    // Regex for (<from>: Nat, "<label>": Str, <to>: Nat)
    let transition_regex = Regex::new(r#"\s*\(\s*([0-9]*)\s*,\s*"(.*)"\s*,\s*([0-9]*)\s*\)\s*"#)
        .expect("Regex compilation should not fail");

    // Regex for (<from>: Nat, label: Str, <to>: Nat), used in the VLTS benchmarks
    let unquoted_transition_regex =
        Regex::new(r#"\s*\(\s*([0-9]*)\s*,\s*(.*)\s*,\s*([0-9]*)\s*\)\s*"#)
            .expect("Regex compilation should not fail");

    let (_, [_initial_txt, num_of_transitions_txt, num_of_states_txt]) = header_regex
        .captures(header)
        .ok_or(AutError::InvalidHeader(
            "does not match des (<init>, <num_transitions>, <num_states>)",
        ))?
        .extract();

    let num_of_transitions: usize = num_of_transitions_txt.parse()?;
    let num_of_states: usize = num_of_states_txt.parse()?;

    let mut states: FxHashMap<StateId, State> = (0..num_of_states)
        .map(|id| (id, State::default()))
        .collect();
    let mut transitions: Vec<Transition<String>> = Vec::with_capacity(num_of_transitions);

    while let Some(line) = lines.next() {
        trace!("{}", line);

        // Try either of the transition regexes and otherwise return an error.
        let (_, [from_txt, label_txt, to_txt]) = transition_regex
            .captures(line)
            .or(unquoted_transition_regex.captures(line))
            .ok_or_else(|| AutError::InvalidTransition(line.clone()))?
            .extract();

        // Parse the from and to states, with the given label.
        let from: StateId = from_txt.parse()?;
        let to: StateId = to_txt.parse()?;

        // Insert the states when they do not exist, and then add the transition.
        states.entry(from).or_default();
        states.entry(to).or_default();

        trace!("Read transition {} --[{}]-> {}", from, label_txt, to);

        transitions.push(Transition {
            source: from,
            label: label_txt.to_string(),
            target: to,
        });
    }

    if transitions.len() != num_of_transitions {
        warn!(
            "The header declares {} transitions, but {} were read",
            num_of_transitions,
            transitions.len()
        );
    }

    Ok(LabelledTransitionSystem::new(states, transitions))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use test_log::test;

    #[test]
    fn test_reading_aut() {
        let file = indoc! {r#"
            des (0, 3, 3)
            (0, "open", 1)
            (1, "close", 0)
            (1, close, 2)
        "#};

        let lts = read_aut(file.as_bytes()).unwrap();

        assert_eq!(lts.num_of_states(), 3);
        assert_eq!(lts.num_of_transitions(), 3);

        // Both the quoted and unquoted labels are read.
        assert!(lts
            .transitions()
            .iter()
            .all(|transition| transition.label == "open" || transition.label == "close"));
    }

    #[test]
    fn test_reading_aut_invalid_header() {
        let file = "this is not a header";

        assert!(matches!(
            read_aut(file.as_bytes()),
            Err(AutError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_reading_aut_invalid_transition() {
        let file = indoc! {r#"
            des (0, 1, 2)
            (0, "open" 1)
        "#};

        assert!(matches!(
            read_aut(file.as_bytes()),
            Err(AutError::InvalidTransition(_))
        ));
    }
}
