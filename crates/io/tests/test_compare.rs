use indoc::indoc;
use test_case::test_case;

use ltscmp_bisim::strong_bisim;
use ltscmp_io::io_aut::read_aut;
use ltscmp_lts::uniquify;
use ltscmp_lts::Side;

const SINGLE_ACTION: &str = indoc! {r#"
    des (0, 1, 2)
    (0, "a", 1)
"#};

const EXTRA_LABEL: &str = indoc! {r#"
    des (0, 2, 2)
    (0, "a", 1)
    (0, "b", 1)
"#};

const UNFOLDED: &str = indoc! {r#"
    des (0, 3, 3)
    (0, "a", 1)
    (1, "b", 2)
    (2, "a", 1)
"#};

const FOLDED: &str = indoc! {r#"
    des (0, 2, 2)
    (0, "a", 1)
    (1, "b", 0)
"#};

#[test_case(SINGLE_ACTION, SINGLE_ACTION, true ; "identical single action")]
#[test_case(SINGLE_ACTION, EXTRA_LABEL, false ; "extra label on the right")]
#[test_case(EXTRA_LABEL, SINGLE_ACTION, false ; "extra label on the left")]
#[test_case(UNFOLDED, FOLDED, true ; "unfolded cycle")]
fn test_compare_aut(left: &str, right: &str, expected: bool) {
    let _ = env_logger::builder().is_test(true).try_init();

    let left = uniquify(read_aut(left.as_bytes()).unwrap(), Side::Left);
    let right = uniquify(read_aut(right.as_bytes()).unwrap(), Side::Right);

    let relation = strong_bisim(&left, &right);
    assert_eq!(relation.is_some(), expected);

    if let Some(relation) = relation {
        // The relation is total over the merged state set.
        assert_eq!(
            relation.len(),
            left.num_of_states() + right.num_of_states()
        );
    }
}
