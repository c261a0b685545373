use std::cell::Cell;

use behavior_rules::{Rule, Status, execute, fail, negate, running, sequence, success};

const ALL: [Status; 3] = [Status::Fail, Status::Success, Status::Running];

fn constant(status: Status) -> Rule<'static> {
    match status {
        Status::Fail => fail(),
        Status::Success => success(),
        Status::Running => running(),
    }
}

/// A rule that bumps `counter` and returns `status`.
fn counting(counter: &Cell<u32>, status: Status) -> Rule<'_> {
    Rule::new(move || {
        counter.set(counter.get() + 1);
        status
    })
}

#[test]
fn constants_evaluate_to_themselves() {
    for status in ALL {
        assert_eq!(execute(&constant(status)), status);
    }
}

#[test]
fn negation_is_an_involution_with_running_fixed() {
    assert_eq!(execute(&!fail()), Status::Success);
    assert_eq!(execute(&!success()), Status::Fail);
    assert_eq!(execute(&!running()), Status::Running);

    for status in ALL {
        assert_eq!(execute(&negate(negate(constant(status)))), status);
    }
}

#[test]
fn conjunction_truth_table() {
    use Status::{Fail, Running, Success};

    let table = [
        (Success, Success, Success),
        (Success, Fail, Fail),
        (Fail, Success, Fail),
        (Fail, Fail, Fail),
        (Fail, Running, Fail),
        (Running, Fail, Running),
        (Success, Running, Running),
        (Running, Success, Running),
        (Running, Running, Running),
    ];

    for (left, right, expected) in table {
        let rule = constant(left) & constant(right);
        assert_eq!(execute(&rule), expected, "{left} & {right}");
    }
}

#[test]
fn disjunction_truth_table() {
    use Status::{Fail, Running, Success};

    let table = [
        (Success, Success, Success),
        (Success, Fail, Success),
        (Fail, Success, Success),
        (Success, Running, Success),
        (Running, Success, Running),
        (Fail, Fail, Fail),
        (Fail, Running, Running),
        (Running, Fail, Running),
        (Running, Running, Running),
    ];

    for (left, right, expected) in table {
        let rule = constant(left) | constant(right);
        assert_eq!(execute(&rule), expected, "{left} | {right}");
    }
}

#[test]
fn conjunction_skips_right_side_effects() {
    let counter = Cell::new(0);

    for left in [Status::Fail, Status::Running] {
        let rule = constant(left) & counting(&counter, Status::Success);
        assert_eq!(execute(&rule), left);
    }
    assert_eq!(counter.get(), 0);

    let rule = success() & counting(&counter, Status::Fail);
    assert_eq!(execute(&rule), Status::Fail);
    assert_eq!(counter.get(), 1);
}

#[test]
fn disjunction_skips_right_side_effects() {
    let counter = Cell::new(0);

    for left in [Status::Success, Status::Running] {
        let rule = constant(left) | counting(&counter, Status::Fail);
        assert_eq!(execute(&rule), left);
    }
    assert_eq!(counter.get(), 0);

    let rule = fail() | counting(&counter, Status::Running);
    assert_eq!(execute(&rule), Status::Running);
    assert_eq!(counter.get(), 1);
}

#[test]
fn empty_sequence_succeeds() {
    assert_eq!(execute(&sequence([])), Status::Success);
}

#[test]
fn sequence_of_one_matches_the_rule() {
    for status in ALL {
        assert_eq!(execute(&sequence([constant(status)])), status);
    }
}

#[test]
fn sequence_stops_at_first_non_success() {
    for stop in [Status::Fail, Status::Running] {
        let counter = Cell::new(0);
        let rule = sequence([
            counting(&counter, Status::Success),
            counting(&counter, Status::Success),
            counting(&counter, stop),
            counting(&counter, Status::Success),
        ]);

        assert_eq!(execute(&rule), stop);
        assert_eq!(counter.get(), 3);
    }
}

#[test]
fn shared_sub_rules_can_be_reused() {
    let counter = Cell::new(0);
    let shared = counting(&counter, Status::Success);

    let first = shared.clone() & success();
    let second = fail() | shared;

    assert_eq!(execute(&first), Status::Success);
    assert_eq!(execute(&second), Status::Success);
    assert_eq!(counter.get(), 2);
}
