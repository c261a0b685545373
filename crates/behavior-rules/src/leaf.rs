//! Leaf rules: constants, comparisons and state mutation.
//!
//! Comparison and mutation leaves borrow a caller-owned [`Slot`]. The slot
//! is the current, moving value; the second argument is the threshold,
//! captured by value when the rule is built.

use crate::{Rule, Slot, SlotError, Status};

/// A rule that always succeeds.
pub fn success() -> Rule<'static> {
    Rule::named("success", || Status::Success)
}

/// A rule that always fails.
pub fn fail() -> Rule<'static> {
    Rule::named("fail", || Status::Fail)
}

/// A rule that always reports `Running`.
pub fn running() -> Rule<'static> {
    Rule::named("running", || Status::Running)
}

/// Succeeds when the slot equals `value`.
pub fn eq<'a, T, S>(slot: &'a S, value: T) -> Rule<'a>
where
    S: Slot<T> + ?Sized,
    T: PartialEq + 'a,
{
    Rule::named("eq", move || compare(slot, |current: &T| value == *current))
}

/// Succeeds when the slot differs from `value`.
pub fn ne<'a, T, S>(slot: &'a S, value: T) -> Rule<'a>
where
    S: Slot<T> + ?Sized,
    T: PartialEq + 'a,
{
    Rule::named("ne", move || compare(slot, |current: &T| value != *current))
}

/// Succeeds when the slot is greater than `value`.
pub fn gt<'a, T, S>(slot: &'a S, value: T) -> Rule<'a>
where
    S: Slot<T> + ?Sized,
    T: PartialOrd + 'a,
{
    Rule::named("gt", move || compare(slot, |current: &T| value < *current))
}

/// Succeeds when the slot is less than `value`.
pub fn lt<'a, T, S>(slot: &'a S, value: T) -> Rule<'a>
where
    S: Slot<T> + ?Sized,
    T: PartialOrd + 'a,
{
    Rule::named("lt", move || compare(slot, |current: &T| value > *current))
}

/// Writes `value` into the slot on every evaluation and succeeds.
///
/// Fails without writing if the slot is borrowed elsewhere.
pub fn set<'a, T, S>(slot: &'a S, value: T) -> Rule<'a>
where
    S: Slot<T> + ?Sized,
    T: Clone + 'a,
{
    Rule::named("set", move || {
        outcome(slot.write(value.clone()).map(|()| true), "set")
    })
}

fn compare<T, S>(slot: &S, predicate: impl FnOnce(&T) -> bool) -> Status
where
    S: Slot<T> + ?Sized,
{
    outcome(slot.read(predicate), "comparison")
}

fn outcome(result: Result<bool, SlotError>, leaf: &'static str) -> Status {
    match result {
        Ok(true) => Status::Success,
        Ok(false) => Status::Fail,
        Err(err) => {
            tracing::warn!(leaf, %err, "slot unavailable, treating as failure");
            Status::Fail
        }
    }
}

/// Leaves with the threshold fixed at compile time.
///
/// Same comparison direction as the runtime variants: the slot is the moving
/// value, the const parameter the threshold.
pub mod fixed {
    use crate::{Rule, Slot};

    /// Succeeds when the slot equals `N`.
    pub fn eq<'a, const N: i64>(slot: &'a impl Slot<i64>) -> Rule<'a> {
        super::eq(slot, N)
    }

    /// Succeeds when the slot differs from `N`.
    pub fn ne<'a, const N: i64>(slot: &'a impl Slot<i64>) -> Rule<'a> {
        super::ne(slot, N)
    }

    /// Succeeds when the slot is greater than `N`.
    pub fn gt<'a, const N: i64>(slot: &'a impl Slot<i64>) -> Rule<'a> {
        super::gt(slot, N)
    }

    /// Succeeds when the slot is less than `N`.
    pub fn lt<'a, const N: i64>(slot: &'a impl Slot<i64>) -> Rule<'a> {
        super::lt(slot, N)
    }

    /// Writes `N` into the slot.
    pub fn set<'a, const N: i64>(slot: &'a impl Slot<i64>) -> Rule<'a> {
        super::set(slot, N)
    }

    /// Writes `B` into a boolean slot.
    pub fn flag<'a, const B: bool>(slot: &'a impl Slot<bool>) -> Rule<'a> {
        super::set(slot, B)
    }
}
