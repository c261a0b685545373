//! Composite rules.
//!
//! Composite rules control the evaluation order of several child rules.
//! [`And`] and [`Or`] are the binary operators; [`Sequence`] and
//! [`Selector`] are their n-ary generalizations. All of them short-circuit:
//! a child that is not needed is never ticked, so its side effects never
//! happen.

use crate::{Behavior, Rule, Status};

/// Binary conjunction.
///
/// # Semantics
///
/// - If `left` returns `Fail` or `Running`, that result is returned and
///   `right` is **not** evaluated
/// - Otherwise the result of `right` is returned as-is
pub struct And<'a> {
    left: Rule<'a>,
    right: Rule<'a>,
}

impl<'a> And<'a> {
    /// Creates a conjunction of two rules.
    pub fn new(left: Rule<'a>, right: Rule<'a>) -> Self {
        Self { left, right }
    }
}

impl Behavior for And<'_> {
    fn tick(&self) -> Status {
        self.left.tick().and_then(|| self.right.tick())
    }
}

/// Binary disjunction.
///
/// # Semantics
///
/// - If `left` returns `Success` or `Running`, that result is returned and
///   `right` is **not** evaluated
/// - Otherwise the result of `right` is returned as-is
pub struct Or<'a> {
    left: Rule<'a>,
    right: Rule<'a>,
}

impl<'a> Or<'a> {
    /// Creates a disjunction of two rules.
    pub fn new(left: Rule<'a>, right: Rule<'a>) -> Self {
        Self { left, right }
    }
}

impl Behavior for Or<'_> {
    fn tick(&self) -> Status {
        self.left.tick().or_else(|| self.right.tick())
    }
}

/// Evaluates child rules in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` evaluates its children from left to right:
/// - If a child returns `Fail` or `Running`, the sequence **stops
///   immediately** and returns that result
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// An empty sequence succeeds.
pub struct Sequence<'a> {
    children: Vec<Rule<'a>>,
}

impl<'a> Sequence<'a> {
    /// Creates a new sequence with the given child rules.
    pub fn new(children: Vec<Rule<'a>>) -> Self {
        Self { children }
    }
}

impl Behavior for Sequence<'_> {
    fn tick(&self) -> Status {
        for child in &self.children {
            match child.tick() {
                Status::Success => continue,
                other => return other, // Short-circuit
            }
        }
        Status::Success
    }
}

/// Evaluates child rules in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops
///   immediately** and returns that result
/// - If a child returns `Fail`, the selector **continues** to the next child
/// - If all children return `Fail`, the selector returns `Fail`
///
/// An empty selector fails.
pub struct Selector<'a> {
    children: Vec<Rule<'a>>,
}

impl<'a> Selector<'a> {
    /// Creates a new selector with the given child rules.
    pub fn new(children: Vec<Rule<'a>>) -> Self {
        Self { children }
    }
}

impl Behavior for Selector<'_> {
    fn tick(&self) -> Status {
        for child in &self.children {
            match child.tick() {
                Status::Fail => continue,
                other => return other, // Short-circuit
            }
        }
        Status::Fail
    }
}
