//! Builder utilities for ergonomic rule construction.
//!
//! Instead of writing `Rule::named("and", And::new(left, right))` you can use
//! `and(left, right)`, or the `&`, `|` and `!` operators on [`Rule`].

use crate::{And, Behavior, Inverter, Or, Rule, Selector, Sequence, Status};

/// Creates an anonymous rule from a closure.
#[inline]
pub fn rule<'a>(f: impl Fn() -> Status + 'a) -> Rule<'a> {
    Rule::new(f)
}

/// Creates a named rule from any behavior.
#[inline]
pub fn named<'a>(name: &'static str, body: impl Behavior + 'a) -> Rule<'a> {
    Rule::named(name, body)
}

/// Creates an inverter rule.
///
/// Shorthand for `Rule::named("not", Inverter::new(child))`.
#[inline]
pub fn negate(child: Rule<'_>) -> Rule<'_> {
    Rule::named("not", Inverter::new(child))
}

/// Creates a short-circuit conjunction.
#[inline]
pub fn and<'a>(left: Rule<'a>, right: Rule<'a>) -> Rule<'a> {
    Rule::named("and", And::new(left, right))
}

/// Creates a short-circuit disjunction.
#[inline]
pub fn or<'a>(left: Rule<'a>, right: Rule<'a>) -> Rule<'a> {
    Rule::named("or", Or::new(left, right))
}

/// Creates a sequence rule.
///
/// Shorthand for `Rule::named("sequence", Sequence::new(children))`.
#[inline]
pub fn sequence<'a>(children: impl IntoIterator<Item = Rule<'a>>) -> Rule<'a> {
    Rule::named("sequence", Sequence::new(children.into_iter().collect()))
}

/// Creates a selector rule.
///
/// Shorthand for `Rule::named("select", Selector::new(children))`.
#[inline]
pub fn select<'a>(children: impl IntoIterator<Item = Rule<'a>>) -> Rule<'a> {
    Rule::named("select", Selector::new(children.into_iter().collect()))
}
