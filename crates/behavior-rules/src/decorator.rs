//! Decorator rules.
//!
//! Decorators wrap a single child rule and modify its result.
//! This module provides [`Inverter`] (NOT logic); the tracing decorator lives
//! in [`crate::trace`].

use crate::{Behavior, Rule, Status};

/// Inverts the result of its child rule.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Fail`
/// - If the child returns `Fail`, the inverter returns `Success`
/// - If the child returns `Running`, so does the inverter
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<'a> {
    child: Rule<'a>,
}

impl<'a> Inverter<'a> {
    /// Creates a new inverter that wraps the given child rule.
    pub fn new(child: Rule<'a>) -> Self {
        Self { child }
    }
}

impl Behavior for Inverter<'_> {
    fn tick(&self) -> Status {
        self.child.tick().invert()
    }
}
