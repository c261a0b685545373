//! Core behavior trait and the execution entry point.
//!
//! This module defines the [`Behavior`] trait, the fundamental abstraction
//! for every rule. A behavior takes no arguments: whatever state it reads or
//! mutates is captured by reference from the caller when the rule is built.

use crate::Status;

/// Something that can be evaluated to a [`Status`].
pub trait Behavior {
    /// Evaluate this behavior once.
    ///
    /// Side effects land in caller-owned state captured by the behavior.
    /// Re-ticking a behavior that returned `Running` starts it from the top.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Fail` if the behavior failed
    /// - `Status::Running` if the caller should tick again later
    fn tick(&self) -> Status;
}

/// Blanket implementation for plain closures.
///
/// Any `Fn() -> Status` is a behavior, so leaf logic can be written inline.
impl<F> Behavior for F
where
    F: Fn() -> Status,
{
    #[inline]
    fn tick(&self) -> Status {
        self()
    }
}

/// Evaluates `rule` once and returns its status.
///
/// No retry, no timeout: a single synchronous call.
#[inline]
pub fn execute<B>(rule: &B) -> Status
where
    B: Behavior + ?Sized,
{
    rule.tick()
}
