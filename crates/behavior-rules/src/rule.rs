//! The [`Rule`] handle.
//!
//! A `Rule` is an immutable, cheaply clonable handle to a behavior. Cloning
//! shares the body, so the same sub-rule can appear in several compositions.
//! The lifetime `'a` bounds the caller-owned cells the rule borrows.

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::rc::Rc;

use crate::{Behavior, Status, Traced, builder};

/// Name reported for rules built without one.
pub const ANONYMOUS: &str = "anonymous";

/// A composable unit of decision logic.
///
/// With the `trace` feature enabled every rule built through [`Rule::new`]
/// or [`Rule::named`] is wrapped in [`Traced`].
#[derive(Clone)]
pub struct Rule<'a> {
    name: Option<Cow<'static, str>>,
    body: Rc<dyn Behavior + 'a>,
}

impl<'a> Rule<'a> {
    /// Creates an anonymous rule.
    pub fn new(body: impl Behavior + 'a) -> Self {
        Self::build(None, body)
    }

    /// Creates a rule that reports `name` in traces.
    pub fn named(name: impl Into<Cow<'static, str>>, body: impl Behavior + 'a) -> Self {
        Self::build(Some(name.into()), body)
    }

    /// The rule's name, or [`ANONYMOUS`].
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Wraps this rule in [`Traced`].
    ///
    /// With the `trace` feature on the body is already traced, so the rule
    /// is returned unchanged.
    #[cfg(feature = "trace")]
    pub fn traced(self) -> Self {
        self
    }

    /// Wraps this rule in [`Traced`].
    #[cfg(not(feature = "trace"))]
    pub fn traced(self) -> Self {
        let name = self.name.clone();
        let label = Cow::Owned(self.name().to_owned());
        Self {
            name,
            body: Rc::new(Traced::new(label, self)),
        }
    }

    #[cfg(feature = "trace")]
    fn build(name: Option<Cow<'static, str>>, body: impl Behavior + 'a) -> Self {
        let label = name.clone().unwrap_or(Cow::Borrowed(ANONYMOUS));
        Self {
            name,
            body: Rc::new(Traced::new(label, body)),
        }
    }

    #[cfg(not(feature = "trace"))]
    fn build(name: Option<Cow<'static, str>>, body: impl Behavior + 'a) -> Self {
        Self {
            name,
            body: Rc::new(body),
        }
    }
}

impl Behavior for Rule<'_> {
    #[inline]
    fn tick(&self) -> Status {
        self.body.tick()
    }
}

impl fmt::Debug for Rule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name()).finish()
    }
}

impl<'a> Not for Rule<'a> {
    type Output = Rule<'a>;

    fn not(self) -> Self::Output {
        builder::negate(self)
    }
}

/// `a & b` is short-circuit conjunction; `b` only runs when `a` succeeds.
impl<'a> BitAnd for Rule<'a> {
    type Output = Rule<'a>;

    fn bitand(self, rhs: Self) -> Self::Output {
        builder::and(self, rhs)
    }
}

/// `a | b` is short-circuit disjunction; `b` only runs when `a` fails.
impl<'a> BitOr for Rule<'a> {
    type Output = Rule<'a>;

    fn bitor(self, rhs: Self) -> Self::Output {
        builder::or(self, rhs)
    }
}
