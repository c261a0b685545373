//! Status returned by rules, and the laws that combine statuses.

use core::fmt;

/// The outcome of evaluating a rule once.
///
/// # Tick Semantics
///
/// Every evaluation runs to completion and returns one of three values:
/// - Conditions answer immediately (e.g., "Is the dude at the door?")
/// - Actions either happen now or report that they could not
/// - `Running` asks the caller to evaluate the whole tree again later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The rule did not succeed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be performed.
    Fail,

    /// The rule completed successfully.
    Success,

    /// The outcome is not determined yet; re-evaluate on a later tick.
    ///
    /// Nothing is suspended. Progress, if any, lives in caller-owned state.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Fail`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Fail)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Inverts the status: Success becomes Fail and vice versa.
    ///
    /// `Running` is a fixed point.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Fail,
            Status::Fail => Status::Success,
            Status::Running => Status::Running,
        }
    }

    /// Conjunction with a lazily evaluated right operand.
    ///
    /// `right` is only called when `self` is `Success`; a `Fail` or
    /// `Running` left operand is returned as-is.
    #[inline]
    pub fn and_then(self, right: impl FnOnce() -> Status) -> Status {
        match self {
            Status::Success => right(),
            other => other,
        }
    }

    /// Disjunction with a lazily evaluated right operand.
    ///
    /// `right` is only called when `self` is `Fail`; a `Success` or
    /// `Running` left operand is returned as-is.
    #[inline]
    pub fn or_else(self, right: impl FnOnce() -> Status) -> Status {
        match self {
            Status::Fail => right(),
            other => other,
        }
    }

    /// Label used by the trace output and by renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Fail => "Fail",
            Status::Success => "Success",
            Status::Running => "Running",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
