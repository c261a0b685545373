//! Three-valued behavior algebra for reactive decision logic.
//!
//! Decision logic is built from leaf rules (constants, comparisons against
//! caller-owned state, state mutation) combined with short-circuiting
//! logical operators that understand a third outcome, `Running`.
//!
//! - **No node state**: every evaluation re-enters the tree from its root
//! - **Running is a value**: it tells the caller to tick again later
//! - **Caller-owned state**: leaves borrow cells; the algebra owns nothing
//! - **Short-circuit**: operands that are not needed are never evaluated
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait, `tick() -> Status`
//! - [`Status`]: Success, Fail or Running
//! - [`Rule`]: Clonable handle to a behavior, with `!`, `&` and `|`
//! - Composite rules: [`And`], [`Or`], [`Sequence`], [`Selector`]
//! - Decorator rules: [`Inverter`], [`Traced`]
//! - Leaves: [`success`], [`fail`], [`running`], [`eq`], [`ne`], [`gt`],
//!   [`lt`], [`set`]
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use behavior_rules::{Status, eq, execute, rule, set};
//!
//! let position = Cell::new(0);
//! let arrived = Cell::new(false);
//!
//! let step = rule(|| {
//!     position.set(position.get() + 1);
//!     Status::Success
//! });
//! let tree = (eq(&position, 3) & set(&arrived, true)) | step;
//!
//! while !arrived.get() {
//!     execute(&tree);
//! }
//! assert_eq!(position.get(), 3);
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod rule;
pub mod slot;
pub mod status;
pub mod trace;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, execute};
pub use builder::{and, named, negate, or, rule, select, sequence};
pub use composite::{And, Or, Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{eq, fail, fixed, gt, lt, ne, running, set, success};
pub use rule::{ANONYMOUS, Rule};
pub use slot::{Slot, SlotError};
pub use status::Status;
pub use trace::Traced;
