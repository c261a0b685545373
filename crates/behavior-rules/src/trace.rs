//! Execution tracing.
//!
//! [`Traced`] logs entry and exit of a rule as `tracing` events under the
//! `behavior_rules::trace` target, indented by nesting depth:
//!
//! ```text
//! entering rule `and`
//!   entering rule `eq`
//!   leaving rule `eq` with outcome Fail
//! leaving rule `and` with outcome Fail
//! ```
//!
//! The depth counter is thread-local, so trees evaluated on different
//! threads keep independent indentation. Enable the `trace` feature to wrap
//! every rule automatically, or call [`Rule::traced`](crate::Rule::traced).

use std::borrow::Cow;
use std::cell::Cell;

use crate::{Behavior, Status};

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Current trace nesting depth on this thread.
pub fn depth() -> usize {
    DEPTH.with(Cell::get)
}

/// Restores the depth even if the child panics.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Self {
        DEPTH.with(|depth| depth.set(depth.get() + 1));
        DepthGuard
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Logs entry and exit of its child; returns the child's status unchanged.
pub struct Traced<B> {
    name: Cow<'static, str>,
    child: B,
}

impl<B> Traced<B> {
    /// Wraps `child`, reporting it as `name`.
    pub fn new(name: impl Into<Cow<'static, str>>, child: B) -> Self {
        Self {
            name: name.into(),
            child,
        }
    }
}

impl<B: Behavior> Behavior for Traced<B> {
    fn tick(&self) -> Status {
        let depth = depth();
        let indent = depth * INDENT_WIDTH;
        let name = &*self.name;

        tracing::trace!(
            target: "behavior_rules::trace",
            rule = name,
            depth,
            "{:indent$}entering rule `{name}`",
            ""
        );

        let status = {
            let _guard = DepthGuard::enter();
            self.child.tick()
        };

        tracing::trace!(
            target: "behavior_rules::trace",
            rule = name,
            depth,
            outcome = status.as_str(),
            "{:indent$}leaving rule `{name}` with outcome {status}",
            ""
        );

        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_level(false)
            .with_target(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn traced_is_transparent() {
        for status in [Status::Fail, Status::Success, Status::Running] {
            assert_eq!(Traced::new("constant", move || status).tick(), status);
        }
    }

    #[test]
    fn depth_tracks_nesting_and_is_restored() {
        let seen = Cell::new(usize::MAX);
        let inner = Traced::new("inner", || {
            seen.set(depth());
            Status::Success
        });
        let outer = Traced::new("outer", || inner.tick());

        assert_eq!(outer.tick(), Status::Success);
        assert_eq!(seen.get(), 2);
        assert_eq!(depth(), 0);
    }

    #[test]
    fn logs_nested_entry_and_exit() {
        let lines = capture(|| {
            let leaf = Traced::new("leaf", || Status::Fail);
            let root = Traced::new("root", || leaf.tick().invert());
            assert_eq!(root.tick(), Status::Success);
        });

        assert_eq!(lines.len(), 4, "{lines:?}");
        assert!(lines[0].contains("entering rule `root`"));
        assert!(lines[0].contains("depth=0"));
        assert!(lines[1].contains("  entering rule `leaf`"));
        assert!(lines[1].contains("depth=1"));
        assert!(lines[2].contains("  leaving rule `leaf` with outcome Fail"));
        assert!(lines[3].contains("leaving rule `root` with outcome Success"));
        assert!(!lines[3].contains("  leaving rule `root`"));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn factory_rules_are_traced() {
        let lines = capture(|| {
            crate::execute(&(crate::success() & crate::fail()));
        });

        assert!(lines[0].contains("entering rule `and`"));
        assert!(lines.iter().any(|line| line.contains("  entering rule `success`")));
        assert!(
            lines
                .iter()
                .any(|line| line.contains("  leaving rule `fail` with outcome Fail"))
        );
    }

    #[cfg(feature = "trace")]
    #[test]
    fn explicit_traced_logs_each_rule_once() {
        let lines = capture(|| {
            crate::Rule::named("gate", || Status::Success).traced().tick();
        });

        let entering = lines
            .iter()
            .filter(|line| line.contains("entering rule `gate`"))
            .count();
        let leaving = lines
            .iter()
            .filter(|line| line.contains("leaving rule `gate`"))
            .count();
        assert_eq!(entering, 1, "{lines:?}");
        assert_eq!(leaving, 1, "{lines:?}");
        assert!(lines[0].contains("depth=0"));
    }

    #[test]
    fn anonymous_rules_use_placeholder() {
        let lines = capture(|| {
            crate::Rule::new(|| Status::Running).traced().tick();
        });

        assert!(lines.iter().any(|line| line.contains("entering rule `anonymous`")));
        assert!(
            lines
                .iter()
                .any(|line| line.contains("leaving rule `anonymous` with outcome Running"))
        );
    }
}
