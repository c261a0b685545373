//! Demonstration consumer of `behavior-rules`.
//!
//! - [`config`]: environment configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`showcase`]: constant rules and operators rendered as text
//! - [`scenario`]: the door scenario driven by a caller loop

pub mod config;
pub mod logging;
pub mod scenario;
pub mod showcase;

pub use config::{ConfigError, DemoConfig, DoorConfig};
