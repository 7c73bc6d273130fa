//! Telemetry replay: drives a placed scene object along a recorded sequence
//! of positions at a fixed cadence.
//!
//! The crate is split into a pure core (session data, scene math, the
//! `ReplayDriver` state machine) and a thin Bevy layer (`ReplayPlugin`) that
//! owns the clock and the target entity. The core never touches the ECS, so
//! the whole advance path is testable without an `App`.

pub mod config;
pub mod driver;
pub mod math;
pub mod plugin;
pub mod session;
pub mod target;

#[cfg(test)]
mod integration_tests;

pub use driver::{MotionMode, ReplayDriver, ReplayState};
pub use plugin::{ReplayPlugin, ReplaySettings, ReplayTargetHandle, SessionStore, TargetAcquired};
pub use session::{load_session_file, TelemetrySample, TelemetrySession};
pub use target::TargetTransform;
