//! Replay driver: walks the sample sequence one entry per tick and applies
//! each sample to the target transform.
//!
//! The driver is passive between ticks — the plugin layer owns the clock and
//! calls `advance` at the configured cadence.

use bevy::prelude::*;

use crate::math::{recording_to_scene, smooth_damp, travel_rotation};
use crate::session::TelemetrySample;
use crate::target::TargetTransform;

/// How the target's position is updated each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionMode {
    /// Teleport straight to the sample's scene position.
    Instant,
    /// Approach the sample's scene position with critically-damped smoothing.
    /// The damping velocity persists across ticks and resets on `begin`.
    Smoothed { smooth_time: f32 },
}

/// Replay lifecycle. Single-shot: there is no path back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// No target yet; the driver has never started.
    Idle,
    /// A target is assigned and samples remain.
    Running,
    /// The sequence is exhausted. Terminal.
    Finished,
}

/// Resource holding the replay cursor, lifecycle state, and smoothing
/// velocity. The sample sequence and the target entity live elsewhere; the
/// driver only consumes them through `advance`.
#[derive(Resource, Debug)]
pub struct ReplayDriver {
    state: ReplayState,
    /// Index of the next sample to apply. Monotone, never reset after start.
    cursor: usize,
    velocity: Vec3,
    motion: MotionMode,
}

impl ReplayDriver {
    pub fn new(motion: MotionMode) -> Self {
        Self {
            state: ReplayState::Idle,
            cursor: 0,
            velocity: Vec3::ZERO,
            motion,
        }
    }

    /// Start the replay. Only meaningful from `Idle`; later calls are ignored
    /// (single-shot replay per target).
    pub fn begin(&mut self) {
        if self.state == ReplayState::Idle {
            self.state = ReplayState::Running;
            self.cursor = 0;
            self.velocity = Vec3::ZERO;
        }
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// Number of samples already applied.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.state == ReplayState::Finished
    }

    /// Apply the next sample to `target` and advance the cursor.
    ///
    /// `dt` is the tick interval, used by the smoothed motion mode. A call in
    /// any state other than `Running` is a no-op, which makes ticking past
    /// the end of the sequence idempotent.
    pub fn advance(
        &mut self,
        samples: &[TelemetrySample],
        target: &mut dyn TargetTransform,
        dt: f32,
    ) {
        if self.state != ReplayState::Running {
            return;
        }
        if self.cursor >= samples.len() {
            self.state = ReplayState::Finished;
            return;
        }

        let sample = &samples[self.cursor];
        let scene = recording_to_scene(Vec3::new(sample.x, sample.y, sample.z));

        // A zero direction would make the look rotation undefined; keep the
        // previous orientation for that tick.
        let direction = scene - target.position();
        if direction != Vec3::ZERO {
            target.set_rotation(travel_rotation(direction));
        }

        let next = match self.motion {
            MotionMode::Instant => scene,
            MotionMode::Smoothed { smooth_time } => {
                smooth_damp(target.position(), scene, &mut self.velocity, smooth_time, dt)
            }
        };
        target.set_position(next);

        self.cursor += 1;
        if self.cursor >= samples.len() {
            self.state = ReplayState::Finished;
        }
    }
}
