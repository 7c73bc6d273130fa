//! Bevy plugin that wires the replay driver into a host app.
//!
//! The host signals placement by sending `TargetAcquired` with the entity to
//! animate; everything else (session loading, the tick timer, transform
//! mutation) is owned here.

use std::path::Path;

use bevy::prelude::*;

use crate::config::{DEFAULT_SESSION_FILE, DEFAULT_UPDATE_INTERVAL};
use crate::driver::{MotionMode, ReplayDriver, ReplayState};
use crate::session::{load_session_file, TelemetrySession};

/// Host-facing configuration, read once at startup.
#[derive(Resource, Debug, Clone)]
pub struct ReplaySettings {
    /// Tick cadence in seconds.
    pub update_interval: f32,
    pub motion: MotionMode,
    /// Path of the telemetry session file to load.
    pub session_file: String,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            update_interval: DEFAULT_UPDATE_INTERVAL,
            motion: MotionMode::Instant,
            session_file: DEFAULT_SESSION_FILE.to_string(),
        }
    }
}

/// Sent by the placement subsystem once a positionable object exists.
/// This is the only input the driver needs from placement.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetAcquired {
    pub entity: Entity,
}

/// The loaded sample sequence. Stays empty when loading fails, which keeps
/// the driver in `Idle` forever.
#[derive(Resource, Default)]
pub struct SessionStore(pub TelemetrySession);

/// The entity currently being animated, once placement happened.
#[derive(Resource, Default)]
pub struct ReplayTargetHandle(pub Option<Entity>);

/// Repeating timer that paces `drive_replay`. Only ticks while running, so
/// the first sample applies one full interval after the replay starts.
#[derive(Resource)]
pub struct ReplayTick(pub Timer);

pub struct ReplayPlugin;

impl Plugin for ReplayPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ReplaySettings>() {
            app.init_resource::<ReplaySettings>();
        }
        app.init_resource::<SessionStore>();
        app.init_resource::<ReplayTargetHandle>();
        app.add_event::<TargetAcquired>();

        app.add_systems(Startup, (load_session, setup_replay));
        app.add_systems(Update, (acquire_target, drive_replay).chain());
    }
}

/// Startup: read the configured session file. Failure is logged and
/// non-fatal; the store stays empty and the replay never starts.
pub fn load_session(settings: Res<ReplaySettings>, mut store: ResMut<SessionStore>) {
    match load_session_file(Path::new(&settings.session_file)) {
        Ok(session) => {
            info!(
                "Loaded telemetry session '{}': {} samples",
                settings.session_file,
                session.len()
            );
            store.0 = session;
        }
        Err(e) => error!("Failed to load telemetry session: {e}"),
    }
}

/// Startup: build the driver and its tick timer from the settings.
pub fn setup_replay(mut commands: Commands, settings: Res<ReplaySettings>) {
    commands.insert_resource(ReplayDriver::new(settings.motion));
    commands.insert_resource(ReplayTick(Timer::from_seconds(
        settings.update_interval,
        TimerMode::Repeating,
    )));
}

/// Consume `TargetAcquired` events. The first event with a non-empty session
/// starts the replay; the driver is single-shot, so later events are ignored.
pub fn acquire_target(
    mut events: EventReader<TargetAcquired>,
    store: Res<SessionStore>,
    mut driver: ResMut<ReplayDriver>,
    mut handle: ResMut<ReplayTargetHandle>,
) {
    for event in events.read() {
        if driver.state() != ReplayState::Idle {
            continue;
        }
        if store.0.is_empty() {
            warn!("Target placed but no telemetry session is loaded; replay will not start");
            continue;
        }
        handle.0 = Some(event.entity);
        driver.begin();
        info!("Replay started: {} samples", store.0.len());
    }
}

/// Advance the replay whenever the tick timer completes.
///
/// Best-effort cadence: one advance per completion, no drift correction or
/// catch-up. If the target entity is gone (host teardown), the tick is
/// silently skipped.
pub fn drive_replay(
    time: Res<Time>,
    mut tick: ResMut<ReplayTick>,
    mut driver: ResMut<ReplayDriver>,
    store: Res<SessionStore>,
    handle: Res<ReplayTargetHandle>,
    mut transforms: Query<&mut Transform>,
) {
    if driver.state() != ReplayState::Running {
        return;
    }
    tick.0.tick(time.delta());
    if !tick.0.just_finished() {
        return;
    }

    let Some(entity) = handle.0 else {
        return;
    };
    let Ok(mut transform) = transforms.get_mut(entity) else {
        return;
    };

    let dt = tick.0.duration().as_secs_f32();
    driver.advance(store.0.samples(), &mut *transform, dt);

    if driver.is_finished() {
        info!("Replay finished after {} samples", driver.cursor());
    }
}
