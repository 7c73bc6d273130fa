use bevy::prelude::*;
use bevy::window::PresentMode;

use replay::config::DEFAULT_SMOOTH_TIME;
use replay::{MotionMode, ReplayPlugin, ReplaySettings};

mod placement;
mod scene;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Trackside".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(settings_from_args())
    .add_plugins(ReplayPlugin)
    .add_systems(Startup, scene::setup_scene)
    .add_systems(Update, placement::place_on_click);

    app.run();
}

/// Build `ReplaySettings` from the command line.
///
/// `--session <path>` telemetry file, `--interval <secs>` tick cadence,
/// `--smooth` smoothed motion with the default time constant,
/// `--smooth-time <secs>` smoothed motion with an explicit one.
fn settings_from_args() -> ReplaySettings {
    let mut settings = ReplaySettings::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--session" => {
                if let Some(path) = args.next() {
                    settings.session_file = path;
                }
            }
            "--interval" => {
                if let Some(secs) = args.next().and_then(|s| s.parse().ok()) {
                    settings.update_interval = secs;
                }
            }
            "--smooth" => {
                settings.motion = MotionMode::Smoothed {
                    smooth_time: DEFAULT_SMOOTH_TIME,
                };
            }
            "--smooth-time" => {
                if let Some(secs) = args.next().and_then(|s| s.parse().ok()) {
                    settings.motion = MotionMode::Smoothed { smooth_time: secs };
                }
            }
            other => eprintln!("Ignoring unknown argument '{other}'"),
        }
    }
    settings
}
