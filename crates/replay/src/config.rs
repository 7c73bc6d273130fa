/// Recording units per scene unit. Telemetry coordinates are in a unit 1500x
/// larger than scene units; this is a calibration constant of the recording
/// format, not derived at runtime.
pub const POSITION_SCALE: f32 = 1500.0;

/// Fixed rotation about the X axis that remaps the recording's up-axis
/// convention into the scene's.
pub const AXIS_REMAP_DEGREES: f32 = 90.0;

/// The visual asset's forward axis is modeled pointing opposite to the
/// direction of travel; every facing is composed with this yaw correction.
pub const MODEL_YAW_CORRECTION_DEGREES: f32 = 180.0;

/// Default tick cadence in seconds.
pub const DEFAULT_UPDATE_INTERVAL: f32 = 0.05;

/// Default damping time constant for the smoothed motion mode, in seconds.
pub const DEFAULT_SMOOTH_TIME: f32 = 0.1;

/// Default path of the telemetry session file, relative to the working dir.
pub const DEFAULT_SESSION_FILE: &str = "assets/location.json";
