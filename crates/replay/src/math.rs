//! Scene math for the replay path: recording-to-scene remap, travel facing,
//! and critically-damped position smoothing.

use bevy::math::{Mat3, Quat, Vec3};

use crate::config::{AXIS_REMAP_DEGREES, MODEL_YAW_CORRECTION_DEGREES, POSITION_SCALE};

/// The fixed rotation remapping the recording's axis convention into the
/// scene's (90 degrees about X: the recording's Y becomes the scene's Z).
pub fn axis_remap() -> Quat {
    Quat::from_rotation_x(AXIS_REMAP_DEGREES.to_radians())
}

/// Convert a raw recorded position into scene space: scale down by
/// `POSITION_SCALE`, then apply the axis remap.
pub fn recording_to_scene(raw: Vec3) -> Vec3 {
    axis_remap() * (raw / POSITION_SCALE)
}

/// Orientation that points local +Z along `forward`, with roll resolved by
/// `up`. Returns identity when `forward` is (nearly) collinear with `up`,
/// where the roll is undefined.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize();
    let right = up.cross(forward);
    if right.length_squared() < 1e-8 {
        return Quat::IDENTITY;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Facing for an object travelling along `direction`: a Y-up look rotation
/// composed with the model's 180-degree yaw correction.
pub fn travel_rotation(direction: Vec3) -> Quat {
    look_rotation(direction, Vec3::Y) * Quat::from_rotation_y(MODEL_YAW_CORRECTION_DEGREES.to_radians())
}

/// Advance `current` toward `target` with a critically-damped spring.
///
/// `velocity` persists across calls and must be reset to zero when a new
/// approach starts. Never overshoots: if the spring step would cross the
/// target it lands exactly on it and the velocity is zeroed.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;

    // Padé-style approximation of e^-x, stable for the step sizes a tick sees.
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * exp;
    let output = target + (change + temp) * exp;

    // Overshoot clamp
    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec3::ZERO;
        return target;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "expected {b}, got {a}");
    }

    #[test]
    fn scale_divides_by_calibration_constant() {
        // X is the rotation axis, so it passes through the remap unchanged.
        assert_vec3_eq(recording_to_scene(Vec3::new(1500.0, 0.0, 0.0)), Vec3::X);
        assert_vec3_eq(recording_to_scene(Vec3::new(3000.0, 0.0, 0.0)), Vec3::X * 2.0);
    }

    #[test]
    fn axis_remap_matches_rotation_matrix() {
        // 90 degrees about X: Y -> Z, Z -> -Y.
        assert_vec3_eq(recording_to_scene(Vec3::new(0.0, 1500.0, 0.0)), Vec3::Z);
        assert_vec3_eq(recording_to_scene(Vec3::new(0.0, 0.0, 1500.0)), -Vec3::Y);
    }

    #[test]
    fn look_rotation_points_z_along_forward() {
        let q = look_rotation(Vec3::X, Vec3::Y);
        assert_vec3_eq(q * Vec3::Z, Vec3::X);
        assert_vec3_eq(q * Vec3::Y, Vec3::Y);
    }

    #[test]
    fn look_rotation_degenerate_up_is_identity() {
        assert_eq!(look_rotation(Vec3::Y, Vec3::Y), Quat::IDENTITY);
    }

    #[test]
    fn travel_rotation_flips_model_forward() {
        // The yaw correction turns the model's +Z away from travel.
        let q = travel_rotation(Vec3::X);
        assert_vec3_eq(q * Vec3::Z, -Vec3::X);
    }

    #[test]
    fn smooth_damp_never_overshoots() {
        let target = Vec3::new(1.0, 0.0, 0.0);
        let mut velocity = Vec3::ZERO;
        let mut position = Vec3::ZERO;
        for _ in 0..200 {
            let before = position;
            position = smooth_damp(position, target, &mut velocity, 0.1, 0.05);
            assert!(position.x >= before.x, "must move toward the target");
            assert!(position.x <= target.x, "must not overshoot");
        }
        assert_vec3_eq(position, target);
    }

    #[test]
    fn smooth_damp_first_step_is_strictly_between() {
        let target = Vec3::new(0.0, 0.0, 2.0);
        let mut velocity = Vec3::ZERO;
        let next = smooth_damp(Vec3::ZERO, target, &mut velocity, 0.1, 0.05);
        assert!(next.z > 0.0 && next.z < 2.0);
    }

    #[test]
    fn smooth_damp_clamps_inherited_overshoot_velocity() {
        // A large carried velocity would fly past the target in one step.
        let target = Vec3::new(0.1, 0.0, 0.0);
        let mut velocity = Vec3::new(100.0, 0.0, 0.0);
        let next = smooth_damp(Vec3::ZERO, target, &mut velocity, 0.1, 0.05);
        assert_vec3_eq(next, target);
        assert_eq!(velocity, Vec3::ZERO);
    }
}
