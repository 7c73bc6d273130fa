//! Pointer placement: click the ground plane to spawn the car and hand it to
//! the replay driver; keep the button held to drag the placed pair around.

use bevy::prelude::*;

use replay::TargetAcquired;

use crate::scene::CarAssets;

/// The placed car entity (the replay target).
#[derive(Component)]
pub struct PlacedCar;

/// Track-origin marker placed alongside the car.
#[derive(Component)]
pub struct TrackMarker;

pub fn place_on_click(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    assets: Res<CarAssets>,
    car_q: Query<Entity, With<PlacedCar>>,
    mut placed: Query<&mut Transform, Or<(With<PlacedCar>, With<TrackMarker>)>>,
    mut acquired: EventWriter<TargetAcquired>,
) {
    if !buttons.pressed(MouseButton::Left) {
        return;
    }
    let Some(hit) = cursor_ground_hit(&windows, &camera_q) else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && car_q.is_empty() {
        let car = commands
            .spawn((
                PlacedCar,
                Mesh3d(assets.car_mesh.clone()),
                MeshMaterial3d(assets.car_material.clone()),
                Transform::from_translation(hit),
            ))
            .id();
        commands.spawn((
            TrackMarker,
            Mesh3d(assets.marker_mesh.clone()),
            MeshMaterial3d(assets.marker_material.clone()),
            Transform::from_translation(hit),
        ));
        acquired.send(TargetAcquired { entity: car });
    } else if !car_q.is_empty() {
        // Held pointer drags the placed pair to the cursor.
        for mut transform in &mut placed {
            transform.translation = hit;
        }
    }
}

/// Ray-plane intersection of the cursor ray against the Y=0 ground plane.
fn cursor_ground_hit(
    windows: &Query<&Window>,
    camera_q: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) -> Option<Vec3> {
    let window = windows.get_single().ok()?;
    let (camera, cam_transform) = camera_q.get_single().ok()?;
    let screen_pos = window.cursor_position()?;
    let ray = camera.viewport_to_world(cam_transform, screen_pos).ok()?;

    if ray.direction.y.abs() < 0.001 {
        return None;
    }
    let t = -ray.origin.y / ray.direction.y;
    (t > 0.0).then(|| ray.origin + ray.direction * t)
}
