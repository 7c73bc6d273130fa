//! Demo scene: camera, light, ground plane, and the assets spawned when the
//! car is placed.

use bevy::prelude::*;

/// Mesh/material handles for the placeable car and its track-origin marker.
#[derive(Resource)]
pub struct CarAssets {
    pub car_mesh: Handle<Mesh>,
    pub car_material: Handle<StandardMaterial>,
    pub marker_mesh: Handle<Mesh>,
    pub marker_material: Handle<StandardMaterial>,
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 2.5, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));

    let ground = meshes.add(Plane3d::default().mesh().size(20.0, 20.0));
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.24, 0.28, 0.24),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((Mesh3d(ground), MeshMaterial3d(ground_material)));

    // Car proxy sized for scene units (telemetry coordinates / 1500).
    let car_mesh = meshes.add(Cuboid::new(0.05, 0.03, 0.11));
    let car_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.1, 0.1),
        ..default()
    });
    let marker_mesh = meshes.add(Cylinder::new(0.08, 0.005));
    let marker_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.2, 0.4, 0.9, 0.5),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.insert_resource(CarAssets {
        car_mesh,
        car_material,
        marker_mesh,
        marker_material,
    });
}
