use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;
use bevy_camera::{ClearColorConfig, PerspectiveProjection, Projection};

use super::components::{OverlayCamera, SceneCamera, View3D};

/// Layer for the 3D scene (points, axes, lights).
pub const SCENE_LAYER: usize = 1;
/// Layer for 2D overlay elements (title, color bar, captions).
pub const OVERLAY_LAYER: usize = 0;

#[derive(Resource, Clone)]
pub struct FigureRes(pub crate::core::Scatter3D);

impl FigureRes {
    pub fn new(figure: crate::core::Scatter3D) -> Self {
        Self(figure)
    }
}

/// Tracks whether the scene has been spawned for the current window size.
#[derive(Resource, Default)]
pub struct SceneState {
    pub drawn: bool,
    pub window_size: Vec2,
}

#[derive(Resource)]
pub struct UnitMeshes {
    pub quad: Handle<Mesh>,
    pub sphere: Handle<Mesh>,
}

pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        brightness: 300.0,
        ..default()
    });

    // Perspective camera orbiting the normalized data volume
    commands.spawn((
        SceneCamera,
        View3D::default(),
        Camera3d::default(),
        Camera {
            order: 10,
            ..default()
        },
        Projection::from(PerspectiveProjection::default()),
        Transform::from_xyz(0.0, 0.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
        RenderLayers::layer(SCENE_LAYER),
    ));

    // Overlay camera renders after the scene and must not clear it
    commands.spawn((
        OverlayCamera,
        Camera2d::default(),
        Camera {
            order: 100,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        RenderLayers::layer(OVERLAY_LAYER),
    ));
}

pub fn setup_unit_meshes(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let quad = meshes.add(Mesh::from(Rectangle::new(1.0, 1.0)));
    let sphere = meshes.add(Mesh::from(Sphere::new(0.5)));
    commands.insert_resource(UnitMeshes { quad, sphere });
}
