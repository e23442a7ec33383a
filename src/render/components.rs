use bevy::prelude::*;

/// Parent of every entity drawn for the figure; despawned on redraw.
#[derive(Component)]
pub struct FigureRoot;

/// Marker for the perspective camera orbiting the data volume.
#[derive(Component)]
pub struct SceneCamera;

/// Marker for the 2D camera drawing the title, color bar, and axis captions.
#[derive(Component)]
pub struct OverlayCamera;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Overlay text pinned to the screen projection of a world-space point.
#[derive(Component)]
pub struct Anchored3D {
    pub world: Vec3,
}

/// Orbit camera state for the 3D scene.
#[derive(Component, Clone, Copy, Debug)]
pub struct View3D {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for View3D {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 12.0,
            yaw: 0.8,    // initial horizontal rotation
            pitch: -0.4, // initial vertical angle (looking down slightly)
        }
    }
}
