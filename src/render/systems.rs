use super::*;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_camera::visibility::RenderLayers;

use super::components::{Anchored3D, Axis, FigureRoot, SceneCamera, View3D};

/// Spawn the whole scene once the unit meshes exist; reruns after a resize.
pub fn draw_figure(
    mut commands: Commands,
    mut state: ResMut<SceneState>,
    figure: Res<FigureRes>,
    unit: Option<Res<UnitMeshes>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut color_materials: ResMut<Assets<ColorMaterial>>,
) {
    if state.drawn {
        return;
    }
    let Some(unit) = unit else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    let root = commands
        .spawn((FigureRoot, Transform::default(), Visibility::default()))
        .id();

    let scene_layers = RenderLayers::layer(SCENE_LAYER);
    draw_scatter(
        &mut commands,
        root,
        &figure.0,
        &mut meshes,
        &mut materials,
        scene_layers.clone(),
    );
    draw_axes(&mut commands, root, &mut meshes, &mut materials, scene_layers);

    let overlay_layers = RenderLayers::layer(OVERLAY_LAYER);
    draw_title(&mut commands, root, &figure.0.meta, window, overlay_layers.clone());
    draw_colorbar(
        &mut commands,
        root,
        &figure.0,
        window,
        &unit,
        &mut color_materials,
        overlay_layers.clone(),
    );
    spawn_axis_captions(&mut commands, root, &figure.0, overlay_layers.clone());
    spawn_axis_ticks(&mut commands, root, &figure.0, overlay_layers);

    state.drawn = true;
    state.window_size = Vec2::new(window.width(), window.height());
}

/// Overlay captions repositioned every frame by [`update_axis_captions`].
fn spawn_axis_captions(
    commands: &mut Commands,
    root: Entity,
    figure: &crate::core::Scatter3D,
    layers: RenderLayers,
) {
    let captions = [
        (Axis::X, figure.x_label.as_deref().unwrap_or("X")),
        (Axis::Y, figure.y_label.as_deref().unwrap_or("Y")),
        (Axis::Z, figure.z_label.as_deref().unwrap_or("Z")),
    ];

    commands.entity(root).with_children(|parent| {
        for (axis, text) in captions {
            parent.spawn((
                Anchored3D {
                    world: axis_tip(axis),
                },
                Text2d::new(text.to_owned()),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgba(0.9, 0.9, 0.9, 0.95)),
                Transform::from_translation(Vec3::new(0.0, 0.0, 4.0)),
                layers.clone(),
            ));
        }
    });
}

/// Numeric tick labels along the bottom edges of the data volume.
fn spawn_axis_ticks(
    commands: &mut Commands,
    root: Entity,
    figure: &crate::core::Scatter3D,
    layers: RenderLayers,
) {
    let Some((min, max)) = figure.bounds() else {
        return;
    };

    const H: f32 = HALF_SIZE;
    // (component index, tick anchor along that axis edge)
    let edges: [(usize, fn(f32) -> Vec3); 3] = [
        (0, |t| Vec3::new(-H + t * 2.0 * H, -H - 0.3, H + 0.3)),
        (1, |t| Vec3::new(-H - 0.35, -H + t * 2.0 * H, -H - 0.35)),
        (2, |t| Vec3::new(-H - 0.35, -H - 0.3, -H + t * 2.0 * H)),
    ];

    commands.entity(root).with_children(|parent| {
        for (i, anchor) in edges {
            let span = max[i] - min[i];
            if span <= 0.0 {
                continue;
            }
            let step = nice_step(span, 5);
            let mut value = (min[i] / step).ceil() * step;
            // Small epsilon so the top tick survives float accumulation
            while value <= max[i] + step * 1e-3 {
                let t = (value - min[i]) / span;
                parent.spawn((
                    Anchored3D { world: anchor(t) },
                    Text2d::new(format_tick(value)),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(Color::srgba(0.7, 0.7, 0.7, 0.9)),
                    Transform::from_translation(Vec3::new(0.0, 0.0, 4.0)),
                    layers.clone(),
                ));
                value += step;
            }
        }
    });
}

/// Tear the scene down when the window is resized so it is rebuilt to fit.
pub fn watch_window(
    mut commands: Commands,
    mut state: ResMut<SceneState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    roots: Query<Entity, With<FigureRoot>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if !state.drawn || size == state.window_size {
        return;
    }

    for root in roots.iter() {
        commands.entity(root).try_despawn();
    }
    state.drawn = false;
}

/// Orbit (drag) and zoom (wheel) per the figure's interaction flags.
pub fn orbit_input(
    figure: Res<FigureRes>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut wheel: MessageReader<MouseWheel>,
    mut motion: MessageReader<MouseMotion>,
    mut views: Query<&mut View3D, With<SceneCamera>>,
) {
    let mut zoom = 0.0;
    for event in wheel.read() {
        zoom += event.y;
    }

    let mut delta = Vec2::ZERO;
    if mouse.pressed(MouseButton::Left) {
        for event in motion.read() {
            delta += event.delta;
        }
    }

    let Ok(mut view) = views.single_mut() else {
        return;
    };

    if figure.0.interaction.zoom && zoom != 0.0 {
        view.radius = (view.radius - zoom * 0.5).clamp(4.0, 60.0);
    }

    if figure.0.interaction.rotate && delta != Vec2::ZERO {
        view.yaw -= delta.x * 0.01;
        view.pitch = (view.pitch - delta.y * 0.01).clamp(-1.5, 1.5);
    }
}

/// Place the camera on its orbit around the target.
pub fn sync_scene_camera(mut cameras: Query<(&View3D, &mut Transform), With<SceneCamera>>) {
    for (view, mut transform) in cameras.iter_mut() {
        let cy = view.yaw.cos();
        let sy = view.yaw.sin();
        let cp = view.pitch.cos();
        let sp = view.pitch.sin();

        let dir = Vec3::new(sy * cp, sp, cy * cp);
        let pos = view.target + dir * view.radius;
        *transform = Transform::from_translation(pos).looking_at(view.target, Vec3::Y);
    }
}

/// Pin each anchored overlay text to the screen position of its world anchor.
pub fn update_axis_captions(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut captions: Query<(&Anchored3D, &mut Transform, &mut Visibility)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (anchor, mut transform, mut visibility) in captions.iter_mut() {
        match camera.world_to_viewport(camera_transform, anchor.world) {
            Ok(screen) => {
                // Viewport coords have y down; overlay world coords are centered
                transform.translation.x = screen.x - window.width() * 0.5;
                transform.translation.y = window.height() * 0.5 - screen.y;
                *visibility = Visibility::Visible;
            }
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
