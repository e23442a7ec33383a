//! Color bar: a vertical gradient strip mapping the value range to the ramp.

use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

use super::common::format_tick;
use crate::render::UnitMeshes;

const SEGMENTS: usize = 48;

/// Draw the color bar along the right edge of the window.
pub fn draw_colorbar(
    commands: &mut Commands,
    root: Entity,
    figure: &crate::core::Scatter3D,
    window: &Window,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    layers: RenderLayers,
) {
    let Some((vmin, vmax)) = figure.value_range() else {
        return;
    };

    let bar_height = window.height() * 0.55;
    let bar_width = 18.0;
    let bar_x = window.width() * 0.5 - 70.0;
    let bar_bottom = -bar_height * 0.5;
    let segment_height = bar_height / SEGMENTS as f32;

    commands.entity(root).with_children(|parent| {
        for i in 0..SEGMENTS {
            let t = (i as f32 + 0.5) / SEGMENTS as f32;
            let c = figure.colormap.sample(t);
            let mat = materials.add(ColorMaterial::from(Color::srgba(c.r, c.g, c.b, c.a)));

            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(mat),
                Transform {
                    translation: Vec3::new(
                        bar_x,
                        bar_bottom + (i as f32 + 0.5) * segment_height,
                        2.0,
                    ),
                    scale: Vec3::new(bar_width, segment_height + 0.5, 1.0),
                    ..default()
                },
                layers.clone(),
            ));
        }

        // Value labels at the bottom, middle, and top of the strip
        let label_x = bar_x + bar_width * 0.5 + 24.0;
        for (t, value) in [
            (0.0, vmin),
            (0.5, (vmin + vmax) * 0.5),
            (1.0, vmax),
        ] {
            parent.spawn((
                Text2d::new(format_tick(value)),
                TextFont {
                    font_size: 10.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 0.9)),
                Transform::from_translation(Vec3::new(
                    label_x,
                    bar_bottom + t * bar_height,
                    3.0,
                )),
                layers.clone(),
            ));
        }

        // Caption rotated alongside the strip
        if let Some(label) = &figure.colorbar_label {
            parent.spawn((
                Text2d::new(label.clone()),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.9)),
                Transform {
                    translation: Vec3::new(label_x + 28.0, 0.0, 3.0),
                    rotation: Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2),
                    ..default()
                },
                layers.clone(),
            ));
        }
    });
}
