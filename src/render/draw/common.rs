//! Shared drawing utilities.

use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

/// Calculate nice tick step for given range.
pub fn nice_step(range: f32, target_ticks: usize) -> f32 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let rough = range / target_ticks as f32;
    let exp = rough.log10().floor();
    let base = 10f32.powf(exp);

    let normalized = rough / base;
    let nice = if normalized <= 1.5 {
        1.0
    } else if normalized <= 3.0 {
        2.0
    } else if normalized <= 7.0 {
        5.0
    } else {
        10.0
    };

    (nice * base).max(0.001)
}

/// Format tick value for display.
pub fn format_tick(val: f32) -> String {
    if val.abs() < 0.001 && val != 0.0 {
        format!("{:.1e}", val)
    } else if val.abs() >= 1000.0 {
        format!("{:.1e}", val)
    } else if val.fract().abs() < 0.001 {
        format!("{:.0}", val)
    } else if val.abs() < 1.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.1}", val)
    }
}

/// Draw the figure title (and description) centered at the top of the window.
pub fn draw_title(
    commands: &mut Commands,
    root: Entity,
    meta: &crate::core::PlotMeta,
    window: &Window,
    layers: RenderLayers,
) {
    if meta.title.is_none() && meta.description.is_none() {
        return;
    }

    let top_y = window.height() * 0.5 - 30.0;

    commands.entity(root).with_children(|parent| {
        if let Some(title) = &meta.title {
            parent.spawn((
                Text2d::new(title.clone()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.95)),
                Transform::from_translation(Vec3::new(0.0, top_y, 3.0)),
                layers.clone(),
            ));
        }

        if let Some(desc) = &meta.description {
            // Multi-line titles push the description further down
            let lines = meta.title.as_deref().map_or(0, |t| t.lines().count());
            let desc_y = top_y - 20.0 * lines.max(1) as f32;
            parent.spawn((
                Text2d::new(desc.clone()),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::srgba(0.7, 0.7, 0.7, 0.85)),
                Transform::from_translation(Vec3::new(0.0, desc_y, 3.0)),
                layers,
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_picks_round_values() {
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(100.0, 5), 20.0);
        assert_eq!(nice_step(7.0, 10), 1.0);
        assert_eq!(nice_step(2500.0, 5), 500.0);
    }

    #[test]
    fn nice_step_handles_degenerate_ranges() {
        assert_eq!(nice_step(0.0, 5), 1.0);
        assert_eq!(nice_step(-3.0, 5), 1.0);
        assert_eq!(nice_step(f32::NAN, 5), 1.0);
    }

    #[test]
    fn format_tick_adapts_to_magnitude() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(5.0), "5");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(12.5), "12.5");
        assert_eq!(format_tick(2500.0), "2.5e3");
    }
}
