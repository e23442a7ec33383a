//! 3D scatter rendering: lights plus one colormapped sphere per point.

use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

use super::axes::HALF_SIZE;

/// Draw the point cloud with lighting.
pub fn draw_scatter(
    commands: &mut Commands,
    root: Entity,
    figure: &crate::core::Scatter3D,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layers: RenderLayers,
) {
    spawn_lights(commands, root, layers.clone());

    let Some(bounds) = figure.bounds() else {
        return;
    };

    let radius = (figure.style.size * 0.04).max(0.08);
    let sphere_mesh = meshes.add(Sphere::new(radius));

    for (i, &pt) in figure.xyz.iter().enumerate() {
        if !pt.x.is_finite() || !pt.y.is_finite() || !pt.z.is_finite() {
            continue;
        }

        let c = figure.point_color(i);
        let alpha = c.a * figure.style.opacity;
        // Subtle emissive for visibility without being too bright
        let mat = materials.add(StandardMaterial {
            base_color: Color::srgba(c.r, c.g, c.b, alpha),
            emissive: Color::srgb(c.r * 0.3, c.g * 0.3, c.b * 0.3).into(),
            perceptual_roughness: 0.4,
            metallic: 0.2,
            ..default()
        });

        let entity = commands
            .spawn((
                Mesh3d(sphere_mesh.clone()),
                MeshMaterial3d(mat),
                Transform::from_translation(normalize_point(pt, &bounds)),
                layers.clone(),
            ))
            .id();
        commands.entity(root).add_child(entity);
    }
}

/// Normalize a data point into the standard viewing volume.
pub fn normalize_point(pt: Vec3, bounds: &([f32; 3], [f32; 3])) -> Vec3 {
    let (min, max) = bounds;
    let scale = HALF_SIZE * 2.0;
    let span = |lo: f32, hi: f32| (hi - lo).max(1e-6);
    Vec3::new(
        (pt.x - min[0]) / span(min[0], max[0]) * scale - scale * 0.5,
        (pt.y - min[1]) / span(min[1], max[1]) * scale - scale * 0.5,
        (pt.z - min[2]) / span(min[2], max[2]) * scale - scale * 0.5,
    )
}

fn spawn_lights(commands: &mut Commands, root: Entity, layers: RenderLayers) {
    // Key light (main, from top-front-right)
    let light1 = commands
        .spawn((
            PointLight {
                intensity: 800000.0,
                range: 100.0,
                color: Color::srgb(1.0, 0.98, 0.95),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_xyz(8.0, 12.0, 8.0),
            layers.clone(),
        ))
        .id();
    commands.entity(root).add_child(light1);

    // Fill light (softer, from opposite side)
    let light2 = commands
        .spawn((
            PointLight {
                intensity: 350000.0,
                range: 100.0,
                color: Color::srgb(0.9, 0.95, 1.0),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_xyz(-6.0, 8.0, -6.0),
            layers.clone(),
        ))
        .id();
    commands.entity(root).add_child(light2);

    // Rim light (from behind for edge definition)
    let light3 = commands
        .spawn((
            PointLight {
                intensity: 200000.0,
                range: 100.0,
                color: Color::srgb(1.0, 1.0, 1.0),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_xyz(0.0, -5.0, -10.0),
            layers,
        ))
        .id();
    commands.entity(root).add_child(light3);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_points_fill_the_volume() {
        let bounds = ([500.0, 5.0, 5.0], [3000.0, 300.0, 1000.0]);
        let lo = normalize_point(Vec3::new(500.0, 5.0, 5.0), &bounds);
        let hi = normalize_point(Vec3::new(3000.0, 300.0, 1000.0), &bounds);
        assert_eq!(lo, Vec3::splat(-HALF_SIZE));
        assert_eq!(hi, Vec3::splat(HALF_SIZE));
    }

    #[test]
    fn degenerate_axis_does_not_divide_by_zero() {
        let bounds = ([1.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let p = normalize_point(Vec3::new(1.0, 0.5, 0.5), &bounds);
        assert!(p.x.is_finite());
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }
}
