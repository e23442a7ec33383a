//! 3D coordinate axes with grids on the floor and back walls.

use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

use crate::render::components::Axis;

/// Half extent of the normalized data volume.
pub const HALF_SIZE: f32 = 2.5;
/// Axis length; slightly longer than the data to show axis tips.
pub const AXIS_LEN: f32 = 5.5;

/// World position of an axis tip, where its overlay caption is pinned.
pub fn axis_tip(axis: Axis) -> Vec3 {
    let origin = Vec3::splat(-HALF_SIZE);
    let reach = AXIS_LEN + 0.45;
    match axis {
        Axis::X => origin + Vec3::new(reach, 0.0, 0.0),
        Axis::Y => origin + Vec3::new(0.0, reach, 0.0),
        Axis::Z => origin + Vec3::new(0.0, 0.0, reach),
    }
}

/// Draw the three axes, their tip markers, and wall grids.
pub fn draw_axes(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layers: RenderLayers,
) {
    let thickness = 0.025;
    let grid_step = 1.0;
    let origin = Vec3::splat(-HALF_SIZE);

    let mat_x = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.3, 0.3),
        emissive: Color::srgb(0.8, 0.2, 0.2).into(),
        unlit: true,
        ..default()
    });
    let mat_y = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 1.0, 0.3),
        emissive: Color::srgb(0.2, 0.8, 0.2).into(),
        unlit: true,
        ..default()
    });
    let mat_z = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.5, 1.0),
        emissive: Color::srgb(0.2, 0.3, 0.8).into(),
        unlit: true,
        ..default()
    });
    let mat_grid = materials.add(StandardMaterial {
        base_color: Color::srgba(0.4, 0.4, 0.45, 0.5),
        unlit: true,
        ..default()
    });
    let mat_origin = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 1.0),
        emissive: Color::srgb(0.5, 0.5, 0.5).into(),
        unlit: true,
        ..default()
    });

    let tip_mesh = meshes.add(Sphere::new(0.12));

    // X axis (red)
    let mesh_x = meshes.add(Cuboid::new(AXIS_LEN, thickness, thickness));
    spawn_part(
        commands,
        root,
        mesh_x,
        mat_x.clone(),
        origin + Vec3::new(AXIS_LEN * 0.5, 0.0, 0.0),
        layers.clone(),
    );
    spawn_part(
        commands,
        root,
        tip_mesh.clone(),
        mat_x,
        origin + Vec3::new(AXIS_LEN + 0.15, 0.0, 0.0),
        layers.clone(),
    );

    // Y axis (green)
    let mesh_y = meshes.add(Cuboid::new(thickness, AXIS_LEN, thickness));
    spawn_part(
        commands,
        root,
        mesh_y,
        mat_y.clone(),
        origin + Vec3::new(0.0, AXIS_LEN * 0.5, 0.0),
        layers.clone(),
    );
    spawn_part(
        commands,
        root,
        tip_mesh.clone(),
        mat_y,
        origin + Vec3::new(0.0, AXIS_LEN + 0.15, 0.0),
        layers.clone(),
    );

    // Z axis (blue)
    let mesh_z = meshes.add(Cuboid::new(thickness, thickness, AXIS_LEN));
    spawn_part(
        commands,
        root,
        mesh_z,
        mat_z.clone(),
        origin + Vec3::new(0.0, 0.0, AXIS_LEN * 0.5),
        layers.clone(),
    );
    spawn_part(
        commands,
        root,
        tip_mesh,
        mat_z,
        origin + Vec3::new(0.0, 0.0, AXIS_LEN + 0.15),
        layers.clone(),
    );

    // Origin marker
    let origin_mesh = meshes.add(Sphere::new(0.08));
    spawn_part(commands, root, origin_mesh, mat_origin, origin, layers.clone());

    // Wall grids over the full volume
    let grid_thick = thickness * 0.4;
    let full_len = HALF_SIZE * 2.0;
    let n_lines = (HALF_SIZE / grid_step).ceil() as i32;

    for i in -n_lines..=n_lines {
        let offset = i as f32 * grid_step;

        // XZ floor grid (y = -HALF_SIZE)
        let mesh = meshes.add(Cuboid::new(full_len, grid_thick, grid_thick));
        spawn_part(
            commands,
            root,
            mesh,
            mat_grid.clone(),
            Vec3::new(0.0, -HALF_SIZE, offset),
            layers.clone(),
        );
        let mesh = meshes.add(Cuboid::new(grid_thick, grid_thick, full_len));
        spawn_part(
            commands,
            root,
            mesh,
            mat_grid.clone(),
            Vec3::new(offset, -HALF_SIZE, 0.0),
            layers.clone(),
        );

        // XY back wall grid (z = -HALF_SIZE)
        let mesh = meshes.add(Cuboid::new(full_len, grid_thick, grid_thick));
        spawn_part(
            commands,
            root,
            mesh,
            mat_grid.clone(),
            Vec3::new(0.0, offset, -HALF_SIZE),
            layers.clone(),
        );
        let mesh = meshes.add(Cuboid::new(grid_thick, full_len, grid_thick));
        spawn_part(
            commands,
            root,
            mesh,
            mat_grid.clone(),
            Vec3::new(offset, 0.0, -HALF_SIZE),
            layers.clone(),
        );

        // YZ side wall grid (x = -HALF_SIZE)
        let mesh = meshes.add(Cuboid::new(grid_thick, grid_thick, full_len));
        spawn_part(
            commands,
            root,
            mesh,
            mat_grid.clone(),
            Vec3::new(-HALF_SIZE, offset, 0.0),
            layers.clone(),
        );
        let mesh = meshes.add(Cuboid::new(grid_thick, full_len, grid_thick));
        spawn_part(
            commands,
            root,
            mesh,
            mat_grid.clone(),
            Vec3::new(-HALF_SIZE, 0.0, offset),
            layers.clone(),
        );
    }
}

fn spawn_part(
    commands: &mut Commands,
    root: Entity,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    translation: Vec3,
    layers: RenderLayers,
) {
    let entity = commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(translation),
            layers,
        ))
        .id();
    commands.entity(root).add_child(entity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_tips_sit_past_the_axis_ends() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let tip = axis_tip(axis);
            let reach = (tip - Vec3::splat(-HALF_SIZE)).length();
            assert!(reach > AXIS_LEN);
        }
    }
}
