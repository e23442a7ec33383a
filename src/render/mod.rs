pub mod components;
pub mod draw;
pub mod resources;
pub mod systems;

use components::*;
use draw::*;
pub use resources::*;
use systems::*;

use bevy::prelude::*;

#[derive(Default)]
pub struct FigureRenderPlugin;

impl Plugin for FigureRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneState>()
            .add_systems(Startup, (setup_scene, setup_unit_meshes))
            .add_systems(
                Update,
                (
                    draw_figure,
                    watch_window,
                    orbit_input,
                    sync_scene_camera,
                    update_axis_captions,
                ),
            );
    }
}
