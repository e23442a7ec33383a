use bevy::prelude::*;

use crate::core::Scatter3D;
use crate::render::{FigureRenderPlugin, FigureRes};

/// Open a window showing the figure; blocks until the window is closed.
pub fn run_figure(figure: Scatter3D) {
    let bg = figure.background;
    let window_title = figure
        .window_title
        .clone()
        .or_else(|| {
            figure
                .meta
                .title
                .as_deref()
                .map(|t| t.lines().next().unwrap_or(t).to_owned())
        })
        .unwrap_or_else(|| "liftgraph".to_owned());

    App::new()
        .insert_resource(ClearColor(Color::srgb(bg.r, bg.g, bg.b)))
        .insert_resource(FigureRes::new(figure))
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window_title,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
            FigureRenderPlugin,
        ))
        .run();
}
