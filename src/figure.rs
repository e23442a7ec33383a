use bevy_math::Vec3;

use crate::core::{Color, Colormap, Scatter3D, Style};
use crate::table::CostPoints;

/// Start building a 3D scatter figure.
pub fn fig() -> FigureBuilder {
    FigureBuilder {
        fig: Scatter3D::new(),
    }
}

pub struct FigureBuilder {
    fig: Scatter3D,
}

impl FigureBuilder {
    /// Set the point cloud and its color channel; the two must be aligned.
    pub fn points(mut self, xyz: Vec<Vec3>, values: Vec<f32>) -> Self {
        self.fig.xyz = xyz;
        self.fig.values = values;
        self
    }

    /// Plot a flattened cost table: x = capacity, y = floors, z = passengers,
    /// color = cost.
    pub fn cost_points(self, points: &CostPoints) -> Self {
        self.points(points.positions(), points.cost.clone())
    }

    pub fn style(mut self, style: Style) -> Self {
        self.fig.style = style;
        self
    }

    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.fig.colormap = colormap;
        self
    }

    pub fn background_color(mut self, c: Color) -> Self {
        self.fig.background = c;
        self
    }

    /// Set the figure title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.fig.meta.title = Some(title.into());
        self
    }

    /// Set the figure description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.fig.meta.description = Some(desc.into());
        self
    }

    /// Set the X-axis label
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.fig.x_label = Some(label.into());
        self
    }

    /// Set the Y-axis label
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.fig.y_label = Some(label.into());
        self
    }

    /// Set the Z-axis label
    pub fn z_label(mut self, label: impl Into<String>) -> Self {
        self.fig.z_label = Some(label.into());
        self
    }

    /// Set the caption drawn along the color bar
    pub fn colorbar_label(mut self, label: impl Into<String>) -> Self {
        self.fig.colorbar_label = Some(label.into());
        self
    }

    /// Set the OS window title
    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.fig.window_title = Some(title.into());
        self
    }

    /// Get the built figure without running it
    pub fn build(self) -> Scatter3D {
        self.fig
    }

    /// Open the window and block until it is closed
    pub fn show(self) {
        crate::runtime::run_figure(self.fig);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CostRecord, CostTable};

    #[test]
    fn builder_wires_labels_and_colormap() {
        let figure = fig()
            .title("Cost")
            .x_label("Lift Capacity")
            .y_label("Floor Number")
            .z_label("Passenger Number")
            .colorbar_label("Cost")
            .colormap(Colormap::Hot)
            .build();

        assert_eq!(figure.meta.title.as_deref(), Some("Cost"));
        assert_eq!(figure.x_label.as_deref(), Some("Lift Capacity"));
        assert_eq!(figure.y_label.as_deref(), Some("Floor Number"));
        assert_eq!(figure.z_label.as_deref(), Some("Passenger Number"));
        assert_eq!(figure.colorbar_label.as_deref(), Some("Cost"));
        assert_eq!(figure.colormap, Colormap::Hot);
    }

    #[test]
    fn cost_points_follow_the_axis_mapping() {
        let mut table = CostTable::new();
        table.insert(500, 20, 40, CostRecord { cost: 3.5, moves: 140, served: 40 });
        let points = table.flatten();

        let figure = fig().cost_points(&points).build();
        assert_eq!(figure.xyz.len(), 1);
        assert_eq!(figure.xyz[0], Vec3::new(500.0, 20.0, 40.0));
        assert_eq!(figure.values, vec![3.5]);
    }

    #[test]
    fn figure_point_count_matches_table_leaves() {
        let mut table = CostTable::new();
        for capacity in [500, 750] {
            for floors in [5, 10, 15] {
                table.insert(capacity, floors, 10, CostRecord::default());
            }
        }
        let figure = fig().cost_points(&table.flatten()).build();
        assert_eq!(figure.xyz.len(), table.len());
        assert_eq!(figure.values.len(), table.len());
    }
}
