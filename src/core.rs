use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// Common metadata for a figure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the figure
    pub title: Option<String>,
    /// Optional description displayed below the title
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
    pub const fn with_a(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
}

impl From<Color> for bevy::prelude::Color {
    #[inline]
    fn from(c: Color) -> Self {
        bevy::prelude::Color::linear_rgba(c.r, c.g, c.b, c.a)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub size: f32,    // point radius scale
    pub opacity: f32, // multiplied into alpha
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            size: 2.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Interaction {
    pub zoom: bool,
    pub rotate: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            zoom: true,
            rotate: true,
        }
    }
}

/// Color scale applied to per-point values.
///
/// `Hot` reproduces the classic black-red-yellow-white ramp; the others are
/// simple single-hue ramps.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Hot,
    Blues,
    Reds,
    Greens,
}

impl Colormap {
    /// Map value in [0, 1] to RGB color
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        match self {
            Colormap::Hot => Self::hot(t),
            Colormap::Blues => Self::blues(t),
            Colormap::Reds => Self::reds(t),
            Colormap::Greens => Self::greens(t),
        }
    }

    // Piecewise-linear hot ramp: red saturates first, then green, then blue.
    fn hot(t: f32) -> Color {
        const R_END: f32 = 0.365;
        const G_END: f32 = 0.746;
        let r = (t / R_END).min(1.0);
        let g = ((t - R_END) / (G_END - R_END)).clamp(0.0, 1.0);
        let b = ((t - G_END) / (1.0 - G_END)).clamp(0.0, 1.0);
        Color::rgb(r, g, b)
    }

    fn blues(t: f32) -> Color {
        Color::rgba(0.2, 0.5, 1.0, 0.2 + t * 0.7)
    }

    fn reds(t: f32) -> Color {
        Color::rgba(1.0, 0.25, 0.2, 0.2 + t * 0.7)
    }

    fn greens(t: f32) -> Color {
        Color::rgba(0.2, 0.85, 0.35, 0.2 + t * 0.7)
    }
}

/// A 3D scatter figure: one point cloud with a scalar color channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scatter3D {
    pub meta: PlotMeta,
    /// Point positions (x, y, z)
    pub xyz: Vec<Vec3>,
    /// Per-point scalars driving the color scale; aligned with `xyz`
    pub values: Vec<f32>,
    pub style: Style,
    pub colormap: Colormap,
    pub interaction: Interaction,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub z_label: Option<String>,
    /// Caption drawn alongside the color bar
    pub colorbar_label: Option<String>,
    /// OS window title; falls back to the figure title
    pub window_title: Option<String>,
    pub background: Color,
}

impl Default for Scatter3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Scatter3D {
    pub fn new() -> Self {
        Self {
            meta: PlotMeta::default(),
            xyz: vec![],
            values: vec![],
            style: Style::default(),
            colormap: Colormap::default(),
            interaction: Interaction::default(),
            x_label: None,
            y_label: None,
            z_label: None,
            colorbar_label: None,
            window_title: None,
            background: Color::rgba(0.05, 0.05, 0.09, 1.0),
        }
    }

    /// Bounding box over finite points, or None when the cloud is empty.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        let mut any = false;
        for p in &self.xyz {
            if !p.x.is_finite() || !p.y.is_finite() || !p.z.is_finite() {
                continue;
            }
            min[0] = min[0].min(p.x);
            min[1] = min[1].min(p.y);
            min[2] = min[2].min(p.z);
            max[0] = max[0].max(p.x);
            max[1] = max[1].max(p.y);
            max[2] = max[2].max(p.z);
            any = true;
        }
        any.then_some((min, max))
    }

    /// (vmin, vmax) of the color channel over finite values.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        let mut any = false;
        for &v in &self.values {
            if !v.is_finite() {
                continue;
            }
            lo = lo.min(v);
            hi = hi.max(v);
            any = true;
        }
        any.then_some((lo, hi))
    }

    /// Color of point `i` through the figure colormap.
    pub fn point_color(&self, i: usize) -> Color {
        let (lo, hi) = self.value_range().unwrap_or((0.0, 1.0));
        let span = (hi - lo).max(1e-6);
        let v = self.values.get(i).copied().unwrap_or(lo);
        self.colormap.sample((v - lo) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hot_ramp_endpoints() {
        let lo = Colormap::Hot.sample(0.0);
        let hi = Colormap::Hot.sample(1.0);
        assert_eq!((lo.r, lo.g, lo.b), (0.0, 0.0, 0.0));
        assert_eq!((hi.r, hi.g, hi.b), (1.0, 1.0, 1.0));
    }

    #[test]
    fn hot_ramp_is_monotone_in_luminance() {
        let lum = |c: Color| 0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b;
        let mut prev = -1.0;
        for i in 0..=100 {
            let l = lum(Colormap::Hot.sample(i as f32 / 100.0));
            assert!(l >= prev, "luminance dipped at t={}", i as f32 / 100.0);
            prev = l;
        }
    }

    #[test]
    fn sample_clamps_out_of_range_input() {
        assert_eq!(Colormap::Hot.sample(-3.0), Colormap::Hot.sample(0.0));
        assert_eq!(Colormap::Hot.sample(42.0), Colormap::Hot.sample(1.0));
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let mut fig = Scatter3D::new();
        fig.xyz = vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::new(-1.0, 5.0, 0.5),
        ];
        let (min, max) = fig.bounds().unwrap();
        assert_eq!(min, [-1.0, 2.0, 0.5]);
        assert_eq!(max, [1.0, 5.0, 3.0]);
    }

    #[test]
    fn empty_cloud_has_no_bounds() {
        assert!(Scatter3D::new().bounds().is_none());
        assert!(Scatter3D::new().value_range().is_none());
    }

    #[test]
    fn point_color_maps_extremes_to_ramp_ends() {
        let mut fig = Scatter3D::new();
        fig.xyz = vec![Vec3::ZERO; 3];
        fig.values = vec![10.0, 55.0, 100.0];
        assert_eq!(fig.point_color(0), Colormap::Hot.sample(0.0));
        assert_eq!(fig.point_color(2), Colormap::Hot.sample(1.0));
    }
}
