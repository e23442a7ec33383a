//! Drawing functions for the figure.
//!
//! - `common`: title text and tick helpers
//! - `scatter`: lights and the colormapped point cloud
//! - `axes`: 3D axes and wall grids
//! - `colorbar`: the 2D overlay gradient strip

mod axes;
mod colorbar;
mod common;
mod scatter;

pub use axes::{AXIS_LEN, HALF_SIZE, axis_tip, draw_axes};
pub use colorbar::draw_colorbar;
pub use common::{draw_title, format_tick, nice_step};
pub use scatter::{draw_scatter, normalize_point};
