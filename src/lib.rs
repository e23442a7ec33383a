pub mod core;
pub mod figure;
pub mod render;
pub mod runtime;
pub mod sim;
pub mod sweep;
pub mod table;

use std::fmt;

#[derive(Debug)]
pub struct LiftGraphError;

impl fmt::Display for LiftGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiftGraphError")
    }
}

impl std::error::Error for LiftGraphError {}

pub type Result<T> = std::result::Result<T, error_stack::Report<LiftGraphError>>;

pub mod prelude {
    pub use crate::core::*;
    pub use crate::figure::*;
    pub use crate::render::*;
    pub use crate::runtime::*;
    pub use crate::sim::*;
    pub use crate::sweep::*;
    pub use crate::table::*;
}
