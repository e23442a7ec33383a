//! Single-car lift simulation.
//!
//! A [`Building`] seeds waiting passengers on its floors, then runs one [`Lift`]
//! synchronously until every passenger has been delivered. The quantity of
//! interest is `cost = total floors travelled / passengers delivered`, the
//! scalar plotted by the cost graph.

mod building;
mod floor;
mod lift;
mod passenger;

pub use building::Building;
pub use floor::Floor;
pub use lift::{Lift, LiftMode, LiftObserver, TraceObserver};
pub use passenger::Passenger;
