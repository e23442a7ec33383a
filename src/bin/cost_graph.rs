//! Sweep the lift simulation over a parameter grid, save the cost table, and
//! show the 3D cost scatter.

use tracing::info;
use tracing_subscriber::EnvFilter;

use liftgraph::prelude::*;

fn main() -> liftgraph::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // A coarser grid than the full historical one; the full sweep is hours of
    // simulation, this renders the same shape in under a minute.
    let config = SweepConfig {
        capacity: SweepRange::new(500, 3000, 500),
        floors: SweepRange::new(5, 300, 25),
        passengers: SweepRange::new(5, 1000, 50),
        seed: 0,
    };
    info!(grid = config.grid_size(), "running lift cost sweep");

    let table = run(&config)?;
    table.save_json("cost_table.json")?;
    info!(leaves = table.len(), "saved cost_table.json");

    fig()
        .cost_points(&table.flatten())
        .title("Cost\nin function of\nLift Capacity, Floor Number and Passenger Number")
        .x_label("Lift Capacity")
        .y_label("Floor Number")
        .z_label("Passenger Number")
        .colorbar_label("Cost")
        .colormap(Colormap::Hot)
        .window_title("Advance Case Graph")
        .show();

    Ok(())
}
