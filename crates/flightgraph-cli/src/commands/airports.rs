//! Airport listing command.

use anyhow::{bail, Result};

use flightgraph_cli::output::OutputFormat;
use flightgraph_cli::terminal::ColorPalette;
use flightgraph_lib::FlightGraph;

/// Print airports grouped by country, optionally restricted to one country.
pub fn handle_airports_command(
    graph: &FlightGraph,
    format: OutputFormat,
    country: Option<&str>,
) -> Result<()> {
    let mut grouped = graph.airports_by_country();
    if let Some(country) = country {
        grouped.retain(|name, _| name.eq_ignore_ascii_case(country));
        if grouped.is_empty() {
            bail!("No airports found in country '{country}'.");
        }
    }

    print!("{}", format.render_airports(&grouped, ColorPalette::detect())?);
    Ok(())
}
