use super::load_catalog;
use crate::cli::{OutputFormat, ShowArgs};
use crate::error::Result;
use crate::output;
use bravais::engine::error::EngineError;
use tracing::info;

pub fn run(args: ShowArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let descriptor = catalog.lookup(&args.id).map_err(EngineError::from)?;
    info!("Showing lattice type '{}'.", descriptor.id());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => output::write_descriptor(&mut out, descriptor)?,
        OutputFormat::Json => output::write_json(&mut out, descriptor)?,
    }
    Ok(())
}
