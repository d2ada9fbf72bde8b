use super::load_catalog;
use crate::cli::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::output;
use bravais::core::catalog::descriptor::LatticeTypeDescriptor;
use tracing::info;

pub fn run(args: ListArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    info!("Listing {} lattice type(s).", catalog.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => output::write_catalog(&mut out, &catalog)?,
        OutputFormat::Json => {
            let entries: Vec<&LatticeTypeDescriptor> = catalog.iter().collect();
            output::write_json(&mut out, &entries)?;
        }
    }
    Ok(())
}
