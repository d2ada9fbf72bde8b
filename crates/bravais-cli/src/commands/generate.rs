use super::load_catalog;
use crate::cli::{GenerateArgs, OutputFormat};
use crate::config::PartialGenerationConfig;
use crate::error::Result;
use crate::output;
use bravais::core::catalog::registry::LatticeCatalog;
use bravais::core::constraints::propagation;
use bravais::engine::bundle::RenderBundle;
use bravais::engine::config::GenerationConfig;
use bravais::workflows;
use tracing::{info, warn};

pub fn run(args: GenerateArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialGenerationConfig::from_file(path)?,
        None => PartialGenerationConfig::default(),
    };
    let config = partial_config.merge_with_cli(&args)?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    let bundle = generate(&catalog, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => output::write_bundle(&mut out, &bundle)?,
        OutputFormat::Json => output::write_json(&mut out, &bundle)?,
    }
    Ok(())
}

fn generate(catalog: &LatticeCatalog, config: &GenerationConfig) -> Result<RenderBundle> {
    info!(
        "Generating '{}' with {} parameter edit(s) over {}³ cell(s).",
        config.lattice,
        config.parameter_edits.len(),
        config.repeats
    );
    let bundle = workflows::generate::run(catalog, config)?;

    if let Some(descriptor) = catalog.get(bundle.lattice) {
        for violation in propagation::violations(&bundle.parameters, descriptor) {
            warn!("Parameters break the {} symmetry: {}", bundle.lattice, violation);
        }
    }
    info!("Generated {} atom(s).", bundle.atoms.len());
    Ok(bundle)
}
