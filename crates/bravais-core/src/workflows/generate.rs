use crate::core::catalog::registry::LatticeCatalog;
use crate::engine::bundle::RenderBundle;
use crate::engine::config::GenerationConfig;
use crate::engine::error::EngineError;
use crate::engine::state::LatticeState;
use tracing::{debug, instrument};

/// Selects the configured lattice, applies the parameter edits in order and
/// computes the render bundle.
#[instrument(skip_all, name = "generation_workflow", fields(lattice = %config.lattice))]
pub fn run(catalog: &LatticeCatalog, config: &GenerationConfig) -> Result<RenderBundle, EngineError> {
    let mut state = LatticeState::new(catalog, config.lattice)?;
    debug!(parameters = ?state.parameters(), "Loaded default parameters.");

    for edit in &config.parameter_edits {
        state.apply(edit.name, edit.value);
        debug!(
            parameter = %edit.name,
            value = edit.value,
            "Applied parameter edit."
        );
    }

    for violation in state.violations() {
        debug!("Symmetry constraint not satisfied: {}", violation);
    }

    let bundle = state.generate_lattice(config.repeats)?;
    debug!(
        atoms = bundle.atoms.len(),
        repeats = config.repeats,
        "Generated lattice."
    );
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::kind::LatticeKind;
    use crate::core::models::parameters::{LatticeParameters, ParameterName};
    use crate::engine::config::GenerationConfigBuilder;

    #[test]
    fn run_with_defaults_matches_the_catalog_entry() {
        let config = GenerationConfigBuilder::new()
            .lattice(LatticeKind::FaceCenteredCubic)
            .repeats(1)
            .build()
            .unwrap();
        let bundle = run(LatticeCatalog::builtin(), &config).unwrap();

        assert_eq!(bundle.lattice, LatticeKind::FaceCenteredCubic);
        assert_eq!(
            bundle.parameters,
            LatticeKind::FaceCenteredCubic.descriptor().default_parameters
        );
        assert_eq!(bundle.atoms.len(), 4);
    }

    #[test]
    fn run_applies_edits_in_order_through_propagation() {
        let config = GenerationConfigBuilder::new()
            .lattice(LatticeKind::SimpleCubic)
            .parameter(ParameterName::A, 2.0)
            .parameter(ParameterName::C, 3.0)
            .repeats(1)
            .build()
            .unwrap();
        let bundle = run(LatticeCatalog::builtin(), &config).unwrap();

        assert_eq!(
            bundle.parameters,
            LatticeParameters::new(2.0, 2.0, 3.0, 90.0, 90.0, 90.0)
        );
        assert!((bundle.unit_cell_vectors.c.z - 3.0).abs() < 1e-9);
    }

    #[test]
    fn run_reports_degenerate_geometry() {
        let config = GenerationConfigBuilder::new()
            .lattice(LatticeKind::Triclinic)
            .parameter(ParameterName::Gamma, 180.0)
            .repeats(1)
            .build()
            .unwrap();
        assert!(matches!(
            run(LatticeCatalog::builtin(), &config),
            Err(EngineError::DegenerateCell { .. })
        ));
    }

    #[test]
    fn run_fails_for_a_type_missing_from_a_custom_catalog() {
        let catalog =
            LatticeCatalog::from_descriptors(vec![LatticeKind::Hexagonal.descriptor().clone()])
                .unwrap();
        let config = GenerationConfigBuilder::new()
            .lattice(LatticeKind::SimpleCubic)
            .repeats(1)
            .build()
            .unwrap();
        assert!(matches!(
            run(&catalog, &config),
            Err(EngineError::NotFound { .. })
        ));
    }

    #[test]
    fn run_with_zero_repeats_still_returns_the_cell_outline() {
        let config = GenerationConfigBuilder::new()
            .lattice(LatticeKind::Hexagonal)
            .repeats(0)
            .build()
            .unwrap();
        let bundle = run(LatticeCatalog::builtin(), &config).unwrap();
        assert!(bundle.atoms.is_empty());
        assert_eq!(bundle.cell_vertices.len(), 8);
    }
}
