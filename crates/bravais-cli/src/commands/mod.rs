pub mod generate;
pub mod list;
pub mod show;

use crate::error::Result;
use bravais::core::catalog::registry::LatticeCatalog;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// The builtin catalog, or the catalog file at `path` when one is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, LatticeCatalog>> {
    match path {
        Some(path) => {
            info!("Loading lattice catalog from {:?}", path);
            let catalog = LatticeCatalog::load(path)?;
            info!("Loaded {} lattice type(s).", catalog.len());
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(LatticeCatalog::builtin())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn no_path_borrows_the_builtin_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn catalog_file_is_loaded_and_validated() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [triclinic]
            name = "Triclinic"
            parameters = {{ a = 1.0, b = 2.0, c = 3.0, alpha = 70.0, beta = 80.0, gamma = 95.0 }}
            atom-positions = [[0.0, 0.0, 0.0]]
            "#
        )
        .unwrap();
        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);

        let mut broken = NamedTempFile::new().unwrap();
        write!(
            broken,
            r#"
            [triclinic]
            name = "Triclinic"
            parameters = {{ a = 1.0, b = 2.0, c = 3.0, alpha = 70.0, beta = 80.0, gamma = 95.0 }}
            atom-positions = []
            "#
        )
        .unwrap();
        assert!(matches!(
            load_catalog(Some(broken.path())),
            Err(CliError::Catalog(_))
        ));
    }
}
