//! Load walkthrough catalogs from TOML files

use crate::catalog::step::Step;
use crate::core::error::{Result, WalkthroughError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "step")]
    steps: Vec<Step>,
}

/// Load and validate a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Vec<Step>> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse and validate a catalog from TOML text
pub fn parse_catalog(content: &str) -> Result<Vec<Step>> {
    let file: CatalogFile = toml::from_str(content)?;
    validate_catalog(&file.steps)?;
    Ok(file.steps)
}

/// Check catalog ordering invariants
///
/// Steps advance strictly in catalog order, so ids must be unique and
/// strictly ascending, and the catalog must contain at least one step.
pub fn validate_catalog(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(WalkthroughError::InvalidCatalog(
            "catalog contains no steps".into(),
        ));
    }

    for pair in steps.windows(2) {
        if pair[1].id <= pair[0].id {
            return Err(WalkthroughError::InvalidCatalog(format!(
                "step ids must be strictly ascending: {} followed by {}",
                pair[0].id, pair[1].id
            )));
        }
    }

    Ok(())
}
