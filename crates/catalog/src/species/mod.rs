//! Built-in species definitions.
//!
//! Each species module exposes its genome, genetic maps and demographic
//! models as free functions plus a `register` function that adds them to a
//! `Catalog`.

pub mod homo_sapiens;

use crate::catalog::Catalog;
use crate::errors::CatalogError;

/// Register every built-in species.
pub fn register_all(catalog: &mut Catalog) -> Result<(), CatalogError> {
    homo_sapiens::register(catalog)?;
    Ok(())
}
