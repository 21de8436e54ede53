//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use popcat_catalog::prelude::*;
//!
//! let catalog = Catalog::with_builtin().unwrap();
//! let model = catalog.model("TennessenEuropean").unwrap();
//! let debugger = DemographyDebugger::new(&model).unwrap();
//! assert_eq!(debugger.num_epochs(), 5);
//! ```

pub use crate::catalog::{Catalog, ModelEntry};
pub use crate::demography::{
    DemographicEvent, DemographicModel, DemographyDebugger, MigrationMatrix,
    PopulationConfiguration, SimulationConfig,
};
pub use crate::errors;
pub use crate::genetic_maps::GeneticMap;
pub use crate::genome::{build_genome, Chromosome, Genome};
pub use crate::species::homo_sapiens;
