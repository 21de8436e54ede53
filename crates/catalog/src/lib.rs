//! # Catalog Crate
//!
//! The `catalog` crate holds the data a coalescent simulation needs about a
//! species: its genome (chromosome lengths and mean rates), the genetic maps
//! that describe recombination along it, and literature demographic models
//! expressed as population configurations, migration matrices and
//! time-ordered events. It contains no simulation engine; the
//! `SimulationConfig` it produces is handed to one.

pub mod catalog;
pub mod demography;
pub mod errors;
pub mod genetic_maps;
pub mod genome;
pub mod prelude;
pub mod species;

pub use catalog::Catalog;
pub use demography::DemographicModel;
pub use genome::{Chromosome, Genome};
