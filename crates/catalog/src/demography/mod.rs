//! Demographic models and the tools that interpret them.
//!
//! - `DemographicModel`: plain data bundle of population configurations,
//!   migration matrix and time-ordered events.
//! - `DemographyDebugger`: replays a model into piecewise-constant epochs.
//! - `SimulationConfig`: model plus samples and sequence parameters, ready
//!   for a coalescent engine.

pub mod config;
pub mod debugger;
pub mod events;
pub mod growth;
pub mod migration;
pub mod model;
pub mod population;

pub use config::{Sample, SimulationConfig, SimulationConfigBuilder};
pub use debugger::{DemographyDebugger, Epoch, PopulationParameters};
pub use events::{
    DemographicEvent, MassMigration, MigrationRateChange, PopulationParametersChange,
};
pub use growth::{size_after, size_at_epoch_start, years_to_generations};
pub use migration::MigrationMatrix;
pub use model::DemographicModel;
pub use population::PopulationConfiguration;
