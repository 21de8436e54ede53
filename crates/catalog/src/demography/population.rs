use serde::{Deserialize, Serialize};

/// Present-day parameters of one population.
///
/// Populations are identified by their index in a model's configuration list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfiguration {
    /// Size at time zero (individuals)
    pub initial_size: f64,
    /// Exponential growth rate per generation
    #[serde(default)]
    pub growth_rate: f64,
}

impl PopulationConfiguration {
    /// Constant-size population.
    pub fn new(initial_size: f64) -> Self {
        Self {
            initial_size,
            growth_rate: 0.0,
        }
    }

    pub fn with_growth(initial_size: f64, growth_rate: f64) -> Self {
        Self {
            initial_size,
            growth_rate,
        }
    }
}
