//! Simulation configuration handed to a coalescent engine.
//!
//! A `SimulationConfig` bundles everything an engine needs from the catalog:
//! the model's population configurations, migration matrix and events, the
//! samples to draw, and optionally the length and mean rates of the
//! chromosome to simulate. It is plain serde data so it can be written out as
//! JSON for an external engine.

use super::events::DemographicEvent;
use super::migration::MigrationMatrix;
use super::model::DemographicModel;
use super::population::PopulationConfiguration;
use crate::errors::BuilderError;
use crate::genome::Chromosome;
use serde::{Deserialize, Serialize};

/// A single sampled haploid genome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub population: usize,
    /// Sampling time in generations before the present
    pub time: f64,
}

/// Complete engine input derived from a demographic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub model_id: String,
    pub samples: Vec<Sample>,
    pub population_configurations: Vec<PopulationConfiguration>,
    pub migration_matrix: MigrationMatrix,
    pub demographic_events: Vec<DemographicEvent>,
    /// Sequence length in base pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recombination_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_rate: Option<f64>,
}

impl SimulationConfig {
    /// Start building a configuration for `model`.
    pub fn builder(model: &DemographicModel) -> SimulationConfigBuilder<'_> {
        SimulationConfigBuilder::new(model)
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Number of samples taken from `population`.
    pub fn samples_in(&self, population: usize) -> usize {
        self.samples
            .iter()
            .filter(|s| s.population == population)
            .count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builder for `SimulationConfig`.
///
/// # Examples
///
/// ```
/// use popcat_catalog::demography::SimulationConfig;
/// use popcat_catalog::species::homo_sapiens;
///
/// let model = homo_sapiens::gutenkunst_three_pop_out_of_africa();
/// let genome = homo_sapiens::genome().unwrap();
///
/// let config = SimulationConfig::builder(&model)
///     .sample(0, 5)
///     .sample(1, 5)
///     .sample(2, 5)
///     .chromosome(genome.chromosome("chr22").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.num_samples(), 15);
/// assert_eq!(config.length, Some(50_818_468));
/// ```
#[derive(Debug, Clone)]
pub struct SimulationConfigBuilder<'a> {
    model: &'a DemographicModel,
    samples: Vec<Sample>,
    length: Option<u64>,
    recombination_rate: Option<f64>,
    mutation_rate: Option<f64>,
}

impl<'a> SimulationConfigBuilder<'a> {
    pub fn new(model: &'a DemographicModel) -> Self {
        Self {
            model,
            samples: Vec::new(),
            length: None,
            recombination_rate: None,
            mutation_rate: None,
        }
    }

    /// Add `count` present-day samples from `population`.
    pub fn sample(mut self, population: usize, count: usize) -> Self {
        self.samples.extend((0..count).map(|_| Sample {
            population,
            time: 0.0,
        }));
        self
    }

    /// Add one sample from `population` taken `time` generations ago.
    pub fn sample_at(mut self, population: usize, time: f64) -> Self {
        self.samples.push(Sample { population, time });
        self
    }

    /// Simulate a region with this chromosome's length and mean rates.
    pub fn chromosome(mut self, chromosome: &Chromosome) -> Self {
        self.length = Some(chromosome.length());
        self.recombination_rate = Some(chromosome.mean_recombination_rate());
        self.mutation_rate = Some(chromosome.mean_mutation_rate());
        self
    }

    /// Override the sequence length.
    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn recombination_rate(mut self, rate: f64) -> Self {
        self.recombination_rate = Some(rate);
        self
    }

    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    /// - `BuilderError::MissingRequired("samples")` when no samples were added
    /// - `BuilderError::SamplePopulation` for a population not in the model
    /// - `BuilderError::SampleTime` for a negative or non-finite time
    /// - `BuilderError::Model` when the model itself is invalid
    pub fn build(self) -> Result<SimulationConfig, BuilderError> {
        self.model.validate()?;

        if self.samples.is_empty() {
            return Err(BuilderError::MissingRequired("samples"));
        }

        let n = self.model.num_populations();
        for sample in &self.samples {
            if sample.population >= n {
                return Err(BuilderError::SamplePopulation {
                    population: sample.population,
                    num_populations: n,
                });
            }
            if !(sample.time.is_finite() && sample.time >= 0.0) {
                return Err(BuilderError::SampleTime(sample.time));
            }
        }

        tracing::debug!(
            model = %self.model.id,
            samples = self.samples.len(),
            "built simulation config"
        );

        Ok(SimulationConfig {
            model_id: self.model.id.clone(),
            samples: self.samples,
            population_configurations: self.model.population_configurations.clone(),
            migration_matrix: self.model.migration_matrix.clone(),
            demographic_events: self.model.demographic_events.clone(),
            length: self.length,
            recombination_rate: self.recombination_rate,
            mutation_rate: self.mutation_rate,
        })
    }
}
