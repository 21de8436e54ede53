use super::events::DemographicEvent;
use super::migration::MigrationMatrix;
use super::population::PopulationConfiguration;
use crate::errors::ModelError;
use serde::{Deserialize, Serialize};

/// A piecewise-constant demographic history.
///
/// This is a plain data bundle handed to a coalescent engine: present-day
/// population configurations, the present-day migration matrix, and the
/// events that change them further back in time. All times are in
/// generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicModel {
    /// Catalog identifier, e.g. "GutenkunstThreePopOutOfAfrica"
    pub id: String,
    pub description: String,
    /// Years per generation used to convert the published times
    pub generation_time: f64,
    /// Population labels, indexed like `population_configurations`
    #[serde(default)]
    pub population_ids: Vec<String>,
    pub population_configurations: Vec<PopulationConfiguration>,
    pub migration_matrix: MigrationMatrix,
    pub demographic_events: Vec<DemographicEvent>,
}

impl DemographicModel {
    pub fn num_populations(&self) -> usize {
        self.population_configurations.len()
    }

    /// Label for population `index`, falling back to "pop_{index}".
    pub fn population_label(&self, index: usize) -> String {
        self.population_ids
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("pop_{index}"))
    }

    /// Distinct event times in order.
    pub fn event_times(&self) -> Vec<f64> {
        let mut times: Vec<f64> = Vec::new();
        for event in &self.demographic_events {
            let t = event.time();
            if times.last() != Some(&t) {
                times.push(t);
            }
        }
        times
    }

    /// Check the model for structural problems.
    ///
    /// # Errors
    /// Returns the first `ModelError` found: no populations, a migration
    /// matrix of the wrong dimension or with a non-zero diagonal, negative or
    /// non-finite rates, non-positive sizes, events referring to unknown
    /// populations or the diagonal, proportions outside [0, 1], and negative,
    /// non-finite, or decreasing event times.
    pub fn validate(&self) -> Result<(), ModelError> {
        let n = self.num_populations();
        if n == 0 {
            return Err(ModelError::NoPopulations);
        }

        for (j, config) in self.population_configurations.iter().enumerate() {
            if !(config.initial_size.is_finite() && config.initial_size > 0.0) {
                return Err(ModelError::InvalidPopulationParameter {
                    population: j,
                    field: "initial_size",
                    value: config.initial_size,
                });
            }
            if !config.growth_rate.is_finite() {
                return Err(ModelError::InvalidPopulationParameter {
                    population: j,
                    field: "growth_rate",
                    value: config.growth_rate,
                });
            }
        }

        let matrix = &self.migration_matrix;
        if matrix.dim() != n {
            return Err(ModelError::MatrixDimension {
                expected: n,
                found: matrix.dim(),
            });
        }
        for (row, col, rate) in matrix.off_diagonal() {
            if !valid_rate(rate) {
                return Err(ModelError::InvalidRate { row, col, rate });
            }
        }

        let mut previous = 0.0;
        for (idx, event) in self.demographic_events.iter().enumerate() {
            let time = event.time();
            if !(time.is_finite() && time >= 0.0) {
                return Err(ModelError::InvalidTime { event: idx, time });
            }
            if time < previous {
                return Err(ModelError::UnorderedEvents {
                    event: idx,
                    time,
                    previous,
                });
            }
            previous = time;
            validate_event(idx, event, n)?;
        }

        Ok(())
    }
}

fn valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate >= 0.0
}

fn check_population(event: usize, population: usize, n: usize) -> Result<(), ModelError> {
    if population >= n {
        return Err(ModelError::PopulationOutOfRange {
            event,
            population,
            num_populations: n,
        });
    }
    Ok(())
}

fn validate_event(idx: usize, event: &DemographicEvent, n: usize) -> Result<(), ModelError> {
    match event {
        DemographicEvent::MassMigration(e) => {
            check_population(idx, e.source, n)?;
            check_population(idx, e.destination, n)?;
            if !(0.0..=1.0).contains(&e.proportion) {
                return Err(ModelError::InvalidEventParameter {
                    event: idx,
                    field: "proportion",
                    value: e.proportion,
                });
            }
        }
        DemographicEvent::MigrationRateChange(e) => {
            if !valid_rate(e.rate) {
                return Err(ModelError::InvalidEventParameter {
                    event: idx,
                    field: "rate",
                    value: e.rate,
                });
            }
            if let Some((row, col)) = e.matrix_index {
                check_population(idx, row, n)?;
                check_population(idx, col, n)?;
                if row == col {
                    return Err(ModelError::DiagonalMigration {
                        event: idx,
                        population: row,
                    });
                }
            }
        }
        DemographicEvent::PopulationParametersChange(e) => {
            if let Some(population) = e.population_id {
                check_population(idx, population, n)?;
            }
            if let Some(size) = e.initial_size {
                if !(size.is_finite() && size > 0.0) {
                    return Err(ModelError::InvalidEventParameter {
                        event: idx,
                        field: "initial_size",
                        value: size,
                    });
                }
            }
            if let Some(rate) = e.growth_rate {
                if !rate.is_finite() {
                    return Err(ModelError::InvalidEventParameter {
                        event: idx,
                        field: "growth_rate",
                        value: rate,
                    });
                }
            }
        }
    }
    Ok(())
}
