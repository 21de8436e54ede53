//! Epoch-by-epoch view of a demographic model.
//!
//! The debugger replays a model's events the way a coalescent engine would
//! and records, for every interval between distinct event times, the size of
//! each population at both ends of the interval, its growth rate, and the
//! migration matrix in force. It is the quickest way to check that a model
//! was written down correctly.

use super::events::DemographicEvent;
use super::growth::size_after;
use super::migration::MigrationMatrix;
use super::model::DemographicModel;
use crate::errors::ModelError;
use serde::Serialize;
use std::io::{self, Write};

/// Parameters of one population during an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopulationParameters {
    /// Size at the epoch's start time
    pub start_size: f64,
    /// Size at the epoch's end time (the limit for the final epoch)
    pub end_size: f64,
    pub growth_rate: f64,
}

/// An interval `[start_time, end_time)` with fixed population parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Epoch {
    pub start_time: f64,
    /// `f64::INFINITY` for the final epoch
    pub end_time: f64,
    pub populations: Vec<PopulationParameters>,
    pub migration_matrix: MigrationMatrix,
    /// Events applied at `start_time` to produce this epoch
    pub events: Vec<DemographicEvent>,
}

impl Epoch {
    fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

/// Epoch history of a validated model.
#[derive(Debug, Clone)]
pub struct DemographyDebugger {
    population_labels: Vec<String>,
    epochs: Vec<Epoch>,
}

impl DemographyDebugger {
    /// Validate `model` and compute its epochs.
    ///
    /// There is one epoch per distinct event time plus the initial epoch
    /// starting at time zero; events at time zero are folded into the
    /// initial epoch.
    ///
    /// # Errors
    /// Returns the `ModelError` from `DemographicModel::validate`.
    pub fn new(model: &DemographicModel) -> Result<Self, ModelError> {
        model.validate()?;

        let n = model.num_populations();
        let mut sizes: Vec<f64> = model
            .population_configurations
            .iter()
            .map(|c| c.initial_size)
            .collect();
        let mut rates: Vec<f64> = model
            .population_configurations
            .iter()
            .map(|c| c.growth_rate)
            .collect();
        let mut matrix = model.migration_matrix.clone();

        let events = &model.demographic_events;
        let mut epochs = Vec::new();
        let mut next = 0;
        let mut start_time = 0.0;

        loop {
            let mut applied = Vec::new();
            while next < events.len() && events[next].time() == start_time {
                apply_event(&events[next], &mut sizes, &mut rates, &mut matrix);
                applied.push(events[next]);
                next += 1;
            }

            let end_time = events.get(next).map_or(f64::INFINITY, DemographicEvent::time);
            let elapsed = end_time - start_time;
            let populations = (0..n)
                .map(|j| PopulationParameters {
                    start_size: sizes[j],
                    end_size: size_after(sizes[j], rates[j], elapsed),
                    growth_rate: rates[j],
                })
                .collect();

            epochs.push(Epoch {
                start_time,
                end_time,
                populations,
                migration_matrix: matrix.clone(),
                events: applied,
            });

            if end_time.is_infinite() {
                break;
            }
            for (size, &rate) in sizes.iter_mut().zip(&rates) {
                *size = size_after(*size, rate, elapsed);
            }
            start_time = end_time;
        }

        tracing::debug!(model = %model.id, epochs = epochs.len(), "computed epochs");

        Ok(Self {
            population_labels: (0..n).map(|j| model.population_label(j)).collect(),
            epochs,
        })
    }

    pub fn epochs(&self) -> &[Epoch] {
        &self.epochs
    }

    pub fn num_epochs(&self) -> usize {
        self.epochs.len()
    }

    pub fn num_populations(&self) -> usize {
        self.population_labels.len()
    }

    /// Epoch in force at `time`, or `None` for negative or NaN times.
    pub fn epoch_at(&self, time: f64) -> Option<&Epoch> {
        self.epochs.iter().find(|e| e.contains(time))
    }

    /// Size of `population` at `time` generations before the present.
    pub fn population_size_at(&self, population: usize, time: f64) -> Option<f64> {
        let epoch = self.epoch_at(time)?;
        let params = epoch.populations.get(population)?;
        Some(size_after(
            params.start_size,
            params.growth_rate,
            time - epoch.start_time,
        ))
    }

    /// Write a human-readable epoch table.
    pub fn print_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (idx, epoch) in self.epochs.iter().enumerate() {
            if !epoch.events.is_empty() {
                writeln!(out, "Events @ generation {}", epoch.start_time)?;
                for event in &epoch.events {
                    writeln!(out, "   - {event}")?;
                }
            }

            let header = format!(
                "Epoch {idx}: {} generations",
                format_time_range(epoch.start_time, epoch.end_time)
            );
            let rule = "=".repeat(header.len());
            writeln!(out, "{rule}")?;
            writeln!(out, "{header}")?;
            writeln!(out, "{rule}")?;

            write!(out, "{:>10} | {:>10} {:>10} {:>10} |", "", "start", "end", "growth")?;
            for label in &self.population_labels {
                write!(out, " {label:>10}")?;
            }
            writeln!(out)?;

            for (j, params) in epoch.populations.iter().enumerate() {
                write!(
                    out,
                    "{:>10} | {:>10.1} {:>10.1} {:>10.2e} |",
                    self.population_labels[j],
                    params.start_size,
                    params.end_size,
                    params.growth_rate
                )?;
                for k in 0..self.population_labels.len() {
                    let rate = epoch.migration_matrix.get(j, k).unwrap_or(0.0);
                    write!(out, " {rate:>10.2e}")?;
                }
                writeln!(out)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn format_time_range(start: f64, end: f64) -> String {
    if end.is_infinite() {
        format!("{start} -- inf")
    } else {
        format!("{start} -- {end}")
    }
}

fn apply_event(
    event: &DemographicEvent,
    sizes: &mut [f64],
    rates: &mut [f64],
    matrix: &mut MigrationMatrix,
) {
    tracing::trace!(time = event.time(), kind = event.kind(), "applying event");
    match event {
        DemographicEvent::MassMigration(_) => {}
        DemographicEvent::MigrationRateChange(e) => match e.matrix_index {
            Some((row, col)) => {
                matrix.set(row, col, e.rate);
            }
            None => matrix.set_all(e.rate),
        },
        DemographicEvent::PopulationParametersChange(e) => {
            let targets = match e.population_id {
                Some(p) => p..p + 1,
                None => 0..sizes.len(),
            };
            for j in targets {
                if let Some(size) = e.initial_size {
                    sizes[j] = size;
                }
                if let Some(rate) = e.growth_rate {
                    rates[j] = rate;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demography::PopulationConfiguration;
    use approx::assert_relative_eq;

    fn growth_model() -> DemographicModel {
        DemographicModel {
            id: "Growth".into(),
            description: String::new(),
            generation_time: 25.0,
            population_ids: vec!["A".into(), "B".into()],
            population_configurations: vec![
                PopulationConfiguration::with_growth(1000.0, 0.01),
                PopulationConfiguration::new(500.0),
            ],
            migration_matrix: MigrationMatrix::zeros(2),
            demographic_events: vec![
                DemographicEvent::migration_rate(50.0, 1e-3),
                DemographicEvent::PopulationParametersChange(
                    crate::demography::PopulationParametersChange {
                        time: 50.0,
                        initial_size: None,
                        growth_rate: Some(0.0),
                        population_id: Some(0),
                    },
                ),
                DemographicEvent::merge(200.0, 1, 0),
                DemographicEvent::population_parameters(200.0, 0, 300.0, -0.001),
            ],
        }
    }

    #[test]
    fn test_epoch_boundaries() {
        let dbg = DemographyDebugger::new(&growth_model()).unwrap();
        assert_eq!(dbg.num_epochs(), 3);

        let times: Vec<(f64, f64)> = dbg
            .epochs()
            .iter()
            .map(|e| (e.start_time, e.end_time))
            .collect();
        assert_eq!(times, vec![(0.0, 50.0), (50.0, 200.0), (200.0, f64::INFINITY)]);
        assert!(dbg.epochs()[0].events.is_empty());
        assert_eq!(dbg.epochs()[1].events.len(), 2);
        assert_eq!(dbg.epochs()[2].events.len(), 2);
    }

    #[test]
    fn test_size_carried_when_only_growth_changes() {
        let dbg = DemographyDebugger::new(&growth_model()).unwrap();
        let expected = 1000.0 * (-0.01f64 * 50.0).exp();

        let first = &dbg.epochs()[0].populations[0];
        assert_relative_eq!(first.end_size, expected, max_relative = 1e-12);

        let second = &dbg.epochs()[1].populations[0];
        assert_relative_eq!(second.start_size, expected, max_relative = 1e-12);
        assert_eq!(second.growth_rate, 0.0);
        assert_eq!(second.start_size, second.end_size);
    }

    #[test]
    fn test_migration_changes_tracked() {
        let dbg = DemographyDebugger::new(&growth_model()).unwrap();
        assert_eq!(dbg.epochs()[0].migration_matrix.get(0, 1), Some(0.0));
        assert_eq!(dbg.epochs()[1].migration_matrix.get(0, 1), Some(1e-3));
        assert_eq!(dbg.epochs()[2].migration_matrix.get(1, 0), Some(1e-3));
    }

    #[test]
    fn test_final_epoch_limits() {
        let dbg = DemographyDebugger::new(&growth_model()).unwrap();
        let last = dbg.epochs().last().unwrap();
        // Negative growth backwards in time means unbounded size.
        assert_eq!(last.populations[0].start_size, 300.0);
        assert_eq!(last.populations[0].end_size, f64::INFINITY);
        // Constant population stays constant forever.
        assert_eq!(last.populations[1].end_size, 500.0);
    }

    #[test]
    fn test_population_size_at() {
        let dbg = DemographyDebugger::new(&growth_model()).unwrap();
        assert_eq!(dbg.population_size_at(0, 0.0), Some(1000.0));
        assert_relative_eq!(
            dbg.population_size_at(0, 25.0).unwrap(),
            1000.0 * (-0.25f64).exp(),
            max_relative = 1e-12
        );
        assert_eq!(dbg.population_size_at(0, 200.0), Some(300.0));
        assert_eq!(dbg.population_size_at(1, 1e6), Some(500.0));
        assert_eq!(dbg.population_size_at(2, 10.0), None);
        assert_eq!(dbg.population_size_at(0, -1.0), None);
    }

    #[test]
    fn test_events_at_time_zero_fold_into_first_epoch() {
        let mut model = growth_model();
        model
            .demographic_events
            .insert(0, DemographicEvent::population_size(0.0, 1, 800.0));
        let dbg = DemographyDebugger::new(&model).unwrap();

        assert_eq!(dbg.num_epochs(), 3);
        assert_eq!(dbg.epochs()[0].events.len(), 1);
        assert_eq!(dbg.epochs()[0].populations[1].start_size, 800.0);
    }

    #[test]
    fn test_parameter_change_without_population_applies_to_all() {
        let mut model = growth_model();
        model.demographic_events = vec![DemographicEvent::PopulationParametersChange(
            crate::demography::PopulationParametersChange {
                time: 10.0,
                initial_size: Some(7.0),
                growth_rate: None,
                population_id: None,
            },
        )];
        let dbg = DemographyDebugger::new(&model).unwrap();

        assert_eq!(dbg.num_epochs(), 2);
        let after = &dbg.epochs()[1].populations;
        assert_eq!(after[0].start_size, 7.0);
        assert_eq!(after[1].start_size, 7.0);
        assert_eq!(after[0].growth_rate, 0.01);
        assert_eq!(after[1].growth_rate, 0.0);
    }

    #[test]
    fn test_invalid_model_rejected() {
        let mut model = growth_model();
        model.demographic_events.reverse();
        assert!(matches!(
            DemographyDebugger::new(&model),
            Err(ModelError::UnorderedEvents { .. })
        ));
    }

    #[test]
    fn test_print_history() {
        let dbg = DemographyDebugger::new(&growth_model()).unwrap();
        let mut out = Vec::new();
        dbg.print_history(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Epoch 0: 0 -- 50 generations"));
        assert!(text.contains("Epoch 2: 200 -- inf generations"));
        assert!(text.contains("Events @ generation 200"));
        assert!(text.contains("Mass migration"));
    }
}
