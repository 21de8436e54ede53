//! Time-stamped demographic events.
//!
//! Times are in generations before the present. Events are interpreted in
//! list order, which must be non-decreasing in time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Move a proportion of the lineages in `source` into `destination`.
///
/// Backwards in time, a proportion of 1.0 merges `source` into
/// `destination` (a population split forwards in time).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassMigration {
    pub time: f64,
    pub source: usize,
    pub destination: usize,
    pub proportion: f64,
}

/// Change migration rates.
///
/// With no `matrix_index` every off-diagonal entry is set to `rate`;
/// otherwise only the given `(row, col)` entry changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MigrationRateChange {
    pub time: f64,
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix_index: Option<(usize, usize)>,
}

/// Change the size and/or growth rate of a population.
///
/// Applies to every population when `population_id` is `None`. A missing
/// `initial_size` keeps the size the population has reached at `time`; a
/// missing `growth_rate` keeps the current rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationParametersChange {
    pub time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_id: Option<usize>,
}

/// A demographic event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DemographicEvent {
    MassMigration(MassMigration),
    MigrationRateChange(MigrationRateChange),
    PopulationParametersChange(PopulationParametersChange),
}

impl DemographicEvent {
    /// Full merge of `source` into `destination` at `time`.
    pub fn merge(time: f64, source: usize, destination: usize) -> Self {
        Self::mass_migration(time, source, destination, 1.0)
    }

    pub fn mass_migration(time: f64, source: usize, destination: usize, proportion: f64) -> Self {
        Self::MassMigration(MassMigration {
            time,
            source,
            destination,
            proportion,
        })
    }

    /// Set every off-diagonal migration rate.
    pub fn migration_rate(time: f64, rate: f64) -> Self {
        Self::MigrationRateChange(MigrationRateChange {
            time,
            rate,
            matrix_index: None,
        })
    }

    /// Set the migration rate from `row` to `col`.
    pub fn pairwise_migration_rate(time: f64, rate: f64, row: usize, col: usize) -> Self {
        Self::MigrationRateChange(MigrationRateChange {
            time,
            rate,
            matrix_index: Some((row, col)),
        })
    }

    /// Set both size and growth rate of one population.
    pub fn population_parameters(
        time: f64,
        population_id: usize,
        initial_size: f64,
        growth_rate: f64,
    ) -> Self {
        Self::PopulationParametersChange(PopulationParametersChange {
            time,
            initial_size: Some(initial_size),
            growth_rate: Some(growth_rate),
            population_id: Some(population_id),
        })
    }

    /// Set the size of one population, keeping its growth rate.
    pub fn population_size(time: f64, population_id: usize, initial_size: f64) -> Self {
        Self::PopulationParametersChange(PopulationParametersChange {
            time,
            initial_size: Some(initial_size),
            growth_rate: None,
            population_id: Some(population_id),
        })
    }

    pub fn time(&self) -> f64 {
        match self {
            Self::MassMigration(e) => e.time,
            Self::MigrationRateChange(e) => e.time,
            Self::PopulationParametersChange(e) => e.time,
        }
    }

    /// Short label for tables and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MassMigration(_) => "mass_migration",
            Self::MigrationRateChange(_) => "migration_rate_change",
            Self::PopulationParametersChange(_) => "population_parameters_change",
        }
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.6}"))
}

impl fmt::Display for DemographicEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MassMigration(e) => write!(
                f,
                "Mass migration: lineages move from {} to {} with probability {}",
                e.source, e.destination, e.proportion
            ),
            Self::MigrationRateChange(e) => match e.matrix_index {
                Some((j, k)) => write!(f, "Migration rate change for ({j}, {k}) to {:.3e}", e.rate),
                None => write!(f, "Migration rate change to {:.3e} everywhere", e.rate),
            },
            Self::PopulationParametersChange(e) => {
                let target = e
                    .population_id
                    .map_or_else(|| "all populations".to_string(), |p| format!("population {p}"));
                write!(
                    f,
                    "Population parameter change for {target}: initial_size -> {} growth_rate -> {}",
                    fmt_opt(e.initial_size),
                    fmt_opt(e.growth_rate)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_time() {
        let e = DemographicEvent::merge(848.0, 2, 1);
        assert_eq!(e.time(), 848.0);
        assert_eq!(e.kind(), "mass_migration");
        assert!(matches!(
            e,
            DemographicEvent::MassMigration(MassMigration {
                source: 2,
                destination: 1,
                proportion,
                ..
            }) if proportion == 1.0
        ));

        let e = DemographicEvent::population_size(8800.0, 0, 7300.0);
        match e {
            DemographicEvent::PopulationParametersChange(p) => {
                assert_eq!(p.initial_size, Some(7300.0));
                assert_eq!(p.growth_rate, None);
                assert_eq!(p.population_id, Some(0));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_serde_tagged() {
        let e = DemographicEvent::pairwise_migration_rate(848.0, 25e-5, 0, 1);
        let value = serde_json::to_value(e).unwrap();
        assert_eq!(value["type"], "migration_rate_change");
        assert_eq!(value["matrix_index"], serde_json::json!([0, 1]));

        let global = serde_json::to_value(DemographicEvent::migration_rate(848.0, 0.0)).unwrap();
        assert!(global.get("matrix_index").is_none());

        let back: DemographicEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_display() {
        let e = DemographicEvent::migration_rate(1.0, 0.0);
        assert!(e.to_string().contains("everywhere"));

        let e = DemographicEvent::population_size(1.0, 1, 2100.0);
        let s = e.to_string();
        assert!(s.contains("population 1"));
        assert!(s.contains("growth_rate -> -"));
    }
}
