use std::num::ParseIntError;
use thiserror::Error;

/// Error returned when a chromosome table row cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A row had a name but no length column.
    #[error("Line {line}: missing length for chromosome '{name}'")]
    MissingLength { line: usize, name: String },

    /// The length column was not a non-negative integer.
    #[error("Line {line}: invalid length '{value}': {source}")]
    InvalidLength {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors that can occur while assembling a `Genome`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenomeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Duplicate chromosome name: {0}")]
    DuplicateChromosome(String),

    #[error("Genome '{0}' has no chromosomes")]
    Empty(String),
}

/// Structural problems found when validating a `DemographicModel`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Model has no populations")]
    NoPopulations,

    #[error("Migration matrix is not square (row {row} has {len} entries, expected {expected})")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Migration matrix is {found}x{found} but the model has {expected} populations")]
    MatrixDimension { expected: usize, found: usize },

    #[error("Migration matrix diagonal entry {0} is non-zero")]
    NonZeroDiagonal(usize),

    #[error("Invalid migration rate {rate} at ({row}, {col})")]
    InvalidRate { row: usize, col: usize, rate: f64 },

    #[error("Invalid {field} for population {population}: {value}")]
    InvalidPopulationParameter {
        population: usize,
        field: &'static str,
        value: f64,
    },

    #[error("Event {event} refers to population {population}, but the model has {num_populations}")]
    PopulationOutOfRange {
        event: usize,
        population: usize,
        num_populations: usize,
    },

    #[error("Event {event} sets migration on the diagonal ({population}, {population})")]
    DiagonalMigration { event: usize, population: usize },

    #[error("Event {event} has invalid {field}: {value}")]
    InvalidEventParameter {
        event: usize,
        field: &'static str,
        value: f64,
    },

    #[error("Event {event} has invalid time {time}")]
    InvalidTime { event: usize, time: f64 },

    #[error("Event {event} at time {time} precedes the previous event at {previous}")]
    UnorderedEvents {
        event: usize,
        time: f64,
        previous: f64,
    },
}

/// Errors that can occur while building a `SimulationConfig`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    /// A required parameter is missing
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),

    #[error("Sample population {population} out of range (model has {num_populations})")]
    SamplePopulation {
        population: usize,
        num_populations: usize,
    },

    #[error("Invalid sample time: {0}")]
    SampleTime(f64),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors raised by `Catalog` registration and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Genetic map '{0}' is already registered")]
    DuplicateGeneticMap(String),

    #[error("Genome for species '{0}' is already registered")]
    DuplicateGenome(String),

    #[error("Demographic model '{0}' is already registered")]
    DuplicateModel(String),

    #[error("Genome '{species}' refers to unregistered genetic map '{map}'")]
    MissingDefaultMap { species: String, map: String },

    #[error("Model '{model}' refers to unregistered species '{species}'")]
    MissingSpecies { model: String, species: String },

    #[error("Unknown genetic map: {0}")]
    UnknownGeneticMap(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Unknown demographic model: {0}")]
    UnknownModel(String),

    #[error("Invalid model '{id}': {source}")]
    InvalidModel {
        id: String,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    Genome(#[from] GenomeError),
}
