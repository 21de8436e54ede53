use super::chromosome::Chromosome;
use super::table::parse_chromosome_table;
use crate::errors::GenomeError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Placeholder mean mutation rate attached to every chromosome.
///
/// Per-chromosome estimates are not tabulated yet; this is an approximation.
pub const PLACEHOLDER_MUTATION_RATE: f64 = 1e-8;

/// Placeholder mean recombination rate attached to every chromosome.
///
/// Per-chromosome estimates are not tabulated yet; this is an approximation.
pub const PLACEHOLDER_RECOMBINATION_RATE: f64 = 1e-8;

/// A species genome: an ordered list of chromosomes and the name of the
/// genetic map used by default.
///
/// Chromosome names are unique. Whether `default_genetic_map` names a known
/// map is checked when the genome is registered in a `Catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GenomeRecord")]
pub struct Genome {
    species: String,
    chromosomes: Vec<Chromosome>,
    default_genetic_map: String,
}

/// Unchecked serde form of `Genome`.
#[derive(Deserialize)]
struct GenomeRecord {
    species: String,
    chromosomes: Vec<Chromosome>,
    default_genetic_map: String,
}

impl TryFrom<GenomeRecord> for Genome {
    type Error = GenomeError;

    fn try_from(record: GenomeRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.species,
            record.chromosomes,
            record.default_genetic_map,
        )
    }
}

impl Genome {
    /// Create a genome from already-built chromosome records.
    ///
    /// # Errors
    /// Returns `GenomeError::Empty` if `chromosomes` is empty and
    /// `GenomeError::DuplicateChromosome` on a repeated name.
    pub fn new(
        species: impl Into<String>,
        chromosomes: Vec<Chromosome>,
        default_genetic_map: impl Into<String>,
    ) -> Result<Self, GenomeError> {
        let species = species.into();
        if chromosomes.is_empty() {
            return Err(GenomeError::Empty(species));
        }

        let mut seen = HashSet::with_capacity(chromosomes.len());
        for chr in &chromosomes {
            if !seen.insert(chr.name()) {
                return Err(GenomeError::DuplicateChromosome(chr.name().to_string()));
            }
        }

        Ok(Self {
            species,
            chromosomes,
            default_genetic_map: default_genetic_map.into(),
        })
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    /// Chromosomes in table order.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn default_genetic_map(&self) -> &str {
        &self.default_genetic_map
    }

    /// Look up a chromosome by name.
    pub fn chromosome(&self, name: &str) -> Option<&Chromosome> {
        self.chromosomes.iter().find(|c| c.name() == name)
    }

    pub fn num_chromosomes(&self) -> usize {
        self.chromosomes.len()
    }

    /// Sum of all chromosome lengths in base pairs.
    pub fn total_length(&self) -> u64 {
        self.chromosomes.iter().map(Chromosome::length).sum()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Genome: {}", self.species)?;
        writeln!(f, "Default genetic map: {}", self.default_genetic_map)?;
        writeln!(f, "Chromosomes:")?;
        for chr in &self.chromosomes {
            writeln!(f, "\t{chr}")?;
        }
        Ok(())
    }
}

/// Build a genome from a whitespace-delimited chromosome table.
///
/// Every chromosome receives the placeholder mutation and recombination
/// rates (`PLACEHOLDER_MUTATION_RATE`, `PLACEHOLDER_RECOMBINATION_RATE`).
///
/// # Examples
///
/// ```rust
/// # use popcat_catalog::genome::build_genome;
/// let genome = build_genome("toy", "c1 100\nc2 200\n", "toy_map").unwrap();
/// assert_eq!(genome.total_length(), 300);
/// assert_eq!(genome.chromosome("c2").unwrap().length(), 200);
/// ```
pub fn build_genome(
    species: impl Into<String>,
    chromosome_table: &str,
    default_genetic_map: impl Into<String>,
) -> Result<Genome, GenomeError> {
    let chromosomes = parse_chromosome_table(
        chromosome_table,
        PLACEHOLDER_MUTATION_RATE,
        PLACEHOLDER_RECOMBINATION_RATE,
    )?;
    let genome = Genome::new(species, chromosomes, default_genetic_map)?;
    tracing::debug!(
        species = genome.species(),
        chromosomes = genome.num_chromosomes(),
        "built genome"
    );
    Ok(genome)
}
