use serde::{Deserialize, Serialize};
use std::fmt;

/// A chromosome record: a name, a length in base pairs, and the mean
/// per-base per-generation mutation and recombination rates.
///
/// Records are immutable once built; use the accessors to read them.
///
/// # Examples
///
/// ```rust
/// # use popcat_catalog::genome::Chromosome;
/// let chr = Chromosome::new("chr21", 46_709_983, 1e-8, 1e-8);
/// assert_eq!(chr.name(), "chr21");
/// assert_eq!(chr.length(), 46_709_983);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    /// Identifier such as "chr1" or "chrX". Unique within a genome.
    name: String,
    /// Length in base pairs
    length: u64,
    /// Mean mutation rate per base per generation
    mean_mutation_rate: f64,
    /// Mean recombination rate per base per generation
    mean_recombination_rate: f64,
}

impl Chromosome {
    /// Create a new chromosome record.
    pub fn new(
        name: impl Into<String>,
        length: u64,
        mean_mutation_rate: f64,
        mean_recombination_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            length,
            mean_mutation_rate,
            mean_recombination_rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn mean_mutation_rate(&self) -> f64 {
        self.mean_mutation_rate
    }

    pub fn mean_recombination_rate(&self) -> f64 {
        self.mean_recombination_rate
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tmu={:.2e}\trho={:.2e}",
            self.name, self.length, self.mean_mutation_rate, self.mean_recombination_rate
        )
    }
}
