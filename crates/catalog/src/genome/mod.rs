//! Genome structures: chromosome records, chromosome tables and species genomes.

mod chromosome;
mod descriptor;
mod table;

pub use chromosome::Chromosome;
pub use descriptor::{
    build_genome, Genome, PLACEHOLDER_MUTATION_RATE, PLACEHOLDER_RECOMBINATION_RATE,
};
pub use table::parse_chromosome_table;
