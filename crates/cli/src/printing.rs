use popcat_catalog::demography::{DemographicEvent, DemographicModel};
use popcat_catalog::genetic_maps::GeneticMap;
use popcat_catalog::genome::Genome;
use std::path::Path;

use crate::defaults::RULE_WIDTH;

pub fn print_genome(genome: &Genome) {
    println!("\n🧬 Genome: {}", genome.species());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("  • Chromosomes: {}", genome.num_chromosomes());
    println!("  • Total length: {} bp", genome.total_length());
    println!("  • Default genetic map: {}", genome.default_genetic_map());

    println!(
        "\n  {:<8} {:>12} {:>12} {:>12}",
        "name", "length (bp)", "mu", "rho"
    );
    for chr in genome.chromosomes() {
        println!(
            "  {:<8} {:>12} {:>12.2e} {:>12.2e}",
            chr.name(),
            chr.length(),
            chr.mean_mutation_rate(),
            chr.mean_recombination_rate()
        );
    }
    println!("\n⚠️  Mean mutation and recombination rates are placeholders");
    println!();
}

pub fn print_genetic_map(map: &GeneticMap, genome: &Genome, cache_dir: &Path) {
    println!("\n🗺️  Genetic map: {}", map.name);
    println!("{}", "=".repeat(RULE_WIDTH));
    if !map.description.is_empty() {
        println!("  {}", map.description);
    }
    println!("  • URL: {}", map.url);
    println!("  • File pattern: {}", map.file_pattern);
    println!("  • Cache directory: {}", cache_dir.join(&map.name).display());

    let mut cached = 0;
    for chr in genome.chromosomes() {
        let present = map.is_cached(cache_dir, chr.name());
        if present {
            cached += 1;
        }
        println!(
            "    {} {:<8} {}",
            if present { "✓" } else { "·" },
            chr.name(),
            map.file_name(chr.name())
        );
    }
    println!(
        "  • Cached: {cached}/{} chromosomes",
        genome.num_chromosomes()
    );
    println!();
}

pub fn print_model(model: &DemographicModel) {
    println!("\n📊 Demographic model: {}", model.id);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("  {}", model.description);
    println!("  • Generation time: {} years", model.generation_time);
    println!("  • Populations: {}", model.num_populations());

    println!("\n👥 Population Configurations");
    for (j, config) in model.population_configurations.iter().enumerate() {
        println!(
            "  • {} [{j}]: initial_size={:.1}, growth_rate={}",
            model.population_label(j),
            config.initial_size,
            config.growth_rate
        );
    }

    println!("\n🔀 Migration Matrix");
    for row in model.migration_matrix.rows() {
        let cells: Vec<String> = row.iter().map(|rate| format!("{rate:>9.2e}")).collect();
        println!("  [{}]", cells.join(" "));
    }

    println!("\n⏳ Demographic Events");
    if model.demographic_events.is_empty() {
        println!("  • None");
    }
    for event in &model.demographic_events {
        println!("  • t={:<10} {}", event.time(), describe_event(model, event));
    }
    println!();
}

/// Event description using population labels instead of indexes.
fn describe_event(model: &DemographicModel, event: &DemographicEvent) -> String {
    match event {
        DemographicEvent::MassMigration(e) => format!(
            "Mass migration {} -> {} (proportion {})",
            model.population_label(e.source),
            model.population_label(e.destination),
            e.proportion
        ),
        DemographicEvent::MigrationRateChange(e) => match e.matrix_index {
            Some((j, k)) => format!(
                "Migration rate {} -> {} set to {:.2e}",
                model.population_label(j),
                model.population_label(k),
                e.rate
            ),
            None => format!("All migration rates set to {:.2e}", e.rate),
        },
        DemographicEvent::PopulationParametersChange(e) => {
            let target = e
                .population_id
                .map_or_else(|| "all populations".to_string(), |p| model.population_label(p));
            let mut changes = Vec::new();
            if let Some(size) = e.initial_size {
                changes.push(format!("size={size:.1}"));
            }
            if let Some(rate) = e.growth_rate {
                changes.push(format!("growth_rate={rate}"));
            }
            format!("{target}: {}", changes.join(", "))
        }
    }
}
