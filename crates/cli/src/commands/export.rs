use anyhow::{Context, Result};
use popcat_catalog::demography::SimulationConfig;
use popcat_catalog::Catalog;
use std::fs;

use crate::args::ExportArgs;
use crate::settings::Settings;

pub fn export_config(catalog: &Catalog, settings: &Settings, args: &ExportArgs) -> Result<()> {
    let model = catalog.model(&args.id).context("Failed to look up model")?;

    let mut builder = SimulationConfig::builder(&model);
    for spec in &args.samples {
        let population = spec
            .population
            .resolve(&model.population_ids)
            .with_context(|| {
                format!(
                    "Unknown population '{}' (model has: {})",
                    spec.population,
                    model.population_ids.join(", ")
                )
            })?;
        builder = builder.sample(population, spec.count);
    }

    if let Some(name) = &args.chromosome {
        let species = args.species.as_deref().unwrap_or(&settings.species);
        let genome = catalog
            .genome(species)
            .context("Failed to look up genome")?;
        let chromosome = genome
            .chromosome(name)
            .with_context(|| format!("Unknown chromosome '{name}' for {species}"))?;
        builder = builder.chromosome(chromosome);
    }

    let config = builder
        .build()
        .context("Failed to build simulation configuration")?;
    let json = config
        .to_json()
        .context("Failed to serialize simulation configuration")?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "✓ Exported '{}' with {} samples to: {}",
                config.model_id,
                config.num_samples(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
