use anyhow::{Context, Result};
use popcat_catalog::Catalog;
use std::path::Path;

use crate::printing::{print_genetic_map, print_genome, print_model};

pub fn show_genome(catalog: &Catalog, species: &str) -> Result<()> {
    let genome = catalog
        .genome(species)
        .context("Failed to look up genome")?;
    print_genome(genome);
    Ok(())
}

pub fn show_maps(catalog: &Catalog, species: &str, cache_dir: &Path) -> Result<()> {
    let genome = catalog
        .genome(species)
        .context("Failed to look up genome")?;

    let default_map = genome.default_genetic_map();
    let map = catalog
        .genetic_map(default_map)
        .context("Failed to look up default genetic map")?;
    print_genetic_map(map, genome, cache_dir);

    for other in catalog.genetic_maps().filter(|m| m.name != default_map) {
        println!("  • Also registered: {}", other.name);
    }

    Ok(())
}

pub fn show_model(catalog: &Catalog, id: &str) -> Result<()> {
    let model = catalog.model(id).context("Failed to look up model")?;
    print_model(&model);
    Ok(())
}
