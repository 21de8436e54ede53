use popcat_catalog::Catalog;

use crate::defaults::RULE_WIDTH;

pub fn list_catalog(catalog: &Catalog) {
    println!("\n🧬 Species");
    println!("{}", "=".repeat(RULE_WIDTH));
    for genome in catalog.genomes() {
        println!(
            "  • {} ({} chromosomes, default map {})",
            genome.species(),
            genome.num_chromosomes(),
            genome.default_genetic_map()
        );
    }

    println!("\n🗺️  Genetic Maps");
    println!("{}", "=".repeat(RULE_WIDTH));
    for map in catalog.genetic_maps() {
        println!("  • {}", map.name);
    }

    println!("\n📊 Demographic Models");
    println!("{}", "=".repeat(RULE_WIDTH));
    for entry in catalog.models() {
        println!(
            "  • {} [{}] ({} populations)",
            entry.id, entry.species, entry.num_populations
        );
        println!("      {}", entry.description);
    }

    println!("\n💡 Use 'popcat model <ID>' for details");
}
