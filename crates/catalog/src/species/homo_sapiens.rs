//! Genome, genetic map and demographic models for humans.

use crate::catalog::Catalog;
use crate::demography::{
    size_at_epoch_start, years_to_generations, DemographicEvent, DemographicModel,
    MigrationMatrix, PopulationConfiguration,
};
use crate::errors::{CatalogError, GenomeError};
use crate::genetic_maps::GeneticMap;
use crate::genome::{build_genome, Genome};

pub const SPECIES: &str = "homo_sapiens";

// ---------------------------------------------------------------------------
// Genetic maps
// ---------------------------------------------------------------------------

pub const HAPMAP_II_GRCH37: &str = "HapmapII_GRCh37";

/// The Phase II HapMap genetic map, lifted over to GRCh37, as used by the
/// 1000 Genomes project.
pub fn hapmap_ii_grch37() -> GeneticMap {
    GeneticMap::new(
        HAPMAP_II_GRCH37,
        "http://ftp-trace.ncbi.nih.gov/1000genomes/ftp/technical/working/\
         20110106_recombination_hotspots/\
         HapmapII_GRCh37_RecombinationHotspots.tar.gz",
        "genetic_map_GRCh37_{name}.txt",
    )
    .with_description(
        "Phase II HapMap genetic map lifted over to GRCh37 (1000 Genomes). See \
         ftp://ftp-trace.ncbi.nih.gov/1000genomes/ftp/technical/working/\
         20110106_recombination_hotspots/README_hapmapII_GRCh37_map",
    )
}

// ---------------------------------------------------------------------------
// Genome
// ---------------------------------------------------------------------------

// Chromosome lengths from GRCh38 (https://www.ncbi.nlm.nih.gov/grc/human/data).
// TODO: replace the placeholder mean mutation and recombination rates with
// per-chromosome estimates.
const CHROMOSOME_TABLE: &str = "\
chr1   248956422
chr2   242193529
chr3   198295559
chr4   190214555
chr5   181538259
chr6   170805979
chr7   159345973
chr8   145138636
chr9   138394717
chr10  133797422
chr11  135086622
chr12  133275309
chr13  114364328
chr14  107043718
chr15  101991189
chr16  90338345
chr17  83257441
chr18  80373285
chr19  58617616
chr20  64444167
chr21  46709983
chr22  50818468
chrX   156040895
chrY   57227415
";

/// The human genome (GRCh38 chromosome lengths).
pub fn genome() -> Result<Genome, GenomeError> {
    build_genome(SPECIES, CHROMOSOME_TABLE, HAPMAP_II_GRCH37)
}

// ---------------------------------------------------------------------------
// Demographic models
// ---------------------------------------------------------------------------

pub const GUTENKUNST_OUT_OF_AFRICA: &str = "GutenkunstThreePopOutOfAfrica";
pub const TENNESSEN_EUROPEAN: &str = "TennessenEuropean";

/// Three-population Out-of-Africa model of Gutenkunst et al. (2009),
/// maximum likelihood values from their Table 1.
///
/// Populations: 0 = YRI (Yoruba), 1 = CEU (Utah residents of European
/// ancestry), 2 = CHB (Han Chinese in Beijing).
#[allow(non_snake_case)]
pub fn gutenkunst_three_pop_out_of_africa() -> DemographicModel {
    let N_A = 7300.0;
    let N_B = 2100.0;
    let N_AF = 12300.0;
    let N_EU0 = 1000.0;
    let N_AS0 = 510.0;

    let generation_time = 25.0;
    let T_AF = years_to_generations(220e3, generation_time);
    let T_B = years_to_generations(140e3, generation_time);
    let T_EU_AS = years_to_generations(21.2e3, generation_time);

    // Present-day sizes from the size at the CEU/CHB split and the growth rates.
    let r_EU = 0.004;
    let r_AS = 0.0055;
    let N_EU = size_at_epoch_start(N_EU0, r_EU, T_EU_AS);
    let N_AS = size_at_epoch_start(N_AS0, r_AS, T_EU_AS);

    let m_AF_B = 25e-5;
    let m_AF_EU = 3e-5;
    let m_AF_AS = 1.9e-5;
    let m_EU_AS = 9.6e-5;

    let mut migration_matrix = MigrationMatrix::zeros(3);
    for (j, k, rate) in [(0, 1, m_AF_EU), (0, 2, m_AF_AS), (1, 2, m_EU_AS)] {
        migration_matrix.set(j, k, rate);
        migration_matrix.set(k, j, rate);
    }

    DemographicModel {
        id: GUTENKUNST_OUT_OF_AFRICA.to_string(),
        description: "Three population Out-of-Africa model (Gutenkunst et al. 2009)".to_string(),
        generation_time,
        population_ids: vec!["YRI".into(), "CEU".into(), "CHB".into()],
        population_configurations: vec![
            PopulationConfiguration::new(N_AF),
            PopulationConfiguration::with_growth(N_EU, r_EU),
            PopulationConfiguration::with_growth(N_AS, r_AS),
        ],
        migration_matrix,
        demographic_events: vec![
            // CEU and CHB merge into B, with migration only between B and YRI.
            DemographicEvent::merge(T_EU_AS, 2, 1),
            DemographicEvent::migration_rate(T_EU_AS, 0.0),
            DemographicEvent::pairwise_migration_rate(T_EU_AS, m_AF_B, 0, 1),
            DemographicEvent::pairwise_migration_rate(T_EU_AS, m_AF_B, 1, 0),
            DemographicEvent::population_parameters(T_EU_AS, 1, N_B, 0.0),
            // B merges into YRI.
            DemographicEvent::merge(T_B, 1, 0),
            // Ancestral size change.
            DemographicEvent::population_size(T_AF, 0, N_A),
        ],
    }
}

/// Single-population European model of Tennessen et al. (2012), fitted to
/// the joint site frequency spectrum of European and African Americans
/// (<https://doi.org/10.1126/science.1219240>).
///
/// Population 0 is the European-American lineage.
#[allow(non_snake_case)]
pub fn tennessen_european() -> DemographicModel {
    let N_A = 7310.0;
    let N_AF = 14474.0;
    let N_B = 1861.0;
    let N_EU1 = 9475.0;

    let generation_time = 25.0;
    let T_AF = years_to_generations(148000.0, generation_time);
    let T_B = years_to_generations(51000.0, generation_time);
    let T_EU0 = years_to_generations(23000.0, generation_time);
    let T_EU1 = years_to_generations(5115.0, generation_time);

    let r_EU0 = 0.00307;
    let r_EU1 = 0.0195;
    let N_EU = size_at_epoch_start(N_EU1, r_EU1, T_EU1);

    DemographicModel {
        id: TENNESSEN_EUROPEAN.to_string(),
        description: "European population history (Tennessen et al. 2012)".to_string(),
        generation_time,
        population_ids: vec!["CEU".into()],
        population_configurations: vec![PopulationConfiguration::with_growth(N_EU, r_EU1)],
        migration_matrix: MigrationMatrix::zeros(1),
        demographic_events: vec![
            DemographicEvent::population_parameters(T_EU1, 0, N_EU1, r_EU0),
            DemographicEvent::population_parameters(T_EU0, 0, N_B, 0.0),
            DemographicEvent::population_parameters(T_B, 0, N_AF, 0.0),
            DemographicEvent::population_parameters(T_AF, 0, N_A, 0.0),
        ],
    }
}

/// Register the human genetic map, genome and models.
pub fn register(catalog: &mut Catalog) -> Result<(), CatalogError> {
    catalog.register_genetic_map(hapmap_ii_grch37())?;
    catalog.register_genome(genome()?)?;
    catalog.register_model(SPECIES, gutenkunst_three_pop_out_of_africa)?;
    catalog.register_model(SPECIES, tennessen_european)?;
    Ok(())
}
