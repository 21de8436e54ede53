//! Named lookup of genomes, genetic maps and demographic models.
//!
//! A `Catalog` is an ordinary value: build one, register what you need, and
//! pass it by reference to whatever performs lookups. Registering a name
//! twice is an error.

use crate::demography::DemographicModel;
use crate::errors::CatalogError;
use crate::genetic_maps::GeneticMap;
use crate::genome::Genome;
use crate::species;
use std::collections::BTreeMap;

/// Function producing a freshly built model.
pub type ModelFactory = fn() -> DemographicModel;

/// Registration record for a demographic model.
#[derive(Debug, Clone)]
pub struct ModelEntry {
    pub id: String,
    pub species: String,
    pub description: String,
    pub num_populations: usize,
    factory: ModelFactory,
}

impl ModelEntry {
    /// Build a new instance of the model.
    pub fn build(&self) -> DemographicModel {
        (self.factory)()
    }
}

/// Catalog of genetic maps, genomes (keyed by species) and models.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    genetic_maps: BTreeMap<String, GeneticMap>,
    genomes: BTreeMap<String, Genome>,
    models: BTreeMap<String, ModelEntry>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in species registered.
    ///
    /// # Errors
    /// Only fails if a built-in definition is inconsistent.
    pub fn with_builtin() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        species::register_all(&mut catalog)?;
        Ok(catalog)
    }

    /// Register a genetic map under its name.
    ///
    /// # Errors
    /// `CatalogError::DuplicateGeneticMap` if the name is taken.
    pub fn register_genetic_map(&mut self, map: GeneticMap) -> Result<(), CatalogError> {
        if self.genetic_maps.contains_key(&map.name) {
            return Err(CatalogError::DuplicateGeneticMap(map.name));
        }
        tracing::debug!(name = %map.name, "registered genetic map");
        self.genetic_maps.insert(map.name.clone(), map);
        Ok(())
    }

    /// Register a genome under its species name.
    ///
    /// # Errors
    /// `CatalogError::DuplicateGenome` if the species is taken and
    /// `CatalogError::MissingDefaultMap` if its default genetic map has not
    /// been registered.
    pub fn register_genome(&mut self, genome: Genome) -> Result<(), CatalogError> {
        if self.genomes.contains_key(genome.species()) {
            return Err(CatalogError::DuplicateGenome(genome.species().to_string()));
        }
        if !self.genetic_maps.contains_key(genome.default_genetic_map()) {
            return Err(CatalogError::MissingDefaultMap {
                species: genome.species().to_string(),
                map: genome.default_genetic_map().to_string(),
            });
        }
        tracing::debug!(
            species = genome.species(),
            chromosomes = genome.num_chromosomes(),
            "registered genome"
        );
        self.genomes.insert(genome.species().to_string(), genome);
        Ok(())
    }

    /// Register a model factory for `species`.
    ///
    /// The factory is run once and the result validated; the catalog key is
    /// the built model's `id`.
    ///
    /// # Errors
    /// `CatalogError::MissingSpecies` if no genome is registered for
    /// `species`, `CatalogError::DuplicateModel` if the id is taken, and
    /// `CatalogError::InvalidModel` if the model fails validation.
    pub fn register_model(
        &mut self,
        species: &str,
        factory: ModelFactory,
    ) -> Result<(), CatalogError> {
        let model = factory();
        if !self.genomes.contains_key(species) {
            return Err(CatalogError::MissingSpecies {
                model: model.id,
                species: species.to_string(),
            });
        }
        if self.models.contains_key(&model.id) {
            return Err(CatalogError::DuplicateModel(model.id));
        }
        model
            .validate()
            .map_err(|source| CatalogError::InvalidModel {
                id: model.id.clone(),
                source,
            })?;

        tracing::debug!(id = %model.id, species, "registered demographic model");
        self.models.insert(
            model.id.clone(),
            ModelEntry {
                num_populations: model.num_populations(),
                id: model.id,
                species: species.to_string(),
                description: model.description,
                factory,
            },
        );
        Ok(())
    }

    pub fn genetic_map(&self, name: &str) -> Result<&GeneticMap, CatalogError> {
        self.genetic_maps
            .get(name)
            .ok_or_else(|| CatalogError::UnknownGeneticMap(name.to_string()))
    }

    pub fn genome(&self, species: &str) -> Result<&Genome, CatalogError> {
        self.genomes
            .get(species)
            .ok_or_else(|| CatalogError::UnknownSpecies(species.to_string()))
    }

    pub fn model_entry(&self, id: &str) -> Result<&ModelEntry, CatalogError> {
        self.models
            .get(id)
            .ok_or_else(|| CatalogError::UnknownModel(id.to_string()))
    }

    /// Build a fresh copy of the model registered as `id`.
    pub fn model(&self, id: &str) -> Result<DemographicModel, CatalogError> {
        self.model_entry(id).map(ModelEntry::build)
    }

    /// Default genetic map of a species' genome.
    pub fn default_genetic_map(&self, species: &str) -> Result<&GeneticMap, CatalogError> {
        let genome = self.genome(species)?;
        self.genetic_map(genome.default_genetic_map())
    }

    pub fn genetic_maps(&self) -> impl Iterator<Item = &GeneticMap> {
        self.genetic_maps.values()
    }

    pub fn genomes(&self) -> impl Iterator<Item = &Genome> {
        self.genomes.values()
    }

    pub fn models(&self) -> impl Iterator<Item = &ModelEntry> {
        self.models.values()
    }

    /// Models registered for `species`.
    pub fn models_for<'a>(&'a self, species: &'a str) -> impl Iterator<Item = &'a ModelEntry> {
        self.models.values().filter(move |m| m.species == species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demography::{
        DemographicEvent, MigrationMatrix, PopulationConfiguration,
    };
    use crate::genome::build_genome;

    fn toy_map() -> GeneticMap {
        GeneticMap::new("ToyMap", "http://example.org/toy.tar.gz", "toy_{name}.txt")
    }

    fn toy_genome() -> Genome {
        build_genome("toy", "c1 100\nc2 200\n", "ToyMap").unwrap()
    }

    fn toy_model() -> DemographicModel {
        DemographicModel {
            id: "ToyConstant".into(),
            description: "constant size".into(),
            generation_time: 1.0,
            population_ids: vec!["P".into()],
            population_configurations: vec![PopulationConfiguration::new(100.0)],
            migration_matrix: MigrationMatrix::zeros(1),
            demographic_events: Vec::new(),
        }
    }

    fn unordered_model() -> DemographicModel {
        let mut model = toy_model();
        model.id = "ToyUnordered".into();
        model.demographic_events = vec![
            DemographicEvent::population_size(10.0, 0, 50.0),
            DemographicEvent::population_size(5.0, 0, 20.0),
        ];
        model
    }

    fn toy_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register_genetic_map(toy_map()).unwrap();
        catalog.register_genome(toy_genome()).unwrap();
        catalog.register_model("toy", toy_model).unwrap();
        catalog
    }

    #[test]
    fn test_register_and_lookup() {
        let catalog = toy_catalog();

        assert_eq!(catalog.genetic_map("ToyMap").unwrap().file_name("c1"), "toy_c1.txt");
        assert_eq!(catalog.genome("toy").unwrap().num_chromosomes(), 2);
        assert_eq!(catalog.default_genetic_map("toy").unwrap().name, "ToyMap");

        let entry = catalog.model_entry("ToyConstant").unwrap();
        assert_eq!(entry.species, "toy");
        assert_eq!(entry.num_populations, 1);
        assert_eq!(catalog.model("ToyConstant").unwrap(), toy_model());
        assert_eq!(catalog.models_for("toy").count(), 1);
        assert_eq!(catalog.models_for("other").count(), 0);
    }

    #[test]
    fn test_duplicate_genetic_map() {
        let mut catalog = toy_catalog();
        let err = catalog.register_genetic_map(toy_map()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateGeneticMap("ToyMap".into()));
        assert_eq!(catalog.genetic_maps().count(), 1);
    }

    #[test]
    fn test_duplicate_genome() {
        let mut catalog = toy_catalog();
        let err = catalog.register_genome(toy_genome()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateGenome("toy".into()));
    }

    #[test]
    fn test_genome_requires_registered_map() {
        let mut catalog = Catalog::new();
        let err = catalog.register_genome(toy_genome()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingDefaultMap {
                species: "toy".into(),
                map: "ToyMap".into()
            }
        );
    }

    #[test]
    fn test_duplicate_model() {
        let mut catalog = toy_catalog();
        let err = catalog.register_model("toy", toy_model).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateModel("ToyConstant".into()));
    }

    #[test]
    fn test_model_requires_species() {
        let mut catalog = Catalog::new();
        let err = catalog.register_model("toy", toy_model).unwrap_err();
        assert!(matches!(err, CatalogError::MissingSpecies { .. }));
    }

    #[test]
    fn test_invalid_model_rejected() {
        let mut catalog = toy_catalog();
        let err = catalog.register_model("toy", unordered_model).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidModel { ref id, .. } if id == "ToyUnordered"));
        assert!(catalog.model("ToyUnordered").is_err());
    }

    #[test]
    fn test_unknown_lookups() {
        let catalog = toy_catalog();
        assert_eq!(
            catalog.genetic_map("Nope").unwrap_err(),
            CatalogError::UnknownGeneticMap("Nope".into())
        );
        assert_eq!(
            catalog.genome("nope").unwrap_err(),
            CatalogError::UnknownSpecies("nope".into())
        );
        assert_eq!(
            catalog.model("Nope").unwrap_err(),
            CatalogError::UnknownModel("Nope".into())
        );
    }
}
