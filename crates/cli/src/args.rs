use clap::Args;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Args, Debug)]
pub struct MapsArgs {
    /// Species name (default: from settings)
    #[arg(short, long)]
    pub species: Option<String>,

    /// Directory holding unpacked genetic maps (default: from settings)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Model identifier (see `popcat list`)
    pub id: String,

    /// Samples to draw, as POPULATION:COUNT
    ///
    /// POPULATION is an index or a label such as YRI. Repeat the flag for
    /// several populations.
    #[arg(short = 'S', long = "sample", required = true, value_name = "POPULATION:COUNT")]
    pub samples: Vec<SampleSpec>,

    /// Chromosome whose length and mean rates to simulate
    #[arg(short, long)]
    pub chromosome: Option<String>,

    /// Species providing the chromosome (default: from settings)
    #[arg(short, long)]
    pub species: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Population referenced by index or by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulationRef {
    Index(usize),
    Label(String),
}

impl PopulationRef {
    /// Resolve against a model's population labels.
    pub fn resolve(&self, labels: &[String]) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Label(label) => labels.iter().position(|l| l == label),
        }
    }
}

impl fmt::Display for PopulationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Label(label) => write!(f, "{label}"),
        }
    }
}

/// `POPULATION:COUNT` as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSpec {
    pub population: PopulationRef,
    pub count: usize,
}

impl FromStr for SampleSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pop, count) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("expected POPULATION:COUNT, got '{s}'"))?;
        if pop.is_empty() {
            return Err(format!("missing population in '{s}'"));
        }
        let count = count
            .parse::<usize>()
            .map_err(|e| format!("invalid sample count '{count}': {e}"))?;
        let population = match pop.parse::<usize>() {
            Ok(i) => PopulationRef::Index(i),
            Err(_) => PopulationRef::Label(pop.to_string()),
        };
        Ok(Self { population, count })
    }
}
