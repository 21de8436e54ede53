//! Shared default values for the command-line front-end.
//! Used when neither a flag nor the settings file provides a value.

pub const SPECIES: &str = "homo_sapiens";

/// Directory holding unpacked genetic maps, one subdirectory per map.
pub const CACHE_DIR: &str = "genetic_maps";

pub const RULE_WIDTH: usize = 50;
