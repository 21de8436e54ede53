//! Parsing of whitespace-delimited chromosome tables.
//!
//! A table has one row per chromosome: a name followed by a length in base
//! pairs. Further columns are ignored and blank lines are skipped.

use super::chromosome::Chromosome;
use crate::errors::ParseError;

/// Parse a chromosome table, attaching the same mean mutation and
/// recombination rate to every row.
///
/// # Errors
/// Returns a `ParseError` naming the 1-based line of the first row that has
/// no length column or whose length is not an unsigned integer.
///
/// # Examples
///
/// ```rust
/// # use popcat_catalog::genome::parse_chromosome_table;
/// let table = "chr1 248956422\nchr2 242193529\n";
/// let chromosomes = parse_chromosome_table(table, 1e-8, 1e-8).unwrap();
/// assert_eq!(chromosomes.len(), 2);
/// assert_eq!(chromosomes[1].length(), 242193529);
/// ```
pub fn parse_chromosome_table(
    table: &str,
    mean_mutation_rate: f64,
    mean_recombination_rate: f64,
) -> Result<Vec<Chromosome>, ParseError> {
    let mut chromosomes = Vec::new();

    for (idx, row) in table.lines().enumerate() {
        let line = idx + 1;
        let mut fields = row.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };
        let value = fields.next().ok_or_else(|| ParseError::MissingLength {
            line,
            name: name.to_string(),
        })?;
        let length = value
            .parse::<u64>()
            .map_err(|source| ParseError::InvalidLength {
                line,
                value: value.to_string(),
                source,
            })?;

        chromosomes.push(Chromosome::new(
            name,
            length,
            mean_mutation_rate,
            mean_recombination_rate,
        ));
    }

    Ok(chromosomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let table = "chr1   248956422\nchr2   242193529\n";
        let chrs = parse_chromosome_table(table, 1e-8, 2e-8).unwrap();

        assert_eq!(chrs.len(), 2);
        assert_eq!(chrs[0].name(), "chr1");
        assert_eq!(chrs[0].length(), 248956422);
        assert_eq!(chrs[0].mean_recombination_rate(), 2e-8);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_extra_columns() {
        let table = "\nchr1 10 extra columns\n   \nchr2\t20\n";
        let chrs = parse_chromosome_table(table, 1e-8, 1e-8).unwrap();

        assert_eq!(chrs.len(), 2);
        assert_eq!(chrs[0].length(), 10);
        assert_eq!(chrs[1].name(), "chr2");
    }

    #[test]
    fn test_parse_missing_length() {
        let err = parse_chromosome_table("chr1 10\nchr2\n", 1e-8, 1e-8).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingLength {
                line: 2,
                name: "chr2".into()
            }
        );
    }

    #[test]
    fn test_parse_invalid_length() {
        let err = parse_chromosome_table("chr1 -5\n", 1e-8, 1e-8).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLength { line: 1, .. }));

        let err = parse_chromosome_table("chr1 12.5\n", 1e-8, 1e-8).unwrap_err();
        assert!(err.to_string().contains("'12.5'"));
    }

    #[test]
    fn test_parse_empty_table() {
        assert!(parse_chromosome_table("", 1e-8, 1e-8).unwrap().is_empty());
    }
}
