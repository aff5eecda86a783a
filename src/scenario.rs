//! Scenario table: the read-only, year-keyed decision data.
//!
//! Scenarios live in a flat CSV file with one row per year. The header has
//! a `year` column, a `prompt` column, and `opt{n}_title` / `opt{n}_tag`
//! pairs for up to [`MAX_OPTIONS`] options. Header names are trimmed and a
//! UTF-8 BOM on the first header is stripped, so files exported from
//! spreadsheet tools load as-is.
//!
//! The table is loaded fresh per request and never mutated. Game flow uses
//! [`ScenarioTable::load_or_empty`], which degrades any load failure to an
//! empty table; an empty table resolves every year straight to the finale.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{ScenarioError, ScenarioResult};

/// Maximum number of options per scenario (`opt1` through `opt4`).
pub const MAX_OPTIONS: u8 = 4;

/// One selectable option of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Option text, also the decision-log entry title.
    pub title: String,
    /// Raw tag string. `None` means the tag column was absent from the
    /// CSV, which resolves to the reform default at decision time; an
    /// unrecognized string resolves to a zero delta.
    pub tag: Option<String>,
}

/// One year's decision scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    /// Year this scenario belongs to.
    pub year: u16,
    /// Free-text situation report shown before the options.
    pub prompt: String,
    /// Options in column order. The loader keeps the dense prefix: it
    /// stops at the first empty `opt{n}_title` cell.
    pub options: Vec<ChoiceOption>,
}

impl Scenario {
    /// Get an option by its 1-based number, matching the CSV columns.
    #[must_use]
    pub fn option(&self, n: u8) -> Option<&ChoiceOption> {
        if n == 0 {
            return None;
        }
        self.options.get(usize::from(n - 1))
    }
}

/// Read-only map of year to scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioTable {
    scenarios: BTreeMap<u16, Scenario>,
}

impl ScenarioTable {
    /// Parse a scenario table from CSV data.
    ///
    /// Rows whose `year` cell is missing or non-numeric are skipped, not
    /// fatal. A later row for the same year replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV stream is malformed or the header has
    /// no `year` column.
    pub fn from_reader<R: io::Read>(rdr: R) -> ScenarioResult<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let year_col = column("year").ok_or(ScenarioError::MissingYearColumn)?;
        let prompt_col = column("prompt");
        let option_cols: Vec<(Option<usize>, Option<usize>)> = (1..=MAX_OPTIONS)
            .map(|n| (column(&format!("opt{n}_title")), column(&format!("opt{n}_tag"))))
            .collect();

        let mut scenarios = BTreeMap::new();
        for record in reader.records() {
            let record = record?;

            let year = record.get(year_col).map(str::trim).unwrap_or_default();
            let Ok(year) = year.parse::<u16>() else {
                continue;
            };

            let prompt = prompt_col
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string();

            let mut options = Vec::new();
            for &(title_col, tag_col) in &option_cols {
                let title = title_col.and_then(|i| record.get(i)).unwrap_or_default();
                if title.trim().is_empty() {
                    break;
                }
                let tag = tag_col.map(|i| record.get(i).unwrap_or_default().to_string());
                options.push(ChoiceOption {
                    title: title.to_string(),
                    tag,
                });
            }

            scenarios.insert(
                year,
                Scenario {
                    year,
                    prompt,
                    options,
                },
            );
        }

        Ok(Self { scenarios })
    }

    /// Strict load from a file, for tooling.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let file = File::open(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Game-flow load: any failure degrades to an empty table.
    ///
    /// With an empty table every year resolves to the finale, so missing
    /// or unparseable scenario data ends the game instead of crashing it.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Get the scenario for a year.
    #[must_use]
    pub fn get(&self, year: u16) -> Option<&Scenario> {
        self.scenarios.get(&year)
    }

    /// Years with a scenario, in ascending order.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.scenarios.keys().copied()
    }

    /// Scenarios in ascending year order.
    pub fn iter(&self) -> std::collections::btree_map::Values<'_, u16, Scenario> {
        self.scenarios.values()
    }

    /// Number of years with a scenario.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the table has no scenarios at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScenarioTable {
    type Item = &'a Scenario;
    type IntoIter = std::collections::btree_map::Values<'a, u16, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "\
year,prompt,opt1_title,opt1_tag,opt2_title,opt2_tag
2026,The harvest disappoints.,Announce record yields,delusion,Import grain quietly,corruption
2027,A general grows popular.,Promote him to nowhere,purge,Share the stage,reform
";

    #[test]
    fn test_basic_parse() {
        let table = ScenarioTable::from_reader(BASIC.as_bytes()).expect("parses");
        assert_eq!(table.len(), 2);

        let scenario = table.get(2026).expect("2026 present");
        assert_eq!(scenario.prompt, "The harvest disappoints.");
        assert_eq!(scenario.options.len(), 2);
        assert_eq!(scenario.option(1).expect("opt1").title, "Announce record yields");
        assert_eq!(scenario.option(1).expect("opt1").tag.as_deref(), Some("delusion"));
        assert_eq!(scenario.option(2).expect("opt2").tag.as_deref(), Some("corruption"));
        assert!(scenario.option(3).is_none());
        assert!(scenario.option(0).is_none());
    }

    #[test]
    fn test_bom_and_padded_headers() {
        let csv = "\u{feff}year , prompt ,opt1_title,opt1_tag\n2026,Report.,Wave from balcony,delusion\n";
        let table = ScenarioTable::from_reader(csv.as_bytes()).expect("parses");
        let scenario = table.get(2026).expect("2026 present");
        assert_eq!(scenario.prompt, "Report.");
        assert_eq!(scenario.option(1).expect("opt1").tag.as_deref(), Some("delusion"));
    }

    #[test]
    fn test_bad_year_rows_skipped() {
        let csv = "\
year,prompt,opt1_title,opt1_tag
,No year.,A,reform
soon,Not a number.,B,reform
2026,Fine.,C,reform
";
        let table = ScenarioTable::from_reader(csv.as_bytes()).expect("parses");
        assert_eq!(table.len(), 1);
        assert!(table.get(2026).is_some());
    }

    #[test]
    fn test_missing_year_column() {
        let csv = "prompt,opt1_title\nReport.,Wave\n";
        let err = ScenarioTable::from_reader(csv.as_bytes()).expect_err("must fail");
        assert!(matches!(err, ScenarioError::MissingYearColumn));
    }

    #[test]
    fn test_absent_tag_column_is_none() {
        let csv = "year,prompt,opt1_title\n2026,Report.,Wave from balcony\n";
        let table = ScenarioTable::from_reader(csv.as_bytes()).expect("parses");
        let opt = table.get(2026).and_then(|s| s.option(1)).expect("opt1");
        assert_eq!(opt.tag, None);
    }

    #[test]
    fn test_empty_tag_cell_is_some_empty() {
        // A present-but-empty tag is distinct from a missing column: it
        // resolves to a zero delta, not the reform default.
        let csv = "year,prompt,opt1_title,opt1_tag\n2026,Report.,Wave from balcony,\n";
        let table = ScenarioTable::from_reader(csv.as_bytes()).expect("parses");
        let opt = table.get(2026).and_then(|s| s.option(1)).expect("opt1");
        assert_eq!(opt.tag.as_deref(), Some(""));
    }

    #[test]
    fn test_options_stop_at_first_empty_title() {
        let csv = "\
year,prompt,opt1_title,opt1_tag,opt2_title,opt2_tag,opt3_title,opt3_tag
2026,Report.,First,reform,,delusion,Third,purge
";
        let table = ScenarioTable::from_reader(csv.as_bytes()).expect("parses");
        let scenario = table.get(2026).expect("2026 present");
        assert_eq!(scenario.options.len(), 1);
    }

    #[test]
    fn test_load_or_empty_on_missing_file() {
        let table = ScenarioTable::load_or_empty(Path::new("no/such/file.csv"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_years_ordered() {
        let csv = "year,prompt,opt1_title\n2030,C.,x\n2026,A.,x\n2028,B.,x\n";
        let table = ScenarioTable::from_reader(csv.as_bytes()).expect("parses");
        let years: Vec<u16> = table.years().collect();
        assert_eq!(years, vec![2026, 2028, 2030]);
    }
}
