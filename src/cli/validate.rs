//! Scenario CSV validation command implementation.

use super::CliError;
use despot::game::{FINAL_YEAR, START_YEAR};
use despot::{ScenarioTable, Tag};
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the CSV cannot be read, does not parse, or
/// contains no scenarios at all.
pub(crate) fn execute(scenarios: &Path) -> Result<(), CliError> {
    println!("Validating: {}", scenarios.display());
    println!();

    let table = ScenarioTable::load(scenarios)?;
    print_check("CSV parses with a year column", true);

    let has_scenarios = !table.is_empty();
    print_check("at least one scenario", has_scenarios);
    if !has_scenarios {
        return Err(CliError::new("scenario table is empty"));
    }

    let missing: Vec<u16> = (START_YEAR..=FINAL_YEAR)
        .filter(|&year| table.get(year).is_none())
        .collect();
    print_check(
        &format!("covers {START_YEAR}-{FINAL_YEAR}"),
        missing.is_empty(),
    );
    if !missing.is_empty() {
        println!(
            "    play ends early at the first gap: {}",
            join_years(&missing)
        );
    }

    let extra: Vec<u16> = table
        .years()
        .filter(|&year| !(START_YEAR..=FINAL_YEAR).contains(&year))
        .collect();
    if !extra.is_empty() {
        println!("    unreachable years in table: {}", join_years(&extra));
    }

    println!();
    println!("Scenarios:");
    for scenario in &table {
        println!("  {}: {} option(s)", scenario.year, scenario.options.len());

        if scenario.options.is_empty() {
            println!("    warning: no options; any choice resolves to the reform default");
        }
        for (i, option) in scenario.options.iter().enumerate() {
            match option.tag.as_deref() {
                None => println!("    opt{}: no tag column (reform default)", i + 1),
                Some(tag) if Tag::parse(tag).is_none() => {
                    println!("    opt{}: unrecognized tag {tag:?} (zero delta)", i + 1);
                }
                Some(_) => {}
            }
        }
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}

fn join_years(years: &[u16]) -> String {
    years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
