//! Reviewer rule inspection command

use std::path::Path;

use archgate_reviewer::RuleTable;
use colored::Colorize;

use crate::error::{CliError, CliResult};
use crate::output::{structured, OutputFormat};

/// Print the reviewer rules bound into the governance version.
///
/// With a rule file the raw text is printed as-is, since that text is
/// what gets hashed.
pub fn execute(rule_file: Option<&Path>, max_depth: usize, format: OutputFormat) -> CliResult<u8> {
    if let Some(path) = rule_file {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        print!("{}", text);
        return Ok(0);
    }

    let table = RuleTable::builtin(max_depth);
    if let Some(text) = structured(&table, format)? {
        println!("{}", text);
        return Ok(0);
    }

    println!("{}", "Reviewer Rules".bold().cyan());
    println!("{}", "=".repeat(70));
    println!();
    for rule in &table.rules {
        let halts = if rule.halts { " (halts)".red().to_string() } else { String::new() };
        println!(
            "  {} {} {}{}",
            format!("#{}", rule.order).bold().yellow(),
            rule.check_id.to_string().bold(),
            rule.name,
            halts
        );
        println!("      {}", rule.description.dimmed());
        for (label, pattern) in &rule.patterns {
            println!("      {:<10} {}", format!("{}:", label), pattern);
        }
    }
    println!();
    println!(
        "{}: budget checked {}, depth guard {}",
        "Policy".bold(),
        table.budget.checked,
        table.max_depth
    );
    Ok(0)
}
