//! Plan evaluation command

use std::io::Read;
use std::path::Path;

use archgate_engine::{EngineConfig, GovernanceEngine};
use archgate_types::{Contract, VerdictEvent};
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::output::{structured, OutputFormat};

/// Plan path meaning "read standard input".
const STDIN_PATH: &str = "-";

/// Evaluate one plan and print its verdict. Returns the process exit code.
pub fn execute(plan: &Path, config: &EngineConfig, format: OutputFormat) -> CliResult<u8> {
    let engine = GovernanceEngine::new(config)?;
    let contract = load_plan(plan)?;
    debug!(plan = %plan.display(), "Plan loaded");

    let event = engine.evaluate(&contract)?;
    match structured(&event, format)? {
        Some(text) => println!("{}", text),
        None => print_verdict(&event),
    }
    Ok(event.exit_code())
}

fn load_plan(path: &Path) -> CliResult<Contract> {
    let text = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?
    };
    let document: Value = serde_json::from_str(&text).map_err(CliError::InvalidPlan)?;
    Ok(Contract::new(document))
}

fn print_verdict(event: &VerdictEvent) {
    println!("{}", "GOVERNANCE VERDICT".bold().cyan());
    println!("{}", "=".repeat(70));
    println!();

    let headline = if event.authority_granted() {
        format!("{} {}", event.event_type(), event.status()).green().bold()
    } else {
        format!("{} {}", event.event_type(), event.status()).red().bold()
    };
    println!("  {}", headline);
    println!("  {:<20} {}", "Governance version:", event.governance_version());
    println!("  {:<20} {}", "Timestamp:", event.timestamp());

    match event {
        VerdictEvent::Frozen(frozen) => {
            println!("  {:<20} {}", "Plan hash:", frozen.plan_hash);
            println!("  {:<20} {}", "Schema version:", frozen.schema_version);
        }
        VerdictEvent::Rejected(rejected) => {
            println!();
            println!("  {} ({})", "Errors".bold(), rejected.error_count);
            for error in &rejected.errors {
                println!(
                    "    {} {}",
                    format!("[{}]", error.check_id).yellow(),
                    error.section.bold()
                );
                println!("      {}", error.message);
                if let Some(reference) = &error.reference {
                    println!("      {} {}", "ref:".dimmed(), reference);
                }
            }
            println!();
            let locked: Vec<&str> = rejected.locked_sections.iter().map(String::as_str).collect();
            if locked.is_empty() {
                println!("  {} {}", "Locked sections:".bold(), "none".dimmed());
            } else {
                println!("  {} {}", "Locked sections:".bold(), locked.join(", "));
            }
            println!("  {} {}", "Remediation:".bold(), rejected.remediation);
        }
    }
}
