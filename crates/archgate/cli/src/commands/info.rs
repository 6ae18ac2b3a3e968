//! Authority inspection commands

use archgate_engine::{EngineConfig, GovernanceEngine, RuleSource};
use archgate_schema::SchemaAuthority;
use colored::Colorize;
use serde::Serialize;

use crate::error::CliResult;
use crate::output::{structured, OutputFormat};

#[derive(Serialize)]
struct AuthorityInfo {
    governance_version: String,
    schema_version: String,
    manifest_path: String,
    rule_source: RuleSource,
    max_errors: usize,
    max_depth: usize,
    stages: Vec<String>,
}

/// Print the `schema_version` every contract must declare.
pub fn schema_version(format: OutputFormat) -> CliResult<u8> {
    let version = SchemaAuthority::new()?.version_hash().to_hex();
    match format {
        OutputFormat::Table => println!("{}", version),
        _ => {
            let value = serde_json::json!({ "schema_version": version });
            if let Some(text) = structured(&value, format)? {
                println!("{}", text);
            }
        }
    }
    Ok(0)
}

/// Print the governance version and the configuration it binds.
pub fn show_info(config: &EngineConfig, format: OutputFormat) -> CliResult<u8> {
    let engine = GovernanceEngine::new(config)?;
    let info = AuthorityInfo {
        governance_version: engine.governance_version().to_hex(),
        schema_version: engine.schema_version().to_hex(),
        manifest_path: config.manifest_path.display().to_string(),
        rule_source: config.rule_source.clone(),
        max_errors: engine.manifest().max_errors,
        max_depth: engine.gate().max_depth(),
        stages: engine
            .gate()
            .stage_names()
            .into_iter()
            .map(String::from)
            .collect(),
    };

    if let Some(text) = structured(&info, format)? {
        println!("{}", text);
        return Ok(0);
    }

    println!("{}", "Governance Authority".bold().cyan());
    println!("{}", "=".repeat(70));
    println!();
    println!("  {:<22} {}", "Governance version:", info.governance_version.green());
    println!("  {:<22} {}", "Expected schema:", info.schema_version);
    println!("  {:<22} {}", "Manifest:", info.manifest_path);
    let rules = match &info.rule_source {
        RuleSource::Builtin => "built-in rule table".to_string(),
        RuleSource::File(path) => path.display().to_string(),
    };
    println!("  {:<22} {}", "Reviewer rules:", rules);
    println!("  {:<22} {}", "Error budget:", info.max_errors);
    println!("  {:<22} {}", "Depth guard:", info.max_depth);
    println!();
    for (i, stage) in info.stages.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).bold().yellow(), stage);
    }
    Ok(0)
}
