//! `talentrank jobs` and `talentrank show` - job template listing

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use talentrank_core::config::AppConfig;
use talentrank_core::error::Result;
use talentrank_core::format::escape_quotes;
use talentrank_core::requirement::JobRequirement;

#[derive(Serialize)]
struct JobEntry<'a> {
    id: &'a str,
    #[serde(flatten)]
    requirement: &'a JobRequirement,
}

/// List every template, built-in and configured
pub fn list(cli: &Cli, config: &AppConfig) -> Result<()> {
    let catalog = config.job_catalog();

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = catalog
                .iter()
                .map(|(id, requirement)| JobEntry { id, requirement })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            for (id, requirement) in catalog.iter() {
                println!("{}. {}", id, requirement.title);
            }
        }
        OutputFormat::Records => {
            println!("H talentrank=1 records=1 mode=jobs results={}", catalog.len());
            for (id, requirement) in catalog.iter() {
                println!(
                    "J id={} title=\"{}\"",
                    id,
                    escape_quotes(&requirement.title)
                );
            }
        }
    }

    Ok(())
}

/// Show one template's requirements
pub fn show(cli: &Cli, config: &AppConfig, job: &str) -> Result<()> {
    let catalog = config.job_catalog();
    let requirement = catalog.get(job)?;

    match cli.format {
        OutputFormat::Json => {
            let entry = JobEntry {
                id: job.trim(),
                requirement,
            };
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        OutputFormat::Human => print_requirement(requirement),
        OutputFormat::Records => {
            println!(
                "J id={} title=\"{}\" location=\"{}\" budget=\"{}\" skills=\"{}\" software=\"{}\" content=\"{}\"",
                job.trim(),
                escape_quotes(&requirement.title),
                escape_quotes(&requirement.location),
                escape_quotes(requirement.budget.raw()),
                escape_quotes(&requirement.skills),
                escape_quotes(&requirement.software),
                escape_quotes(&requirement.content_type),
            );
        }
    }

    Ok(())
}

/// Human-readable requirement block, shared with `rank`
pub fn print_requirement(requirement: &JobRequirement) {
    println!("Job Details: {}", requirement.title);
    println!("{}", "-".repeat(40));
    println!("Location: {}", requirement.location);
    println!("Budget: ${}", requirement.budget);
    println!("Skills: {}", requirement.skills);
    println!("Software: {}", requirement.software);
    println!("Content Type: {}", requirement.content_type);
}
