//! `talentrank score` command - explain individual scores

use crate::cli::{Cli, OutputFormat, ScoreArgs};
use crate::commands::rank::fit_label;
use crate::commands::{build_oracle, profiles};
use talentrank_core::bail_usage;
use talentrank_core::config::AppConfig;
use talentrank_core::error::{RankError, Result};
use talentrank_core::format::escape_quotes;
use talentrank_core::scoring::{ScoreBreakdown, ScoringEngine};

/// Execute the score command
pub fn execute(cli: &Cli, config: &AppConfig, args: &ScoreArgs) -> Result<()> {
    let needle = args.name.trim().to_lowercase();
    if needle.is_empty() {
        bail_usage!("--name must not be empty");
    }

    let catalog = config.job_catalog();
    let requirement = catalog.get(&args.job)?;
    let profiles = profiles::load_profiles(&args.profiles)?;

    let selected: Vec<_> = profiles
        .iter()
        .enumerate()
        .filter(|(_, p)| p.name().to_lowercase().contains(&needle))
        .collect();
    if selected.is_empty() {
        return Err(RankError::not_found("profile", &args.name));
    }

    let oracle = build_oracle(cli, config);
    let engine = ScoringEngine::new(config.scoring, oracle.as_ref());

    let mut json_entries = Vec::new();
    for (index, profile) in selected {
        let outcome = engine.score(profile, requirement);
        match cli.format {
            OutputFormat::Json => {
                json_entries.push(match &outcome {
                    Ok(breakdown) => serde_json::json!({
                        "index": index,
                        "name": profile.name(),
                        "breakdown": breakdown,
                    }),
                    Err(e) => serde_json::json!({
                        "index": index,
                        "name": profile.name(),
                        "error": e.to_string(),
                    }),
                });
            }
            OutputFormat::Human => {
                println!("{} ({})", profile.name(), profile.display_location());
                match &outcome {
                    Ok(breakdown) => print_breakdown(breakdown),
                    Err(e) => println!("  skipped: {}", e),
                }
            }
            OutputFormat::Records => match &outcome {
                Ok(b) => println!(
                    "S index={} name=\"{}\" skills={} location={} budget={} content={} software={} fit={} ai={} total={}",
                    index,
                    escape_quotes(&profile.name()),
                    b.skills,
                    b.location,
                    b.budget,
                    b.content,
                    b.software,
                    fit_label(&b.semantic),
                    b.semantic_points,
                    b.total
                ),
                Err(e) => println!(
                    "S index={} name=\"{}\" error=\"{}\"",
                    index,
                    escape_quotes(&profile.name()),
                    escape_quotes(&e.to_string())
                ),
            },
        }
    }

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&json_entries)?);
    }

    Ok(())
}

fn print_breakdown(b: &ScoreBreakdown) {
    println!("  skills    {:>4}", b.skills);
    println!("  location  {:>4}", b.location);
    println!("  budget    {:>4}", b.budget);
    println!("  content   {:>4}", b.content);
    println!("  software  {:>4}", b.software);
    println!("  ai fit    {:>4}  (fit {})", b.semantic_points, fit_label(&b.semantic));
    println!("  total     {:>4}", b.total);
}
