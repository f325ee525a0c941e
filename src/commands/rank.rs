//! `talentrank rank` command - run a ranking pass
//!
//! Results are printed in the order the ranker returns them; nothing here
//! re-sorts or re-filters.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::{Cli, OutputFormat, RankArgs};
use crate::commands::jobs::print_requirement;
use crate::commands::{build_oracle, profiles};
use talentrank_core::bail_usage;
use talentrank_core::config::AppConfig;
use talentrank_core::error::Result;
use talentrank_core::format::{elide, escape_quotes};
use talentrank_core::ranking::{Ranker, Ranking, ScoreResult};
use talentrank_core::requirement::JobRequirement;
use talentrank_core::scoring::{ScoringEngine, SemanticFit};

/// Execute the rank command
pub fn execute(cli: &Cli, config: &AppConfig, args: &RankArgs) -> Result<()> {
    let top_n = args.top.unwrap_or(config.ranking.top_n);
    if top_n == 0 {
        bail_usage!("--top must be at least 1");
    }

    let catalog = config.job_catalog();
    let requirement = catalog.get(&args.job)?;
    let profiles = profiles::load_profiles(&args.profiles)?;

    let oracle = build_oracle(cli, config);
    let engine = ScoringEngine::new(config.scoring, oracle.as_ref());

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let show_progress = cli.format == OutputFormat::Human && !cli.quiet;
    if show_progress {
        print_requirement(requirement);
        println!();
        println!("Generating recommendations for: {}", requirement.title);
        println!("Analyzing {} talent profiles...", profiles.len());
    }

    let mut report = |done: usize, total: usize| {
        let percentage = done as f64 / total as f64 * 100.0;
        eprint!("\rProcessing talents {:.1}% ({}/{})", percentage, done, total);
        let _ = std::io::stderr().flush();
    };
    let progress: Option<&mut dyn FnMut(usize, usize)> = if show_progress {
        Some(&mut report)
    } else {
        None
    };

    let ranking = Ranker::new(&engine, top_n)
        .with_progress_interval(config.ranking.progress_interval)
        .with_interrupt(interrupted)
        .rank(&profiles, requirement, progress)?;

    if show_progress && !profiles.is_empty() {
        eprintln!();
    }

    match cli.format {
        OutputFormat::Json => print_json(&args.job, requirement, &ranking)?,
        OutputFormat::Human => print_human(cli, requirement, &ranking),
        OutputFormat::Records => print_records(&args.job, &ranking),
    }

    Ok(())
}

fn print_json(job: &str, requirement: &JobRequirement, ranking: &Ranking) -> Result<()> {
    let results: Vec<_> = ranking
        .results
        .iter()
        .enumerate()
        .map(|(i, result)| -> Result<serde_json::Value> {
            let mut obj = serde_json::to_value(result)?;
            obj["rank"] = serde_json::json!(i + 1);
            Ok(obj)
        })
        .collect::<Result<_>>()?;

    let output = serde_json::json!({
        "job": {
            "id": job.trim(),
            "title": requirement.title,
        },
        "evaluated": ranking.evaluated,
        "matched": ranking.matched,
        "skipped": ranking.skipped,
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(cli: &Cli, requirement: &JobRequirement, ranking: &Ranking) {
    if !cli.quiet {
        println!("Found {} matching candidates", ranking.matched);
        if ranking.skipped > 0 {
            println!("Skipped {} incomplete profiles", ranking.skipped);
        }
    }

    if ranking.results.is_empty() {
        if !cli.quiet {
            println!("No matching candidates for '{}'", requirement.title);
        }
        return;
    }

    println!();
    println!("Top Recommendations for: {}", requirement.title);
    println!("{}", "=".repeat(60));

    for (i, result) in ranking.results.iter().enumerate() {
        println!();
        println!("{}. {} ({})", i + 1, result.name, result.location);
        println!("   Job Types: {}", result.job_types);
        println!("   Skills: {}", elide(&result.skills, 80));
        println!("   Software: {}", elide(&result.software, 60));
        println!("   Content: {}", result.content_verticals);
        println!("   Monthly Rate: ${}", result.monthly_rate);
        println!("   Match Score: {}", result.score);
        if cli.verbose {
            println!("   Breakdown: {}", breakdown_summary(result));
        }
        println!("{}", "-".repeat(40));
    }
}

fn print_records(job: &str, ranking: &Ranking) {
    println!(
        "H talentrank=1 records=1 mode=rank job={} evaluated={} matched={} skipped={} results={}",
        job.trim(),
        ranking.evaluated,
        ranking.matched,
        ranking.skipped,
        ranking.results.len()
    );
    for (i, result) in ranking.results.iter().enumerate() {
        println!(
            "R rank={} score={} base={} fit={} index={} name=\"{}\" location=\"{}\" rate=\"{}\"",
            i + 1,
            result.score,
            result.breakdown.base(),
            fit_label(&result.breakdown.semantic),
            result.index,
            escape_quotes(&result.name),
            escape_quotes(&result.location),
            escape_quotes(&result.monthly_rate),
        );
    }
}

pub(crate) fn fit_label(fit: &SemanticFit) -> String {
    match fit {
        SemanticFit::Skipped => "-".to_string(),
        SemanticFit::Scored { fit } => fit.to_string(),
        SemanticFit::Failed { .. } => "failed".to_string(),
    }
}

fn breakdown_summary(result: &ScoreResult) -> String {
    let b = &result.breakdown;
    format!(
        "skills={} location={} budget={} content={} software={} ai={} (fit {})",
        b.skills,
        b.location,
        b.budget,
        b.content,
        b.software,
        b.semantic_points,
        fit_label(&b.semantic)
    )
}
