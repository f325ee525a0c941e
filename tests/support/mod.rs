use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for talentrank, isolated from the caller's environment
pub fn talentrank(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("talentrank");
    cmd.env("TALENTRANK_CONFIG_DIR", config_dir)
        .env_remove("TALENTRANK_CONFIG")
        .env_remove("TALENTRANK_ORACLE_URL")
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG")
        .env_remove("TALENTRANK_LOG");
    cmd
}

/// Write the shared sample profiles into `dir` and return the file path
#[allow(dead_code)]
pub fn write_sample_profiles(dir: &TempDir) -> PathBuf {
    let profiles = serde_json::json!([
        {
            "First Name": "Maria",
            "Last Name": "Santos",
            "City": "Manila",
            "Country": "Philippines",
            "Skills": "Adobe Premiere Pro, Rough Cut & Sequencing, 2D Animation, Color Grading",
            "Software": "Adobe Premiere Pro, Adobe After Effects",
            "Job Types": "Video Editor",
            "Monthly Rate": 2200,
            "Content Verticals": "Entertainment/Lifestyle & Vlogs, Gaming",
            "Profile Description": "Story-first editor who has cut 300+ lifestyle vlogs."
        },
        {
            "First Name": "Arjun",
            "Last Name": "Mehta",
            "City": "Pune",
            "Country": "India",
            "Skills": "Adobe Premiere Pro, Splice & Dice",
            "Software": "Final Cut Pro",
            "Job Types": "Video Editor",
            "Monthly Rate": 4000,
            "Content Verticals": "Education",
            "Profile Description": "Education channel editor."
        },
        {
            "First Name": "Emily",
            "Last Name": "Clark",
            "City": "New York",
            "Country": "United States",
            "Skills": "Storyboarding, Filming, Sound Designing",
            "Software": "Final Cut Pro, Adobe Premiere Pro",
            "Job Types": "Producer",
            "Monthly Rate": 150,
            "Content Verticals": "Entertainment/Education/Food & Cooking",
            "Profile Description": "Producer for food creators."
        },
        {
            "Last Name": "Ghost",
            "Skills": "Adobe Premiere Pro"
        },
        {
            "First Name": "Chen",
            "Last Name": "Wei",
            "City": "Singapore",
            "Country": "Singapore",
            "Skills": "Excel, Notion",
            "Software": "Notion, Slack",
            "Job Types": "Operations",
            "Monthly Rate": "negotiable",
            "Content Verticals": "Productivity",
            "Profile Description": "Operations lead."
        },
        {
            "First Name": "Sofia",
            "Last Name": "Rossi",
            "City": "Milan",
            "Country": "Italy",
            "Skills": "2D Animation",
            "Software": "Toon Boom",
            "Job Types": "Animator",
            "Monthly Rate": "1800",
            "Content Verticals": "Entertainment/Lifestyle & Vlogs",
            "Profile Description": "Animator."
        }
    ]);

    let path = dir.path().join("profiles.json");
    fs::write(&path, serde_json::to_string_pretty(&profiles).unwrap()).unwrap();
    path
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
