//! Talentrank Core Library
//!
//! Scores talent profiles against job requirement templates with weighted
//! substring criteria and an optional semantic fit oracle, and ranks them.

pub mod amount;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod matching;
pub mod oracle;
pub mod profile;
pub mod ranking;
pub mod requirement;
pub mod scoring;
