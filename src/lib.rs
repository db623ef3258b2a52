pub mod config;
pub mod models;
pub mod scoring;
pub mod stats;
pub mod utils;

pub use config::Config;
pub use models::*;
pub use scoring::{match_score, ScoringEngine};
