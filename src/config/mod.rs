use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub quality: QualityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Validity window for newly created recommendations, in hours.
    pub default_ttl_hours: i64,
    /// Horizon below which an unexpired recommendation counts as expiring soon.
    pub expiring_soon_hours: i64,
    /// Candidates scoring below this floor are rejected outright.
    pub min_score_floor: f64,
    /// Window used when classifying interactions as recent.
    pub recent_window_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    pub high_quality_score: f64,
    pub low_quality_score: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                default_ttl_hours: 24,
                expiring_soon_hours: 24,
                min_score_floor: 0.2,
                recent_window_days: 30,
            },
            quality: QualityConfig {
                high_quality_score: 0.7,
                low_quality_score: 0.3,
            },
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("SHOPREC"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
