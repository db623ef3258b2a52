use crate::utils::validation::{validate_recommendation_update, ValidationError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TTL_HOURS: i64 = 24;
pub const DEFAULT_EXPIRING_SOON_HOURS: i64 = 24;
pub const DEFAULT_FRESH_HOURS: i64 = 24;
pub const HIGH_QUALITY_SCORE: f64 = 0.7;
pub const LOW_QUALITY_SCORE: f64 = 0.3;
/// Below this score the explanation switches to "not recommended" wording.
pub const NOT_RECOMMENDED_FLOOR: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Collaborative,
    ContentBased,
    Hybrid,
    Popularity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// Partial update applied to an existing recommendation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationUpdate {
    pub score: Option<f64>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Externally consumed shape, serialized as-is by the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub product_id: i64,
    pub score: f64,
    pub algorithm: Algorithm,
    pub confidence: ConfidenceLevel,
    pub reason: String,
    pub expires_at: DateTime<Utc>,
}

/// A scored (user, product) pairing produced by one algorithm, valid for a
/// bounded window. The core classifies expiry; it never deletes records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_id: i64,
    pub product_id: i64,
    pub score: f64,
    pub algorithm: Algorithm,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(user_id: i64, product_id: i64, score: f64, algorithm: Algorithm) -> Self {
        Self::with_ttl_hours(user_id, product_id, score, algorithm, DEFAULT_TTL_HOURS)
    }

    pub fn with_ttl_hours(
        user_id: i64,
        product_id: i64,
        score: f64,
        algorithm: Algorithm,
        ttl_hours: i64,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            user_id,
            product_id,
            score,
            algorithm,
            created_at,
            expires_at: created_at + Duration::hours(ttl_hours),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Unexpired but inside the given horizon.
    pub fn is_expiring_soon(&self, hours_threshold: i64) -> bool {
        if self.is_expired() {
            return false;
        }
        self.expires_at - Utc::now() <= Duration::hours(hours_threshold)
    }

    /// Hours left before expiry, clamped to zero once expired.
    pub fn hours_until_expiration(&self) -> i64 {
        (self.expires_at - Utc::now()).num_hours().max(0)
    }

    /// Shifts `expires_at` by a signed hour delta. Negative deltas are
    /// intentionally permitted for administrative decay and are never
    /// clamped to `created_at`.
    pub fn extend_expiration(&mut self, hours: i64) {
        self.expires_at += Duration::hours(hours);
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        if self.score >= 0.8 {
            ConfidenceLevel::High
        } else if self.score >= 0.5 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Short natural-language explanation combining the algorithm with an
    /// intensity derived from the confidence tier.
    pub fn reason(&self) -> String {
        if self.score < NOT_RECOMMENDED_FLOOR {
            return "Not recommended based on your activity".to_string();
        }

        let intensity = match self.confidence_level() {
            ConfidenceLevel::High => "strongly",
            ConfidenceLevel::Medium => "moderately",
            ConfidenceLevel::Low => "somewhat",
        };

        match self.algorithm {
            Algorithm::Collaborative => format!(
                "Users with similar preferences {intensity} recommend this product"
            ),
            Algorithm::ContentBased => {
                format!("This product {intensity} matches your stated preferences")
            }
            Algorithm::Hybrid => format!(
                "Your preferences and similar users both {intensity} point to this product"
            ),
            Algorithm::Popularity => {
                format!("This product is {intensity} popular with other shoppers right now")
            }
        }
    }

    /// Looser grouping than confidence tiers, used for quality filtering.
    pub fn is_high_quality(&self) -> bool {
        self.score >= HIGH_QUALITY_SCORE
    }

    /// Expiration alone marks a record low quality, regardless of score.
    pub fn is_low_quality(&self) -> bool {
        self.is_expired() || self.score < LOW_QUALITY_SCORE
    }

    pub fn age_in_hours(&self) -> i64 {
        (Utc::now() - self.created_at).num_hours().max(0)
    }

    /// Creation-relative freshness, independent of the expiry axis.
    pub fn is_fresh(&self, max_age_hours: i64) -> bool {
        Utc::now() - self.created_at <= Duration::hours(max_age_hours)
    }

    pub fn result(&self) -> RecommendationResult {
        RecommendationResult {
            product_id: self.product_id,
            score: self.score,
            algorithm: self.algorithm,
            confidence: self.confidence_level(),
            reason: self.reason(),
            expires_at: self.expires_at,
        }
    }

    /// Validates and applies a partial update, reporting whether anything
    /// changed. Invalid updates leave the record untouched.
    pub fn update_from(&mut self, update: &RecommendationUpdate) -> Result<bool, ValidationError> {
        let errors = validate_recommendation_update(self, update);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        let mut changed = false;

        if let Some(score) = update.score {
            if self.score != score {
                self.score = score;
                changed = true;
            }
        }

        if let Some(expires_at) = update.expires_at {
            if self.expires_at != expires_at {
                self.expires_at = expires_at;
                changed = true;
            }
        }

        Ok(changed)
    }
}
