use crate::models::{Algorithm, ConfidenceLevel, Interaction, InteractionType, Recommendation};
use crate::utils::{mean, safe_rate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::recommendation::DEFAULT_EXPIRING_SOON_HOURS;

/// Counts by interaction type across a population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionStats {
    pub views: usize,
    pub likes: usize,
    pub dislikes: usize,
    pub purchases: usize,
    pub total: usize,
    pub last_interaction_at: Option<DateTime<Utc>>,
}

/// Per-product or per-user engagement summary with zero-guarded rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementStats {
    pub views: usize,
    pub likes: usize,
    pub dislikes: usize,
    pub purchases: usize,
    pub conversion_rate: f64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationStats {
    pub expired: usize,
    pub expiring_soon: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationStats {
    pub total_recommendations: usize,
    pub average_score: f64,
    pub high_confidence_count: usize,
    pub medium_confidence_count: usize,
    pub low_confidence_count: usize,
    pub algorithm_distribution: HashMap<Algorithm, usize>,
    pub expiration: ExpirationStats,
}

pub fn interaction_stats(interactions: &[Interaction]) -> InteractionStats {
    let mut stats = InteractionStats {
        views: 0,
        likes: 0,
        dislikes: 0,
        purchases: 0,
        total: interactions.len(),
        last_interaction_at: None,
    };

    for interaction in interactions {
        match interaction.interaction_type {
            InteractionType::View => stats.views += 1,
            InteractionType::Like => stats.likes += 1,
            InteractionType::Dislike => stats.dislikes += 1,
            InteractionType::Purchase => stats.purchases += 1,
            InteractionType::Favorite | InteractionType::Rating => {}
        }

        stats.last_interaction_at = match stats.last_interaction_at {
            Some(latest) if latest >= interaction.timestamp => Some(latest),
            _ => Some(interaction.timestamp),
        };
    }

    stats
}

pub fn product_analytics(interactions: &[Interaction], product_id: i64) -> EngagementStats {
    engagement_stats(
        interactions
            .iter()
            .filter(|i| i.product_id == product_id),
    )
}

pub fn user_analytics(interactions: &[Interaction], user_id: i64) -> EngagementStats {
    engagement_stats(interactions.iter().filter(|i| i.user_id == user_id))
}

fn engagement_stats<'a>(interactions: impl Iterator<Item = &'a Interaction>) -> EngagementStats {
    let mut views = 0usize;
    let mut likes = 0usize;
    let mut dislikes = 0usize;
    let mut purchases = 0usize;

    for interaction in interactions {
        match interaction.interaction_type {
            InteractionType::View => views += 1,
            InteractionType::Like => likes += 1,
            InteractionType::Dislike => dislikes += 1,
            InteractionType::Purchase => purchases += 1,
            InteractionType::Favorite | InteractionType::Rating => {}
        }
    }

    EngagementStats {
        views,
        likes,
        dislikes,
        purchases,
        conversion_rate: safe_rate(purchases as u64, views as u64),
        engagement_rate: safe_rate((likes + purchases) as u64, views as u64),
    }
}

/// Summarizes a recommendation population for quality monitoring. The
/// expiration buckets are mutually exclusive: expired wins, then
/// expiring-soon, and "active" means neither.
pub fn recommendation_stats(recommendations: &[Recommendation]) -> RecommendationStats {
    let mut stats = RecommendationStats {
        total_recommendations: recommendations.len(),
        average_score: mean(
            &recommendations
                .iter()
                .map(|r| r.score)
                .collect::<Vec<f64>>(),
        ),
        high_confidence_count: 0,
        medium_confidence_count: 0,
        low_confidence_count: 0,
        algorithm_distribution: HashMap::new(),
        expiration: ExpirationStats {
            expired: 0,
            expiring_soon: 0,
            active: 0,
        },
    };

    for rec in recommendations {
        match rec.confidence_level() {
            ConfidenceLevel::High => stats.high_confidence_count += 1,
            ConfidenceLevel::Medium => stats.medium_confidence_count += 1,
            ConfidenceLevel::Low => stats.low_confidence_count += 1,
        }

        *stats
            .algorithm_distribution
            .entry(rec.algorithm)
            .or_insert(0) += 1;

        if rec.is_expired() {
            stats.expiration.expired += 1;
        } else if rec.is_expiring_soon(DEFAULT_EXPIRING_SOON_HOURS) {
            stats.expiration.expiring_soon += 1;
        } else {
            stats.expiration.active += 1;
        }
    }

    stats
}

/// Keeps records scoring at least `min_score`, additionally dropping expired
/// ones when requested.
pub fn filter_by_quality(
    recommendations: &[Recommendation],
    min_score: f64,
    exclude_expired: bool,
) -> Vec<Recommendation> {
    recommendations
        .iter()
        .filter(|r| r.score >= min_score)
        .filter(|r| !exclude_expired || !r.is_expired())
        .cloned()
        .collect()
}

/// Stable sort by score.
pub fn sort_by_score(recommendations: &mut [Recommendation], descending: bool) {
    recommendations.sort_by(|a, b| {
        let ordering = a
            .score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
