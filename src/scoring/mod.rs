use crate::config::Config;
use crate::models::{Algorithm, Product, ProductFilters, Recommendation, UserPreferences};
use std::sync::Arc;
use tracing::debug;

pub const CATEGORY_WEIGHT: f64 = 0.4;
pub const BRAND_WEIGHT: f64 = 0.3;
pub const PRICE_WEIGHT: f64 = 0.2;
pub const STYLE_WEIGHT: f64 = 0.1;

/// Normalized [0,1] match between stated preferences and one product.
///
/// Each component is a binary hit or miss worth its full weight. The style
/// weight drops out of the denominator entirely when the product carries no
/// style attribute, so a styleless product can still score a perfect 1.0.
pub fn match_score(preferences: &UserPreferences, product: &Product) -> f64 {
    let mut awarded = 0.0;
    let mut applicable = CATEGORY_WEIGHT + BRAND_WEIGHT + PRICE_WEIGHT;

    if preferences.has_category(&product.category) {
        awarded += CATEGORY_WEIGHT;
    }

    if preferences.has_brand(&product.brand) {
        awarded += BRAND_WEIGHT;
    }

    if preferences.price_range().contains(product.price) {
        awarded += PRICE_WEIGHT;
    }

    if let Some(ref style) = product.style {
        applicable += STYLE_WEIGHT;
        if preferences.has_style(style) {
            awarded += STYLE_WEIGHT;
        }
    }

    awarded / applicable
}

/// Explicit context object for a scoring pass. Holds the tunable windows and
/// floors; the entity-level semantics stay on the entities themselves.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: Arc<Config>,
}

impl ScoringEngine {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Scores a candidate set for one user under one algorithm label.
    /// Unavailable products and candidates below the configured score floor
    /// are rejected; survivors become recommendations with the configured
    /// validity window, sorted by score descending.
    pub fn score_candidates(
        &self,
        user_id: i64,
        preferences: &UserPreferences,
        candidates: &[Product],
        algorithm: Algorithm,
    ) -> Vec<Recommendation> {
        let floor = self.config.scoring.min_score_floor;
        let ttl_hours = self.config.scoring.default_ttl_hours;

        let mut recommendations: Vec<Recommendation> = candidates
            .iter()
            .filter(|product| product.availability)
            .filter_map(|product| {
                let score = match_score(preferences, product);
                if score < floor {
                    debug!(
                        product_id = product.product_id,
                        score, floor, "candidate below score floor, rejected"
                    );
                    return None;
                }
                Some(Recommendation::with_ttl_hours(
                    user_id,
                    product.product_id,
                    score,
                    algorithm,
                    ttl_hours,
                ))
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            user_id,
            candidates = candidates.len(),
            kept = recommendations.len(),
            ?algorithm,
            "scored candidate set"
        );

        recommendations
    }

    /// Same pipeline with a caller-supplied pre-filter applied first.
    pub fn score_candidates_filtered(
        &self,
        user_id: i64,
        preferences: &UserPreferences,
        candidates: &[Product],
        filters: &ProductFilters,
        algorithm: Algorithm,
    ) -> Vec<Recommendation> {
        let filtered: Vec<Product> = candidates
            .iter()
            .filter(|product| filters.matches(product))
            .cloned()
            .collect();

        self.score_candidates(user_id, preferences, &filtered, algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRange;

    fn sample_prefs() -> UserPreferences {
        UserPreferences::new(
            vec!["Electronics".to_string()],
            vec!["Apple".to_string()],
            PriceRange::new(10.0, 500.0),
            vec!["Modern".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_full_match_scores_one() {
        let prefs = sample_prefs();
        let product =
            Product::new(1, "iPhone", "Electronics", "Apple", 100.0).with_style("Modern");
        assert_eq!(match_score(&prefs, &product), 1.0);
    }

    #[test]
    fn test_brand_miss_scores_point_seven() {
        let prefs = sample_prefs();
        let product = Product::new(1, "Shoes", "Electronics", "Nike", 100.0).with_style("Modern");
        assert!((match_score(&prefs, &product) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_styleless_product_can_still_score_one() {
        let prefs = sample_prefs();
        let product = Product::new(1, "iPhone", "Electronics", "Apple", 100.0);
        assert_eq!(match_score(&prefs, &product), 1.0);
    }

    #[test]
    fn test_style_miss_counts_against_denominator() {
        let prefs = sample_prefs();
        let product =
            Product::new(1, "iPhone", "Electronics", "Apple", 100.0).with_style("Rustic");
        assert!((match_score(&prefs, &product) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let prefs = sample_prefs();
        let at_min = Product::new(1, "Cable", "Electronics", "Apple", 10.0);
        let at_max = Product::new(2, "Monitor", "Electronics", "Apple", 500.0);
        assert_eq!(match_score(&prefs, &at_min), 1.0);
        assert_eq!(match_score(&prefs, &at_max), 1.0);
    }

    #[test]
    fn test_score_always_bounded() {
        let prefs = sample_prefs();
        let products = [
            Product::new(1, "a", "Books", "Penguin", 2000.0),
            Product::new(2, "b", "Electronics", "Apple", 100.0).with_style("Modern"),
            Product::new(3, "c", "Books", "Apple", 9.99).with_style("Rustic"),
        ];
        for product in &products {
            let score = match_score(&prefs, product);
            assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
        }
    }

    #[test]
    fn test_engine_rejects_below_floor_and_sorts() {
        let engine = ScoringEngine::new(Arc::new(Config::default()));
        let prefs = sample_prefs();

        let candidates = vec![
            // Full match -> 1.0
            Product::new(10, "iPhone", "Electronics", "Apple", 100.0).with_style("Modern"),
            // Nothing matches -> 0.0, below the 0.2 floor
            Product::new(11, "Novel", "Books", "Penguin", 2000.0),
            // Price only -> 0.2, exactly at the floor
            Product::new(12, "Mug", "Kitchen", "Acme", 15.0),
        ];

        let recs = engine.score_candidates(7, &prefs, &candidates, Algorithm::ContentBased);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].product_id, 10);
        assert_eq!(recs[1].product_id, 12);
        assert!(recs[0].score >= recs[1].score);
        assert!(recs.iter().all(|r| r.user_id == 7));
    }

    #[test]
    fn test_engine_skips_unavailable_products() {
        let engine = ScoringEngine::new(Arc::new(Config::default()));
        let prefs = sample_prefs();

        let candidates = vec![Product::new(10, "iPhone", "Electronics", "Apple", 100.0)
            .with_availability(false)];
        let recs = engine.score_candidates(7, &prefs, &candidates, Algorithm::Hybrid);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_engine_applies_pre_filters() {
        let engine = ScoringEngine::new(Arc::new(Config::default()));
        let prefs = sample_prefs();

        let candidates = vec![
            Product::new(10, "iPhone", "Electronics", "Apple", 100.0),
            Product::new(11, "MacBook", "Electronics", "Apple", 450.0),
        ];
        let filters = ProductFilters {
            max_price: Some(200.0),
            ..Default::default()
        };

        let recs = engine.score_candidates_filtered(
            7,
            &prefs,
            &candidates,
            &filters,
            Algorithm::Collaborative,
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].product_id, 10);
    }
}
