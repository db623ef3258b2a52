use crate::models::preferences::{MAX_BRANDS, MAX_CATEGORIES, MAX_PRICE, MAX_STYLES};
use crate::models::{
    Interaction, Product, Recommendation, RecommendationUpdate, UserPreferences,
};
use thiserror::Error;

/// Carrier for per-entity validation findings. The message list is the only
/// structured error payload this core produces; the surrounding service
/// layer decides status codes and envelopes.
#[derive(Debug, Clone, Error)]
#[error("validation failed: {}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

impl ValidationError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

pub fn validate_preferences(prefs: &UserPreferences) -> Vec<String> {
    let mut errors = Vec::new();

    if prefs.categories().len() > MAX_CATEGORIES {
        errors.push(format!("Too many categories (max {MAX_CATEGORIES})"));
    }
    if prefs.brands().len() > MAX_BRANDS {
        errors.push(format!("Too many brands (max {MAX_BRANDS})"));
    }
    if prefs.style_preferences().len() > MAX_STYLES {
        errors.push(format!("Too many style preferences (max {MAX_STYLES})"));
    }

    for entry in prefs
        .categories()
        .iter()
        .chain(prefs.brands())
        .chain(prefs.style_preferences())
    {
        if entry.trim().is_empty() {
            errors.push("Preference entries cannot be empty".to_string());
            break;
        }
    }

    let range = prefs.price_range();
    if !range.min.is_finite() || !range.max.is_finite() {
        errors.push("Price range must be finite".to_string());
    } else {
        if range.min < 0.0 {
            errors.push("Price range minimum cannot be negative".to_string());
        }
        if range.max < range.min {
            errors.push("Price range maximum cannot be below minimum".to_string());
        }
        if range.max > MAX_PRICE {
            errors.push(format!("Price range maximum too large (max {MAX_PRICE})"));
        }
    }

    errors
}

pub fn validate_interaction(interaction: &Interaction) -> Vec<String> {
    let mut errors = Vec::new();

    if interaction.user_id <= 0 {
        errors.push("User ID must be positive".to_string());
    }
    if interaction.product_id <= 0 {
        errors.push("Product ID must be positive".to_string());
    }

    errors
}

pub fn validate_product(product: &Product) -> Vec<String> {
    let mut errors = Vec::new();

    if product.product_id <= 0 {
        errors.push("Product ID must be positive".to_string());
    }
    if product.name.trim().is_empty() {
        errors.push("Product name cannot be empty".to_string());
    }
    if product.category.trim().is_empty() {
        errors.push("Product category cannot be empty".to_string());
    }
    if product.brand.trim().is_empty() {
        errors.push("Product brand cannot be empty".to_string());
    }
    if !product.price.is_finite() {
        errors.push("Product price must be finite".to_string());
    } else if product.price < 0.0 {
        errors.push("Product price cannot be negative".to_string());
    }

    errors
}

pub fn validate_recommendation(rec: &Recommendation) -> Vec<String> {
    let mut errors = Vec::new();

    if rec.user_id <= 0 {
        errors.push("User ID must be positive".to_string());
    }
    if rec.product_id <= 0 {
        errors.push("Product ID must be positive".to_string());
    }
    if !rec.score.is_finite() || rec.score < 0.0 || rec.score > 1.0 {
        errors.push("Score must be between 0.0 and 1.0".to_string());
    }
    if rec.expires_at <= rec.created_at {
        errors.push("Expiration must be after creation".to_string());
    }

    errors
}

pub fn validate_recommendation_update(
    rec: &Recommendation,
    update: &RecommendationUpdate,
) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(score) = update.score {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            errors.push("Score must be between 0.0 and 1.0".to_string());
        }
    }

    if let Some(expires_at) = update.expires_at {
        if expires_at <= rec.created_at {
            errors.push("Expiration must be after creation".to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, InteractionType, PriceRange};

    #[test]
    fn test_validate_interaction() {
        let valid = Interaction::new(1, 2, InteractionType::View);
        assert!(validate_interaction(&valid).is_empty());

        let invalid = Interaction::new(0, -3, InteractionType::View);
        let errors = validate_interaction(&invalid);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("User ID"));
    }

    #[test]
    fn test_validate_product() {
        let valid = Product::new(1, "Desk Lamp", "Home", "Lumina", 39.99);
        assert!(validate_product(&valid).is_empty());

        let invalid = Product::new(1, "", "Home", "Lumina", -5.0);
        let errors = validate_product(&invalid);
        assert!(errors.iter().any(|e| e.contains("name")));
        assert!(errors.iter().any(|e| e.contains("price")));
    }

    #[test]
    fn test_validate_product_rejects_non_finite_price() {
        let nan_price = Product::new(1, "Desk Lamp", "Home", "Lumina", f64::NAN);
        assert!(!validate_product(&nan_price).is_empty());
    }

    #[test]
    fn test_validate_recommendation() {
        let valid = Recommendation::new(1, 2, 0.5, Algorithm::Hybrid);
        assert!(validate_recommendation(&valid).is_empty());

        let mut invalid = Recommendation::new(1, 2, 1.5, Algorithm::Hybrid);
        invalid.expires_at = invalid.created_at;
        let errors = validate_recommendation(&invalid);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_preferences_bounds() {
        let valid = UserPreferences::new(
            vec!["Electronics".to_string()],
            vec![],
            PriceRange::new(0.0, 100.0),
            vec![],
        )
        .unwrap();
        assert!(validate_preferences(&valid).is_empty());

        let too_many_styles = UserPreferences::new(
            vec![],
            vec![],
            PriceRange::default(),
            (0..=MAX_STYLES).map(|i| format!("style-{i}")),
        );
        assert!(too_many_styles.is_err());
    }

    #[test]
    fn test_validation_error_message_joins_findings() {
        let err = ValidationError::new(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(err.to_string(), "validation failed: first; second");
    }
}
