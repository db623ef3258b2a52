use crate::utils::validation::{validate_preferences, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MAX_CATEGORIES: usize = 20;
pub const MAX_BRANDS: usize = 20;
pub const MAX_STYLES: usize = 10;
pub const MAX_PRICE: f64 = 999_999.0;

/// Inclusive price window a user is willing to shop in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1000.0 }
    }
}

/// A user's stated shopping taste. Collection fields are encapsulated so
/// callers can never mutate internal state through a getter; every mutation
/// goes through an operation that re-validates the candidate state first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    categories: BTreeSet<String>,
    brands: BTreeSet<String>,
    price_range: PriceRange,
    style_preferences: BTreeSet<String>,
    updated_at: DateTime<Utc>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
            price_range: PriceRange::default(),
            style_preferences: BTreeSet::new(),
            updated_at: Utc::now(),
        }
    }
}

impl UserPreferences {
    pub fn new(
        categories: impl IntoIterator<Item = String>,
        brands: impl IntoIterator<Item = String>,
        price_range: PriceRange,
        style_preferences: impl IntoIterator<Item = String>,
    ) -> Result<Self, ValidationError> {
        let prefs = Self {
            categories: categories.into_iter().collect(),
            brands: brands.into_iter().collect(),
            price_range,
            style_preferences: style_preferences.into_iter().collect(),
            updated_at: Utc::now(),
        };

        let errors = validate_preferences(&prefs);
        if errors.is_empty() {
            Ok(prefs)
        } else {
            Err(ValidationError::new(errors))
        }
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn brands(&self) -> &BTreeSet<String> {
        &self.brands
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn style_preferences(&self) -> &BTreeSet<String> {
        &self.style_preferences
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        self.brands.contains(brand)
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.style_preferences.contains(style)
    }

    pub fn add_category(&mut self, category: impl Into<String>) -> Result<bool, ValidationError> {
        let category = category.into();
        if self.categories.contains(&category) {
            return Ok(false);
        }

        let mut candidate = self.clone();
        candidate.categories.insert(category);
        self.apply(candidate)
    }

    pub fn remove_category(&mut self, category: &str) -> bool {
        let removed = self.categories.remove(category);
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn add_brand(&mut self, brand: impl Into<String>) -> Result<bool, ValidationError> {
        let brand = brand.into();
        if self.brands.contains(&brand) {
            return Ok(false);
        }

        let mut candidate = self.clone();
        candidate.brands.insert(brand);
        self.apply(candidate)
    }

    pub fn remove_brand(&mut self, brand: &str) -> bool {
        let removed = self.brands.remove(brand);
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn add_style(&mut self, style: impl Into<String>) -> Result<bool, ValidationError> {
        let style = style.into();
        if self.style_preferences.contains(&style) {
            return Ok(false);
        }

        let mut candidate = self.clone();
        candidate.style_preferences.insert(style);
        self.apply(candidate)
    }

    pub fn remove_style(&mut self, style: &str) -> bool {
        let removed = self.style_preferences.remove(style);
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) -> Result<bool, ValidationError> {
        if self.price_range == price_range {
            return Ok(false);
        }

        let mut candidate = self.clone();
        candidate.price_range = price_range;
        self.apply(candidate)
    }

    fn apply(&mut self, mut candidate: Self) -> Result<bool, ValidationError> {
        let errors = validate_preferences(&candidate);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        candidate.updated_at = Utc::now();
        *self = candidate;
        Ok(true)
    }
}
