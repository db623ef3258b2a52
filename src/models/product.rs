use serde::{Deserialize, Serialize};

/// Catalog entry as seen by the scoring core. Owned and persisted elsewhere;
/// only the attributes used for matching and filtering are carried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub availability: bool,
    pub style: Option<String>,
}

impl Product {
    pub fn new(
        product_id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            description: String::new(),
            category: category.into(),
            brand: brand.into(),
            price,
            availability: true,
            style: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_availability(mut self, availability: bool) -> Self {
        self.availability = availability;
        self
    }

    /// Case-insensitive category check, for callers matching user input.
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }

    /// Case-insensitive brand check, for callers matching user input.
    pub fn is_from_brand(&self, brand: &str) -> bool {
        self.brand.eq_ignore_ascii_case(brand)
    }

    pub fn is_in_price_range(&self, min: f64, max: f64) -> bool {
        self.price >= min && self.price <= max
    }

    /// Case-insensitive free-text match across name, description, category
    /// and brand.
    pub fn matches_search(&self, query: &str) -> bool {
        let haystack = format!(
            "{} {} {} {}",
            self.name, self.description, self.category, self.brand
        )
        .to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

/// Candidate pre-filter predicate. Every provided field must hold; absent
/// fields are ignored. Exact category/brand comparisons are case-sensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilters {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub availability: Option<bool>,
    pub search_query: Option<String>,
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref category) = self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some(ref brand) = self.brand {
            if &product.brand != brand {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }

        if let Some(availability) = self.availability {
            if product.availability != availability {
                return false;
            }
        }

        if let Some(ref query) = self.search_query {
            if !product.matches_search(query) {
                return false;
            }
        }

        true
    }
}
