pub mod interaction;
pub mod preferences;
pub mod product;
pub mod recommendation;

pub use interaction::{Interaction, InteractionType, InteractionUpdate};
pub use preferences::{PriceRange, UserPreferences};
pub use product::{Product, ProductFilters};
pub use recommendation::{
    Algorithm, ConfidenceLevel, Recommendation, RecommendationResult, RecommendationUpdate,
};
