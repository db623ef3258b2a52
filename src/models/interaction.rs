use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    View,
    Like,
    Dislike,
    Favorite,
    Rating,
    Purchase,
}

impl InteractionType {
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Like | Self::Purchase)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Dislike)
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::View)
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Purchase)
    }

    /// Signal weight used for normalized blending.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Purchase => 1.0,
            Self::Like => 0.7,
            Self::Dislike => -0.5,
            Self::View => 0.1,
            // Neutral low positive, same as a view, until given their own tuning.
            Self::Favorite | Self::Rating => 0.1,
        }
    }

    /// Coarse ranking score, on a separate scale from `weight`.
    pub fn score(&self) -> i32 {
        match self {
            Self::Purchase => 10,
            Self::Like => 5,
            Self::Dislike => -2,
            Self::View => 1,
            Self::Favorite | Self::Rating => 1,
        }
    }
}

/// Partial update applied to an existing interaction. Only corrections to
/// the type and metadata are supported; identity fields never change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionUpdate {
    pub interaction_type: Option<InteractionType>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// A single user-product event observed by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: i64,
    pub product_id: i64,
    pub interaction_type: InteractionType,
    pub timestamp: DateTime<Utc>,
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Interaction {
    pub fn new(user_id: i64, product_id: i64, interaction_type: InteractionType) -> Self {
        Self {
            user_id,
            product_id,
            interaction_type,
            timestamp: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_positive(&self) -> bool {
        self.interaction_type.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.interaction_type.is_negative()
    }

    pub fn is_neutral(&self) -> bool {
        self.interaction_type.is_neutral()
    }

    pub fn is_conversion(&self) -> bool {
        self.interaction_type.is_conversion()
    }

    pub fn weight(&self) -> f64 {
        self.interaction_type.weight()
    }

    pub fn score(&self) -> i32 {
        self.interaction_type.score()
    }

    pub fn is_recent(&self, window_days: i64) -> bool {
        Utc::now().signed_duration_since(self.timestamp) <= chrono::Duration::days(window_days)
    }

    /// Whole calendar days elapsed since the event, truncated. Future
    /// timestamps yield a positive count symmetrically.
    pub fn days_since(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.timestamp)
            .num_days()
            .abs()
    }

    /// Originating surface recorded by the caller, `"unknown"` when absent.
    pub fn source(&self) -> String {
        self.metadata
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string()
    }

    pub fn has_metadata_key(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    pub fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    pub fn add_metadata(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.metadata.insert(key.into(), value);
    }

    pub fn remove_metadata(&mut self, key: &str) -> bool {
        self.metadata.remove(key).is_some()
    }

    /// Applies a correction and reports whether anything actually changed,
    /// so callers can skip persisting no-op updates.
    pub fn update_from(&mut self, update: &InteractionUpdate) -> bool {
        let mut changed = false;

        if let Some(interaction_type) = update.interaction_type {
            if self.interaction_type != interaction_type {
                self.interaction_type = interaction_type;
                changed = true;
            }
        }

        if let Some(ref metadata) = update.metadata {
            if &self.metadata != metadata {
                self.metadata = metadata.clone();
                changed = true;
            }
        }

        changed
    }
}
