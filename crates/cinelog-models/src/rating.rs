use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server-side rating aggregate for one movie. The client never mutates
/// this directly; submitting reviews triggers recomputation on the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatingSummary {
    #[serde(default)]
    pub tmdb_id: u64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    /// Rating bucket label ("1".."5") to count.
    #[serde(default)]
    pub rating_distribution: HashMap<String, u64>,
}

impl RatingSummary {
    /// The zero-state rendered when the backend has no summary for a movie.
    pub fn empty(tmdb_id: u64) -> Self {
        Self {
            tmdb_id,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_is_zero_state() {
        let summary = RatingSummary::empty(603);
        assert_eq!(summary.tmdb_id, 603);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.total_reviews, 0);
        assert!(summary.rating_distribution.is_empty());
    }

    #[test]
    fn test_deserialize_partial_body() {
        // Missing fields fall back to defaults rather than failing.
        let json = serde_json::json!({ "tmdb_id": 603, "average_rating": 4.2 });
        let summary: RatingSummary = serde_json::from_value(json).unwrap();
        assert_eq!(summary.average_rating, 4.2);
        assert_eq!(summary.total_reviews, 0);
    }
}
