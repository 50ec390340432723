use serde::{Deserialize, Serialize};

/// Sentinel shown when a movie has no representative review.
pub const NO_REVIEW: &str = "No review";
/// Sentinel shown when no genre code resolves to a known label.
pub const NO_GENRE: &str = "No genre";

/// A movie as merged from the metadata provider and the review backend.
/// Reconstructed on every fetch; identity is the TMDB id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub tmdb_id: u64,
    pub title: String,
    pub overview: String,
    /// Fully resolved poster URL (image base + path, or the placeholder).
    pub poster_url: String,
    /// Comma-joined genre display names, or the "No genre" sentinel.
    pub genres: String,
    pub vote_average: f64,
    pub vote_count: u64,
    /// First entry of the provider's review feed, or the "No review" sentinel.
    pub representative_review: String,
    /// Backend rating average; 0 until a summary has been fetched.
    pub rating_average: f64,
    /// 0 when the release date is unknown.
    pub release_year: u32,
    /// Not populated yet; the backend schema reserves it.
    pub director: Option<String>,
}
