use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review row as stored by the backend. A review belongs to exactly one
/// member and one movie; (member, movie) is NOT unique, since a member can
/// leave several reviews on the same movie, so ownership is always derived
/// by filtering, never by lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub member_id: String,
    /// TMDB id of the reviewed movie.
    #[serde(default, alias = "tmdb_id")]
    pub movie_id: u64,
    #[serde(default)]
    pub content: String,
    /// String-encoded number; the backend is not strict about the format.
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub highlight_quote: Option<String>,
    #[serde(default)]
    pub highlight_image_url: Option<String>,
    /// Epoch start when the backend omits the timestamp; one bad row must
    /// not fail the whole list.
    #[serde(default = "epoch_start")]
    pub created_at: DateTime<Utc>,
}

fn epoch_start() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl ReviewRecord {
    /// Numeric value of the string-encoded rating; 0.0 when unparsable.
    pub fn rating_value(&self) -> f64 {
        self.rating.trim().parse().unwrap_or(0.0)
    }
}

/// Fields a caller supplies when creating a review. The member id is not
/// part of the draft; it comes from the session identity at submit time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewDraft {
    pub title: String,
    pub content: String,
    pub rating: u8,
    pub emotions: Vec<String>,
    pub media_url: Option<String>,
    pub highlight_quote: Option<String>,
    pub highlight_image_url: Option<String>,
}

impl ReviewDraft {
    /// A draft with neither a rating nor content carries nothing to submit.
    pub fn is_empty(&self) -> bool {
        self.rating == 0 && self.content.trim().is_empty()
    }
}
