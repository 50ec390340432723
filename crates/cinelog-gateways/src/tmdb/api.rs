use cinelog_config::config::{POSTER_PLACEHOLDER, TMDB_IMAGE_BASE};
use cinelog_config::TmdbConfig;
use cinelog_models::movie::{NO_GENRE, NO_REVIEW};
use cinelog_models::MovieRecord;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GatewayError;

/// TMDB numeric genre code to display name. Unknown codes are dropped.
const GENRES: [(u64, &str); 19] = [
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

#[derive(Debug, Deserialize)]
struct MovieListResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct MovieSummary {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u64>,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    vote_count: u64,
    #[serde(default)]
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieDetail {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    genres: Vec<GenreEntry>,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    vote_count: u64,
    #[serde(default)]
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenreEntry {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ReviewFeed {
    #[serde(default)]
    results: Vec<ReviewFeedEntry>,
}

#[derive(Debug, Deserialize)]
struct ReviewFeedEntry {
    #[serde(default)]
    content: String,
}

/// Empty or missing poster path resolves to the placeholder; anything else
/// is prefixed with the fixed image base.
pub fn resolve_poster(poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) if !path.is_empty() => format!("{}{}", TMDB_IMAGE_BASE, path),
        _ => POSTER_PLACEHOLDER.to_string(),
    }
}

/// Comma-joined display names for the given genre codes, or the "No genre"
/// sentinel when none resolve.
pub fn genre_names(genre_ids: &[u64]) -> String {
    let names: Vec<&str> = genre_ids
        .iter()
        .filter_map(|id| GENRES.iter().find(|(code, _)| code == id).map(|(_, name)| *name))
        .collect();

    if names.is_empty() {
        NO_GENRE.to_string()
    } else {
        names.join(", ")
    }
}

fn join_genre_entries(genres: &[GenreEntry]) -> String {
    let names: Vec<&str> = genres
        .iter()
        .map(|g| g.name.as_str())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        NO_GENRE.to_string()
    } else {
        names.join(", ")
    }
}

/// Year is the first four characters of `release_date`; 0 when absent or
/// unparsable.
pub fn release_year(release_date: Option<&str>) -> u32 {
    release_date
        .and_then(|date| date.get(..4))
        .and_then(|year| year.parse().ok())
        .unwrap_or(0)
}

fn movie_from_summary(summary: MovieSummary, representative_review: String) -> MovieRecord {
    MovieRecord {
        tmdb_id: summary.id,
        title: summary.title,
        overview: summary.overview,
        poster_url: resolve_poster(summary.poster_path.as_deref()),
        genres: genre_names(&summary.genre_ids),
        vote_average: summary.vote_average,
        vote_count: summary.vote_count,
        representative_review,
        rating_average: 0.0,
        release_year: release_year(summary.release_date.as_deref()),
        director: None,
    }
}

/// Fetch movies from a list endpoint. Any non-success status yields an
/// empty list; the UI treats "empty" and "failed" identically. Each movie
/// costs one extra round-trip for its representative review.
async fn get_movie_list(
    client: &Client,
    config: &TmdbConfig,
    url: String,
) -> Result<Vec<MovieRecord>, GatewayError> {
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("TMDB list fetch failed: HTTP {} for {}", status, url);
        return Ok(Vec::new());
    }

    let list: MovieListResponse = response
        .json()
        .await
        .map_err(GatewayError::Transport)?;
    debug!("TMDB list fetch: {} results from {}", list.results.len(), url);

    let mut movies = Vec::with_capacity(list.results.len());
    for summary in list.results {
        let review = get_representative_review(client, config, summary.id).await;
        movies.push(movie_from_summary(summary, review));
    }

    Ok(movies)
}

pub async fn get_popular(
    client: &Client,
    config: &TmdbConfig,
) -> Result<Vec<MovieRecord>, GatewayError> {
    let url = format!(
        "{}/movie/popular?api_key={}&language={}&page=1",
        config.base_url, config.api_key, config.language
    );
    get_movie_list(client, config, url).await
}

pub async fn search(
    client: &Client,
    config: &TmdbConfig,
    query: &str,
) -> Result<Vec<MovieRecord>, GatewayError> {
    let url = format!(
        "{}/search/movie?api_key={}&language={}&query={}&page=1",
        config.base_url,
        config.api_key,
        config.language,
        urlencoding::encode(query)
    );
    get_movie_list(client, config, url).await
}

/// Single-movie detail lookup. A rejected lookup is a not-found result,
/// not an error.
pub async fn get_detail(
    client: &Client,
    config: &TmdbConfig,
    tmdb_id: u64,
) -> Result<Option<MovieRecord>, GatewayError> {
    let url = format!(
        "{}/movie/{}?api_key={}&language={}",
        config.base_url, tmdb_id, config.api_key, config.language
    );

    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("TMDB detail lookup failed: HTTP {} for movie {}", status, tmdb_id);
        return Ok(None);
    }

    let detail: MovieDetail = response.json().await.map_err(GatewayError::Transport)?;
    let review = get_representative_review(client, config, detail.id).await;

    Ok(Some(MovieRecord {
        tmdb_id: detail.id,
        title: detail.title,
        overview: detail.overview,
        poster_url: resolve_poster(detail.poster_path.as_deref()),
        genres: join_genre_entries(&detail.genres),
        vote_average: detail.vote_average,
        vote_count: detail.vote_count,
        representative_review: review,
        rating_average: 0.0,
        release_year: release_year(detail.release_date.as_deref()),
        director: None,
    }))
}

/// First (most recent) entry of the provider's own review feed, or the
/// "No review" sentinel when the feed is empty or the call fails.
pub async fn get_representative_review(
    client: &Client,
    config: &TmdbConfig,
    tmdb_id: u64,
) -> String {
    let url = format!(
        "{}/movie/{}/reviews?api_key={}&language={}&page=1",
        config.base_url, tmdb_id, config.api_key, config.language
    );

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(err) => {
            debug!("TMDB review feed unreachable for movie {}: {}", tmdb_id, err);
            return NO_REVIEW.to_string();
        }
    };

    if !response.status().is_success() {
        return NO_REVIEW.to_string();
    }

    let feed: ReviewFeed = match response.json().await {
        Ok(feed) => feed,
        Err(err) => {
            debug!("TMDB review feed unparsable for movie {}: {}", tmdb_id, err);
            return NO_REVIEW.to_string();
        }
    };

    feed.results
        .into_iter()
        .next()
        .map(|entry| entry.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| NO_REVIEW.to_string())
}
