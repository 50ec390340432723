use async_trait::async_trait;
use cinelog_config::TmdbConfig;
use cinelog_models::MovieRecord;
use reqwest::Client;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use crate::error::GatewayError;
use crate::tmdb::api;
use crate::traits::MetadataGateway;

/// Metadata provider client. Holds the last fetched popular list so a
/// movie that was just on screen resolves without another network call.
pub struct TmdbClient {
    client: Client,
    config: TmdbConfig,
    last_popular: Mutex<Vec<MovieRecord>>,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            last_popular: Mutex::new(Vec::new()),
        })
    }

    pub async fn popular_movies(&self) -> Result<Vec<MovieRecord>, GatewayError> {
        let movies = api::get_popular(&self.client, &self.config).await?;
        *self.last_popular.lock().unwrap() = movies.clone();
        Ok(movies)
    }

    pub async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, GatewayError> {
        api::search(&self.client, &self.config, query).await
    }

    /// Scan the last popular list first; this is a trade-off, not a cache
    /// guarantee. A stale or empty list always falls through to one
    /// detail lookup.
    pub async fn movie_by_id(&self, tmdb_id: u64) -> Result<Option<MovieRecord>, GatewayError> {
        let cached = self
            .last_popular
            .lock()
            .unwrap()
            .iter()
            .find(|movie| movie.tmdb_id == tmdb_id)
            .cloned();
        if let Some(movie) = cached {
            debug!("movie {} resolved from the popular list", tmdb_id);
            return Ok(Some(movie));
        }

        api::get_detail(&self.client, &self.config, tmdb_id).await
    }
}

#[async_trait]
impl MetadataGateway for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>, GatewayError> {
        TmdbClient::search_movies(self, query).await
    }

    async fn popular_movies(&self) -> Result<Vec<MovieRecord>, GatewayError> {
        TmdbClient::popular_movies(self).await
    }

    async fn movie_by_id(&self, tmdb_id: u64) -> Result<Option<MovieRecord>, GatewayError> {
        TmdbClient::movie_by_id(self, tmdb_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(tmdb_id: u64, title: &str) -> MovieRecord {
        MovieRecord {
            tmdb_id,
            title: title.to_string(),
            overview: String::new(),
            poster_url: String::new(),
            genres: "Action".to_string(),
            vote_average: 7.0,
            vote_count: 100,
            representative_review: "No review".to_string(),
            rating_average: 0.0,
            release_year: 2020,
            director: None,
        }
    }

    fn client() -> TmdbClient {
        TmdbClient::new(TmdbConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:0".to_string(),
            language: "en-US".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_movie_by_id_hits_popular_list_without_lookup() {
        let tmdb = client();
        // Seed the popular list; the bogus base_url guarantees that any
        // fallthrough to the network would error instead of succeeding.
        *tmdb.last_popular.lock().unwrap() = vec![movie(603, "The Matrix"), movie(604, "Reloaded")];

        let found = tmdb.movie_by_id(603).await.unwrap().unwrap();
        assert_eq!(found.title, "The Matrix");
    }

    #[tokio::test]
    async fn test_movie_by_id_miss_falls_through_to_lookup() {
        let tmdb = client();
        *tmdb.last_popular.lock().unwrap() = vec![movie(604, "Reloaded")];

        // The unreachable base_url makes the detail lookup fail with a
        // transport error, proving the miss path left the cache.
        let result = tmdb.movie_by_id(603).await;
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }
}
