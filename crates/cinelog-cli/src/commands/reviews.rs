use cinelog_core::{MovieAggregator, ReviewReconciler};
use cinelog_gateways::{BackendClient, TmdbClient};
use cinelog_models::{Emotion, ReviewDraft};
use color_eyre::Result;

use crate::commands::{load_config, require_identity, require_tmdb};
use crate::output::{Output, OutputFormat};

fn parse_emotions(raw: &[String]) -> Result<Vec<String>> {
    raw.iter()
        .map(|value| {
            value
                .parse::<Emotion>()
                .map(|emotion| emotion.label().to_string())
                .map_err(|e| color_eyre::eyre::eyre!("{}", e))
        })
        .collect()
}

pub async fn run_add(
    tmdb_id: u64,
    rating: u8,
    content: String,
    emotions: Vec<String>,
    quote: Option<String>,
    media_url: Option<String>,
    output: &Output,
) -> Result<()> {
    if rating > 5 {
        return Err(color_eyre::eyre::eyre!("Rating must be between 1 and 5"));
    }

    let config = load_config(output)?;
    let identity = require_identity()?;

    let draft = ReviewDraft {
        title: String::new(),
        content,
        rating,
        emotions: parse_emotions(&emotions)?,
        media_url,
        highlight_quote: quote,
        highlight_image_url: None,
    };

    let tmdb = TmdbClient::new(require_tmdb(&config)?)?;
    let backend = BackendClient::new(config.backend);
    let aggregator = MovieAggregator::new(tmdb, backend);

    let outcome = aggregator
        .save_review(Some(&identity), tmdb_id, &draft)
        .await?;

    output.success(format!(
        "Review submitted. Movie now averages {:.1} across {} review(s)",
        outcome.summary.average_rating, outcome.summary.total_reviews
    ));
    Ok(())
}

pub async fn run_mine(tmdb_id: Option<u64>, output: &Output) -> Result<()> {
    let config = load_config(output)?;
    let identity = require_identity()?;

    let backend = BackendClient::new(config.backend);
    let mut reconciler = ReviewReconciler::new(backend, identity.member_id.clone());

    let mine = match tmdb_id {
        Some(tmdb_id) => reconciler.load_mine(tmdb_id).await?.to_vec(),
        None => reconciler.load_all_mine().await?,
    };

    match output.format() {
        OutputFormat::Human => {
            if mine.is_empty() {
                output.info("You have no reviews yet");
            } else {
                output.println(format!("{}", super::movies::review_table(&mine)));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&mine)?);
        }
    }
    Ok(())
}

/// Loading a movie's reviews is the only way to reconcile a review id
/// against current server state, so edits and deletes first resolve the
/// owning movie from the member's review list.
async fn select_for_movie(
    reconciler: &mut ReviewReconciler<BackendClient>,
    review_id: i64,
) -> Result<()> {
    let all_mine = reconciler.load_all_mine().await?;
    let movie_id = all_mine
        .iter()
        .find(|review| review.id == review_id)
        .map(|review| review.movie_id)
        .ok_or_else(|| color_eyre::eyre::eyre!("Review {} is not one of yours", review_id))?;

    reconciler.load_mine(movie_id).await?;
    reconciler.select(review_id)?;
    Ok(())
}

pub async fn run_edit(review_id: i64, content: &str, output: &Output) -> Result<()> {
    let config = load_config(output)?;
    let identity = require_identity()?;

    let backend = BackendClient::new(config.backend);
    let mut reconciler = ReviewReconciler::new(backend, identity.member_id.clone());

    select_for_movie(&mut reconciler, review_id).await?;
    reconciler.edit_selected(&identity, content).await?;

    output.success(format!("Review {} updated", review_id));
    Ok(())
}

pub async fn run_delete(review_id: i64, output: &Output) -> Result<()> {
    let config = load_config(output)?;
    let identity = require_identity()?;

    let backend = BackendClient::new(config.backend);
    let mut reconciler = ReviewReconciler::new(backend, identity.member_id.clone());

    select_for_movie(&mut reconciler, review_id).await?;
    reconciler.delete_selected(&identity).await?;

    output.success(format!("Review {} deleted", review_id));
    Ok(())
}

pub async fn run_like(tmdb_id: u64, output: &Output) -> Result<()> {
    let config = load_config(output)?;
    let identity = require_identity()?;

    // No metadata call is made on this path, so the TMDB key may be unset.
    let tmdb = TmdbClient::new(config.tmdb)?;
    let backend = BackendClient::new(config.backend);
    let aggregator = MovieAggregator::new(tmdb, backend);
    let liked = aggregator.toggle_like(Some(&identity), tmdb_id).await?;

    if liked {
        output.success(format!("Liked movie {}", tmdb_id));
    } else {
        output.success(format!("Removed like on movie {}", tmdb_id));
    }
    Ok(())
}
