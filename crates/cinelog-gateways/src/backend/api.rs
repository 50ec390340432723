use cinelog_models::{MovieRecord, RatingSummary, ReviewDraft, ReviewRecord, SessionIdentity};
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::GatewayError;

#[derive(Debug, Clone, Serialize)]
pub struct RegisterProfile {
    pub id: String,
    pub password: String,
    pub name: String,
    pub birth: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
}

/// POST /api/login. A success body without a `token` field is malformed,
/// not a silent failure.
pub async fn login(
    client: &Client,
    base_url: &str,
    id: &str,
    password: &str,
) -> Result<SessionIdentity, GatewayError> {
    let response = client
        .post(format!("{}/api/login", base_url))
        .json(&json!({ "id": id, "password": password }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::rejected(status));
    }

    let body: Value = response.json().await?;
    let token = body
        .get("token")
        .and_then(|token| token.as_str())
        .ok_or_else(|| GatewayError::malformed("login response has no token field"))?;

    Ok(SessionIdentity::new(token, id))
}

/// POST /api/register. Returns the raw response body; the backend answers
/// with a human-readable message.
pub async fn register(
    client: &Client,
    base_url: &str,
    profile: &RegisterProfile,
) -> Result<String, GatewayError> {
    let response = client
        .post(format!("{}/api/register", base_url))
        .json(profile)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::rejected(status));
    }

    Ok(response.text().await?)
}

/// POST /api/movies, an upsert by tmdb_id so review rows have something
/// to reference.
pub async fn upsert_movie(
    client: &Client,
    base_url: &str,
    movie: &MovieRecord,
) -> Result<(), GatewayError> {
    let payload = json!({
        "tmdb_id": movie.tmdb_id,
        "title": movie.title,
        "poster_path": movie.poster_url,
        "overview": movie.overview,
        "genre": movie.genres,
        "vote_average": movie.vote_average,
        "vote_count": movie.vote_count,
        "release_year": movie.release_year,
        "director": movie.director,
    });

    let response = client
        .post(format!("{}/api/movies", base_url))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::rejected(status));
    }
    Ok(())
}

/// POST /api/reviews. The response body is discarded; beyond the status
/// there is no partial-success signal.
pub async fn submit_review(
    client: &Client,
    base_url: &str,
    session: &SessionIdentity,
    tmdb_id: u64,
    draft: &ReviewDraft,
) -> Result<(), GatewayError> {
    let payload = json!({
        "member_id": session.member_id,
        "title": draft.title,
        "tmdb_id": tmdb_id,
        "content": draft.content,
        "rating": draft.rating,
        "emotions": draft.emotions,
        "media_url": draft.media_url.clone().unwrap_or_default(),
        "highlight_quote": draft.highlight_quote.clone().unwrap_or_default(),
        "highlight_image_url": draft.highlight_image_url.clone().unwrap_or_default(),
    });

    let response = client
        .post(format!("{}/api/reviews", base_url))
        .header("Authorization", session.bearer())
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::rejected(status));
    }
    debug!("submitted review for movie {} as {}", tmdb_id, session.member_id);
    Ok(())
}

/// The PATCH body carries the whole record, attachments included; sending
/// empty strings there would erase them server-side.
fn update_payload(session: &SessionIdentity, review: &ReviewRecord) -> Value {
    json!({
        "member_id": session.member_id,
        "content": review.content,
        "rating": review.rating_value(),
        "emotions": review.emotions,
        "media_url": review.media_url.clone().unwrap_or_default(),
        "highlight_quote": review.highlight_quote.clone().unwrap_or_default(),
        "highlight_image_url": review.highlight_image_url.clone().unwrap_or_default(),
    })
}

/// PATCH /api/reviews/{id}. Success is the HTTP status alone; the body is
/// not parsed, so server-side validation errors stay invisible here.
pub async fn update_review(
    client: &Client,
    base_url: &str,
    session: &SessionIdentity,
    review: &ReviewRecord,
) -> Result<(), GatewayError> {
    let payload = update_payload(session, review);

    let response = client
        .patch(format!("{}/api/reviews/{}", base_url, review.id))
        .header("Authorization", session.bearer())
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::rejected(status));
    }
    Ok(())
}

/// DELETE /api/reviews/{id}?member_id=... with the member id as a query
/// parameter.
pub async fn delete_review(
    client: &Client,
    base_url: &str,
    session: &SessionIdentity,
    review_id: i64,
) -> Result<(), GatewayError> {
    let url = format!(
        "{}/api/reviews/{}?member_id={}",
        base_url,
        review_id,
        urlencoding::encode(&session.member_id)
    );

    let response = client
        .delete(url)
        .header("Authorization", session.bearer())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::rejected(status));
    }
    Ok(())
}

/// A body without the `isLiked` field reads as "not liked"; the fail-safe
/// default, not an error.
pub fn parse_is_liked(body: &Value) -> bool {
    body.get("isLiked").and_then(|liked| liked.as_bool()).unwrap_or(false)
}

/// POST /api/likes/toggle.
pub async fn toggle_like(
    client: &Client,
    base_url: &str,
    session: &SessionIdentity,
    tmdb_id: u64,
) -> Result<bool, GatewayError> {
    let url = format!(
        "{}/api/likes/toggle?member_id={}&tmdb_id={}",
        base_url,
        urlencoding::encode(&session.member_id),
        tmdb_id
    );

    let response = client
        .post(url)
        .header("Authorization", session.bearer())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::rejected(status));
    }

    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(err) => {
            debug!("like-toggle body unparsable for movie {}: {}", tmdb_id, err);
            return Ok(false);
        }
    };

    Ok(parse_is_liked(&body))
}

/// GET /api/reviews/tmdb/{id}. Non-success status yields an empty list.
pub async fn reviews_for_movie(
    client: &Client,
    base_url: &str,
    tmdb_id: u64,
) -> Result<Vec<ReviewRecord>, GatewayError> {
    let response = client
        .get(format!("{}/api/reviews/tmdb/{}", base_url, tmdb_id))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!("review list fetch failed: HTTP {} for movie {}", status, tmdb_id);
        return Ok(Vec::new());
    }

    let reviews: Vec<ReviewRecord> = response.json().await?;
    debug!("fetched {} reviews for movie {}", reviews.len(), tmdb_id);
    Ok(reviews)
}

/// GET /api/reviews/tmdb/{id}/rating. Absent on non-success; callers
/// render the zero-state.
pub async fn rating_summary(
    client: &Client,
    base_url: &str,
    tmdb_id: u64,
) -> Result<Option<RatingSummary>, GatewayError> {
    let response = client
        .get(format!("{}/api/reviews/tmdb/{}/rating", base_url, tmdb_id))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        debug!("no rating summary for movie {}: HTTP {}", tmdb_id, status);
        return Ok(None);
    }

    let summary: RatingSummary = response.json().await?;
    Ok(Some(summary))
}

/// GET /api/reviews/member/{id}, the movie-independent "my reviews" view.
pub async fn reviews_for_member(
    client: &Client,
    base_url: &str,
    member_id: &str,
) -> Result<Vec<ReviewRecord>, GatewayError> {
    let response = client
        .get(format!(
            "{}/api/reviews/member/{}",
            base_url,
            urlencoding::encode(member_id)
        ))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!("member review fetch failed: HTTP {} for {}", status, member_id);
        return Ok(Vec::new());
    }

    let reviews: Vec<ReviewRecord> = response.json().await?;
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_liked_true() {
        assert!(parse_is_liked(&json!({ "isLiked": true })));
    }

    #[test]
    fn test_parse_is_liked_missing_field_is_false() {
        assert!(!parse_is_liked(&json!({})));
        assert!(!parse_is_liked(&json!({ "liked": true })));
    }

    #[test]
    fn test_parse_is_liked_wrong_type_is_false() {
        assert!(!parse_is_liked(&json!({ "isLiked": "yes" })));
    }

    #[test]
    fn test_update_payload_preserves_attachments() {
        let session = SessionIdentity::new("jwt", "alice");
        let review: ReviewRecord = serde_json::from_value(json!({
            "id": 41,
            "member_id": "alice",
            "movie_id": 603,
            "content": "edited take",
            "rating": "4",
            "emotions": ["moved"],
            "media_url": "https://cdn.example.com/clip.mp4",
            "highlight_quote": "There is no spoon.",
            "created_at": "2026-08-01T12:00:00Z"
        }))
        .unwrap();

        let payload = update_payload(&session, &review);
        assert_eq!(payload["media_url"], "https://cdn.example.com/clip.mp4");
        assert_eq!(payload["highlight_quote"], "There is no spoon.");
        // Absent attachments still serialize as empty strings.
        assert_eq!(payload["highlight_image_url"], "");
        assert_eq!(payload["content"], "edited take");
        assert_eq!(payload["rating"], 4.0);
        assert_eq!(payload["member_id"], "alice");
    }

    #[test]
    fn test_register_profile_serializes_backend_field_names() {
        let profile = RegisterProfile {
            id: "alice".to_string(),
            password: "pw".to_string(),
            name: "Alice".to_string(),
            birth: "1990-01-01".to_string(),
            gender: "f".to_string(),
            email: "alice@example.com".to_string(),
            phone_number: "010-0000-0000".to_string(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["phone_number"], "010-0000-0000");
        assert_eq!(value["id"], "alice");
    }
}
