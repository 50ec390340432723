use cinelog_core::MovieAggregator;
use cinelog_gateways::{BackendClient, TmdbClient};
use cinelog_models::{MovieRecord, ReviewRecord};
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};

use crate::commands::{load_config, require_tmdb};
use crate::output::{Output, OutputFormat};

fn movie_table(movies: &[MovieRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("TMDB ID").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Title").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Year").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Genres").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("TMDB ★").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Latest review").add_attribute(Attribute::Bold).fg(Color::Cyan),
    ]);

    for movie in movies {
        table.add_row(vec![
            movie.tmdb_id.to_string(),
            movie.title.clone(),
            movie.release_year.to_string(),
            movie.genres.clone(),
            format!("{:.1}", movie.vote_average),
            truncate(&movie.representative_review, 50),
        ]);
    }

    table
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut)
}

fn print_movies(movies: &[MovieRecord], output: &Output) -> Result<()> {
    match output.format() {
        OutputFormat::Human => {
            if movies.is_empty() {
                output.info("No movies found");
            } else {
                output.println(format!("{}", movie_table(movies)));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(movies)?);
        }
    }
    Ok(())
}

pub async fn run_popular(output: &Output) -> Result<()> {
    let config = load_config(output)?;
    let tmdb = TmdbClient::new(require_tmdb(&config)?)?;

    let movies = tmdb.popular_movies().await?;
    print_movies(&movies, output)
}

pub async fn run_search(query: &str, output: &Output) -> Result<()> {
    let config = load_config(output)?;
    let tmdb = TmdbClient::new(require_tmdb(&config)?)?;

    let movies = tmdb.search_movies(query).await?;
    print_movies(&movies, output)
}

pub(crate) fn review_table(reviews: &[ReviewRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Member").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Rating").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Emotions").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Content").add_attribute(Attribute::Bold).fg(Color::Cyan),
        Cell::new("Date").add_attribute(Attribute::Bold).fg(Color::Cyan),
    ]);

    for review in reviews {
        table.add_row(vec![
            review.id.to_string(),
            review.member_id.clone(),
            format!("{:.0}★", review.rating_value()),
            review.emotions.join(", "),
            truncate(&review.content, 60),
            review.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    table
}

pub async fn run_detail(tmdb_id: u64, output: &Output) -> Result<()> {
    let config = load_config(output)?;
    let tmdb = TmdbClient::new(require_tmdb(&config)?)?;
    let backend = BackendClient::new(config.backend);

    let aggregator = MovieAggregator::new(tmdb, backend);
    let detail = aggregator.load_detail(tmdb_id).await?;

    match output.format() {
        OutputFormat::Human => {
            let movie = &detail.movie;
            output.println(format!("{} ({})", movie.title, movie.release_year));
            output.println(format!("Genres: {}", movie.genres));
            output.println(format!(
                "TMDB: {:.1} ({} votes)",
                movie.vote_average, movie.vote_count
            ));
            output.println(format!(
                "Members: {:.1} across {} review(s)",
                detail.summary.average_rating, detail.summary.total_reviews
            ));
            if !movie.overview.is_empty() {
                output.println("");
                output.println(movie.overview.clone());
            }
            if !detail.reviews.is_empty() {
                output.println("");
                output.println(format!("{}", review_table(&detail.reviews)));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({
                "movie": detail.movie,
                "summary": detail.summary,
                "reviews": detail.reviews,
            }));
        }
    }

    Ok(())
}
