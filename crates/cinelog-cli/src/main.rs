use clap::{ArgAction, Parser, Subcommand};
use commands::{auth, movies, reviews};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cinelog")]
#[command(about = "Cinelog - Browse movies, then review and rate them")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to the review backend
    #[command(long_about = "Authenticate against the review backend and store the session. The password is prompted, never passed on the command line.")]
    Login {
        /// Member id (prompted if not provided)
        id: Option<String>,
    },
    /// Create a new member account
    Register {
        /// Member id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        birth: String,

        /// Gender
        #[arg(long, default_value = "")]
        gender: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Clear the stored session
    Logout,
    /// List the currently popular movies
    Popular,
    /// Search movies by title
    Search {
        /// Title query
        query: String,
    },
    /// Show one movie with its rating summary and reviews
    Detail {
        /// TMDB movie id
        tmdb_id: u64,
    },
    /// Manage your reviews
    Review {
        #[command(subcommand)]
        cmd: ReviewCommands,
    },
    /// Toggle your like on a movie
    Like {
        /// TMDB movie id
        tmdb_id: u64,
    },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Submit a review for a movie
    #[command(long_about = "Submit a review for a movie. A submission needs a rating or some content; an all-empty draft is rejected locally before any request goes out.")]
    Add {
        /// TMDB movie id
        tmdb_id: u64,

        /// Star rating, 1-5 (0 leaves it unset)
        #[arg(short, long, default_value_t = 0)]
        rating: u8,

        /// Review text
        #[arg(short, long, default_value = "")]
        content: String,

        /// Emotion tags (repeatable): moved, neutral, sad
        #[arg(short, long = "emotion", value_name = "EMOTION")]
        emotions: Vec<String>,

        /// Quote to highlight from the movie
        #[arg(long)]
        quote: Option<String>,

        /// Attached media URL
        #[arg(long)]
        media_url: Option<String>,
    },
    /// List your own reviews
    Mine {
        /// Restrict to one movie
        #[arg(long)]
        tmdb_id: Option<u64>,
    },
    /// Replace the text of one of your reviews
    Edit {
        /// Review id (see `cinelog review mine`)
        review_id: i64,

        /// New review text
        content: String,
    },
    /// Delete one of your reviews
    Delete {
        /// Review id (see `cinelog review mine`)
        review_id: i64,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Login { id } => auth::run_login(id, &output).await,
        Commands::Register {
            id,
            name,
            birth,
            gender,
            email,
            phone,
        } => auth::run_register(id, name, birth, gender, email, phone, &output).await,
        Commands::Logout => auth::run_logout(&output),
        Commands::Popular => movies::run_popular(&output).await,
        Commands::Search { query } => movies::run_search(&query, &output).await,
        Commands::Detail { tmdb_id } => movies::run_detail(tmdb_id, &output).await,
        Commands::Review { cmd } => match cmd {
            ReviewCommands::Add {
                tmdb_id,
                rating,
                content,
                emotions,
                quote,
                media_url,
            } => {
                reviews::run_add(tmdb_id, rating, content, emotions, quote, media_url, &output)
                    .await
            }
            ReviewCommands::Mine { tmdb_id } => reviews::run_mine(tmdb_id, &output).await,
            ReviewCommands::Edit { review_id, content } => {
                reviews::run_edit(review_id, &content, &output).await
            }
            ReviewCommands::Delete { review_id } => reviews::run_delete(review_id, &output).await,
        },
        Commands::Like { tmdb_id } => reviews::run_like(tmdb_id, &output).await,
    };

    if let Err(err) = result {
        output.error(format!("{}", err));
        std::process::exit(1);
    }

    Ok(())
}
