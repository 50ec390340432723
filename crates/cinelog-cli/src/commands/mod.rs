pub mod auth;
pub mod movies;
pub mod reviews;

use cinelog_config::{Config, PathManager, SessionStore, TmdbConfig};
use cinelog_models::SessionIdentity;
use color_eyre::Result;

use crate::output::Output;

/// Load the config, writing a template on first run so the user has a
/// file to fill in instead of a parse error.
pub fn load_config(output: &Output) -> Result<Config> {
    let paths = PathManager::default();
    let config_file = paths.config_file();

    if !config_file.exists() {
        let template = Config::default();
        template
            .save(&config_file)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to write config template: {}", e))?;
        output.info(format!("Wrote config template to {}", config_file.display()));
    }

    Config::load(&config_file).map_err(|e| color_eyre::eyre::eyre!("{}", e))
}

/// Metadata commands need a TMDB key; session-only commands do not.
pub fn require_tmdb(config: &Config) -> Result<TmdbConfig> {
    if config.tmdb.api_key.is_empty() {
        let paths = PathManager::default();
        return Err(color_eyre::eyre::eyre!(
            "No TMDB api key configured. Set tmdb.api_key in {}",
            paths.config_file().display()
        ));
    }
    Ok(config.tmdb.clone())
}

pub fn open_session() -> Result<SessionStore> {
    let paths = PathManager::default();
    let mut store = SessionStore::new(paths.session_file());
    store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load session: {}", e))?;
    Ok(store)
}

/// The stored identity, or a log-in-first error for gated commands.
pub fn require_identity() -> Result<SessionIdentity> {
    open_session()?
        .identity()
        .ok_or_else(|| color_eyre::eyre::eyre!("No active session. Run `cinelog login` first"))
}
