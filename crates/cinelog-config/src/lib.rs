pub mod config;
pub mod paths;
pub mod session;

pub use config::{BackendConfig, Config, TmdbConfig};
pub use paths::PathManager;
pub use session::SessionStore;
