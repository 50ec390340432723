pub mod backend;
pub mod error;
pub mod tmdb;
pub mod traits;

pub use backend::BackendClient;
pub use backend::RegisterProfile;
pub use error::GatewayError;
pub use tmdb::TmdbClient;
pub use traits::{MetadataGateway, ReviewGateway};
