pub mod api;
pub mod client;

pub use api::RegisterProfile;
pub use client::BackendClient;
