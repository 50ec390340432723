pub mod emotion;
pub mod movie;
pub mod rating;
pub mod review;
pub mod session;

pub use emotion::Emotion;
pub use movie::MovieRecord;
pub use rating::RatingSummary;
pub use review::{ReviewDraft, ReviewRecord};
pub use session::SessionIdentity;
