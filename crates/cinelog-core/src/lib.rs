pub mod aggregator;
pub mod error;
pub mod reconciler;

pub use aggregator::{MovieAggregator, MovieDetailView, SaveOutcome};
pub use error::CoreError;
pub use reconciler::{filter_owned, ReviewReconciler};

#[cfg(test)]
pub(crate) mod testutil;
