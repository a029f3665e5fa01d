//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod aggregate;
mod categorize;
mod reconcile;

pub use aggregate::Aggregator;
pub use categorize::{Categorizer, UNCATEGORIZED};
pub use reconcile::{ExportResult, Reconciler};
