//! Application layer - Use cases and orchestration

pub mod export;
pub mod list_tags;

pub use export::{ExportOptions, ExportOutcome, ExportService};
pub use list_tags::ListTagsService;
