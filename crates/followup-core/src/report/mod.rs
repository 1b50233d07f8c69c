pub mod console;
pub mod summary;

pub use summary::{write_summary, RunSummary};
