pub mod dispatch;
pub mod run;
pub mod runner_builder;
pub mod taxonomy;

pub use dispatch::dispatch;
