pub mod runner;

pub use runner::{RunOptions, Runner};
