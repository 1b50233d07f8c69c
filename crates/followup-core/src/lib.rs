pub mod config;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod gateway;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod report;
pub mod scoring;
pub mod taxonomy;
