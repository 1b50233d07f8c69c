//! Process exit codes. Part of the CLI contract for scripted evaluation runs.

pub const SUCCESS: i32 = 0;
pub const BELOW_THRESHOLD: i32 = 1; // Accuracy under --min-accuracy
pub const FATAL: i32 = 2; // Config, dataset or provider failure
