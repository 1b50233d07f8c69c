use crate::scoring::{format_accuracy, RunAggregate};
use std::path::Path;

#[must_use]
pub fn accuracy_line(aggregate: &RunAggregate) -> String {
    format!("Accuracy: {}", format_accuracy(aggregate.accuracy()))
}

#[must_use]
pub fn completion_line(output: &Path) -> String {
    format!(
        "Completed. Responses and accuracy have been saved to {}",
        output.display()
    )
}

/// Stdout is reserved for these two lines; diagnostics go through `tracing`.
pub fn print_run_summary(aggregate: &RunAggregate, output: &Path) {
    println!("{}", accuracy_line(aggregate));
    println!("{}", completion_line(output));
}
