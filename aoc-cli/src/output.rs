//! Output formatting for part results

use crate::runner::PartOutcome;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Output formatter for part results
pub struct OutputFormatter {
    quiet: bool,
    started_at: DateTime<Local>,
    start_instant: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started_at: Local::now(),
            start_instant: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, outcome: &PartOutcome) {
        if self.quiet {
            println!("{}", outcome.answer);
        } else {
            println!(
                "day {} part {}: {} (solve: {})",
                outcome.day,
                outcome.title,
                outcome.answer,
                format_duration(outcome.solve_duration)
            );
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, outcomes: &[PartOutcome]) {
        if self.quiet {
            return;
        }

        let total_solve: Duration = outcomes.iter().map(|o| o.solve_duration).sum();

        println!();
        println!("--- Summary ---");
        println!("Run started: {}", self.started_at.format("%H:%M:%S"));
        println!("Parts solved: {}", outcomes.len());
        println!("Total solve time: {}", format_duration(total_solve));
        println!(
            "Elapsed wall-clock time: {}",
            format_duration(self.start_instant.elapsed())
        );
    }
}

/// Format a duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_breakpoints() {
        assert_eq!(format_duration(Duration::from_micros(999)), "999µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
    }
}
