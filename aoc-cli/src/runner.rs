//! Sequential runner for registered days

use crate::error::CliError;
use crate::output::OutputFormatter;
use aoc_harness::{Answer, Day, DayError, DayRegistry, Title};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result record for one executed part
#[derive(Debug)]
pub struct PartOutcome {
    pub day: String,
    pub title: Title,
    pub answer: Answer,
    pub solve_duration: Duration,
}

/// Runs days from the registry in identifier order, one part at a time.
///
/// Execution is strictly sequential; every part re-reads its input and owns
/// whatever it builds from it, so no state crosses day or part boundaries.
pub struct Runner<'r> {
    registry: &'r DayRegistry,
    input_dir: PathBuf,
    part_filter: Option<u32>,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r DayRegistry, input_dir: PathBuf, part_filter: Option<u32>) -> Self {
        Self {
            registry,
            input_dir,
            part_filter,
        }
    }

    /// Run the selected days in order, printing each result as it lands.
    ///
    /// The first failing part aborts the run; results already printed stay
    /// printed.
    pub fn run(
        &self,
        day_filter: Option<&str>,
        formatter: &OutputFormatter,
    ) -> Result<Vec<PartOutcome>, CliError> {
        let days: Vec<Day> = match day_filter {
            Some(ident) => {
                let day = self
                    .registry
                    .create(ident, &self.input_dir)
                    .ok_or_else(|| CliError::UnknownDay(ident.to_string()))?;
                vec![day]
            }
            None => self
                .registry
                .iter()
                .map(|day| day.create(&self.input_dir))
                .collect(),
        };

        let mut outcomes = Vec::new();
        for day in &days {
            self.run_day(day, day_filter.is_some(), formatter, &mut outcomes)?;
        }
        Ok(outcomes)
    }

    fn run_day(
        &self,
        day: &Day,
        single_day: bool,
        formatter: &OutputFormatter,
        outcomes: &mut Vec<PartOutcome>,
    ) -> Result<(), CliError> {
        let selected: Vec<_> = day
            .parts()
            .filter(|part| {
                self.part_filter
                    .is_none_or(|wanted| part.title() == Title::Num(wanted))
            })
            .collect();

        // When one day was asked for by name, a part filter that matches
        // nothing is an error; across a full run such days are just skipped.
        if selected.is_empty()
            && single_day
            && let Some(wanted) = self.part_filter
        {
            return Err(DayError::PartNotFound {
                day: day.ident().to_string(),
                title: Title::Num(wanted),
            }
            .into());
        }

        for part in selected {
            let start = Instant::now();
            let answer = part.call()?;
            let outcome = PartOutcome {
                day: day.ident().to_string(),
                title: part.title(),
                answer,
                solve_duration: start.elapsed(),
            };
            formatter.print_result(&outcome);
            outcomes.push(outcome);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::RegistryBuilder;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> DayRegistry {
        RegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build()
    }

    #[test]
    fn runs_both_parts_of_a_day() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1.txt"), "100\n200\n\n50\n").unwrap();

        let registry = registry();
        let runner = Runner::new(&registry, dir.path().to_path_buf(), None);
        let outcomes = runner
            .run(Some("1"), &OutputFormatter::new(true))
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].answer, Answer::Num(300));
        assert_eq!(outcomes[1].answer, Answer::Num(350));
    }

    #[test]
    fn part_filter_selects_one_part() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1.txt"), "1\n2\n").unwrap();

        let registry = registry();
        let runner = Runner::new(&registry, dir.path().to_path_buf(), Some(2));
        let outcomes = runner
            .run(Some("1"), &OutputFormatter::new(true))
            .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].title, Title::Num(2));
    }

    #[test]
    fn unknown_day_is_an_error() {
        let dir = TempDir::new().unwrap();
        let registry = registry();
        let runner = Runner::new(&registry, dir.path().to_path_buf(), None);

        let err = runner
            .run(Some("99"), &OutputFormatter::new(true))
            .unwrap_err();
        assert!(matches!(err, CliError::UnknownDay(ident) if ident == "99"));
    }

    #[test]
    fn missing_input_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let registry = registry();
        let runner = Runner::new(&registry, dir.path().to_path_buf(), None);

        let err = runner.run(Some("1"), &OutputFormatter::new(true)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Day(DayError::InputNotFound { .. })
        ));
    }
}
