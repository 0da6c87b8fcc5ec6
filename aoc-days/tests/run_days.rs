//! End-to-end run of every registered day against the committed example
//! inputs, mirroring the per-day answers the puzzles document.

// Link the day modules so their plugins are collected.
use aoc_days as _;

use aoc_harness::{Answer, DayError, DayRegistry, RegistryBuilder};
use std::path::Path;

const EXAMPLE_DIR: &str = "inputs/examples";

fn registry() -> DayRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("day identifiers are unique")
        .build()
}

#[test]
fn every_day_solves_its_example() {
    let expected: &[(&str, Answer, Answer)] = &[
        ("1", Answer::Num(24000), Answer::Num(45000)),
        ("2", Answer::Num(15), Answer::Num(12)),
        ("3", Answer::Num(157), Answer::Num(70)),
        ("4", Answer::Num(2), Answer::Num(4)),
        ("5", Answer::Text("CMZ".into()), Answer::Text("MCD".into())),
        ("6", Answer::Num(7), Answer::Num(19)),
        ("7", Answer::Num(95437), Answer::Num(24933642)),
        ("8", Answer::Num(21), Answer::Num(8)),
    ];

    let registry = registry();
    assert_eq!(registry.len(), expected.len());

    for (ident, part_1, part_2) in expected {
        let day = registry
            .create(ident, Path::new(EXAMPLE_DIR))
            .unwrap_or_else(|| panic!("day {} not registered", ident));
        assert_eq!(&day.run_part(1).unwrap(), part_1, "day {} part 1", ident);
        assert_eq!(&day.run_part(2).unwrap(), part_2, "day {} part 2", ident);
    }
}

#[test]
fn registered_days_are_ordered() {
    let idents: Vec<String> = registry().idents().map(String::from).collect();
    assert_eq!(idents, ["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn answers_are_stable_across_runs() {
    let registry = registry();
    let day = registry.create("6", Path::new(EXAMPLE_DIR)).unwrap();
    assert_eq!(day.run_part(1).unwrap(), day.run_part(1).unwrap());
}

#[test]
fn missing_input_aborts_with_input_not_found() {
    let empty = tempfile::TempDir::new().unwrap();
    let registry = registry();
    let day = registry.create("1", empty.path()).unwrap();

    assert!(matches!(
        day.run_all().unwrap_err(),
        DayError::InputNotFound { .. }
    ));
    assert!(matches!(
        day.run_part(2).unwrap_err(),
        DayError::InputNotFound { .. }
    ));
}
