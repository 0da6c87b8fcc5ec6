//! Advent of Code Day Harness
//!
//! A small harness for running yearly coding-puzzle days. Each day is a
//! declaration of one or more "parts"; the harness resolves the day's input
//! file by naming convention, feeds the text to each part, and prints the
//! answers.
//!
//! # Overview
//!
//! This library provides:
//! - A declaration trait for defining days with explicit part tables
//! - Convention-based input lookup with a two-candidate fallback
//! - Identifier derivation from the day's name, with an override hook
//! - A registry system for collecting days behind a single runner
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{parts, Answer, Day, PartSpec, Puzzle, SolveError};
//! use std::path::Path;
//!
//! struct DayOne;
//!
//! fn part_1(input: &str) -> Result<Answer, SolveError> {
//!     Ok(input.lines().count().into())
//! }
//!
//! impl Puzzle for DayOne {
//!     const NAME: &'static str = "DayOne";
//!     const PARTS: &'static [PartSpec] = parts![1 => part_1];
//! }
//!
//! // Input files for this day resolve as inputs/one{title}.txt, falling
//! // back to inputs/one.txt.
//! let day = Day::new::<DayOne>(Path::new("inputs"));
//! assert_eq!(day.ident(), "one");
//!
//! let titles: Vec<_> = day.parts().map(|part| part.title()).collect();
//! assert_eq!(titles.len(), 1);
//! ```
//!
//! # Key Concepts
//!
//! ## Day declarations
//!
//! The [`Puzzle`] trait is the declaration surface. A day lists its name and
//! a declaration-ordered part table; the [`parts!`] macro builds the table
//! for the common numeric titles. Construction of a [`Day`] binds the table
//! to an input directory; nothing else is wired by hand.
//!
//! ## Input convention
//!
//! [`Day::input`] checks `{ident}{title}.txt` and then `{ident}.txt` under
//! the input directory, reading the first that exists. The identifier is the
//! day's lower-cased name with the `Day` prefix stripped, unless the
//! declaration overrides it via [`Puzzle::IDENT`].
//!
//! ## Registry
//!
//! Day modules submit a [`DayPlugin`] via `inventory::submit!`; a runner
//! collects them with [`RegistryBuilder::register_all_plugins`] and runs
//! days through the resulting [`DayRegistry`].

mod day;
mod error;
mod registry;

// Re-export public API
pub use day::{Answer, DEFAULT_INPUT_DIR, Day, Ident, Part, PartFn, PartSpec, Puzzle, Title};
pub use error::{DayError, ParseError, RegistrationError, SolveError};
pub use registry::{DayPlugin, DayRegistry, RegisterableDay, RegistryBuilder};

// Re-export inventory for use by day plugin submissions
pub use inventory;
