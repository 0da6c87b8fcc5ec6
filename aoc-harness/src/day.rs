//! Core day and part types

use crate::error::{DayError, SolveError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional base directory for puzzle inputs.
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Conventional prefix stripped from a day's name when deriving its identifier.
const NAME_PREFIX: &str = "day";

/// Identifies a part within its day.
///
/// Titles are commonly the part numbers 1 and 2, but a day may also use
/// string titles for extra parts. The display form of the title is what
/// appears in the primary input-file candidate `{ident}{title}.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Title {
    Num(u32),
    Name(&'static str),
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<u32> for Title {
    fn from(n: u32) -> Self {
        Self::Num(n)
    }
}

impl From<&'static str> for Title {
    fn from(s: &'static str) -> Self {
        Self::Name(s)
    }
}

/// The value a part computes: an integer or a string, printed via its
/// display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Num(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for Answer {
    fn from(n: i32) -> Self {
        Self::Num(n.into())
    }
}

impl From<u32> for Answer {
    fn from(n: u32) -> Self {
        Self::Num(n.into())
    }
}

impl From<u64> for Answer {
    fn from(n: u64) -> Self {
        Self::Num(n as i64)
    }
}

impl From<usize> for Answer {
    fn from(n: usize) -> Self {
        Self::Num(n as i64)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A part's logic function: pure over the input text.
pub type PartFn = fn(&str) -> Result<Answer, SolveError>;

/// One entry in a day's part table: a title and the function it runs.
///
/// Tables are declaration-ordered; build them with the [`parts!`](crate::parts)
/// macro for numeric titles, or directly for string titles:
///
/// ```
/// use aoc_harness::{Answer, PartSpec, SolveError, Title};
///
/// fn extra(_input: &str) -> Result<Answer, SolveError> {
///     Ok(Answer::from(0))
/// }
///
/// const PARTS: &[PartSpec] = &[PartSpec {
///     title: Title::Name("extra"),
///     run: extra,
/// }];
/// # assert_eq!(PARTS[0].title, Title::Name("extra"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PartSpec {
    pub title: Title,
    pub run: PartFn,
}

/// Explicit identifier override for a day whose input files are not named
/// after its type name.
///
/// Either a fixed value or a zero-argument function producing one; both are
/// coerced to a string when resolved.
#[derive(Debug, Clone, Copy)]
pub enum Ident {
    Fixed(&'static str),
    Lazy(fn() -> String),
}

/// A day declaration: a name, a part table, and an optional identifier
/// override.
///
/// This is the explicit-registration counterpart of tagging methods on a
/// class: each day lists its parts once, in order, and the harness binds
/// them at construction.
///
/// # Example
///
/// ```
/// use aoc_harness::{parts, Answer, Day, PartSpec, Puzzle, SolveError};
/// use std::path::Path;
///
/// struct DayOne;
///
/// fn part_1(input: &str) -> Result<Answer, SolveError> {
///     Ok(input.lines().count().into())
/// }
///
/// impl Puzzle for DayOne {
///     const NAME: &'static str = "DayOne";
///     const PARTS: &'static [PartSpec] = parts![1 => part_1];
/// }
///
/// let day = Day::new::<DayOne>(Path::new("inputs"));
/// assert_eq!(day.ident(), "one");
/// assert_eq!(day.parts().count(), 1);
/// ```
pub trait Puzzle {
    /// The day's declared name, used to derive the input identifier.
    const NAME: &'static str;

    /// Declaration-ordered table of this day's parts. An empty table is
    /// allowed; such a day simply runs nothing.
    const PARTS: &'static [PartSpec];

    /// Identifier override. Mandatory for any day whose name does not start
    /// with the conventional `Day` prefix.
    const IDENT: Option<Ident> = None;
}

/// Resolve a puzzle's identifier: the override wins, otherwise it is derived
/// from the declared name.
pub(crate) fn resolve_ident<P: Puzzle>() -> String {
    match P::IDENT {
        Some(Ident::Fixed(s)) => s.to_string(),
        Some(Ident::Lazy(f)) => f(),
        None => derive_ident(P::NAME),
    }
}

/// Lower-case the name and strip exactly one leading `day` prefix.
pub(crate) fn derive_ident(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.strip_prefix(NAME_PREFIX) {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

/// One puzzle unit bound to an input directory.
///
/// Construction resolves the identifier once; it stays stable for the
/// lifetime of the instance. Input lookup happens at part-invocation time,
/// never at bind time.
pub struct Day {
    name: &'static str,
    ident: String,
    input_dir: PathBuf,
    parts: &'static [PartSpec],
}

impl Day {
    /// Bind a puzzle declaration to an input directory.
    pub fn new<P: Puzzle>(input_dir: &Path) -> Self {
        debug_assert!(
            P::PARTS
                .iter()
                .enumerate()
                .all(|(i, a)| P::PARTS[..i].iter().all(|b| a.title != b.title)),
            "part titles must be unique within a day"
        );
        Self {
            name: P::NAME,
            ident: resolve_ident::<P>(),
            input_dir: input_dir.to_path_buf(),
            parts: P::PARTS,
        }
    }

    /// Bind a puzzle declaration to the conventional `inputs` directory.
    pub fn with_default_dir<P: Puzzle>() -> Self {
        Self::new::<P>(Path::new(DEFAULT_INPUT_DIR))
    }

    /// The day's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The resolved identifier used for input-file lookup.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Read the input text for a part title.
    ///
    /// Two candidate paths are checked in priority order,
    /// `{ident}{title}.txt` then `{ident}.txt`, both relative to the input
    /// directory. The first existing candidate is read whole as UTF-8.
    pub fn input(&self, title: Title) -> Result<String, DayError> {
        let candidates = [
            self.input_dir.join(format!("{}{}.txt", self.ident, title)),
            self.input_dir.join(format!("{}.txt", self.ident)),
        ];
        for path in &candidates {
            if path.exists() {
                return fs::read_to_string(path).map_err(DayError::Io);
            }
        }
        Err(DayError::InputNotFound {
            day: self.ident.clone(),
            title,
        })
    }

    /// The day's parts, bound to this instance, in declaration order.
    pub fn parts(&self) -> impl Iterator<Item = Part<'_>> {
        self.parts.iter().map(|spec| Part { day: self, spec })
    }

    /// Run the part whose title equals `title` and return its answer.
    pub fn run_part(&self, title: impl Into<Title>) -> Result<Answer, DayError> {
        let title = title.into();
        let part = self
            .parts()
            .find(|part| part.title() == title)
            .ok_or_else(|| DayError::PartNotFound {
                day: self.ident.clone(),
                title,
            })?;
        part.call()
    }

    /// Run every part in declaration order, printing one answer per line to
    /// standard output. The first failing part aborts the run.
    pub fn run_all(&self) -> Result<(), DayError> {
        for part in self.parts() {
            println!("{}", part.call()?);
        }
        Ok(())
    }
}

/// A part bound to its owning day.
///
/// Calling it resolves the input through the owning day, then runs the
/// logic function on the text. Nothing is cached; every call re-reads the
/// input and re-runs the logic.
#[derive(Clone, Copy)]
pub struct Part<'d> {
    day: &'d Day,
    spec: &'d PartSpec,
}

impl Part<'_> {
    pub fn title(&self) -> Title {
        self.spec.title
    }

    pub fn call(&self) -> Result<Answer, DayError> {
        let input = self.day.input(self.spec.title)?;
        (self.spec.run)(&input).map_err(DayError::from)
    }
}

/// Build a declaration-ordered part table from numeric titles.
///
/// ```
/// use aoc_harness::{parts, Answer, PartSpec, SolveError};
///
/// fn part_1(_input: &str) -> Result<Answer, SolveError> {
///     Ok(Answer::from(1))
/// }
/// fn part_2(_input: &str) -> Result<Answer, SolveError> {
///     Ok(Answer::from(2))
/// }
///
/// const PARTS: &[PartSpec] = parts![1 => part_1, 2 => part_2];
/// # assert_eq!(PARTS.len(), 2);
/// ```
///
/// String-titled parts are declared directly with
/// [`Title::Name`](crate::Title).
#[macro_export]
macro_rules! parts {
    ($($title:literal => $func:expr),+ $(,)?) => {
        &[$($crate::PartSpec {
            title: $crate::Title::Num($title),
            run: $func,
        }),+]
    };
}
