//! Day registry for collecting and creating day instances

use crate::day::{Day, Puzzle, resolve_ident};
use crate::error::RegistrationError;
use std::path::Path;

/// Trait for day declarations that can register themselves with a registry
/// builder.
///
/// Unlike [`Puzzle`], which only has associated consts, this trait is object
/// safe, allowing different day types to be collected in a single container.
/// Any `Puzzle` type gets an implementation through a blanket impl.
pub trait RegisterableDay: Sync {
    /// The day's declared name.
    fn name(&self) -> &'static str;

    /// The day's resolved identifier.
    fn ident(&self) -> String;

    /// Bind the day to an input directory.
    fn create(&self, input_dir: &Path) -> Day;
}

impl<P> RegisterableDay for P
where
    P: Puzzle + Sync,
{
    fn name(&self) -> &'static str {
        P::NAME
    }

    fn ident(&self) -> String {
        resolve_ident::<P>()
    }

    fn create(&self, input_dir: &Path) -> Day {
        Day::new::<P>(input_dir)
    }
}

/// Plugin information for automatic day registration.
///
/// Each day module submits one of these; the CLI collects them into a
/// registry at startup.
///
/// # Example
///
/// ```no_run
/// use aoc_harness::{parts, Answer, DayPlugin, PartSpec, Puzzle, SolveError};
///
/// struct Day1;
///
/// fn part_1(_input: &str) -> Result<Answer, SolveError> {
///     Ok(Answer::from(0))
/// }
///
/// impl Puzzle for Day1 {
///     const NAME: &'static str = "Day1";
///     const PARTS: &'static [PartSpec] = parts![1 => part_1];
/// }
///
/// aoc_harness::inventory::submit! {
///     DayPlugin { day: &Day1 }
/// }
/// ```
pub struct DayPlugin {
    /// The day declaration (type-erased)
    pub day: &'static dyn RegisterableDay,
}

// Enable plugin collection via inventory
inventory::collect!(DayPlugin);

struct RegistryEntry {
    ident: String,
    day: &'static dyn RegisterableDay,
}

/// Builder for constructing a [`DayRegistry`].
///
/// Registration detects duplicate identifiers; the registry is immutable
/// after construction.
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a single day.
    ///
    /// Returns an error if a day with the same identifier is already
    /// registered.
    pub fn register(
        mut self,
        day: &'static dyn RegisterableDay,
    ) -> Result<Self, RegistrationError> {
        let ident = day.ident();
        if self.entries.iter().any(|entry| entry.ident == ident) {
            return Err(RegistrationError::DuplicateDay(ident));
        }
        self.entries.push(RegistryEntry { ident, day });
        Ok(self)
    }

    /// Register all collected day plugins.
    ///
    /// Iterates through every plugin submitted via `inventory::submit!` and
    /// registers each one.
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<DayPlugin>() {
            self = self.register(plugin.day)?;
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry.
    ///
    /// Days are ordered by identifier, numeric identifiers first by value
    /// so that `"10"` sorts after `"2"`.
    pub fn build(mut self) -> DayRegistry {
        self.entries
            .sort_by(|a, b| ident_sort_key(&a.ident).cmp(&ident_sort_key(&b.ident)));
        DayRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field(
                "entries",
                &self.entries.iter().map(|e| &e.ident).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Sort key ordering numeric identifiers by value ahead of lexical ones.
fn ident_sort_key(ident: &str) -> (u8, u64, &str) {
    match ident.parse::<u64>() {
        Ok(n) => (0, n, ""),
        Err(_) => (1, 0, ident),
    }
}

/// Immutable registry of days, ordered by identifier.
pub struct DayRegistry {
    entries: Vec<RegistryEntry>,
}

impl DayRegistry {
    /// Look up a day declaration by identifier.
    pub fn get(&self, ident: &str) -> Option<&'static dyn RegisterableDay> {
        self.entries
            .iter()
            .find(|entry| entry.ident == ident)
            .map(|entry| entry.day)
    }

    /// Bind the day with the given identifier to an input directory.
    pub fn create(&self, ident: &str, input_dir: &Path) -> Option<Day> {
        self.get(ident).map(|day| day.create(input_dir))
    }

    /// Iterate over all registered days in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn RegisterableDay> + '_ {
        self.entries.iter().map(|entry| entry.day)
    }

    /// The registered identifiers, in order.
    pub fn idents(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.ident.as_str())
    }

    /// The number of registered days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::{Ident, PartSpec};

    struct Day2;

    impl Puzzle for Day2 {
        const NAME: &'static str = "Day2";
        const PARTS: &'static [PartSpec] = &[];
    }

    struct Day10;

    impl Puzzle for Day10 {
        const NAME: &'static str = "Day10";
        const PARTS: &'static [PartSpec] = &[];
    }

    struct DayAlpha;

    impl Puzzle for DayAlpha {
        const NAME: &'static str = "DayAlpha";
        const PARTS: &'static [PartSpec] = &[];
    }

    struct DayTwoAgain;

    impl Puzzle for DayTwoAgain {
        const NAME: &'static str = "DayTwoAgain";
        const PARTS: &'static [PartSpec] = &[];
        const IDENT: Option<Ident> = Some(Ident::Fixed("2"));
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let builder = RegistryBuilder::new().register(&Day2).unwrap();
        let err = builder.register(&DayTwoAgain).unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateDay(ident) if ident == "2"));
    }

    #[test]
    fn registry_orders_numeric_identifiers_by_value() {
        let registry = RegistryBuilder::new()
            .register(&Day10)
            .unwrap()
            .register(&DayAlpha)
            .unwrap()
            .register(&Day2)
            .unwrap()
            .build();

        let idents: Vec<&str> = registry.idents().collect();
        assert_eq!(idents, vec!["2", "10", "alpha"]);
    }

    #[test]
    fn lookup_and_create_by_identifier() {
        let registry = RegistryBuilder::new().register(&Day2).unwrap().build();

        assert!(registry.get("2").is_some());
        assert!(registry.get("3").is_none());

        let day = registry.create("2", Path::new("inputs")).unwrap();
        assert_eq!(day.ident(), "2");
        assert_eq!(day.name(), "Day2");
    }
}
