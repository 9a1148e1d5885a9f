use std::collections::{BTreeMap, HashMap};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::opt::normalize_flag;

/// The structured outcome of a successful form match.
///
/// Flags map to a list of occurrence value-lists: one inner list per time a
/// repeatable flag appeared. Every alias of a flag addresses the same
/// occurrence data. Top-level positional values live in their own ordered
/// list. A failing match never produces a partial `Matches`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    /// Normalized alias -> slot in `occurrences`.
    index: HashMap<String, usize>,
    occurrences: Vec<Vec<Vec<String>>>,
    positional: Vec<String>,
}

impl Matches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a flag under every given spelling.
    ///
    /// Spellings are normalized; any that normalize to nothing are dropped.
    /// When every spelling drops out the occurrence is unaddressable and is
    /// discarded.
    pub fn add_option<I, S>(&mut self, flags: I, args: Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = flags
            .into_iter()
            .map(|f| normalize_flag(f.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return;
        }
        let slot = match names.iter().find_map(|n| self.index.get(n.as_str())) {
            Some(&slot) => slot,
            None => {
                self.occurrences.push(Vec::new());
                self.occurrences.len() - 1
            }
        };
        self.occurrences[slot].push(args);
        for name in names {
            self.index.insert(name, slot);
        }
    }

    /// Whether the flag (under any spelling) was matched at least once.
    pub fn flag_exists(&self, flag: &str) -> bool {
        self.index.contains_key(&normalize_flag(flag))
    }

    /// Every occurrence recorded for a flag, in match order.
    ///
    /// `None` means the flag never matched; a flag matched without
    /// arguments yields `Some` with empty inner lists.
    pub fn get_args(&self, flag: &str) -> Option<&[Vec<String>]> {
        self.index
            .get(&normalize_flag(flag))
            .map(|&slot| self.occurrences[slot].as_slice())
    }

    /// Values from the first occurrence of a flag.
    pub fn first_args(&self, flag: &str) -> Option<&[String]> {
        self.get_args(flag)?.first().map(Vec::as_slice)
    }

    /// How many times a flag was matched.
    pub fn occurrences(&self, flag: &str) -> usize {
        self.get_args(flag).map_or(0, <[_]>::len)
    }

    /// Top-level positional values, in consumption order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub(crate) fn push_positional(&mut self, values: Vec<String>) {
        self.positional.extend(values);
    }
}

impl Serialize for Matches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Keyed by every alias so the dump mirrors lookup behavior.
        let flags: BTreeMap<&str, &Vec<Vec<String>>> = self
            .index
            .iter()
            .map(|(name, &slot)| (name.as_str(), &self.occurrences[slot]))
            .collect();
        let mut state = serializer.serialize_struct("Matches", 2)?;
        state.serialize_field("flags", &flags)?;
        state.serialize_field("positional", &self.positional)?;
        state.end()
    }
}
