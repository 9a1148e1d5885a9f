use indexmap::IndexSet;

use crate::arg::Arg;
use crate::error::{Error, Result};
use crate::help::{WRAP_WIDTH, wrap};
use crate::input::Input;

/// Canonicalize a flag name for matching and lookups.
///
/// Whitespace is trimmed, internal spaces become hyphens, anything that is
/// neither a word character nor a hyphen is stripped, and the result is
/// lower-cased only when longer than one character. Single-character flags
/// stay case-sensitive, so `-A` and `-a` are distinct while `--Flag` and
/// `--flag` are the same.
pub fn normalize_flag(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if c == ' ' {
            out.push('-');
        } else if c.is_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
        }
    }
    if out.chars().count() > 1 { out.to_lowercase() } else { out }
}

/// A named flag definition: primary name, alias set, description, whether
/// the flag may repeat, and the ordered argument consumers that fire when
/// the flag is matched.
#[derive(Debug)]
pub struct Opt {
    name: String,
    aliases: IndexSet<String>,
    description: String,
    repeatable: bool,
    args: Vec<Arg>,
}

impl Opt {
    /// Define a flag. Fails if the name normalizes to nothing.
    pub fn new(name: &str, description: impl Into<String>) -> Result<Self> {
        let name = normalize_flag(name);
        if name.is_empty() {
            return Err(Error::EmptyFlag);
        }
        Ok(Self {
            name,
            aliases: IndexSet::new(),
            description: description.into(),
            repeatable: false,
            args: Vec::new(),
        })
    }

    /// Allow the flag to appear more than once in one input.
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Register an alternative spelling. Duplicates and names that
    /// normalize to nothing are silently ignored.
    pub fn alias(mut self, name: &str) -> Self {
        let name = normalize_flag(name);
        if !name.is_empty() && name != self.name {
            self.aliases.insert(name);
        }
        self
    }

    /// Append an argument consumer.
    ///
    /// Fails once a greedy argument is in place: nothing after it could
    /// ever be reached.
    pub fn add_arg(&mut self, arg: Arg) -> Result<()> {
        if self.args.last().is_some_and(Arg::is_greedy) {
            return Err(Error::GreedyConflict {
                owner: render_flag(&self.name),
            });
        }
        self.args.push(arg);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// Primary name first, then aliases in registration order.
    pub fn flag_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Whether a candidate spelling names this flag.
    pub fn has_flag(&self, candidate: &str) -> bool {
        let candidate = normalize_flag(candidate);
        candidate == self.name || self.aliases.contains(&candidate)
    }

    /// Run every argument consumer in order against the same input,
    /// concatenating their values into one flat list.
    pub fn consume(&self, input: &mut Input) -> Result<Vec<String>> {
        let mut values = Vec::new();
        for arg in &self.args {
            values.extend(arg.consume(input)?);
        }
        Ok(values)
    }

    /// Compact fragment for a usage line: primary spelling plus brackets,
    /// e.g. `--all [File]...`.
    pub(crate) fn summary(&self) -> String {
        let mut out = render_flag(&self.name);
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.bracket());
        }
        out
    }

    /// Left help column listing every spelling, e.g. `-a, --all [File]...`.
    pub fn usage(&self) -> String {
        let names: Vec<String> = self.flag_names().map(render_flag).collect();
        let mut out = names.join(", ");
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.bracket());
        }
        out
    }

    /// Usage plus the wrapped description, as a standalone help block.
    pub fn describe(&self) -> String {
        let mut out = self.usage();
        for line in wrap(&self.description, WRAP_WIDTH - 4) {
            out.push_str("\n    ");
            out.push_str(&line);
        }
        out
    }
}

pub(crate) fn render_flag(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_and_folds() {
        assert_eq!(normalize_flag("  Flag Name!  "), "flag-name");
        assert_eq!(normalize_flag("--"), "--");
        assert_eq!(normalize_flag("dry_run"), "dry_run");
        assert_eq!(normalize_flag("Verbose"), "verbose");
    }

    #[test]
    fn single_character_flags_keep_their_case() {
        assert_eq!(normalize_flag("A"), "A");
        assert_eq!(normalize_flag("a"), "a");
        assert!(!Opt::new("A", "").unwrap().has_flag("a"));
        assert!(Opt::new("Flag", "").unwrap().has_flag("flag"));
    }

    #[test]
    fn empty_name_is_a_wiring_error() {
        assert_eq!(Opt::new("  !!  ", "").unwrap_err(), Error::EmptyFlag);
    }

    #[test]
    fn aliases_match_and_deduplicate() {
        let opt = Opt::new("all", "").unwrap().alias("a").alias("a").alias("ALL");
        assert!(opt.has_flag("a"));
        assert!(opt.has_flag("all"));
        assert_eq!(opt.flag_names().collect::<Vec<_>>(), vec!["all", "a"]);
    }

    #[test]
    fn greedy_arg_must_stay_last() {
        let mut opt = Opt::new("files", "").unwrap();
        opt.add_arg(Arg::one("First")).unwrap();
        opt.add_arg(Arg::many("Rest")).unwrap();
        let err = opt.add_arg(Arg::one("After")).unwrap_err();
        assert_eq!(
            err,
            Error::GreedyConflict {
                owner: "--files".to_string()
            }
        );
        // A second greedy arg is just as unreachable.
        assert!(opt.add_arg(Arg::many("More")).is_err());
    }

    #[test]
    fn consume_concatenates_across_args() {
        let mut opt = Opt::new("pair", "").unwrap();
        opt.add_arg(Arg::one("Key")).unwrap();
        opt.add_arg(Arg::many("Values")).unwrap();
        let mut input = Input::new(["k", "v1", "v2", "-x"]);
        let values = opt.consume(&mut input).unwrap();
        assert_eq!(
            values,
            vec!["k".to_string(), "v1".to_string(), "v2".to_string()]
        );
    }

    #[test]
    fn usage_lists_every_spelling_and_bracket() {
        let mut opt = Opt::new("all", "List everything").unwrap().alias("a");
        opt.add_arg(Arg::many("File")).unwrap();
        assert_eq!(opt.usage(), "--all, -a [File]...");
        assert_eq!(opt.summary(), "--all [File]...");
        assert!(opt.describe().contains("List everything"));
    }
}
