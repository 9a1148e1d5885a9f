use indexmap::IndexMap;

use crate::arg::Arg;
use crate::error::{Error, Result};
use crate::help::{WRAP_WIDTH, wrap};
use crate::input::Input;
use crate::matches::Matches;
use crate::opt::{Opt, normalize_flag};

/// One complete, independently matchable grammar for a command: an
/// insertion-ordered set of options plus top-level positional arguments.
#[derive(Debug, Default)]
pub struct Form {
    opts: IndexMap<String, Opt>,
    args: Vec<Arg>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option, keyed by its normalized primary name.
    /// Re-registering the same name replaces the earlier definition.
    pub fn add_opt(&mut self, opt: Opt) {
        self.opts.insert(opt.name().to_string(), opt);
    }

    /// Append a top-level argument consumer. Same greedy-must-be-last rule
    /// as on an option.
    pub fn add_arg(&mut self, arg: Arg) -> Result<()> {
        if self.args.last().is_some_and(Arg::is_greedy) {
            return Err(Error::GreedyConflict {
                owner: "form".to_string(),
            });
        }
        self.args.push(arg);
        Ok(())
    }

    pub fn opts(&self) -> impl Iterator<Item = &Opt> {
        self.opts.values()
    }

    fn lookup(&self, flag: &str) -> Option<&Opt> {
        let key = normalize_flag(flag);
        self.opts
            .get(&key)
            .or_else(|| self.opts.values().find(|opt| opt.has_flag(flag)))
    }

    /// Match the input against this form end to end.
    ///
    /// Drains every option token (unknown flag, repeat of a non-repeatable
    /// flag, and empty option text are fatal here), then consumes top-level
    /// arguments in declaration order, then requires the input to be fully
    /// consumed. Failure never yields a partial [`Matches`].
    pub fn process(&self, input: &mut Input) -> Result<Matches> {
        let mut matches = Matches::new();
        while input.has_next_option() {
            let flag = input.pop_option()?;
            let opt = self.lookup(&flag).ok_or_else(|| Error::UnrecognizedFlag {
                flag: flag.clone(),
            })?;
            if !opt.is_repeatable() && matches.flag_exists(opt.name()) {
                return Err(Error::DuplicateFlag {
                    flag: opt.name().to_string(),
                });
            }
            tracing::trace!(flag = opt.name(), "matched flag");
            let values = opt.consume(input)?;
            matches.add_option(opt.flag_names(), values);
        }
        for arg in &self.args {
            let values = arg.consume(input)?;
            matches.push_positional(values);
        }
        if let Some(token) = input.next_unconsumed() {
            return Err(Error::UnrecognizedArgument {
                value: token.text().to_string(),
            });
        }
        Ok(matches)
    }

    /// Usage line plus an aligned two-column option block.
    pub fn describe(&self) -> String {
        let mut out = String::from("Usage:");
        for opt in self.opts.values() {
            out.push_str(&format!(" [{}]", opt.summary()));
        }
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.bracket());
        }
        out.push('\n');

        if !self.opts.is_empty() {
            out.push_str("\nOptions:\n");
            let rows: Vec<(String, String)> = self
                .opts
                .values()
                .map(|opt| (opt.usage(), opt.description().to_string()))
                .collect();
            let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
            for (left, description) in rows {
                let lines = wrap(&description, WRAP_WIDTH.saturating_sub(width + 4));
                if lines.is_empty() {
                    out.push_str(&format!("  {left}\n"));
                    continue;
                }
                for (i, line) in lines.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&format!("  {left:width$}  {line}\n"));
                    } else {
                        out.push_str(&format!("  {:width$}  {line}\n", ""));
                    }
                }
            }
        }

        out
    }
}
