use std::fmt;

use crate::error::{Error, Result};
use crate::filter::{AcceptAll, Filter, Identity, Validate};
use crate::input::Input;

/// A positional value consumer owned by an option or a form.
///
/// Two arities exist: [`Arg::one`] takes exactly one argument token (zero is
/// a caller-visible "no value"), [`Arg::many`] greedily takes every argument
/// token up to the next option. Each consumed value is passed through the
/// configured filter, then the validator. An `Arg` holds no state between
/// [`Arg::consume`] calls.
pub struct Arg {
    name: String,
    greedy: bool,
    filter: Box<dyn Filter>,
    validator: Box<dyn Validate>,
}

impl Arg {
    /// An argument that consumes exactly one value.
    pub fn one(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            greedy: false,
            filter: Box::new(Identity),
            validator: Box::new(AcceptAll),
        }
    }

    /// A greedy argument: consumes every value up to the next option.
    /// Zero values is valid.
    pub fn many(name: impl Into<String>) -> Self {
        Self {
            greedy: true,
            ..Self::one(name)
        }
    }

    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn validate(mut self, validator: impl Validate + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_greedy(&self) -> bool {
        self.greedy
    }

    /// Usage-line form: `[Name]`, or `[Name]...` when greedy.
    pub fn bracket(&self) -> String {
        if self.greedy {
            format!("[{}]...", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }

    /// Pull values from the input according to this argument's arity.
    ///
    /// Never fails on missing values; the returned list is simply shorter.
    /// A validator rejection fails with the argument's name and the
    /// offending value.
    pub fn consume(&self, input: &mut Input) -> Result<Vec<String>> {
        let mut values = Vec::new();
        if self.greedy {
            while let Some(value) = input.pop_argument() {
                values.push(self.accept(&value)?);
            }
        } else if let Some(value) = input.pop_argument() {
            values.push(self.accept(&value)?);
        }
        Ok(values)
    }

    fn accept(&self, raw: &str) -> Result<String> {
        let value = self.filter.apply(raw);
        if let Err(message) = self.validator.check(&value) {
            return Err(Error::Validation {
                arg: self.name.clone(),
                value,
                message,
            });
        }
        Ok(value)
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arg")
            .field("name", &self.name)
            .field("greedy", &self.greedy)
            .finish_non_exhaustive()
    }
}
