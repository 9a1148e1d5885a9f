use crate::arg::Arg;
use crate::error::{Error, Result};
use crate::form::Form;
use crate::input::Input;
use crate::matches::Matches;
use crate::opt::Opt;

/// Supplies the raw process argument vector when the caller does not hand
/// an [`Input`] to [`Command::process_from`] explicitly.
pub trait ArgvSource {
    fn argv(&self) -> Vec<String>;
}

/// Reads the live process arguments, minus the program name.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsArgv;

impl ArgvSource for OsArgv {
    fn argv(&self) -> Vec<String> {
        std::env::args().skip(1).collect()
    }
}

/// A logical command: one or more candidate forms, each an alternative
/// acceptable syntax.
///
/// Matching tries the forms in declaration order against a rewound input
/// and returns the first success. When every form fails, the error from the
/// earliest-declared form is surfaced, on the assumption that it is the
/// syntax the user most likely intended.
#[derive(Debug)]
pub struct Command {
    forms: Vec<Form>,
}

impl Default for Command {
    fn default() -> Self {
        // Seeded with one empty form: the common case has exactly one
        // accepted syntax.
        Self {
            forms: vec![Form::new()],
        }
    }
}

impl Command {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alternative syntax, tried after the existing ones.
    pub fn add_form(&mut self, form: Form) {
        self.forms.push(form);
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// Register an option on the first form. Convenience for single-syntax
    /// commands.
    pub fn add_opt(&mut self, opt: Opt) {
        self.forms[0].add_opt(opt);
    }

    /// Append a top-level argument to the first form.
    pub fn add_arg(&mut self, arg: Arg) -> Result<()> {
        self.forms[0].add_arg(arg)
    }

    /// Match an explicitly constructed input.
    ///
    /// The input is rewound before every form attempt, so a caller may pass
    /// an already-read input and may re-process the same input later.
    pub fn process(&self, input: &mut Input) -> Result<Matches> {
        let mut first_err: Option<Error> = None;
        for (idx, form) in self.forms.iter().enumerate() {
            input.rewind();
            match form.process(input) {
                Ok(matches) => {
                    tracing::debug!(form = idx, "form matched");
                    return Ok(matches);
                }
                Err(err) => {
                    tracing::debug!(form = idx, %err, "form rejected");
                    first_err.get_or_insert(err);
                }
            }
        }
        // `forms` is seeded non-empty and only ever grows, so a failure
        // always carries an error.
        Err(first_err.unwrap_or(Error::EndOfInput))
    }

    /// Build an input from an argv source and match it.
    pub fn process_from(&self, source: &dyn ArgvSource) -> Result<Matches> {
        let mut input = Input::new(source.argv());
        self.process(&mut input)
    }

    /// Match the live process arguments.
    pub fn process_env(&self) -> Result<Matches> {
        self.process_from(&OsArgv)
    }

    /// Help blocks for every form, blank-line separated.
    pub fn describe(&self) -> String {
        let blocks: Vec<String> = self.forms.iter().map(Form::describe).collect();
        blocks.join("\n")
    }
}
