//! Multi-form command-line argument parsing.
//!
//! Raw process arguments are tokenized into option and argument tokens,
//! then matched against one or more alternative grammars ("forms") for the
//! same logical command. The first form that matches end to end wins; when
//! every form fails, the earliest form's error is surfaced.
//!
//! The moving parts, leaf first:
//! - [`Input`] tokenizes raw strings (`--long`, `--long=value`, bundled
//!   `-abc` shorts, a `--` terminator) and exposes a cursor-based read
//!   protocol with rewind;
//! - [`Arg`] consumes positional values, either exactly one or greedily,
//!   running an injected [`Filter`] and [`Validate`] over each value;
//! - [`Opt`] is a named flag with aliases, a repeatability rule, and the
//!   ordered `Arg`s that fire when it matches;
//! - [`Form`] matches an `Input` against its options and top-level args;
//! - [`Command`] holds the candidate forms and picks one;
//! - [`Matches`] is the queryable outcome, addressable by any flag alias.
//!
//! ```
//! use argot::{Arg, Command, Input, Opt};
//!
//! let mut cmd = Command::new();
//! let mut tag = Opt::new("tag", "Attach a tag").unwrap().alias("t").repeatable();
//! tag.add_arg(Arg::one("Name")).unwrap();
//! cmd.add_opt(tag);
//! cmd.add_arg(Arg::many("File")).unwrap();
//!
//! let mut input = Input::new(["-t", "urgent", "a.txt", "b.txt"]);
//! let matches = cmd.process(&mut input).unwrap();
//! assert_eq!(matches.first_args("tag").unwrap(), ["urgent"]);
//! assert_eq!(matches.positional(), ["a.txt", "b.txt"]);
//! ```

mod arg;
mod command;
mod error;
mod filter;
mod form;
mod help;
mod input;
mod matches;
mod opt;
mod token;

pub use arg::Arg;
pub use command::{ArgvSource, Command, OsArgv};
pub use error::{Error, Result};
pub use filter::{AcceptAll, Filter, Identity, Validate};
pub use form::Form;
pub use input::Input;
pub use matches::Matches;
pub use opt::{Opt, normalize_flag};
pub use token::{Token, TokenKind};
