//! Flag-style options persisted in a user-editable rc file. Register your
//! options, call sync, and go.
//!
//! Rcfig keeps a registry of typed options in lockstep with a flat
//! `key=value` config file, reconciling three value sources into one active
//! set — then rewrites the file so it always documents the full option set:
//!
//! ```ignore
//! let mut options = OptionRegistry::new();
//! options.string("city", "Berlin", "city to query");
//! options.int("days", 3, "number of forecast days");
//! options.alias("days", "d");
//!
//! let report = Rcfig::builder()
//!     .app_name("wego")
//!     .args(std::env::args())
//!     .sync(&mut options)?;
//! ```
//!
//! That single call loads `~/.wegorc` (creating it when missing), applies
//! its values, rewrites it to match the registered options, and applies
//! command-line flags on top.
//!
//! # Layer precedence
//!
//! ```text
//! Compiled defaults     the value passed at registration
//!        ↑ overridden by
//! Config file           ~/.{app}rc, or ${APP}RC if set
//!        ↑ overridden by
//! Command line          --name value / override_arg()
//! ```
//!
//! Every layer is sparse: the file only needs the keys the user changed,
//! and the command line only overrides what was explicitly passed. Command
//! line values are deliberately **not** persisted — the rewritten file
//! reflects file-plus-default state, so a one-off `--days 7` doesn't become
//! permanent.
//!
//! # The file is a living document
//!
//! After every sync the file contains one commented block per registered
//! option — usage text, compiled-in default, current value — in
//! registration order. Add an option to your program and the next sync adds
//! it to the file; the user never edits a stale template. The rewrite only
//! touches the disk when the content actually changed, so an unchanged
//! setup is a read-only no-op.
//!
//! Parsing is deliberately lenient: blank lines and `#` comments are
//! skipped, `key=value` and `key: value` both work, values are taken
//! literally (no quoting), and a malformed line never blocks startup.
//!
//! # Obsolete entries
//!
//! Keys in the file that match no registered option — a typo, or an option
//! removed from the program — are not lost. They are preserved verbatim in
//! a deprecated section at the end of the rewritten file, sorted by key,
//! and a warning is logged through the [`log`](https://docs.rs/log) facade
//! so the user knows to review them. A value that fails type coercion is
//! treated the same way.
//!
//! # Aliases
//!
//! [`alias`](OptionRegistry::alias) binds extra names (typically shorthands)
//! to an existing option. All names are accepted in the file and on the
//! command line, but only the canonical representative — the longest name —
//! is written back, so the file stays free of duplicates.
//!
//! # Typed values
//!
//! Options come in six kinds — bool, int, float, string, duration, and
//! comma-separated string list — modeled as a closed [`Value`] enum.
//! Everything an option accepts goes through the same text setter, whether
//! it came from the file or the command line.
//!
//! # One-shot semantics
//!
//! A sync consumes the command line exactly once per registry. The registry
//! records that ([`args_applied`](OptionRegistry::args_applied)), and a
//! second sync fails with [`RcfigError::ArgsAlreadyApplied`] rather than
//! silently re-applying flags.
//!
//! # Clap adapter
//!
//! The core has no dependency on any CLI framework; pass pre-parsed values
//! with [`override_arg`](RcfigBuilder::override_arg). For
//! [clap](https://docs.rs/clap) users, the `cli` module (behind the `clap`
//! Cargo feature, on by default) builds a `clap::Command` from the registry
//! at runtime and feeds the parsed flags back in — see
//! [`RcfigBuilder::args`]. To use rcfig without clap:
//!
//! ```toml
//! rcfig = { version = "...", default-features = false }
//! ```
//!
//! # Error handling
//!
//! All fallible operations return [`RcfigError`]. File-format problems are
//! never errors (see above); errors are reserved for real failures — the
//! config file can't be opened, read, or rewritten, no home directory could
//! be found (the message names the environment variable to set as a
//! workaround), or a command-line value names an unknown option or fails
//! coercion.

pub mod error;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod parse;
mod path;
mod registry;
mod render;
mod sync;
mod value;

#[cfg(test)]
mod fixtures;

pub use builder::{Rcfig, RcfigBuilder};
#[cfg(feature = "clap")]
pub use cli::command_for;
pub use error::RcfigError;
pub use registry::{OptionRegistry, OptionView, SetError};
pub use sync::SyncReport;
pub use value::{Kind, Value, ValueError};
