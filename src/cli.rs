//! Clap adapter for rcfig.
//!
//! This module is the **optional integration layer** between rcfig's
//! framework-agnostic core and the [clap](https://docs.rs/clap) CLI parser.
//! It is compiled only when the `clap` Cargo feature is enabled (on by
//! default).
//!
//! Unlike a derive-based CLI, the command here is built at runtime from the
//! registry: every registered option becomes a `--name <VALUE>` flag with
//! its usage text as help, aliases become `--alias` forms (single-character
//! names become `-x` shorts), and boolean options may be passed bare
//! (`--imperial`) or with an explicit value (`--imperial=false`).
//!
//! The only bridge back to the core is [`overrides_from_argv`], which
//! returns plain `(name, value)` pairs for the options the user actually
//! passed. Value coercion stays in the registry, so the command line and the
//! config file go through the same setter. If you use a different argument
//! parser (or none), skip this module and feed
//! [`override_arg`](crate::RcfigBuilder::override_arg) pairs instead.
//!
//! The generated command has clap's automatic `--help` and `--version`
//! disabled; it exists to extract option values, not to be an application's
//! whole CLI.

use clap::{Arg, ArgAction, Command};

use crate::error::RcfigError;
use crate::registry::OptionRegistry;
use crate::value::Kind;

/// Build a `clap::Command` exposing every registered option as a long flag.
pub fn command_for(registry: &OptionRegistry, app_name: &str) -> Command {
    let mut cmd = Command::new(app_name.to_string())
        .disable_help_flag(true)
        .disable_version_flag(true);

    for opt in registry.iter() {
        let canonical = opt.canonical_name().to_string();
        let mut arg = Arg::new(canonical.clone())
            .long(canonical.clone())
            .value_name("VALUE")
            .help(opt.usage().to_string())
            .action(ArgAction::Set);

        for name in opt.names() {
            if name == &canonical {
                continue;
            }
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => arg = arg.short(c),
                _ => arg = arg.alias(name.to_string()),
            }
        }

        if opt.kind() == Kind::Bool {
            arg = arg
                .num_args(0..=1)
                .default_missing_value("true")
                .require_equals(true);
        }

        cmd = cmd.arg(arg);
    }

    cmd
}

/// Parse raw argv (program name first) against the registry's options.
///
/// Returns `(canonical_name, value)` pairs for exactly the options present
/// on the command line, in registration order. Values are raw text; the
/// caller applies them through the registry's setter so coercion errors
/// surface as [`RcfigError::InvalidValue`](crate::RcfigError::InvalidValue).
pub(crate) fn overrides_from_argv(
    registry: &OptionRegistry,
    app_name: &str,
    argv: &[String],
) -> Result<Vec<(String, String)>, RcfigError> {
    let matches = command_for(registry, app_name)
        .try_get_matches_from(argv)
        .map_err(|e| RcfigError::InvalidArgs {
            reason: e.to_string(),
        })?;

    let mut pairs = Vec::new();
    for opt in registry.iter() {
        let id = opt.canonical_name();
        if matches.value_source(id) == Some(clap::parser::ValueSource::CommandLine)
            && let Some(value) = matches.get_one::<String>(id)
        {
            pairs.push((id.to_string(), value.clone()));
        }
    }
    Ok(pairs)
}
