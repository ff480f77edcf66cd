use std::path::PathBuf;

use crate::error::RcfigError;
use crate::path;
use crate::registry::{OptionRegistry, SetError};
use crate::sync::{self, SyncReport};

/// Entry point for running a config sync.
pub struct Rcfig;

impl Rcfig {
    pub fn builder() -> RcfigBuilder {
        RcfigBuilder::new()
    }
}

/// Builder for a single sync pass.
///
/// A sync reads the application's rc file into the registry, rewrites the
/// file to match the registered option set, and finally applies
/// command-line values on top. The resulting precedence is command line >
/// file > compiled default, while the persisted file only ever reflects
/// file and default values.
///
/// The pass is one-shot per registry: a second [`sync()`](Self::sync)
/// against the same registry fails with
/// [`ArgsAlreadyApplied`](RcfigError::ArgsAlreadyApplied).
pub struct RcfigBuilder {
    app_name: Option<String>,
    config_path: Option<PathBuf>,
    overrides: Vec<(String, String)>,
    #[cfg(feature = "clap")]
    argv: Option<Vec<String>>,
}

impl RcfigBuilder {
    fn new() -> Self {
        Self {
            app_name: None,
            config_path: None,
            overrides: Vec::new(),
            #[cfg(feature = "clap")]
            argv: None,
        }
    }

    /// Set the application name. This derives the config file location
    /// (`~/.{name}rc`, overridable via the `{NAME}RC` environment variable)
    /// and appears in the file's header and warnings.
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Use an explicit config file path, bypassing env-var and home-directory
    /// resolution. Intended for tests and embedders with their own location
    /// logic.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Add a command-line override as a bare `(name, value)` pair.
    ///
    /// Overrides apply after the file values, so they always win. Use this
    /// when argument parsing happens outside rcfig; with the `clap` feature,
    /// [`args()`](Self::args) parses raw argv instead. Both compose; later
    /// entries take precedence.
    pub fn override_arg(mut self, name: &str, value: &str) -> Self {
        self.overrides.push((name.to_string(), value.to_string()));
        self
    }

    /// Supply raw process arguments (including the program name) to be
    /// parsed against the registered options, e.g. `std::env::args()`.
    #[cfg(feature = "clap")]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv = Some(args.into_iter().map(Into::into).collect());
        self
    }

    fn effective_app_name(&self) -> Result<&str, RcfigError> {
        self.app_name.as_deref().ok_or(RcfigError::AppNameRequired)
    }

    fn effective_config_path(&self, app_name: &str) -> Result<PathBuf, RcfigError> {
        if let Some(path) = &self.config_path {
            return Ok(path.clone());
        }
        path::resolve_config_path(app_name)
    }

    /// Run the sync: file reconciliation, then one-shot command-line
    /// application.
    pub fn sync(self, registry: &mut OptionRegistry) -> Result<SyncReport, RcfigError> {
        if registry.args_applied() {
            return Err(RcfigError::ArgsAlreadyApplied);
        }

        let app_name = self.effective_app_name()?.to_string();
        let config_path = self.effective_config_path(&app_name)?;

        let report = sync::sync_file(registry, &config_path, &app_name)?;

        #[cfg(feature = "clap")]
        if let Some(argv) = &self.argv {
            for (name, value) in crate::cli::overrides_from_argv(registry, &app_name, argv)? {
                apply_override(registry, &name, &value)?;
            }
        }

        for (name, value) in &self.overrides {
            apply_override(registry, name, value)?;
        }

        registry.mark_args_applied();
        Ok(report)
    }
}

fn apply_override(
    registry: &mut OptionRegistry,
    name: &str,
    value: &str,
) -> Result<(), RcfigError> {
    registry.set(name, value).map_err(|e| match e {
        SetError::UnknownOption(name) => RcfigError::UnknownOption { name },
        SetError::Invalid(err) => RcfigError::InvalidValue {
            name: name.to_string(),
            reason: err.to_string(),
        },
    })
}
