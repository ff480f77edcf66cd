//! Config file location.
//!
//! The file for an application named `wego` lives at `~/.wegorc` by default.
//! Setting the environment variable `WEGORC` overrides the location
//! entirely, which is also the escape hatch for environments without a
//! resolvable home directory.

use std::env;
use std::path::PathBuf;

use crate::error::RcfigError;

/// The override variable for an application: uppercased name with
/// non-alphanumeric characters dropped, plus an `RC` suffix (`my-app` →
/// `MYAPPRC`).
pub(crate) fn rc_env_var(app_name: &str) -> String {
    let mut var: String = app_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    var.make_ascii_uppercase();
    var.push_str("RC");
    var
}

/// Resolve the config file path for `app_name`.
pub(crate) fn resolve_config_path(app_name: &str) -> Result<PathBuf, RcfigError> {
    resolve_with(app_name, |var| env::var(var).ok(), home_dir())
}

/// Like [`resolve_config_path`] but with an injectable env lookup and home
/// directory, so tests can pass synthetic data.
fn resolve_with(
    app_name: &str,
    get_env: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> Result<PathBuf, RcfigError> {
    let env_var = rc_env_var(app_name);
    if let Some(path) = get_env(&env_var)
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let home = home.ok_or(RcfigError::HomeNotFound { env_var })?;
    Ok(home.join(format!(".{}rc", app_name.to_lowercase())))
}

fn home_dir() -> Option<PathBuf> {
    if let Some(user) = directories::UserDirs::new() {
        return Some(user.home_dir().to_path_buf());
    }
    // UserDirs can come up empty in stripped-down environments (containers
    // without passwd entries); the conventional variables still apply.
    for var in ["HOME", "USERPROFILE"] {
        if let Ok(home) = env::var(var)
            && !home.is_empty()
        {
            return Some(PathBuf::from(home));
        }
    }
    None
}
