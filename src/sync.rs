//! The sync pass: reconcile the registry with the on-disk config file.
//!
//! One pass opens (or creates) the file, applies its contents to the
//! registry, re-renders the document from the updated state, and rewrites
//! the file only when the rendered bytes differ from what was read. The
//! whole sequence runs on a single file handle; there is no cross-process
//! locking, so concurrent writers race and the last one wins.
//!
//! Values the file carries that no longer match a registered option are not
//! discarded: they ride along in the rewritten file's deprecated section and
//! a warning is logged so the user knows to clean up.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::RcfigError;
use crate::parse::apply_config;
use crate::registry::OptionRegistry;
use crate::render::render_config;

/// What a successful sync did. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The config file that was synchronized.
    pub path: PathBuf,
    /// Whether the file's content changed and was rewritten.
    pub rewritten: bool,
    /// File entries that matched no registered option, preserved in the
    /// rewritten file's deprecated section.
    pub obsolete: BTreeMap<String, String>,
}

/// Run the file half of a sync: open-or-create, read, parse, render, and
/// rewrite in place if the content changed.
///
/// Registry state is updated with the file's values as a side effect.
/// Command-line application is the caller's job and happens after this
/// returns, so the file never absorbs command-line values.
pub(crate) fn sync_file(
    registry: &mut OptionRegistry,
    path: &Path,
    app_name: &str,
) -> Result<SyncReport, RcfigError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)
        .map_err(|e| RcfigError::OpenFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut old = String::new();
    file.read_to_string(&mut old)
        .map_err(|e| RcfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    let obsolete = apply_config(registry, &old);
    if !obsolete.is_empty() {
        warn!(
            "{app_name} was probably updated; check {} and remove the deprecated paragraph at the end once the listed options are resolved",
            path.display()
        );
    }

    let new = render_config(registry, &obsolete, app_name);

    let rewritten = new != old;
    if rewritten {
        file.seek(SeekFrom::Start(0))
            .map_err(|e| RcfigError::SeekFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        file.set_len(0).map_err(|e| RcfigError::TruncateFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        file.write_all(new.as_bytes())
            .map_err(|e| RcfigError::WriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    Ok(SyncReport {
        path: path.to_path_buf(),
        rewritten,
        obsolete,
    })
}
