//! Config file rendering: turn the registry state back into file text.
//!
//! Output is deterministic: the same registry snapshot and obsolete map
//! always produce byte-identical text. Options appear in registration order;
//! obsolete entries are sorted by key, and that ordering is part of the file
//! format contract. The sync step relies on this determinism to decide
//! whether the on-disk file needs rewriting at all.

use std::collections::BTreeMap;

use crate::registry::OptionRegistry;

const OBSOLETE_BANNER: &str =
    "# The following options are probably deprecated and not used currently!";

/// Render the full config document for `registry` plus any obsolete entries.
///
/// Layout: a fixed header naming the application and the syntax rules, then
/// one block per option — a blank line, the usage text as a `#` comment with
/// the compiled-in default appended, and the `name=value` assignment using
/// the option's current value. Only the canonical representative of an
/// aliased group is written; shorthand names are load-only.
///
/// A non-empty obsolete map appends a trailing section: two blank lines, a
/// banner comment, and one `key=value` line per entry in key order.
pub fn render_config(
    registry: &OptionRegistry,
    obsolete: &BTreeMap<String, String>,
    app_name: &str,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {app_name} configuration\n"));
    out.push_str("#\n");
    out.push_str("# Empty lines or lines starting with # will be ignored.\n");
    out.push_str("# All other lines must look like \"KEY=VALUE\" (without the quotes).\n");
    out.push_str("# The VALUE must not be enclosed in quotes as well!\n");

    for opt in registry.iter() {
        // Continuation lines of a multi-line usage keep the comment prefix.
        let usage = opt.usage().replace('\n', "\n# ");
        out.push_str(&format!(
            "\n# {usage} (default {})\n",
            opt.default_value()
        ));
        out.push_str(&format!(
            "{}={}\n",
            opt.canonical_name(),
            opt.current_value()
        ));
    }

    if !obsolete.is_empty() {
        out.push_str(&format!("\n\n{OBSOLETE_BANNER}\n"));
        for (key, value) in obsolete {
            out.push_str(&format!("{key}={value}\n"));
        }
    }

    out
}
