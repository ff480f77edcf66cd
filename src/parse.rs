//! Config file parsing: apply `key=value` lines to the registry and collect
//! the leftovers.
//!
//! Parsing never fails. A line either assigns a known option, lands in the
//! obsolete map (unknown key, or a value the option rejects), or is ignored
//! (blank, `#` comment, no separator). A hand-edited file with typos must
//! not block application startup.

use std::collections::BTreeMap;

use crate::registry::OptionRegistry;

/// Apply raw config file text to `registry` and return the obsolete entries.
///
/// Lines are trimmed before classification; empty lines and lines starting
/// with `#` are skipped. The assignment separator is the first `=` or `:` on
/// the line; lines without one are skipped too. Key and value are trimmed
/// independently, and values are taken literally — quotes are content, not
/// delimiters.
///
/// When a key appears more than once, the last occurrence in file order wins.
/// That holds across the known/obsolete boundary as well: a later successful
/// assignment clears an earlier obsolete record for the same key.
pub fn apply_config(registry: &mut OptionRegistry, text: &str) -> BTreeMap<String, String> {
    let mut obsolete = BTreeMap::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(at) = line.find(['=', ':']) else {
            continue;
        };
        let key = line[..at].trim();
        let value = line[at + 1..].trim();

        match registry.set(key, value) {
            Ok(()) => {
                obsolete.remove(key);
            }
            Err(_) => {
                obsolete.insert(key.to_string(), value.to_string());
            }
        }
    }

    obsolete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_registry;

    #[test]
    fn assigns_known_options_with_both_separators() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "asse=4\nassc:4\n");
        assert!(obsolete.is_empty());
        assert_eq!(reg.get_int("asse"), Some(4));
        assert_eq!(reg.get_int("assc"), Some(4));
    }

    #[test]
    fn first_separator_wins() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "city=a:b=c\n");
        assert!(obsolete.is_empty());
        assert_eq!(reg.get_str("city"), Some("a:b=c"));
    }

    #[test]
    fn colon_before_equals() {
        let mut reg = sample_registry();
        apply_config(&mut reg, "city:x=y\n");
        assert_eq!(reg.get_str("city"), Some("x=y"));
    }

    #[test]
    fn comment_lines_do_not_assign() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "#comment=4\n  # indented=5\n");
        assert!(obsolete.is_empty());
        assert_eq!(reg.get_int("dup"), Some(3));
    }

    #[test]
    fn blank_and_separatorless_lines_are_ignored() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "\n   \nnot an assignment\n");
        assert!(obsolete.is_empty());
    }

    #[test]
    fn whitespace_is_trimmed_around_key_and_value() {
        let mut reg = sample_registry();
        apply_config(&mut reg, "  city =  Reykjavik  \n");
        assert_eq!(reg.get_str("city"), Some("Reykjavik"));
    }

    #[test]
    fn quotes_are_literal_value_content() {
        let mut reg = sample_registry();
        apply_config(&mut reg, "city=\"Berlin\"\n");
        assert_eq!(reg.get_str("city"), Some("\"Berlin\""));
    }

    #[test]
    fn duplicate_key_last_occurrence_wins() {
        let mut reg = sample_registry();
        apply_config(&mut reg, "dup=4\ndup=5\n");
        assert_eq!(reg.get_int("dup"), Some(5));
    }

    #[test]
    fn unknown_keys_collect_as_obsolete() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "obs=4\n");
        assert_eq!(obsolete.get("obs").map(String::as_str), Some("4"));
    }

    #[test]
    fn duplicate_obsolete_key_last_occurrence_wins() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "obsdup=4\nobsdup=5\n");
        assert_eq!(obsolete.get("obsdup").map(String::as_str), Some("5"));
    }

    #[test]
    fn coercion_failure_routes_to_obsolete() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "dup=not-a-number\n");
        assert_eq!(
            obsolete.get("dup").map(String::as_str),
            Some("not-a-number")
        );
        assert_eq!(reg.get_int("dup"), Some(3));
    }

    #[test]
    fn later_success_clears_earlier_obsolete_record() {
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, "dup=bad\ndup=5\n");
        assert!(obsolete.is_empty());
        assert_eq!(reg.get_int("dup"), Some(5));
    }

    #[test]
    fn shorthand_assignment_works() {
        let mut reg = sample_registry();
        apply_config(&mut reg, "s=4\n");
        assert_eq!(reg.get_int("shorthand"), Some(4));
    }

    #[test]
    fn full_corpus() {
        let text = "\n#comment=4\nasse=4\nassc:4\ndup=4\ndup=5\ns=4\nobs=4\nobsdup=4\nobsdup=5";
        let mut reg = sample_registry();
        let obsolete = apply_config(&mut reg, text);

        assert_eq!(reg.get_int("asse"), Some(4));
        assert_eq!(reg.get_int("assc"), Some(4));
        assert_eq!(reg.get_int("dup"), Some(5));
        assert_eq!(reg.get_int("shorthand"), Some(4));
        assert_eq!(obsolete.get("obs").map(String::as_str), Some("4"));
        assert_eq!(obsolete.get("obsdup").map(String::as_str), Some("5"));
        assert_eq!(obsolete.len(), 2);
    }
}
