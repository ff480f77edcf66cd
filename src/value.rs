//! Typed option values and their text forms.
//!
//! Every option holds a [`Value`] of one of six kinds. Coercion from file or
//! command-line text goes through [`Value::parse`]; rendering back to file
//! text goes through `Display`. The two are inverse enough for the sync cycle:
//! parsing rendered text always yields the same value, so a rewritten file
//! parses back to an identical registry state.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// The type of an option, fixed at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    Float,
    Str,
    Duration,
    List,
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Duration(Duration),
    List(Vec<String>),
}

/// A text-to-value coercion failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("expected true or false, got '{0}'")]
    ExpectedBool(String),

    #[error("expected an integer, got '{0}'")]
    ExpectedInt(String),

    #[error("expected a number, got '{0}'")]
    ExpectedFloat(String),

    #[error("expected a duration like '1h30m' or '250ms', got '{0}'")]
    ExpectedDuration(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Duration(_) => Kind::Duration,
            Value::List(_) => Kind::List,
        }
    }

    /// Coerce `text` into a value of the given kind.
    ///
    /// Booleans accept `true`/`false`/`1`/`0` case-insensitively. Durations
    /// accept compound unit suffixes (`ms`, `s`, `m`, `h`), e.g. `1h30m` or
    /// `250ms`. Lists split on commas; elements are trimmed and an empty
    /// string is the empty list. Strings never fail.
    pub fn parse(kind: Kind, text: &str) -> Result<Value, ValueError> {
        match kind {
            Kind::Bool => parse_bool(text).map(Value::Bool),
            Kind::Int => text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ValueError::ExpectedInt(text.to_string())),
            Kind::Float => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ValueError::ExpectedFloat(text.to_string())),
            Kind::Str => Ok(Value::Str(text.to_string())),
            Kind::Duration => parse_duration(text).map(Value::Duration),
            Kind::List => Ok(Value::List(parse_list(text))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Duration(d) => write!(f, "{}", render_duration(*d)),
            Value::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

fn parse_bool(text: &str) -> Result<bool, ValueError> {
    if text.eq_ignore_ascii_case("true") || text == "1" {
        return Ok(true);
    }
    if text.eq_ignore_ascii_case("false") || text == "0" {
        return Ok(false);
    }
    Err(ValueError::ExpectedBool(text.to_string()))
}

fn parse_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse a compound duration such as `1h30m` or `250ms`.
///
/// Each segment is an unsigned integer followed by a unit (`ms`, `s`, `m`,
/// `h`); segments add up. `0` alone is accepted as the zero duration.
fn parse_duration(text: &str) -> Result<Duration, ValueError> {
    let err = || ValueError::ExpectedDuration(text.to_string());

    if text == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    let mut rest = text;
    if rest.is_empty() {
        return Err(err());
    }

    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(err)?;
        if digits_end == 0 {
            return Err(err());
        }
        let n: u64 = rest[..digits_end].parse().map_err(|_| err())?;
        let unit = &rest[digits_end..];

        // "ms" must be matched before "m".
        let (segment, used) = if let Some(after) = unit.strip_prefix("ms") {
            (Duration::from_millis(n), after)
        } else if let Some(after) = unit.strip_prefix('s') {
            (Duration::from_secs(n), after)
        } else if let Some(after) = unit.strip_prefix('m') {
            (Duration::from_secs(n * 60), after)
        } else if let Some(after) = unit.strip_prefix('h') {
            (Duration::from_secs(n * 3600), after)
        } else {
            return Err(err());
        };

        total += segment;
        rest = used;
    }

    Ok(total)
}

/// Render a duration in canonical largest-unit-first form, e.g. `1m30s`.
///
/// The canonical form is stable under re-parsing, which keeps rewritten
/// config files byte-identical across syncs.
fn render_duration(d: Duration) -> String {
    if d.is_zero() {
        return "0s".to_string();
    }

    let mut secs = d.as_secs();
    let ms = d.subsec_millis();
    let hours = secs / 3600;
    secs %= 3600;
    let mins = secs / 60;
    secs %= 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if mins > 0 {
        out.push_str(&format!("{mins}m"));
    }
    if secs > 0 {
        out.push_str(&format!("{secs}s"));
    }
    if ms > 0 {
        out.push_str(&format!("{ms}ms"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_truthy_forms() {
        for text in ["true", "TRUE", "True", "1"] {
            assert_eq!(Value::parse(Kind::Bool, text), Ok(Value::Bool(true)));
        }
        for text in ["false", "FALSE", "0"] {
            assert_eq!(Value::parse(Kind::Bool, text), Ok(Value::Bool(false)));
        }
    }

    #[test]
    fn parse_bool_rejects_garbage() {
        assert!(matches!(
            Value::parse(Kind::Bool, "yep"),
            Err(ValueError::ExpectedBool(_))
        ));
    }

    #[test]
    fn parse_int() {
        assert_eq!(Value::parse(Kind::Int, "-42"), Ok(Value::Int(-42)));
        assert!(Value::parse(Kind::Int, "4.5").is_err());
    }

    #[test]
    fn parse_float() {
        assert_eq!(Value::parse(Kind::Float, "1.5"), Ok(Value::Float(1.5)));
        assert_eq!(Value::parse(Kind::Float, "3"), Ok(Value::Float(3.0)));
        assert!(Value::parse(Kind::Float, "one").is_err());
    }

    #[test]
    fn parse_string_never_fails() {
        assert_eq!(
            Value::parse(Kind::Str, "\"quoted\""),
            Ok(Value::Str("\"quoted\"".into()))
        );
    }

    #[test]
    fn parse_duration_compound() {
        assert_eq!(
            Value::parse(Kind::Duration, "1h30m"),
            Ok(Value::Duration(Duration::from_secs(5400)))
        );
        assert_eq!(
            Value::parse(Kind::Duration, "250ms"),
            Ok(Value::Duration(Duration::from_millis(250)))
        );
        assert_eq!(
            Value::parse(Kind::Duration, "0"),
            Ok(Value::Duration(Duration::ZERO))
        );
    }

    #[test]
    fn parse_duration_rejects_bare_number_and_bad_unit() {
        assert!(Value::parse(Kind::Duration, "90").is_err());
        assert!(Value::parse(Kind::Duration, "5d").is_err());
        assert!(Value::parse(Kind::Duration, "s5").is_err());
        assert!(Value::parse(Kind::Duration, "").is_err());
    }

    #[test]
    fn duration_renders_canonical() {
        let v = Value::Duration(Duration::from_secs(90));
        assert_eq!(v.to_string(), "1m30s");
        let v = Value::Duration(Duration::from_millis(3750));
        assert_eq!(v.to_string(), "3s750ms");
        assert_eq!(Value::Duration(Duration::ZERO).to_string(), "0s");
    }

    #[test]
    fn duration_render_parse_round_trip() {
        for text in ["1h30m", "90s", "2h", "1500ms", "0s"] {
            let v = Value::parse(Kind::Duration, text).unwrap();
            let rendered = v.to_string();
            assert_eq!(Value::parse(Kind::Duration, &rendered), Ok(v.clone()));
            // Rendering is a fixed point after one pass.
            assert_eq!(
                Value::parse(Kind::Duration, &rendered).unwrap().to_string(),
                rendered
            );
        }
    }

    #[test]
    fn list_splits_and_trims() {
        assert_eq!(
            Value::parse(Kind::List, "a, b ,c"),
            Ok(Value::List(vec!["a".into(), "b".into(), "c".into()]))
        );
    }

    #[test]
    fn empty_list_round_trips() {
        let v = Value::parse(Kind::List, "").unwrap();
        assert_eq!(v, Value::List(vec![]));
        assert_eq!(v.to_string(), "");
    }

    #[test]
    fn list_renders_comma_joined() {
        let v = Value::List(vec!["de".into(), "en".into()]);
        assert_eq!(v.to_string(), "de,en");
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::Bool(true).kind(), Kind::Bool);
        assert_eq!(Value::List(vec![]).kind(), Kind::List);
    }
}
