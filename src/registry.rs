//! The option registry: the live set of typed options a sync reconciles.
//!
//! Options are registered Go-flag style — a name, a compiled-in default, and
//! a usage string — and keep their registration order, which is also the
//! order they appear in the rendered config file. An [`alias`] binds an
//! additional name (typically a shorthand) to the same underlying value;
//! aliases are accepted everywhere a name is, but only the canonical
//! representative (the longest name) is ever written back to the file.
//!
//! The registry also owns the one-shot "command-line arguments applied"
//! flag, so a second sync against the same registry can be rejected.
//!
//! Registering a duplicate name or aliasing an unknown option is a
//! programmer error and panics.
//!
//! [`alias`]: OptionRegistry::alias

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::value::{Kind, Value, ValueError};

/// A set-by-name failure. File parsing treats both variants as "route the
/// pair to the obsolete section"; command-line application escalates them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("no such option: {0}")]
    UnknownOption(String),

    #[error(transparent)]
    Invalid(#[from] ValueError),
}

#[derive(Debug)]
struct Slot {
    /// All names bound to this value, in registration order (primary first).
    names: Vec<String>,
    usage: String,
    default: Value,
    current: Value,
}

/// Registry of typed options with stable registration order.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
    args_applied: bool,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a boolean option.
    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> &mut Self {
        self.register(name, Value::Bool(default), usage)
    }

    /// Register an integer option.
    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> &mut Self {
        self.register(name, Value::Int(default), usage)
    }

    /// Register a float option.
    pub fn float(&mut self, name: &str, default: f64, usage: &str) -> &mut Self {
        self.register(name, Value::Float(default), usage)
    }

    /// Register a string option.
    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> &mut Self {
        self.register(name, Value::Str(default.to_string()), usage)
    }

    /// Register a duration option.
    pub fn duration(&mut self, name: &str, default: Duration, usage: &str) -> &mut Self {
        self.register(name, Value::Duration(default), usage)
    }

    /// Register a comma-separated string-list option.
    pub fn list(&mut self, name: &str, default: &[&str], usage: &str) -> &mut Self {
        let items = default.iter().map(|s| s.to_string()).collect();
        self.register(name, Value::List(items), usage)
    }

    /// Bind `alias` to the option already registered as `existing`.
    ///
    /// Both names resolve to the same underlying value; setting through
    /// either updates both. The rendered file uses whichever bound name is
    /// longest (earliest registered wins ties).
    pub fn alias(&mut self, existing: &str, alias: &str) -> &mut Self {
        let slot = *self
            .index
            .get(existing)
            .unwrap_or_else(|| panic!("rcfig: cannot alias unknown option '{existing}'"));
        if self.index.contains_key(alias) {
            panic!("rcfig: option name '{alias}' registered twice");
        }
        self.slots[slot].names.push(alias.to_string());
        self.index.insert(alias.to_string(), slot);
        self
    }

    fn register(&mut self, name: &str, default: Value, usage: &str) -> &mut Self {
        assert!(!name.is_empty(), "rcfig: option name must not be empty");
        if self.index.contains_key(name) {
            panic!("rcfig: option name '{name}' registered twice");
        }
        self.index.insert(name.to_string(), self.slots.len());
        self.slots.push(Slot {
            names: vec![name.to_string()],
            usage: usage.to_string(),
            current: default.clone(),
            default,
        });
        self
    }

    /// Set an option's current value from text, coercing to its kind.
    ///
    /// On failure the current value is left untouched.
    pub fn set(&mut self, name: &str, text: &str) -> Result<(), SetError> {
        let slot = *self
            .index
            .get(name)
            .ok_or_else(|| SetError::UnknownOption(name.to_string()))?;
        let slot = &mut self.slots[slot];
        slot.current = Value::parse(slot.current.kind(), text)?;
        Ok(())
    }

    /// Current value by any bound name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let slot = *self.index.get(name)?;
        Some(&self.slots[slot].current)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn get_duration(&self, name: &str) -> Option<Duration> {
        match self.get(name)? {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        match self.get(name)? {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Iterate options in registration order.
    pub fn iter(&self) -> impl Iterator<Item = OptionView<'_>> {
        self.slots.iter().map(|slot| OptionView { slot })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether command-line arguments have already been consumed by a sync.
    pub fn args_applied(&self) -> bool {
        self.args_applied
    }

    pub(crate) fn mark_args_applied(&mut self) {
        self.args_applied = true;
    }
}

/// Read-only view of one registered option.
pub struct OptionView<'a> {
    slot: &'a Slot,
}

impl<'a> OptionView<'a> {
    /// All bound names, primary first, in registration order.
    pub fn names(&self) -> &[String] {
        &self.slot.names
    }

    /// The name written to the config file: the one with the most
    /// characters, earliest registered on a tie.
    pub fn canonical_name(&self) -> &'a str {
        let mut best = &self.slot.names[0];
        for name in &self.slot.names[1..] {
            if name.chars().count() > best.chars().count() {
                best = name;
            }
        }
        best
    }

    pub fn usage(&self) -> &str {
        &self.slot.usage
    }

    pub fn default_value(&self) -> &Value {
        &self.slot.default
    }

    pub fn current_value(&self) -> &Value {
        &self.slot.current
    }

    pub fn kind(&self) -> Kind {
        self.slot.current.kind()
    }
}
