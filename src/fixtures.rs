use std::time::Duration;

use crate::registry::OptionRegistry;

/// Registry shared by the crate's test modules.
///
/// Mirrors the parser test corpus: three plain integers, an aliased
/// shorthand pair, and a string option for separator and quoting cases.
pub fn sample_registry() -> OptionRegistry {
    let mut reg = OptionRegistry::new();
    reg.int("asse", 3, "assignment character test for =");
    reg.int("assc", 3, "assignment character test for :");
    reg.int("dup", 3, "duplicate entries test");
    reg.int("shorthand", 3, "shorthand test");
    reg.alias("shorthand", "s");
    reg.string("city", "Berlin", "city to query");
    reg
}

/// Registry with one option of every kind, for render and adapter tests.
pub fn kinds_registry() -> OptionRegistry {
    let mut reg = OptionRegistry::new();
    reg.bool("imperial", false, "use imperial units");
    reg.int("days", 3, "number of forecast days");
    reg.float("threshold", 0.5, "alert threshold");
    reg.string("city", "Berlin", "city to query");
    reg.duration("cache-ttl", Duration::from_secs(600), "cached response lifetime");
    reg.list("langs", &["en"], "preferred result languages");
    reg
}

#[test]
fn sample_registry_defaults() {
    let reg = sample_registry();
    assert_eq!(reg.get_int("asse"), Some(3));
    assert_eq!(reg.get_int("s"), Some(3));
    assert_eq!(reg.get_str("city"), Some("Berlin"));
}

#[test]
fn kinds_registry_covers_every_kind() {
    use crate::value::Kind;
    let kinds: Vec<Kind> = kinds_registry().iter().map(|o| o.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            Kind::Bool,
            Kind::Int,
            Kind::Float,
            Kind::Str,
            Kind::Duration,
            Kind::List
        ]
    );
}
