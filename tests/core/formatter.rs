//! Integration tests for the formatter
//!
//! Tests both lookup tables, including the collision rule for the inverse.

use smart_enums_core::{EnumFormatter, EnumKind, registry};

struct Level;

impl EnumKind for Level {
    const NAME: &'static str = "formatter::Level";
    const VALUES: &'static [(&'static str, &'static str)] =
        &[("debug", "Debug"), ("info", "Info"), ("warn", "Warning")];
}

struct Overlap;

impl EnumKind for Overlap {
    const NAME: &'static str = "formatter::Overlap";
    const VALUES: &'static [(&'static str, &'static str)] =
        &[("a", "Same"), ("b", "Other"), ("c", "Same")];
}

fn pairs(
    map: &indexmap::IndexMap<&'static str, &'static str>,
) -> Vec<(&'static str, &'static str)> {
    map.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn key_value_list_in_declaration_order() {
    let formatter = EnumFormatter::of::<Level>().unwrap();
    assert_eq!(
        pairs(&formatter.to_key_value_list()),
        vec![("debug", "Debug"), ("info", "Info"), ("warn", "Warning")]
    );
}

#[test]
fn value_key_list_inverts() {
    registry::register::<Level>().unwrap();
    let formatter = EnumFormatter::for_kind(Level::NAME).unwrap();
    assert_eq!(
        pairs(&formatter.to_value_key_list()),
        vec![("Debug", "debug"), ("Info", "info"), ("Warning", "warn")]
    );
}

#[test]
fn value_key_list_collisions_keep_last_value() {
    let inverse = EnumFormatter::of::<Overlap>().unwrap().to_value_key_list();
    assert_eq!(pairs(&inverse), vec![("Same", "c"), ("Other", "b")]);
    assert_eq!(inverse.len(), 2);
}
