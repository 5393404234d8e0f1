//! Integration tests for the error taxonomy
//!
//! Tests that each failure is reported as either an invalid value or an
//! invalid enum kind, with the offending inputs attached.

use smart_enums_core::{
    EnumFactory, EnumFormatter, EnumKind, Error, ErrorKind, KindDefect, registry,
};

struct Priority;

impl EnumKind for Priority {
    const NAME: &'static str = "errors::Priority";
    const VALUES: &'static [(&'static str, &'static str)] = &[("low", "Low"), ("high", "High")];
}

struct Repeated;

impl EnumKind for Repeated {
    const NAME: &'static str = "errors::Repeated";
    const VALUES: &'static [(&'static str, &'static str)] =
        &[("x", "X"), ("y", "Y"), ("x", "X again")];
}

struct Nameless;

impl EnumKind for Nameless {
    const NAME: &'static str = "";
    const VALUES: &'static [(&'static str, &'static str)] = &[("x", "X")];
}

struct Impostor;

impl EnumKind for Impostor {
    const NAME: &'static str = "errors::Priority";
    const VALUES: &'static [(&'static str, &'static str)] = &[("low", "Low")];
}

#[test]
fn invalid_value_carries_value_and_kind() {
    let err = EnumFactory::of::<Priority>().unwrap().from_value("urgent").unwrap_err();

    assert!(err.is_invalid_value());
    assert!(!err.is_invalid_enum_kind());
    assert_eq!(
        err.kind,
        ErrorKind::InvalidValue {
            value: "urgent".to_string(),
            kind: "errors::Priority".to_string(),
        }
    );
    assert!(err.to_string().contains("urgent"));
    assert!(err.to_string().contains("errors::Priority"));
}

#[test]
fn empty_string_is_an_invalid_value() {
    let err = EnumFactory::of::<Priority>().unwrap().from_value("").unwrap_err();
    assert_eq!(err, Error::invalid_value("", "errors::Priority"));
}

#[test]
fn unknown_name_is_an_invalid_kind() {
    let err = EnumFactory::for_kind("errors::Nowhere").unwrap_err();
    assert!(err.is_invalid_enum_kind());
    assert_eq!(
        err,
        Error::invalid_enum_kind("errors::Nowhere", KindDefect::Unregistered)
    );

    assert!(EnumFormatter::for_kind("errors::Nowhere").unwrap_err().is_invalid_enum_kind());
}

#[test]
fn nonconforming_kinds_are_rejected() {
    assert_eq!(
        EnumFactory::of::<Repeated>().unwrap_err(),
        Error::invalid_enum_kind("errors::Repeated", KindDefect::DuplicateValue("x".to_string()))
    );
    assert_eq!(
        registry::register::<Nameless>().unwrap_err(),
        Error::invalid_enum_kind("", KindDefect::EmptyName)
    );
    assert!(!registry::is_registered("errors::Repeated"));
}

#[test]
fn name_conflicts_are_rejected() {
    registry::register::<Priority>().unwrap();
    assert_eq!(
        registry::register::<Impostor>().unwrap_err(),
        Error::invalid_enum_kind("errors::Priority", KindDefect::NameConflict)
    );

    let bound = EnumFactory::for_kind("errors::Priority").unwrap();
    assert_eq!(bound, EnumFactory::of::<Priority>().unwrap());
}
