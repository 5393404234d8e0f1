//! Integration tests for canonical instances
//!
//! Tests identity, validation, description lookup, bulk construction, and
//! enumeration order.

use proptest::prelude::*;
use smart_enums_core::{Enum, EnumKind, EnumValue, Error, engine, smart_enum};
use std::collections::{HashMap, HashSet};

smart_enum! {
    /// The example kind used throughout the documentation.
    pub struct Status {
        open = "open" => "Open",
        closed = "closed" => "Closed",
    }
}

smart_enum! {
    pub struct Code {
        one = "1" => "One",
        zero_one = "01" => "Zero-one",
        forty_two = "42" => "Forty-two",
    }
}

smart_enum! {
    pub struct Untouched {
        alpha = "alpha" => "Alpha",
        beta = "beta" => "Beta",
        gamma = "gamma" => "Gamma",
    }
}

// =============================================================================
// Example Scenario
// =============================================================================

#[test]
fn status_scenario() {
    let open = Enum::<Status>::from_value("open").unwrap();
    assert_eq!(open.value(), "open");
    assert_eq!(open.description(), "Open");

    let err = Enum::<Status>::from_value("archived").unwrap_err();
    assert_eq!(err, Error::invalid_value("archived", "Status"));

    let all: Vec<_> = Enum::<Status>::all().iter().map(|s| s.value()).collect();
    assert_eq!(all, vec!["open", "closed"]);
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn identity_is_retained() {
    assert!(Enum::<Status>::from_value("open").unwrap().ptr_eq(Status::open()));
    assert!(Enum::<Status>::from_value("closed").unwrap().ptr_eq(Status::closed()));
    assert!(!Status::open().ptr_eq(Status::closed()));
}

#[test]
fn usable_as_map_key() {
    let mut counts: HashMap<Enum<Status>, u32> = HashMap::new();
    for raw in ["open", "closed", "open", "open"] {
        *counts.entry(Enum::from_value(raw).unwrap()).or_default() += 1;
    }

    assert_eq!(counts[&Status::open()], 3);
    assert_eq!(counts[&Status::closed()], 1);
}

#[test]
fn erased_and_typed_handles_agree() {
    let erased: EnumValue = Status::closed().into();
    let set: HashSet<EnumValue> = [erased, Status::closed().erase()].into_iter().collect();

    assert_eq!(set.len(), 1);
    assert_eq!(erased.downcast::<Status>(), Some(Status::closed()));
}

// =============================================================================
// Projection
// =============================================================================

#[test]
fn string_projection_is_the_raw_value() {
    assert_eq!(Status::open().to_string(), "open");
    assert_eq!(format!("{}", Status::closed().erase()), "closed");
    assert_eq!(Status::open().as_ref(), "open");
}

#[test]
fn descriptions_match_declaration() {
    for &(value, description) in Code::VALUES {
        assert_eq!(Enum::<Code>::from_value(value).unwrap().description(), description);
    }
}

// =============================================================================
// Numeric-looking Values
// =============================================================================

#[test]
fn numeric_looking_values_are_opaque_strings() {
    let one = Code::one();
    let zero_one = Code::zero_one();

    assert_ne!(one, zero_one);
    assert_eq!(Enum::<Code>::from_value("01").unwrap(), zero_one);
    assert!(Enum::<Code>::from_value("001").is_err());
    assert!(Enum::<Code>::from_value("1.0").is_err());
    assert!(Enum::<Code>::from_value("+1").is_err());
}

// =============================================================================
// Bulk Operations
// =============================================================================

#[test]
fn from_values_preserves_order_and_length() {
    let list = Enum::<Code>::from_values(["42", "1", "42"]).unwrap();
    assert_eq!(list, vec![Code::forty_two(), Code::one(), Code::forty_two()]);
}

#[test]
fn from_values_of_nothing_is_empty() {
    assert!(Enum::<Code>::from_values(Vec::<String>::new()).unwrap().is_empty());
}

#[test]
fn failed_batch_creates_no_instances() {
    let err = Enum::<Untouched>::from_values(["alpha", "delta", "beta"]).unwrap_err();
    assert_eq!(err, Error::invalid_value("delta", "Untouched"));

    let kind = smart_enums_core::KindHandle::of::<Untouched>();
    assert!(!engine::is_cached(kind, "alpha"));
    assert!(!engine::is_cached(kind, "beta"));
    assert!(!engine::is_cached(kind, "delta"));
}

#[test]
fn all_is_complete_and_ordered() {
    let all = Enum::<Code>::all();
    let values: Vec<_> = all.iter().map(|c| c.value()).collect();
    let declared: Vec<_> = Code::VALUES.iter().map(|&(v, _)| v).collect();

    assert_eq!(values, declared);
    for code in all {
        assert!(code.ptr_eq(Enum::<Code>::from_value(code.value()).unwrap()));
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn round_trip(index in 0usize..3) {
        let (value, description) = Code::VALUES[index];
        let code = Enum::<Code>::from_value(value).unwrap();
        prop_assert_eq!(code.value(), value);
        prop_assert_eq!(code.to_string(), value);
        prop_assert_eq!(code.description(), description);
    }

    #[test]
    fn undeclared_values_fail(raw in "[0-9]{0,4}") {
        let declared = Code::VALUES.iter().any(|&(v, _)| v == raw);
        let result = Enum::<Code>::from_value(&raw);
        prop_assert_eq!(result.is_ok(), declared);
        if let Err(err) = result {
            prop_assert_eq!(err, Error::invalid_value(raw.clone(), "Code"));
        }
    }

    #[test]
    fn bulk_matches_single(indices in proptest::collection::vec(0usize..3, 0..16)) {
        let raws: Vec<&str> = indices.iter().map(|&i| Code::VALUES[i].0).collect();
        let bulk = Enum::<Code>::from_values(&raws).unwrap();
        prop_assert_eq!(bulk.len(), raws.len());
        for (instance, raw) in bulk.iter().zip(&raws) {
            prop_assert!(instance.ptr_eq(Enum::<Code>::from_value(raw).unwrap()));
        }
    }
}
