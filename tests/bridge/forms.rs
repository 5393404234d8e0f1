//! Integration tests for the form adapters
//!
//! Tests choice fields built from registered kinds and the submission path
//! back to canonical instances.

use serde_json::{Value, json};
use smart_enums_bridge::{EnumChoiceField, EnumTransformer, FormError, FormModel};
use smart_enums_core::{EnumKind, registry, smart_enum};

smart_enum! {
    pub struct Size {
        small = "s" => "Small",
        medium = "m" => "Medium",
        large = "l" => "Large",
    }
}

fn field() -> EnumChoiceField {
    registry::register::<Size>().unwrap();
    EnumChoiceField::new(Size::NAME).unwrap()
}

#[test]
fn choices_map_labels_to_values() {
    let choices: Vec<_> = field().choices().iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(choices, vec![("Small", "s"), ("Medium", "m"), ("Large", "l")]);
}

#[test]
fn single_choice_round_trip() {
    let field = field();
    let model = field.submit(&json!("m")).unwrap();
    assert_eq!(model, Some(FormModel::Single(Size::medium().erase())));
    assert_eq!(field.view(model.as_ref()), Ok(json!("m")));
}

#[test]
fn multiple_choice_round_trip() {
    let field = field().multiple(true);
    assert!(field.is_multiple());

    let model = field.submit(&json!(["l", "s"])).unwrap();
    assert_eq!(
        model,
        Some(FormModel::List(vec![Size::large().erase(), Size::small().erase()]))
    );
    assert_eq!(field.view(model.as_ref()), Ok(json!(["l", "s"])));
}

#[test]
fn empty_submission_is_no_choice() {
    assert_eq!(field().submit(&Value::Null), Ok(None));
    assert_eq!(field().view(None), Ok(Value::Null));
}

#[test]
fn undeclared_submission_fails() {
    assert!(field().submit(&json!("xl")).is_err());
    assert!(field().multiple(true).submit(&json!(["s", "xl"])).is_err());
}

#[test]
fn unregistered_kind_is_an_invalid_option() {
    assert!(matches!(
        EnumChoiceField::new("forms::Unregistered"),
        Err(FormError::InvalidOption { option: "enum_kind", .. })
    ));
    assert!(
        EnumTransformer::new("forms::Unregistered")
            .reverse_transform(&json!("s"))
            .is_err()
    );
}
