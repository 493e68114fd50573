mod common;

use common::{panics, FromInt};
use sovran_variant::{
    get, get_if, get_if_mut, get_mut, holds_alternative, Alternative, Variant, VariantError,
    VARIANT_NPOS,
};

type Shape = Variant![i32, String, FromInt];

fn valueless() -> Shape {
    let mut value: Shape = Variant::new(0i32);
    assert!(panics(|| {
        value.emplace::<String, _>(|| panic!("no value"));
    }));
    value
}

#[test]
fn test_get_by_type() {
    let mut value: Shape = Variant::new(String::from("text"));

    assert_eq!(value.get::<String, _>().map(String::as_str), Ok("text"));
    value.get_mut::<String, _>().unwrap().push('!');
    assert_eq!(get::<String, _, _>(&value).map(String::as_str), Ok("text!"));

    get_mut::<String, _, _>(&mut value).unwrap().clear();
    assert_eq!(value.get::<String, _>().map(String::is_empty), Ok(true));
}

#[test]
fn test_get_by_position() {
    let mut value: Shape = Variant::new(FromInt { value: 2 });

    assert_eq!(value.get_at::<2>(), Ok(&FromInt { value: 2 }));
    value.get_at_mut::<2>().unwrap().value = 3;
    assert_eq!(value.get_if_at::<2>(), Some(&FromInt { value: 3 }));
    assert!(value.get_if_at_mut::<0>().is_none());
}

#[test]
fn test_mismatch_error() {
    let mut value: Shape = Variant::new(7i32);

    let error = value.get::<FromInt, _>().unwrap_err();
    assert_eq!(
        error,
        VariantError::AlternativeMismatch {
            requested: 2,
            held: Some(0),
        }
    );
    assert_eq!(
        error.to_string(),
        "requested alternative 2 but variant holds alternative 0"
    );

    assert!(value.get_mut::<String, _>().is_err());
    assert!(value.get_at::<1>().is_err());
}

#[test]
fn test_valueless_access() {
    let mut value = valueless();
    assert_eq!(value.index(), VARIANT_NPOS);

    let error = value.get::<i32, _>().unwrap_err();
    assert_eq!(
        error,
        VariantError::AlternativeMismatch {
            requested: 0,
            held: None,
        }
    );
    assert_eq!(
        error.to_string(),
        "requested alternative 0 but variant holds no value"
    );

    assert!(value.get_if::<String, _>().is_none());
    assert!(value.get_if_mut::<FromInt, _>().is_none());
    assert!(!value.holds_alternative::<i32, _>());
    assert!(!value.holds_alternative::<String, _>());
    assert!(!value.holds_alternative::<FromInt, _>());
}

#[test]
fn test_get_if_free_functions() {
    let mut value: Shape = Variant::new(4i32);

    assert_eq!(get_if::<i32, _, _>(Some(&value)), Some(&4));
    assert_eq!(get_if::<String, _, _>(Some(&value)), None);
    assert_eq!(get_if::<i32, _, _>(None::<&Shape>), None);

    if let Some(number) = get_if_mut::<i32, _, _>(Some(&mut value)) {
        *number *= 10;
    }
    assert_eq!(value.get::<i32, _>(), Ok(&40));
    assert!(get_if_mut::<i32, _, _>(None::<&mut Shape>).is_none());
}

#[test]
fn test_holds_alternative_tracks_assignments() {
    let mut value: Shape = Variant::new(1i32);
    assert!(holds_alternative::<i32, _, _>(&value));

    value.assign_from("text");
    assert!(holds_alternative::<String, _, _>(&value));
    assert!(!holds_alternative::<i32, _, _>(&value));

    value.emplace_at::<2>(|| FromInt::from(5));
    assert!(value.holds_alternative::<FromInt, _>());
}

#[test]
fn test_into_inner() {
    let value: Shape = Variant::new(String::from("owned"));

    let value = value.into_inner::<i32, _>().unwrap_err();
    assert_eq!(value.index(), 1);
    assert_eq!(value.into_inner::<String, _>().unwrap(), "owned");

    let value = valueless();
    assert!(value.into_inner_at::<1>().is_err());
}

#[test]
fn test_repeated_type_by_position() {
    let mut value = <Variant![u8, u8]>::in_place_index::<0>(|| 1);

    assert_eq!(value.get_at::<0>(), Ok(&1));
    assert_eq!(
        value.get_at::<1>(),
        Err(VariantError::AlternativeMismatch {
            requested: 1,
            held: Some(0),
        })
    );

    value.emplace_at::<1>(|| 2);
    assert_eq!(value.index(), 1);
    assert_eq!(value.get_at::<1>(), Ok(&2));
}

#[test]
fn test_alternative_alias() {
    let value: Alternative<sovran_variant::Alts![i32, String, FromInt], 1> = String::from("a");
    assert_eq!(value, "a");
    assert_eq!(<Shape>::COUNT, 3);
}
