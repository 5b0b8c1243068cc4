//! Integration tests for `Optional`: creation, reads, fallbacks and the
//! lookup chains used by the sample `Car`/`Motor` types.

use lazypipe::samples::{Car, Motor};
use lazypipe::{Error, Optional};
use pretty_assertions::assert_eq;
use std::cell::Cell;

const TEST_TEXT: &str = "test text";
const DEFAULT_TEXT: &str = "default text";

#[test]
fn test_creation() {
    let empty: Optional<Car> = Optional::empty();
    let nothing: Optional<Car> = Optional::of_nullable(None);
    let number = Optional::of(18).unwrap();
    let text = Optional::of(TEST_TEXT.to_string()).unwrap();

    assert!(!empty.is_present());
    assert!(nothing.is_empty());
    assert_eq!(number.to_string(), "Optional[18]");
    assert_eq!(text.to_string(), "Optional[test text]");
}

#[test]
fn test_of_absent_value_fails() {
    let err = Optional::<Car>::of(None).unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_empty_display() {
    let empty: Optional<String> = Optional::of_nullable(None);
    assert_eq!(empty.to_string(), "Optional.empty");
    assert_eq!(format!("{:?}", empty), "Optional.empty");
}

#[test]
fn test_get() {
    let number = Optional::of(18).unwrap();
    assert_eq!(*number.get().unwrap(), 18);

    let empty: Optional<Car> = Optional::empty();
    let err = empty.get().unwrap_err();
    assert_eq!(err.category(), "NoSuchElement");
}

#[test]
fn test_if_present() {
    let calls = Cell::new(0);
    Optional::of(18)
        .unwrap()
        .if_present(|v: i32| {
            assert_eq!(v, 18);
            calls.set(calls.get() + 1);
        })
        .unwrap();
    assert_eq!(calls.get(), 1);

    // The consumer is never needed for an empty optional
    Optional::<i32>::empty()
        .if_present::<fn(i32)>(None)
        .unwrap();

    let err = Optional::of(1)
        .unwrap()
        .if_present::<fn(i32)>(None)
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_if_present_or_else() {
    let branch = Cell::new("");
    Optional::<i32>::empty()
        .if_present_or_else(|_: i32| branch.set("present"), || branch.set("empty"))
        .unwrap();
    assert_eq!(branch.get(), "empty");
}

#[test]
fn test_or_else_variants() {
    let int_value = Optional::of(18).unwrap().or_else(0);
    let string_value = Optional::<String>::empty().or_else(DEFAULT_TEXT.to_string());

    assert_eq!(int_value, 18);
    assert_eq!(string_value, DEFAULT_TEXT);
}

#[test]
fn test_or_else_get_is_lazy() {
    let present = Optional::of(18)
        .unwrap()
        .or_else_get(|| -> i32 { panic!("supplier must not run") })
        .unwrap();
    assert_eq!(present, 18);

    let fallback = Optional::<String>::empty()
        .or_else_get(|| DEFAULT_TEXT.to_string())
        .unwrap();
    assert_eq!(fallback, DEFAULT_TEXT);

    let err = Optional::<String>::empty()
        .or_else_get::<fn() -> String>(None)
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_or_else_throw() {
    let value: Result<i32, Error> = Optional::of(18)
        .unwrap()
        .or_else_throw(|| Error::illegal_argument("missing"));
    assert_eq!(value.unwrap(), 18);

    let err = Optional::<i32>::empty()
        .or_else_throw(|| Error::illegal_argument("missing"))
        .unwrap_err();
    assert!(err.is_illegal_argument());

    // An absent error supplier is rejected even when a value is present
    let result: Result<i32, Error> = Optional::of(18)
        .unwrap()
        .or_else_throw::<Error, fn() -> Error>(None);
    assert!(result.unwrap_err().is_null_argument());
}

#[test]
fn test_filter() {
    let is_adult = Optional::of(18)
        .unwrap()
        .filter(|v: &i32| *v >= 18)
        .unwrap()
        .is_present();
    let starts_with_t = Optional::of(TEST_TEXT.to_string())
        .unwrap()
        .filter(|s: &String| s.starts_with('t'))
        .unwrap()
        .is_present();
    let has_motor = Optional::<Car>::empty()
        .filter(|c: &Car| c.motor().is_present())
        .unwrap()
        .is_present();

    assert!(is_adult);
    assert!(starts_with_t);
    assert!(!has_motor);

    // Absent predicate fails even on an empty optional
    let err = Optional::<Car>::empty()
        .filter::<fn(&Car) -> bool>(None)
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_map() {
    let car = Optional::of(TEST_TEXT.to_string())
        .unwrap()
        .map(|s: String| Car::new(Motor::new(s)))
        .unwrap()
        .or_else_get(|| Car::new(Motor::new(DEFAULT_TEXT.to_string())))
        .unwrap();
    let serial = car
        .motor()
        .filter(|m: &Motor| m.serial().is_present())
        .unwrap()
        .get()
        .unwrap()
        .serial()
        .get()
        .unwrap()
        .clone();
    assert_eq!(serial, TEST_TEXT);

    let not_serial = Optional::<Car>::empty()
        .map(|c: Car| c.motor())
        .unwrap()
        .map(|_: Optional<Motor>| TEST_TEXT.to_string())
        .unwrap()
        .or_else(DEFAULT_TEXT.to_string());
    assert_eq!(not_serial, DEFAULT_TEXT);

    let err = Optional::<String>::empty()
        .map::<Car, fn(String) -> Car>(None)
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_map_nullable_empties_on_none() {
    let mapped = Optional::of(3)
        .unwrap()
        .map_nullable(|v: i32| if v > 5 { Some(v) } else { None })
        .unwrap();
    assert!(mapped.is_empty());
}

#[test]
fn test_flat_map() {
    let car = Optional::of(Car::new(Motor::new(TEST_TEXT.to_string()))).unwrap();
    let serial = car
        .flat_map(|c: Car| c.motor())
        .unwrap()
        .flat_map(|m: Motor| m.serial())
        .unwrap()
        .or_else(DEFAULT_TEXT.to_string());
    assert_eq!(serial, TEST_TEXT);

    let no_motor = Optional::of(Car::new(None))
        .unwrap()
        .flat_map(|c: Car| c.motor())
        .unwrap()
        .flat_map(|m: Motor| m.serial())
        .unwrap()
        .or_else(DEFAULT_TEXT.to_string());
    assert_eq!(no_motor, DEFAULT_TEXT);

    let err = Optional::<String>::empty()
        .flat_map::<Car, fn(String) -> Optional<Car>>(None)
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_or_supplies_alternative() {
    let first = Optional::<i32>::empty()
        .or(|| Optional::from(Some(4)))
        .unwrap();
    assert_eq!(first.into_option(), Some(4));
}

#[test]
fn test_stream_of_optional() {
    assert_eq!(Optional::of(5).unwrap().stream().count().unwrap(), 1);
    assert_eq!(Optional::<i32>::empty().stream().count().unwrap(), 0);
}

#[test]
fn test_option_conversions() {
    let optional: Optional<i32> = Some(3).into();
    let back: Option<i32> = optional.clone().into();
    assert_eq!(back, Some(3));
    assert_eq!(Optional::<i32>::default(), Optional::empty());
}
