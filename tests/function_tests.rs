//! Integration tests for the composable function family.

use lazypipe::samples::Country;
use lazypipe::{
    BiFunction, BinaryOperator, Comparator, Consumer, Function, Optional, Pipeline, Predicate,
    Supplier, UnaryOperator,
};
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;

const LONG_TEXT: &str = "Really long sentence";
const PRE_LONG_TEXT: &str = "The text for the supplier test is: ";

fn string_size() -> Function<String, usize> {
    Function::new(|s: String| s.len())
}

fn age_category() -> Function<usize, String> {
    Function::new(|age: usize| {
        (if age >= 18 { "Adult Person" } else { "Young" }).to_string()
    })
}

#[test]
fn test_compose_and_then_order() {
    // age_category runs first
    let size_of_category = string_size().compose(age_category()).unwrap();
    // string_size runs first
    let category_of_size = string_size().and_then(age_category()).unwrap();

    assert_eq!(size_of_category.apply(19), 12);
    assert_eq!(size_of_category.apply(3), 5);
    assert_eq!(category_of_size.apply(LONG_TEXT.to_string()), "Adult Person");
    assert_eq!(category_of_size.apply("short".to_string()), "Young");
}

#[test]
fn test_compose_absent_function() {
    let err = string_size()
        .compose(None::<Function<usize, String>>)
        .unwrap_err();
    assert!(err.is_null_argument());

    let err = string_size()
        .and_then(None::<Function<usize, String>>)
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_bi_function_and_then() {
    let join = BiFunction::new(|a: String, b: String| a + &b);
    let show = Function::new(|s: String| format!("the result is: {s}"));
    let joined = join.and_then(show).unwrap();

    assert_eq!(
        joined.apply("Lorem ".to_string(), "Ipsum".to_string()),
        "the result is: Lorem Ipsum"
    );

    let pow = BiFunction::new(|base: f64, exp: f64| base.powf(exp));
    assert_eq!(pow.apply(2.0, 4.0), 16.0);

    let err = join.and_then(None::<Function<String, String>>).unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_supplier_reinvoked() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let supplier = Supplier::new(move || {
        counter.set(counter.get() + 1);
        LONG_TEXT.to_string()
    });

    let text = format!("{PRE_LONG_TEXT}{}", supplier.get());
    supplier.get();

    assert_eq!(text, "The text for the supplier test is: Really long sentence");
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_consumer_over_many_values() {
    let sea_for_all = Consumer::new(|c: &mut Country| c.set_sea(true));
    let mut countries = vec![
        Country::new("Colombia".to_string(), true),
        Country::new("Canada".to_string(), true),
        Country::new("Bolivia".to_string(), false),
    ];
    countries.iter_mut().for_each(|c| sea_for_all.accept(c));

    let without_sea = Pipeline::of(countries)
        .any_match(|c: &Country| !c.has_sea().or_else(false))
        .unwrap();
    assert!(!without_sea);
}

#[test]
fn test_consumer_chain() {
    let sea_for_all = Consumer::new(|c: &mut Country| c.set_sea(true));
    let rename = Consumer::new(|c: &mut Country| {
        let name = c.name().or_else("default".to_string());
        c.set_name(format!("{name} get sea"));
    });

    let mut switzerland = Country::new("Suiza".to_string(), false);
    sea_for_all
        .and_then(rename)
        .unwrap()
        .accept(&mut switzerland);

    assert!(switzerland.has_sea().or_else(false));
    assert_eq!(switzerland.name().or_else(String::new()), "Suiza get sea");

    let err = sea_for_all.and_then(None).unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_predicate_combinators() {
    let is_adult = Predicate::new(|age: &u32| *age >= 18);
    let is_senior = Predicate::new(|age: &u32| *age >= 65);
    let is_colombian =
        Predicate::new(|c: &Country| c.name().or_else("default".to_string()) == "Colombia");

    assert!(Optional::of(35).unwrap().filter(is_adult.clone().into_fn()).unwrap().is_present());
    assert!(is_adult.test(&35));
    assert!(is_colombian.negate().test(&Country::new("Canada".to_string(), true)));
    assert!(is_adult.or(is_senior.clone()).unwrap().test(&30));
    assert!(!is_adult.and(is_senior).unwrap().test(&30));
}

#[test]
fn test_predicate_absent_operand_never_evaluates() {
    let evaluated = Rc::new(Cell::new(false));
    let flag = Rc::clone(&evaluated);
    let is_adult = Predicate::new(move |age: &u32| {
        flag.set(true);
        *age >= 18
    });

    assert!(is_adult.or(None).unwrap_err().is_null_argument());
    assert!(is_adult.and(None).unwrap_err().is_null_argument());
    assert!(!evaluated.get());
}

#[test]
fn test_operators() {
    let add_prefix: UnaryOperator<String> = Function::new(|s: String| format!("Prefix: {s}"));
    let product: BinaryOperator<i64> = BiFunction::new(|a: i64, b: i64| a * b);

    assert_eq!(add_prefix.apply(LONG_TEXT.to_string()), "Prefix: Really long sentence");
    assert_eq!(product.apply(2, 2), 4);

    let max = BinaryOperator::max_by(Comparator::natural_order()).unwrap();
    let min = BinaryOperator::min_by(Comparator::natural_order()).unwrap();
    assert_eq!(max.apply(2, 8), 8);
    assert_eq!(min.apply(2, 8), 2);
}

#[test]
fn test_operator_absent_comparator() {
    let err = BinaryOperator::<i32>::max_by(None).unwrap_err();
    assert!(err.is_null_argument());

    let err = BinaryOperator::<i32>::min_by(None).unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_comparator_chain() {
    let by_len = Comparator::comparing(|s: &String| s.len());
    let then_alpha = by_len.then_comparing(Comparator::natural_order()).unwrap();

    let sorted = Pipeline::of(vec![
        "pear".to_string(),
        "fig".to_string(),
        "kiwi".to_string(),
    ])
    .sorted_by(then_alpha.reversed())
    .unwrap()
    .to_array()
    .unwrap();

    assert_eq!(sorted, vec!["pear", "kiwi", "fig"]);
}
