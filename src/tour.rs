//! Scenarios run by the `lazypipe` binary.
//!
//! Each section returns the steps it walked through so the binary only has
//! to print them, and the tests can check them.

use crate::config::PipelineConfig;
use crate::errors::{Error, Result};
use crate::function::{BiFunction, BinaryOperator, Comparator, Consumer, Function, Predicate};
use crate::optional::Optional;
use crate::pipeline::Pipeline;
use crate::samples::{Car, Company, Country, Motor};

/// One demonstrated call and what it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub outcome: String,
}

impl Step {
    fn new(title: &'static str, outcome: impl ToString) -> Self {
        Self {
            title,
            outcome: outcome.to_string(),
        }
    }
}

/// A titled group of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub steps: Vec<Step>,
}

pub fn optional_section() -> Result<Section> {
    let age = Optional::of(18)?;
    let nobody: Optional<String> = Optional::of_nullable(None);
    let car = Car::new(Motor::new("SN-4521".to_string()));

    let serial = Optional::of(car)?
        .flat_map(|c: Car| c.motor())?
        .flat_map(|m: Motor| m.serial())?
        .or_else("no serial".to_string());

    let fallback = Optional::<String>::empty().or_else_get(|| "generated".to_string())?;
    let missing = Optional::<i32>::empty()
        .or_else_throw(|| Error::illegal_argument("value required"))
        .map_or_else(|e| e.to_string(), |v| v.to_string());

    Ok(Section {
        name: "optional",
        steps: vec![
            Step::new("Optional::of(18)", &age),
            Step::new("Optional::of_nullable(None)", &nobody),
            Step::new("is adult", age.filter(|a: &i32| *a >= 18)?.is_present()),
            Step::new("serial through car and motor", serial),
            Step::new("or_else_get on empty", fallback),
            Step::new("or_else_throw on empty", missing),
        ],
    })
}

pub fn function_section() -> Result<Section> {
    let string_size = Function::new(|s: String| s.len());
    let age_category = Function::new(|age: usize| {
        (if age >= 18 { "Adult Person" } else { "Young" }).to_string()
    });

    let size_of_category = string_size.compose(age_category.clone())?;
    let category_of_size = string_size.and_then(age_category)?;

    let join = BiFunction::new(|a: String, b: String| a + &b);
    let show = Function::new(|s: String| format!("the result is: {s}"));
    let joined = join.and_then(show)?;

    let is_adult = Predicate::new(|age: &u32| *age >= 18);
    let is_senior = Predicate::new(|age: &u32| *age >= 65);
    let max = BinaryOperator::max_by(Comparator::natural_order())?;

    let sea_for_all = Consumer::new(|c: &mut Country| c.set_sea(true));
    let rename = Consumer::new(|c: &mut Country| {
        let name = c.name().or_else("default".to_string());
        c.set_name(format!("{name} get sea"));
    });
    let mut switzerland = Country::new("Suiza".to_string(), false);
    sea_for_all.and_then(rename)?.accept(&mut switzerland);

    Ok(Section {
        name: "function",
        steps: vec![
            Step::new("size of age category (19)", size_of_category.apply(19)),
            Step::new(
                "category of size (\"Really long sentence\")",
                category_of_size.apply("Really long sentence".to_string()),
            ),
            Step::new(
                "join then show",
                joined.apply("Lorem ".to_string(), "Ipsum".to_string()),
            ),
            Step::new("adult or senior (30)", is_adult.or(is_senior.clone())?.test(&30)),
            Step::new("adult and senior (30)", is_adult.and(is_senior)?.test(&30)),
            Step::new("max_by natural order (2, 8)", max.apply(2, 8)),
            Step::new("chained consumers", switzerland.name().or_else(String::new())),
        ],
    })
}

pub fn pipeline_section(config: &PipelineConfig) -> Result<Section> {
    let evens = Pipeline::iterate(2, |n: &i64| n + 2)?
        .with_config(config.clone())
        .limit(10)?
        .to_array()?;

    let largest_first = Pipeline::of(vec![2, 8, 1])
        .with_config(config.clone())
        .sorted_by(Comparator::reverse_order())?
        .find_first()?;

    let distinct = Pipeline::of(vec![1, 2, 2, 3, 3, 3])
        .with_config(config.clone())
        .distinct()?
        .to_array()?;

    let companies = Pipeline::of(vec![
        Company::new(["Luis", "Jhon"]),
        Company::new(["Carlos", "Sergio"]),
        Company::new(["Fernando"]),
    ]);
    let employees = companies
        .flat_map(|c: Company| c.into_employees())?
        .to_array()?;

    let major = Pipeline::of(vec![1, 2, 6, 7, 3, 4, 5, 8, 9])
        .reduce(|a: i32, b: i32| if a > b { a } else { b })?;

    let letters = Pipeline::of(["a", "b", "c"]);
    let _only_a = letters.filter(|v: &&str| *v == "a")?;
    let reuse = match letters.skip(1) {
        Ok(_) => "reused".to_string(),
        Err(e) => e.to_string(),
    };

    Ok(Section {
        name: "pipeline",
        steps: vec![
            Step::new("iterate(2, +2).limit(10)", format!("{evens:?}")),
            Step::new("sorted(reverse).find_first()", largest_first),
            Step::new("distinct", format!("{distinct:?}")),
            Step::new("flat_map over company employees", employees.join(", ")),
            Step::new("reduce(max)", major),
            Step::new("skip after filter on the same pipeline", reuse),
        ],
    })
}
