//! Composable function values.
//!
//! Every type here wraps a reference-counted closure, so values are cheap to
//! clone and combinators (`compose`, `and_then`, `and`, `or`, `negate`,
//! `max_by`, ...) return new values without touching their operands.
//!
//! A combinator that takes another function accepts `impl Into<Option<_>>`.
//! Passing the value itself is the normal case; passing `None` is an absent
//! argument and fails with [`Error::NullArgument`](crate::errors::Error)
//! when the combinator is built, before any closure runs.
//!
//! Where the parameter is one of the types here, a bare `None` is enough.
//! Operations generic over a closure type (`Optional::filter`,
//! `Pipeline::map`, ...) cannot infer that type from `None`, so name it with
//! a turbofish:
//!
//! ```rust
//! use lazypipe::{Optional, Pipeline, Predicate};
//!
//! let is_adult = Predicate::new(|age: &u32| *age >= 18);
//! assert!(is_adult.and(None).unwrap_err().is_null_argument());
//!
//! let err = Optional::of(20)
//!     .unwrap()
//!     .filter::<fn(&i32) -> bool>(None)
//!     .unwrap_err();
//! assert!(err.is_null_argument());
//!
//! let ages = Pipeline::of(vec![12, 30]);
//! let err = ages.map::<String, fn(i32) -> String>(None).unwrap_err();
//! assert!(err.is_null_argument());
//! assert!(!ages.is_consumed());
//! ```

pub mod binary;
pub mod comparator;
pub mod consumer;
pub mod predicate;
pub mod supplier;
pub mod unary;

pub use binary::{BiFunction, BinaryOperator};
pub use comparator::Comparator;
pub use consumer::Consumer;
pub use predicate::Predicate;
pub use supplier::Supplier;
pub use unary::{Function, UnaryOperator};
