//! Two-argument functions and the `max_by`/`min_by` operators.

use super::{Comparator, Function};
use crate::errors::{require, Result};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A shareable two-argument function `(A, B) -> R`.
pub struct BiFunction<A, B, R> {
    func: Rc<dyn Fn(A, B) -> R>,
}

/// A two-argument function over a single type, such as `+` or `max`.
///
/// ```rust
/// use lazypipe::function::{BinaryOperator, Comparator};
///
/// let max = BinaryOperator::max_by(Comparator::<i32>::natural_order()).unwrap();
/// assert_eq!(max.apply(2, 8), 8);
/// ```
pub type BinaryOperator<T> = BiFunction<T, T, T>;

impl<A: 'static, B: 'static, R: 'static> BiFunction<A, B, R> {
    pub fn new(func: impl Fn(A, B) -> R + 'static) -> Self {
        Self {
            func: Rc::new(func),
        }
    }

    pub fn apply(&self, a: A, b: B) -> R {
        (self.func)(a, b)
    }

    /// Build `(x, y) -> after(self(x, y))`.
    pub fn and_then<C: 'static>(
        &self,
        after: impl Into<Option<Function<R, C>>>,
    ) -> Result<BiFunction<A, B, C>> {
        let after = require(after, "after")?;
        let this = Rc::clone(&self.func);
        Ok(BiFunction::new(move |a, b| after.apply(this(a, b))))
    }

    pub fn into_fn(self) -> impl Fn(A, B) -> R {
        move |a, b| (self.func)(a, b)
    }
}

impl<T: 'static> BiFunction<T, T, T> {
    /// Operator returning the greater operand; ties keep the first.
    pub fn max_by(comparator: impl Into<Option<Comparator<T>>>) -> Result<Self> {
        let comparator = require(comparator, "comparator")?;
        Ok(Self::new(move |a, b| match comparator.compare(&a, &b) {
            Ordering::Less => b,
            Ordering::Equal | Ordering::Greater => a,
        }))
    }

    /// Operator returning the lesser operand; ties keep the first.
    pub fn min_by(comparator: impl Into<Option<Comparator<T>>>) -> Result<Self> {
        let comparator = require(comparator, "comparator")?;
        Ok(Self::new(move |a, b| match comparator.compare(&a, &b) {
            Ordering::Greater => b,
            Ordering::Equal | Ordering::Less => a,
        }))
    }
}

impl<A, B, R> Clone for BiFunction<A, B, R> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<A, B, R> fmt::Debug for BiFunction<A, B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiFunction").finish_non_exhaustive()
    }
}
