//! Single-argument functions and their composition.

use crate::errors::{require, Result};
use std::fmt;
use std::rc::Rc;

/// A shareable single-argument function `A -> B`.
///
/// Composition never mutates either operand: `compose` and `and_then` build a
/// new `Function` holding clones of both closures.
///
/// # Example
///
/// ```rust
/// use lazypipe::function::Function;
///
/// let length = Function::new(|s: String| s.len());
/// let category = Function::new(|n: usize| (if n >= 18 { "Adult Person" } else { "Young" }).to_string());
///
/// // `category` runs first, then `length`
/// let length_of_category = length.compose(category.clone()).unwrap();
/// assert_eq!(length_of_category.apply(19), 12);
///
/// // `length` runs first, then `category`
/// let category_of_length = length.and_then(category).unwrap();
/// assert_eq!(category_of_length.apply("Really long sentence".to_string()), "Adult Person");
/// ```
pub struct Function<A, B> {
    func: Rc<dyn Fn(A) -> B>,
}

/// A function whose input and output types are the same.
pub type UnaryOperator<T> = Function<T, T>;

impl<A: 'static, B: 'static> Function<A, B> {
    pub fn new(func: impl Fn(A) -> B + 'static) -> Self {
        Self {
            func: Rc::new(func),
        }
    }

    pub fn apply(&self, input: A) -> B {
        (self.func)(input)
    }

    /// Build `x -> self(before(x))`.
    ///
    /// Fails with `NullArgument` when `before` is absent, before anything is
    /// evaluated.
    pub fn compose<V: 'static>(
        &self,
        before: impl Into<Option<Function<V, A>>>,
    ) -> Result<Function<V, B>> {
        let before = require(before, "before")?;
        let this = Rc::clone(&self.func);
        Ok(Function::new(move |v| this(before.apply(v))))
    }

    /// Build `x -> after(self(x))`.
    pub fn and_then<C: 'static>(
        &self,
        after: impl Into<Option<Function<B, C>>>,
    ) -> Result<Function<A, C>> {
        let after = require(after, "after")?;
        let this = Rc::clone(&self.func);
        Ok(Function::new(move |a| after.apply(this(a))))
    }

    /// Unwrap into a plain closure, for APIs that take `FnMut`.
    pub fn into_fn(self) -> impl Fn(A) -> B {
        move |a| (self.func)(a)
    }
}

impl<T: 'static> Function<T, T> {
    pub fn identity() -> Self {
        Function::new(|t| t)
    }
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").finish_non_exhaustive()
    }
}
