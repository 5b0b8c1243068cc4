use crate::errors::{require, Result};
use std::fmt;
use std::rc::Rc;

/// A side-effecting action over a mutable borrow of `T`.
pub struct Consumer<T> {
    accept: Rc<dyn Fn(&mut T)>,
}

impl<T: 'static> Consumer<T> {
    pub fn new(accept: impl Fn(&mut T) + 'static) -> Self {
        Self {
            accept: Rc::new(accept),
        }
    }

    pub fn accept(&self, value: &mut T) {
        (self.accept)(value)
    }

    /// Build a consumer running `self` then `after` on the same value.
    ///
    /// An absent `after` is rejected here, so the chained consumer either runs
    /// both actions or is never built.
    pub fn and_then(&self, after: impl Into<Option<Consumer<T>>>) -> Result<Self> {
        let after = require(after, "after")?;
        let this = Rc::clone(&self.accept);
        Ok(Self::new(move |value| {
            this(value);
            after.accept(value);
        }))
    }

    pub fn into_fn(self) -> impl Fn(&mut T) {
        move |value| (self.accept)(value)
    }
}

impl<T> Clone for Consumer<T> {
    fn clone(&self) -> Self {
        Self {
            accept: Rc::clone(&self.accept),
        }
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer").finish_non_exhaustive()
    }
}
