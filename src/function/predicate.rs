use crate::errors::{require, Result};
use std::fmt;
use std::rc::Rc;

/// A shareable boolean test over `&T`.
///
/// `and`/`or` short-circuit and always evaluate `self` first. Both reject an
/// absent operand when the combined predicate is built, so no input is ever
/// tested in that case.
///
/// # Example
///
/// ```rust
/// use lazypipe::function::Predicate;
///
/// let is_adult = Predicate::new(|age: &u32| *age >= 18);
/// let is_senior = Predicate::new(|age: &u32| *age >= 65);
///
/// assert!(is_adult.or(is_senior.clone()).unwrap().test(&30));
/// assert!(!is_adult.and(is_senior).unwrap().test(&30));
/// assert!(is_adult.or(None).is_err());
/// ```
pub struct Predicate<T> {
    test: Rc<dyn Fn(&T) -> bool>,
}

impl<T: 'static> Predicate<T> {
    pub fn new(test: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            test: Rc::new(test),
        }
    }

    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    pub fn negate(&self) -> Self {
        let this = Rc::clone(&self.test);
        Self::new(move |t| !this(t))
    }

    pub fn and(&self, other: impl Into<Option<Predicate<T>>>) -> Result<Self> {
        let other = require(other, "other")?;
        let this = Rc::clone(&self.test);
        Ok(Self::new(move |t| this(t) && other.test(t)))
    }

    pub fn or(&self, other: impl Into<Option<Predicate<T>>>) -> Result<Self> {
        let other = require(other, "other")?;
        let this = Rc::clone(&self.test);
        Ok(Self::new(move |t| this(t) || other.test(t)))
    }

    /// Static form of [`Predicate::negate`].
    pub fn not(target: impl Into<Option<Predicate<T>>>) -> Result<Self> {
        Ok(require(target, "target")?.negate())
    }

    pub fn into_fn(self) -> impl Fn(&T) -> bool {
        move |t| (self.test)(t)
    }
}

impl<T: PartialEq + 'static> Predicate<T> {
    /// Predicate matching values equal to `target`.
    pub fn is_equal(target: T) -> Self {
        Self::new(move |t| *t == target)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Rc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}
