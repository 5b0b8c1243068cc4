//! Presence/absence container with fail-fast argument checks.
//!
//! `Optional<T>` is a thin wrapper over `Option<T>` whose combinators reject
//! absent function arguments with [`Error::NullArgument`] instead of treating
//! them as no-ops. Whether the check happens up front or only when the
//! argument would actually be called differs per operation:
//!
//! | operation            | absent argument rejected            |
//! |----------------------|-------------------------------------|
//! | `filter`, `map`, `map_nullable`, `flat_map`, `or`, `or_else_throw` | always |
//! | `or_else_get`        | only when the optional is empty     |
//! | `if_present`         | only when a value is present        |
//!
//! # Example
//!
//! ```rust
//! use lazypipe::Optional;
//!
//! let age = Optional::of(18).unwrap();
//! assert!(age.clone().filter(|a: &i32| *a > 17).unwrap().is_present());
//!
//! let name: Optional<String> = Optional::of_nullable(None);
//! assert_eq!(name.to_string(), "Optional.empty");
//! ```

use crate::errors::{require, Error, Result};
use crate::pipeline::Pipeline;
use std::fmt;

/// A value that may or may not be present.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Wrap a value that must be present.
    ///
    /// Fails with `NullArgument` when given `None`.
    pub fn of(value: impl Into<Option<T>>) -> Result<Self> {
        let value = require(value, "value")?;
        Ok(Self { value: Some(value) })
    }

    /// Wrap a value that may be absent; `None` yields an empty optional.
    pub fn of_nullable(value: impl Into<Option<T>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the contained value, failing with `NoSuchElement` when empty.
    pub fn get(&self) -> Result<&T> {
        self.value
            .as_ref()
            .ok_or_else(|| Error::no_such_element("No value present"))
    }

    /// Keep the value only if `predicate` holds.
    ///
    /// The predicate is never invoked on an empty optional.
    pub fn filter<P>(self, predicate: impl Into<Option<P>>) -> Result<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        let predicate = require(predicate, "predicate")?;
        Ok(Self {
            value: self.value.filter(predicate),
        })
    }

    pub fn map<U, F>(self, mapper: impl Into<Option<F>>) -> Result<Optional<U>>
    where
        F: FnOnce(T) -> U,
    {
        let mapper = require(mapper, "mapper")?;
        Ok(Optional {
            value: self.value.map(mapper),
        })
    }

    /// Like [`Optional::map`], but a mapper returning `None` yields an empty
    /// optional rather than a present `None`.
    pub fn map_nullable<U, F>(self, mapper: impl Into<Option<F>>) -> Result<Optional<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        let mapper = require(mapper, "mapper")?;
        Ok(Optional {
            value: self.value.and_then(mapper),
        })
    }

    pub fn flat_map<U, F>(self, mapper: impl Into<Option<F>>) -> Result<Optional<U>>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        let mapper = require(mapper, "mapper")?;
        Ok(Optional {
            value: self.value.and_then(|v| mapper(v).value),
        })
    }

    /// Return `self` when present, otherwise the optional produced by `supplier`.
    pub fn or<S>(self, supplier: impl Into<Option<S>>) -> Result<Self>
    where
        S: FnOnce() -> Optional<T>,
    {
        let supplier = require(supplier, "supplier")?;
        match self.value {
            Some(_) => Ok(self),
            None => Ok(supplier()),
        }
    }

    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Return the value or compute a fallback.
    ///
    /// The supplier only runs, and is only required, when the optional is empty.
    pub fn or_else_get<S>(self, supplier: impl Into<Option<S>>) -> Result<T>
    where
        S: FnOnce() -> T,
    {
        match self.value {
            Some(value) => Ok(value),
            None => Ok(require(supplier, "supplier")?()),
        }
    }

    /// Return the value or fail with the error produced by `error_supplier`.
    ///
    /// An absent supplier fails with `NullArgument` whether or not a value is
    /// present.
    pub fn or_else_throw<E, S>(
        self,
        error_supplier: impl Into<Option<S>>,
    ) -> std::result::Result<T, E>
    where
        S: FnOnce() -> E,
        E: From<Error>,
    {
        let error_supplier = require(error_supplier, "error_supplier")?;
        self.value.ok_or_else(error_supplier)
    }

    /// Run `consumer` on the value if there is one.
    pub fn if_present<C>(self, consumer: impl Into<Option<C>>) -> Result<()>
    where
        C: FnOnce(T),
    {
        if let Some(value) = self.value {
            require(consumer, "consumer")?(value);
        }
        Ok(())
    }

    pub fn if_present_or_else<C, A>(
        self,
        consumer: impl Into<Option<C>>,
        empty_action: impl Into<Option<A>>,
    ) -> Result<()>
    where
        C: FnOnce(T),
        A: FnOnce(),
    {
        match self.value {
            Some(value) => require(consumer, "consumer")?(value),
            None => require(empty_action, "empty_action")?(),
        }
        Ok(())
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T: 'static> Optional<T> {
    /// A pipeline of zero or one element.
    pub fn stream(self) -> Pipeline<T> {
        Pipeline::of(self.value.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Optional[{:?}]", v),
            None => write!(f, "Optional.empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Optional[{}]", v),
            None => write!(f, "Optional.empty"),
        }
    }
}
