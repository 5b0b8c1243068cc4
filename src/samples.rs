//! Small domain types used by the tour binary and the integration tests.
//!
//! Fields that may be missing are stored as [`Optional`] rather than as bare
//! `Option`s, so lookups chain through `map`/`flat_map`/`filter`:
//!
//! ```rust
//! use lazypipe::samples::{Car, Motor};
//!
//! let car = Car::new(Motor::new("X-100".to_string()));
//! let serial = car
//!     .motor()
//!     .flat_map(|m: Motor| m.serial())
//!     .unwrap()
//!     .or_else("unknown".to_string());
//! assert_eq!(serial, "X-100");
//! ```

use crate::optional::Optional;
use crate::pipeline::Pipeline;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motor {
    serial: Optional<String>,
}

impl Motor {
    pub fn new(serial: impl Into<Option<String>>) -> Self {
        Self {
            serial: Optional::of_nullable(serial),
        }
    }

    pub fn serial(&self) -> Optional<String> {
        self.serial.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    motor: Optional<Motor>,
}

impl Car {
    pub fn new(motor: impl Into<Option<Motor>>) -> Self {
        Self {
            motor: Optional::of_nullable(motor),
        }
    }

    pub fn motor(&self) -> Optional<Motor> {
        self.motor.clone()
    }
}

/// A country that may or may not border the sea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    name: Optional<String>,
    sea: Optional<bool>,
}

impl Country {
    pub fn new(name: impl Into<Option<String>>, sea: bool) -> Self {
        Self {
            name: Optional::of_nullable(name),
            sea: Optional::of_nullable(sea),
        }
    }

    pub fn name(&self) -> Optional<String> {
        self.name.clone()
    }

    pub fn set_name(&mut self, name: impl Into<Option<String>>) {
        self.name = Optional::of_nullable(name);
    }

    pub fn has_sea(&self) -> Optional<bool> {
        self.sea.clone()
    }

    pub fn set_sea(&mut self, sea: bool) {
        self.sea = Optional::of_nullable(sea);
    }
}

/// A company whose employees are exposed as a single-use pipeline.
///
/// Like any pipeline, the employee list can be consumed only once.
#[derive(Debug)]
pub struct Company {
    employees: Pipeline<String>,
}

impl Company {
    pub fn new<S: Into<String>>(employees: impl IntoIterator<Item = S>) -> Self {
        Self {
            employees: employees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn employees(&self) -> &Pipeline<String> {
        &self.employees
    }

    pub fn into_employees(self) -> Pipeline<String> {
        self.employees
    }
}
