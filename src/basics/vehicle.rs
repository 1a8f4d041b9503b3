//! Two-level hierarchy by composition: a `Car` is a `Vehicle` plus a model.

use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    make: String,
    year: u16,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u16) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u16, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn model(&self) -> String {
        format!("Model: {}", self.model)
    }
}

// Lets `car.info()` resolve to the base vehicle.
impl Deref for Car {
    type Target = Vehicle;

    fn deref(&self) -> &Vehicle {
        &self.vehicle
    }
}
