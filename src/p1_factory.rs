// Pattern 1: Simple Factory
// Maps a vehicle tag to a freshly built trait object.

use std::fmt;
use std::str::FromStr;

use crate::error::{PatternError, Result};

// ============================================================================
// Capability trait and concrete vehicles
// ============================================================================

pub trait Vehicle {
    fn kind(&self) -> &'static str;
    fn wheel_count(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bike;

impl Vehicle for Bike {
    fn kind(&self) -> &'static str {
        "Bike"
    }

    fn wheel_count(&self) -> u32 {
        2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car;

impl Vehicle for Car {
    fn kind(&self) -> &'static str {
        "Car"
    }

    fn wheel_count(&self) -> u32 {
        4
    }
}

// ============================================================================
// Closed selector tag
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Bike,
    Car,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 2] = [VehicleKind::Bike, VehicleKind::Car];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Bike => "Bike",
            VehicleKind::Car => "Car",
        }
    }

    /// Every call allocates a new vehicle; nothing is cached.
    pub fn build(self) -> Box<dyn Vehicle> {
        match self {
            VehicleKind::Bike => Box::new(Bike),
            VehicleKind::Car => Box::new(Car),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = PatternError;

    // Case-sensitive, no trimming.
    fn from_str(tag: &str) -> Result<Self> {
        VehicleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| PatternError::invalid_argument("vehicle type", tag))
    }
}

// ============================================================================
// Factory entry point
// ============================================================================

pub fn create(tag: &str) -> Result<Box<dyn Vehicle>> {
    let kind = tag.parse::<VehicleKind>().map_err(|err| {
        tracing::warn!(tag, "rejected vehicle tag");
        err
    })?;
    tracing::debug!(%kind, "building vehicle");
    Ok(kind.build())
}

pub fn describe(vehicle: &dyn Vehicle) -> String {
    format!(
        "Vehicle Type: {}, Number of Wheels: {}",
        vehicle.kind(),
        vehicle.wheel_count()
    )
}

// ============================================================================
// Tests
// ============================================================================
