// Pattern 2: Abstract Factory
// A brand factory produces a matching car and bike together.

use std::fmt;
use std::str::FromStr;

use crate::error::{PatternError, Result};

// ============================================================================
// Product traits
// ============================================================================

pub trait Car {
    fn label(&self) -> &'static str;

    fn manufacture(&self) -> String {
        format!("{} Car manufactured.", self.label())
    }
}

pub trait Bike {
    fn label(&self) -> &'static str;

    fn manufacture(&self) -> String {
        format!("{} Bike manufactured.", self.label())
    }
}

// ============================================================================
// Concrete products
// ============================================================================

pub struct HondaCar;
impl Car for HondaCar {
    fn label(&self) -> &'static str {
        "Honda"
    }
}

pub struct SuzukiBike;
impl Bike for SuzukiBike {
    fn label(&self) -> &'static str {
        "Suzuki"
    }
}

pub struct ToyotaCar;
impl Car for ToyotaCar {
    fn label(&self) -> &'static str {
        "Toyota"
    }
}

pub struct YamahaBike;
impl Bike for YamahaBike {
    fn label(&self) -> &'static str {
        "Yamaha"
    }
}

// ============================================================================
// Factories
// ============================================================================

/// One car and one bike from the same factory.
pub struct VehicleBundle {
    pub car: Box<dyn Car>,
    pub bike: Box<dyn Bike>,
}

pub trait VehicleFactory {
    fn car(&self) -> Box<dyn Car>;
    fn bike(&self) -> Box<dyn Bike>;

    fn bundle(&self) -> VehicleBundle {
        VehicleBundle {
            car: self.car(),
            bike: self.bike(),
        }
    }
}

pub struct HondaFactory;
impl VehicleFactory for HondaFactory {
    fn car(&self) -> Box<dyn Car> {
        Box::new(HondaCar)
    }

    fn bike(&self) -> Box<dyn Bike> {
        Box::new(SuzukiBike)
    }
}

pub struct ToyotaFactory;
impl VehicleFactory for ToyotaFactory {
    fn car(&self) -> Box<dyn Car> {
        Box::new(ToyotaCar)
    }

    fn bike(&self) -> Box<dyn Bike> {
        Box::new(YamahaBike)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Honda,
    Toyota,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Honda, Brand::Toyota];

    pub fn as_str(self) -> &'static str {
        match self {
            Brand::Honda => "Honda",
            Brand::Toyota => "Toyota",
        }
    }

    pub fn factory(self) -> Box<dyn VehicleFactory> {
        match self {
            Brand::Honda => Box::new(HondaFactory),
            Brand::Toyota => Box::new(ToyotaFactory),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = PatternError;

    fn from_str(name: &str) -> Result<Self> {
        Brand::ALL
            .into_iter()
            .find(|brand| brand.as_str() == name)
            .ok_or_else(|| PatternError::invalid_argument("brand", name))
    }
}

// ============================================================================
// Client: takes its bundle once, at construction
// ============================================================================

pub struct Client {
    car: Box<dyn Car>,
    bike: Box<dyn Bike>,
}

impl Client {
    pub fn new(factory: &dyn VehicleFactory) -> Self {
        let VehicleBundle { car, bike } = factory.bundle();
        tracing::debug!(car = car.label(), bike = bike.label(), "client stocked");
        Self { car, bike }
    }

    pub fn manufacture_vehicles(&self) -> Vec<String> {
        vec![self.car.manufacture(), self.bike.manufacture()]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honda_bundle_labels() {
        let factory = HondaFactory;
        assert_eq!(factory.car().label(), "Honda");
        assert_eq!(factory.bike().label(), "Suzuki");
    }

    #[test]
    fn test_toyota_bundle_labels() {
        let factory = ToyotaFactory;
        assert_eq!(factory.car().label(), "Toyota");
        assert_eq!(factory.bike().label(), "Yamaha");
    }

    #[test]
    fn test_bundle_is_complete_for_every_brand() {
        let expected = [(Brand::Honda, "Honda", "Suzuki"), (Brand::Toyota, "Toyota", "Yamaha")];
        for (brand, car, bike) in expected {
            let bundle = brand.factory().bundle();
            assert_eq!(bundle.car.label(), car);
            assert_eq!(bundle.bike.label(), bike);
        }
    }

    #[test]
    fn test_repeated_calls_behave_identically() {
        let factory: Box<dyn VehicleFactory> = Box::new(ToyotaFactory);
        let first = factory.car();
        let second = factory.car();
        assert_eq!(first.manufacture(), second.manufacture());
    }

    #[test]
    fn test_client_manufactures_car_then_bike() {
        let client = Client::new(&HondaFactory);
        assert_eq!(
            client.manufacture_vehicles(),
            vec!["Honda Car manufactured.", "Suzuki Bike manufactured."]
        );

        let client = Client::new(Brand::Toyota.factory().as_ref());
        assert_eq!(
            client.manufacture_vehicles(),
            vec!["Toyota Car manufactured.", "Yamaha Bike manufactured."]
        );
    }

    #[test]
    fn test_brand_parsing_is_exact() {
        assert_eq!("Honda".parse::<Brand>().unwrap(), Brand::Honda);
        assert_eq!("Toyota".parse::<Brand>().unwrap(), Brand::Toyota);

        let err = "honda".parse::<Brand>().unwrap_err();
        assert_eq!(err.to_string(), "invalid brand: 'honda'");
    }
}
