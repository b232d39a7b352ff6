//! # Unit Types
//!
//! Lightweight newtype wrappers for the two measurements a flooring estimate
//! deals in: lengths taken off a tape or plan, and the floor areas built from
//! them. Both serialize as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use floor_core::units::{Feet, SquareFeet};
//!
//! let area = Feet(20.0) * Feet(25.0);
//! assert_eq!(area, SquareFeet(500.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Floor area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFeet(pub f64);

impl SquareFeet {
    /// Area of a rectangle measured as length × width.
    pub fn from_dimensions(length: Feet, width: Feet) -> Self {
        length * width
    }

    /// Raw value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Mul for Feet {
    type Output = SquareFeet;

    fn mul(self, rhs: Feet) -> SquareFeet {
        SquareFeet(self.0 * rhs.0)
    }
}

impl Add for SquareFeet {
    type Output = SquareFeet;

    fn add(self, rhs: SquareFeet) -> SquareFeet {
        SquareFeet(self.0 + rhs.0)
    }
}

impl Sub for SquareFeet {
    type Output = SquareFeet;

    fn sub(self, rhs: SquareFeet) -> SquareFeet {
        SquareFeet(self.0 - rhs.0)
    }
}

impl Sum for SquareFeet {
    fn sum<I: Iterator<Item = SquareFeet>>(iter: I) -> Self {
        iter.fold(SquareFeet::default(), |acc, a| acc + a)
    }
}

impl From<SquareFeet> for f64 {
    fn from(area: SquareFeet) -> f64 {
        area.0
    }
}

impl fmt::Display for SquareFeet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} sq ft", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_to_area() {
        assert_eq!(SquareFeet::from_dimensions(Feet(12.0), Feet(15.0)), SquareFeet(180.0));
    }

    #[test]
    fn test_area_sum_and_difference() {
        let total: SquareFeet = [SquareFeet(100.0), SquareFeet(50.5)].into_iter().sum();
        assert_eq!(total, SquareFeet(150.5));
        assert_eq!(SquareFeet(100.0) - SquareFeet(150.0), SquareFeet(-50.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(SquareFeet(450.0).to_string(), "450.00 sq ft");
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&SquareFeet(12.5)).unwrap();
        assert_eq!(json, "12.5");
    }
}
