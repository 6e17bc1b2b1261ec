use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Meter,
}

/// A non-negative real-world length
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn meters(value: f64) -> Self {
        Length {
            value,
            unit: LengthUnit::Meter,
        }
    }

    pub fn zero() -> Self {
        Length::meters(0.0)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        //only a single unit exists, no conversion needed
        Length::meters(self.value + rhs.value)
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Self {
        iter.fold(Length::zero(), |acc, l| acc + l)
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            LengthUnit::Meter => write!(f, "{:.3} m", self.value),
        }
    }
}
