//! The two shipped annotation axes.

mod axis1;
mod axis2;

use super::Taxonomy;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// 8-category conversational intent.
    Axis1,
    /// Up-to-two-of-12 priority taxonomy.
    Axis2,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Axis1, Axis::Axis2];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Axis1 => axis1::NAME,
            Axis::Axis2 => axis2::NAME,
        }
    }

    pub fn taxonomy(self) -> Taxonomy {
        match self {
            Axis::Axis1 => axis1::taxonomy(),
            Axis::Axis2 => axis2::taxonomy(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axis1" | "1" => Ok(Axis::Axis1),
            "axis2" | "2" => Ok(Axis::Axis2),
            other => Err(format!("unknown axis '{}' (expected axis1 or axis2)", other)),
        }
    }
}
