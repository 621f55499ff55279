use derive_more::{Constructor, Deref, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// Value Object - whole yen amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Yen(u64);

impl Yen {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// ja-JP grouping: `374400` -> `374,400`
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Chart datasets are plain JS numbers
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped())
    }
}

/// Value Object - deliveries per working day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct DeliveryCount(u32);

impl DeliveryCount {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeliveryCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value Object - validated index into the delivery steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SliderPosition(usize);

impl SliderPosition {
    pub fn new(index: usize, step_count: usize) -> DomainResult<Self> {
        if index >= step_count {
            return Err(DomainError::InvalidPosition { index, len: step_count });
        }
        Ok(Self(index))
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Piece-rate income against the flat guarantee for one slider position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeProjection {
    pub deliveries: DeliveryCount,
    pub per_piece_total: Yen,
    pub guarantee_total: Yen,
}

impl IncomeProjection {
    /// Dataset order: piece-rate bar first, guarantee bar second
    pub fn chart_values(&self) -> [f64; 2] {
        [self.per_piece_total.as_f64(), self.guarantee_total.as_f64()]
    }
}

/// Filled share of the slider track, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderFill(f64);

pub const SLIDER_FILL_COLOR: &str = "#14f195";
pub const SLIDER_TRACK_COLOR: &str = "rgba(255, 255, 255, 0.1)";

impl SliderFill {
    /// `(value - min) * 100 / (max - min)`; the control keeps `value` within bounds
    pub fn from_bounds(value: f64, min: f64, max: f64) -> DomainResult<Self> {
        if !(max > min) {
            return Err(DomainError::InvalidSliderBounds { min, max });
        }
        Ok(Self((value - min) * 100.0 / (max - min)))
    }

    pub fn percentage(&self) -> f64 {
        self.0
    }

    pub fn css_background(&self) -> String {
        format!(
            "linear-gradient(to right, {} {}%, {} {}%)",
            SLIDER_FILL_COLOR, self.0, SLIDER_TRACK_COLOR, self.0
        )
    }
}
