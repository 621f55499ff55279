use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_DELIVERY_STEPS: [u32; 3] = [80, 120, 180];
pub const DEFAULT_UNIT_PRICE: u64 = 180;
pub const DEFAULT_WORKING_DAYS: u32 = 26;
/// Monthly guarantee, fixed regardless of delivery volume
pub const DEFAULT_FIXED_GUARANTEE: u64 = 520_000;

/// Constants of the income simulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub delivery_steps: Vec<u32>,
    pub unit_price: u64,
    pub working_days: u32,
    pub fixed_guarantee: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            delivery_steps: DEFAULT_DELIVERY_STEPS.to_vec(),
            unit_price: DEFAULT_UNIT_PRICE,
            working_days: DEFAULT_WORKING_DAYS,
            fixed_guarantee: DEFAULT_FIXED_GUARANTEE,
        }
    }
}

impl SimulatorConfig {
    pub fn step_count(&self) -> usize {
        self.delivery_steps.len()
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.delivery_steps.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "delivery_steps must not be empty".to_string(),
            ));
        }
        if self.working_days == 0 {
            return Err(DomainError::InvalidConfiguration(
                "working_days must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
