use super::config::SimulatorConfig;
use super::value_objects::{DeliveryCount, IncomeProjection, SliderPosition, Yen};
use crate::domain::errors::{DomainError, DomainResult};

/// Project monthly income for one slider position.
///
/// `per_piece_total = deliveries × unit_price × working_days`; the guarantee
/// is returned as configured and never depends on `position`.
pub fn compute_income(position: SliderPosition, config: &SimulatorConfig) -> DomainResult<IncomeProjection> {
    let deliveries = *config
        .delivery_steps
        .get(position.index())
        .ok_or(DomainError::InvalidPosition {
            index: position.index(),
            len: config.step_count(),
        })?;

    let per_piece_total = u64::from(deliveries)
        .checked_mul(config.unit_price)
        .and_then(|daily| daily.checked_mul(u64::from(config.working_days)))
        .ok_or(DomainError::AmountOverflow {
            deliveries,
            unit_price: config.unit_price,
            working_days: config.working_days,
        })?;

    Ok(IncomeProjection {
        deliveries: DeliveryCount::new(deliveries),
        per_piece_total: Yen::new(per_piece_total),
        guarantee_total: Yen::new(config.fixed_guarantee),
    })
}

/// Domain service owning the simulator constants
#[derive(Debug, Clone)]
pub struct IncomeProjectionService {
    config: SimulatorConfig,
}

impl IncomeProjectionService {
    pub fn new(config: SimulatorConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Validate a raw slider index against the configured steps
    pub fn position(&self, index: usize) -> DomainResult<SliderPosition> {
        SliderPosition::new(index, self.config.step_count())
    }

    pub fn project(&self, index: usize) -> DomainResult<IncomeProjection> {
        compute_income(self.position(index)?, &self.config)
    }
}
