use crate::domain::{
    errors::{AppResult, DomainError, InfrastructureResult},
    income::{IncomeProjection, IncomeProjectionService, SliderFill},
    logging::{LogComponent, get_logger},
};
use crate::log_debug;

/// Range input the visitor drags
pub trait SliderControl {
    /// Raw `value` attribute as reported by the control
    fn value(&self) -> String;
    fn value_as_number(&self) -> f64;
    fn min(&self) -> f64;
    fn max(&self) -> f64;
    fn set_track_background(&mut self, css: &str);
}

/// Text labels next to the slider
pub trait IncomeDisplay {
    fn show(&mut self, labels: &IncomeLabels);
}

/// Externally owned bar chart; only its dataset values are ours to change
pub trait BarChart {
    fn set_dataset_values(&mut self, values: &[f64]) -> InfrastructureResult<()>;
    fn redraw(&mut self) -> InfrastructureResult<()>;
}

impl<T: BarChart + ?Sized> BarChart for Box<T> {
    fn set_dataset_values(&mut self, values: &[f64]) -> InfrastructureResult<()> {
        (**self).set_dataset_values(values)
    }

    fn redraw(&mut self) -> InfrastructureResult<()> {
        (**self).redraw()
    }
}

/// Formatted strings for the three text targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeLabels {
    pub deliveries: String,
    pub per_piece_income: String,
    pub guarantee_income: String,
}

impl From<&IncomeProjection> for IncomeLabels {
    fn from(projection: &IncomeProjection) -> Self {
        Self {
            deliveries: projection.deliveries.to_string(),
            per_piece_income: projection.per_piece_total.grouped(),
            guarantee_income: projection.guarantee_total.grouped(),
        }
    }
}

/// Keeps labels, chart and slider track in step with the slider.
///
/// Every refresh computes one projection and feeds that same value to the
/// chart dataset and the labels, then redraws and restyles the track. A value
/// that cannot be projected, or a dataset the chart rejects, leaves all
/// three untouched.
pub struct IncomeBinding<S, D, C> {
    service: IncomeProjectionService,
    slider: S,
    display: D,
    chart: C,
    current: Option<IncomeProjection>,
}

impl<S, D, C> IncomeBinding<S, D, C>
where
    S: SliderControl,
    D: IncomeDisplay,
    C: BarChart,
{
    pub fn new(service: IncomeProjectionService, slider: S, display: D, chart: C) -> Self {
        Self { service, slider, display, chart, current: None }
    }

    /// Last projection pushed to the targets
    pub fn current(&self) -> Option<IncomeProjection> {
        self.current
    }

    pub fn slider(&self) -> &S {
        &self.slider
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// Handle one slider change (also used for the initial render)
    pub fn refresh(&mut self) -> AppResult<IncomeProjection> {
        let raw = self.slider.value();
        let index = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| DomainError::UnparsableSliderValue(raw.clone()))?;
        let projection = self.service.project(index)?;

        self.chart.set_dataset_values(&projection.chart_values())?;
        self.display.show(&IncomeLabels::from(&projection));
        self.current = Some(projection);
        self.chart.redraw()?;
        self.apply_track_fill();

        log_debug!(
            LogComponent::Application("IncomeBinding"),
            "position {} -> {} deliveries, piece-rate {} / guarantee {}",
            index,
            projection.deliveries,
            projection.per_piece_total,
            projection.guarantee_total
        );

        Ok(projection)
    }

    fn apply_track_fill(&mut self) {
        match SliderFill::from_bounds(self.slider.value_as_number(), self.slider.min(), self.slider.max()) {
            Ok(fill) => self.slider.set_track_background(&fill.css_background()),
            Err(e) => get_logger().warn(
                LogComponent::Application("IncomeBinding"),
                &format!("Slider track not restyled: {}", e),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{AppError, InfrastructureError};
    use crate::domain::income::SimulatorConfig;

    struct FakeSlider {
        value: String,
        min: f64,
        max: f64,
        background: Option<String>,
    }

    impl FakeSlider {
        fn at(value: &str) -> Self {
            Self { value: value.to_string(), min: 0.0, max: 2.0, background: None }
        }
    }

    impl SliderControl for FakeSlider {
        fn value(&self) -> String {
            self.value.clone()
        }
        fn value_as_number(&self) -> f64 {
            self.value.trim().parse().unwrap_or(f64::NAN)
        }
        fn min(&self) -> f64 {
            self.min
        }
        fn max(&self) -> f64 {
            self.max
        }
        fn set_track_background(&mut self, css: &str) {
            self.background = Some(css.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Vec<IncomeLabels>,
    }

    impl IncomeDisplay for RecordingDisplay {
        fn show(&mut self, labels: &IncomeLabels) {
            self.shown.push(labels.clone());
        }
    }

    #[derive(Default)]
    struct RecordingChart {
        values: Vec<f64>,
        redraws: usize,
        fail: bool,
    }

    impl BarChart for RecordingChart {
        fn set_dataset_values(&mut self, values: &[f64]) -> InfrastructureResult<()> {
            if self.fail {
                return Err(InfrastructureError::Chart("detached".to_string()));
            }
            self.values = values.to_vec();
            Ok(())
        }
        fn redraw(&mut self) -> InfrastructureResult<()> {
            self.redraws += 1;
            Ok(())
        }
    }

    fn binding(value: &str) -> IncomeBinding<FakeSlider, RecordingDisplay, RecordingChart> {
        let service = IncomeProjectionService::new(SimulatorConfig::default()).unwrap();
        IncomeBinding::new(service, FakeSlider::at(value), RecordingDisplay::default(), RecordingChart::default())
    }

    #[test]
    fn initial_refresh_fills_every_target() {
        let mut binding = binding("0");
        binding.refresh().unwrap();

        assert_eq!(
            binding.display().shown,
            vec![IncomeLabels {
                deliveries: "80".to_string(),
                per_piece_income: "374,400".to_string(),
                guarantee_income: "520,000".to_string(),
            }]
        );
        assert_eq!(binding.chart().values, vec![374_400.0, 520_000.0]);
        assert_eq!(binding.chart().redraws, 1);
        assert_eq!(
            binding.slider().background.as_deref(),
            Some("linear-gradient(to right, #14f195 0%, rgba(255, 255, 255, 0.1) 0%)")
        );
    }

    #[test]
    fn labels_and_chart_share_one_projection() {
        let mut binding = binding("2");
        let projection = binding.refresh().unwrap();

        let labels = binding.display().shown.last().cloned().unwrap();
        assert_eq!(labels, IncomeLabels::from(&projection));
        assert_eq!(binding.chart().values, projection.chart_values().to_vec());
        assert_eq!(labels.per_piece_income, "842,400");
        assert_eq!(binding.current(), Some(projection));
    }

    #[test]
    fn repeated_refresh_is_idempotent() {
        let mut binding = binding("1");
        binding.refresh().unwrap();
        let labels_once = binding.display().shown.last().cloned();
        let values_once = binding.chart().values.clone();
        let background_once = binding.slider().background.clone();

        binding.refresh().unwrap();
        assert_eq!(binding.display().shown.last().cloned(), labels_once);
        assert_eq!(binding.chart().values, values_once);
        assert_eq!(binding.slider().background, background_once);
        assert_eq!(
            background_once.as_deref(),
            Some("linear-gradient(to right, #14f195 50%, rgba(255, 255, 255, 0.1) 50%)")
        );
    }

    #[test]
    fn out_of_range_value_touches_nothing() {
        let mut binding = binding("3");
        let err = binding.refresh().unwrap_err();

        assert_eq!(err, AppError::Domain(DomainError::InvalidPosition { index: 3, len: 3 }));
        assert!(binding.display().shown.is_empty());
        assert!(binding.chart().values.is_empty());
        assert!(binding.slider().background.is_none());
        assert!(binding.current().is_none());
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let mut binding = binding("abc");
        assert_eq!(
            binding.refresh().unwrap_err(),
            AppError::Domain(DomainError::UnparsableSliderValue("abc".to_string()))
        );
    }

    #[test]
    fn chart_failure_is_propagated() {
        let service = IncomeProjectionService::new(SimulatorConfig::default()).unwrap();
        let chart = RecordingChart { fail: true, ..Default::default() };
        let mut binding = IncomeBinding::new(service, FakeSlider::at("1"), RecordingDisplay::default(), chart);
        assert!(matches!(binding.refresh(), Err(AppError::Infrastructure(InfrastructureError::Chart(_)))));
    }

    #[test]
    fn rejected_dataset_keeps_labels_on_previous_projection() {
        let mut binding = binding("0");
        let first = binding.refresh().unwrap();

        binding.chart.fail = true;
        binding.slider.value = "2".to_string();
        assert!(matches!(binding.refresh(), Err(AppError::Infrastructure(InfrastructureError::Chart(_)))));

        let labels = binding.display().shown.last().cloned().unwrap();
        assert_eq!(labels.per_piece_income, "374,400");
        assert_eq!(binding.display().shown.len(), 1);
        assert_eq!(binding.chart().values, vec![374_400.0, 520_000.0]);
        assert_eq!(binding.current(), Some(first));
        assert_eq!(
            binding.slider().background.as_deref(),
            Some("linear-gradient(to right, #14f195 0%, rgba(255, 255, 255, 0.1) 0%)")
        );
    }

    #[test]
    fn degenerate_track_bounds_skip_styling_only() {
        let service = IncomeProjectionService::new(SimulatorConfig::default()).unwrap();
        let slider = FakeSlider { min: 1.0, max: 1.0, ..FakeSlider::at("1") };
        let mut binding = IncomeBinding::new(service, slider, RecordingDisplay::default(), RecordingChart::default());
        binding.refresh().unwrap();
        assert!(binding.slider().background.is_none());
        assert_eq!(binding.chart().values, vec![561_600.0, 520_000.0]);
    }
}
