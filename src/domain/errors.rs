use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the entire page
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Domain(DomainError),
    Infrastructure(InfrastructureError),
    Presentation(PresentationError),
}

/// Domain rule violations
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Slider index outside the configured delivery steps
    InvalidPosition { index: usize, len: usize },
    /// Slider reported a value that is not a step index
    UnparsableSliderValue(String),
    /// Product of deliveries, price and days does not fit in u64
    AmountOverflow { deliveries: u32, unit_price: u64, working_days: u32 },
    InvalidSliderBounds { min: f64, max: f64 },
    InvalidConfiguration(String),
    EmptyQuestion,
}

/// Browser, network and chart-library failures
#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Network(NetworkError),
    Browser(String),
    Chart(String),
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    HttpRequestFailed(String),
    HttpStatus { status: u16, status_text: String },
    InvalidResponse(String),
}

/// DOM wiring errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    ElementNotFound(&'static str),
    ElementType(&'static str),
    EventBinding(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Domain(e) => write!(f, "Domain Error: {}", e),
            AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
            AppError::Presentation(e) => write!(f, "Presentation Error: {}", e),
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidPosition { index, len } => {
                write!(f, "Slider position {} is outside 0..{}", index, len)
            }
            DomainError::UnparsableSliderValue(raw) => {
                write!(f, "Slider value '{}' is not a step index", raw)
            }
            DomainError::AmountOverflow { deliveries, unit_price, working_days } => write!(
                f,
                "Income overflow: {} × {} × {}",
                deliveries, unit_price, working_days
            ),
            DomainError::InvalidSliderBounds { min, max } => {
                write!(f, "Slider bounds [{}, {}] are empty", min, max)
            }
            DomainError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            DomainError::EmptyQuestion => write!(f, "Question is empty"),
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Network(e) => write!(f, "Network: {}", e),
            InfrastructureError::Browser(msg) => write!(f, "Browser API: {}", msg),
            InfrastructureError::Chart(msg) => write!(f, "Chart: {}", msg),
            InfrastructureError::Serialization(msg) => write!(f, "Serialization: {}", msg),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::HttpRequestFailed(msg) => write!(f, "request failed: {}", msg),
            NetworkError::HttpStatus { status, status_text } => {
                write!(f, "HTTP error: {} - {}", status, status_text)
            }
            NetworkError::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl Display for PresentationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PresentationError::ElementNotFound(id) => write!(f, "element '{}' not found", id),
            PresentationError::ElementType(id) => write!(f, "element '{}' has unexpected type", id),
            PresentationError::EventBinding(msg) => write!(f, "event binding failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for DomainError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for PresentationError {}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<PresentationError> for AppError {
    fn from(error: PresentationError) -> Self {
        AppError::Presentation(error)
    }
}

impl From<NetworkError> for InfrastructureError {
    fn from(error: NetworkError) -> Self {
        InfrastructureError::Network(error)
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(error: serde_json::Error) -> Self {
        InfrastructureError::Serialization(error.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_position_message_names_range() {
        let err = AppError::from(DomainError::InvalidPosition { index: 3, len: 3 });
        assert_eq!(err.to_string(), "Domain Error: Slider position 3 is outside 0..3");
    }

    #[test]
    fn http_status_is_wrapped_as_network() {
        let err: InfrastructureError = NetworkError::HttpStatus {
            status: 403,
            status_text: "Forbidden".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Network: HTTP error: 403 - Forbidden");
    }
}
