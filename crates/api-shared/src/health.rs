use crate::dto::HealthRes;

/// Name the service reports in health and info responses.
pub const SERVICE_NAME: &str = "stroke-risk-api";

/// Simple health service that can be used by any transport
///
/// This service provides a standardised way to check the health status of the stroke risk
/// service. It holds no state.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` reporting the service as healthy, stamped with the current UTC time.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            service: SERVICE_NAME.into(),
        }
    }
}
