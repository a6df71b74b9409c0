//! Failure logging shared by every service
//!
//! Errors are logged once, where they are first seen, then returned unchanged.

use tracing::{error, warn};

use super::error::ServiceError;

/// Log a failed result with its service and operation name
pub trait LogFailure<T> {
    fn log_failure(self, service: &'static str, operation: &'static str) -> Result<T, ServiceError>;
}

impl<T, E> LogFailure<T> for Result<T, E>
where
    E: Into<ServiceError>,
{
    fn log_failure(self, service: &'static str, operation: &'static str) -> Result<T, ServiceError> {
        self.map_err(|e| {
            let e = e.into();
            if e.is_server_error() {
                error!(service, operation, error = %e, "Operation failed");
            } else {
                warn!(service, operation, code = e.error_code(), error = %e, "Operation rejected");
            }
            e
        })
    }
}
