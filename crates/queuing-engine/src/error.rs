//! Error types for queuing evaluation

use thiserror::Error;

/// Result type for queuing evaluation
pub type Result<T> = std::result::Result<T, QueuingError>;

/// Errors returned instead of a metric record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueuingError {
    /// Offered load meets or exceeds total service capacity (λ ≥ cμ)
    #[error("Unstable system (λ ≥ {}μ)", servers_label(.server_count))]
    Unstable {
        arrival_rate: f64,
        capacity: f64,
        server_count: u32,
    },

    /// Rates or server count outside the model's domain
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl QueuingError {
    /// Create an invalid request error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// True for the instability signal, false for validation failures
    pub fn is_unstable(&self) -> bool {
        matches!(self, Self::Unstable { .. })
    }
}

// "μ" for a single server, "cμ" with the concrete count otherwise
fn servers_label(server_count: &u32) -> String {
    if *server_count == 1 {
        String::new()
    } else {
        server_count.to_string()
    }
}
