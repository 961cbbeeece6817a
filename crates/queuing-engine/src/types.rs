//! Core types for queuing evaluation

use serde::{Deserialize, Serialize};

/// Largest supported server count; a < c keeps every aⁿ/n! term below e^170
pub const MAX_SERVERS: u32 = 170;

fn default_server_count() -> u32 {
    1
}

/// Inputs of a single evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueuingRequest {
    /// λ, customers per unit time
    pub arrival_rate: f64,
    /// μ, customers per unit time per server
    pub service_rate: f64,
    /// c, number of parallel servers sharing one queue
    #[serde(default = "default_server_count")]
    pub server_count: u32,
}

impl QueuingRequest {
    /// Create a single-server (M/M/1) request
    pub fn new(arrival_rate: f64, service_rate: f64) -> Self {
        QueuingRequest {
            arrival_rate,
            service_rate,
            server_count: default_server_count(),
        }
    }

    /// Same rates, `server_count` servers
    pub fn with_servers(self, server_count: u32) -> Self {
        QueuingRequest { server_count, ..self }
    }

    /// Offered load a = λ/μ (in Erlangs)
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    /// Total service capacity cμ
    pub fn capacity(&self) -> f64 {
        self.server_count as f64 * self.service_rate
    }

    /// Model selected by the server count
    pub fn model(&self) -> QueuingModel {
        match self.server_count {
            1 => QueuingModel::SingleServer,
            servers => QueuingModel::MultiServer { servers },
        }
    }
}

/// Queuing model in Kendall notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum QueuingModel {
    /// M/M/1
    SingleServer,
    /// M/M/c
    MultiServer { servers: u32 },
}

impl QueuingModel {
    /// Number of servers in the model
    pub fn servers(&self) -> u32 {
        match self {
            QueuingModel::SingleServer => 1,
            QueuingModel::MultiServer { servers } => *servers,
        }
    }
}

impl std::fmt::Display for QueuingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M/M/{}", self.servers())
    }
}

impl From<QueuingModel> for String {
    fn from(model: QueuingModel) -> Self {
        model.to_string()
    }
}

impl TryFrom<String> for QueuingModel {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        let servers = label
            .strip_prefix("M/M/")
            .and_then(|c| c.parse::<u32>().ok())
            .ok_or_else(|| format!("not an M/M/c model label: {label}"))?;

        match servers {
            0 => Err(format!("model needs at least one server: {label}")),
            1 => Ok(QueuingModel::SingleServer),
            servers => Ok(QueuingModel::MultiServer { servers }),
        }
    }
}

/// Steady-state performance metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueuingResult {
    /// Model the metrics were computed with
    pub model: QueuingModel,
    /// Probability the system is empty
    pub p0: f64,
    /// Expected number of customers in the system
    pub l: f64,
    /// Expected number of customers waiting
    pub lq: f64,
    /// Expected time in the system
    pub w: f64,
    /// Expected time waiting in queue
    pub wq: f64,
    /// Probability an arrival has to wait
    pub pw: f64,
    /// Server utilization λ/(cμ)
    pub rho: f64,
}
