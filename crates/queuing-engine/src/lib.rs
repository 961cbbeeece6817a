//! Queuing Engine
//!
//! Steady-state performance metrics for M/M/1 and M/M/c queues: Poisson
//! arrivals, exponential service, one shared FIFO queue.
//!
//! ```
//! use queuing_engine::evaluate;
//!
//! let metrics = evaluate(2.0, 3.0, 1).unwrap();
//! assert_eq!(metrics.model.to_string(), "M/M/1");
//! assert!((metrics.l - 2.0).abs() < 1e-12);
//!
//! let err = evaluate(10.0, 3.0, 3).unwrap_err();
//! assert_eq!(err.to_string(), "Unstable system (λ ≥ 3μ)");
//! ```
//!
//! The multi-server branch uses a shortened Erlang-C normalization sum;
//! see [`evaluator`] for how that differs from textbook tables.

#![warn(clippy::all)]

pub mod error;
pub mod evaluator;
pub mod report;
pub mod types;

pub use error::{QueuingError, Result};
pub use evaluator::{QueuingEvaluator, evaluate};
pub use report::{Outcome, Scenario, ScenarioReport, evaluate_all, reference_scenarios, render_table};
pub use types::{MAX_SERVERS, QueuingModel, QueuingRequest, QueuingResult};
