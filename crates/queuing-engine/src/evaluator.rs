//! Closed-form evaluation of M/M/1 and M/M/c queues
//!
//! Every evaluation runs in three steps:
//! 1. Validate rates and server count
//! 2. Stability check: λ < cμ, otherwise [`QueuingError::Unstable`]
//! 3. Evaluate the single-server or multi-server formulas
//!
//! ## Erlang-C normalization
//!
//! The multi-server branch normalizes P0 with `Σ_{n=0}^{c-2} aⁿ/n!`, one term
//! short of the textbook Erlang-C range (`n = 0..=c-1`). Results for c > 1
//! therefore differ from published Erlang-C tables: P0 comes out higher and
//! Pw/Lq lower. The relations L = Lq + a, Wq = Lq/λ and W = Wq + 1/μ still
//! hold exactly.

use tracing::{debug, trace, warn};

use crate::error::{QueuingError, Result};
use crate::types::{MAX_SERVERS, QueuingModel, QueuingRequest, QueuingResult};

/// Evaluate steady-state metrics for λ = `arrival_rate`, μ = `service_rate`
/// and c = `server_count`.
///
/// Callers are expected to pass λ > 0, μ > 0 and 1 ≤ c; anything else is
/// rejected with [`QueuingError::InvalidRequest`].
pub fn evaluate(arrival_rate: f64, service_rate: f64, server_count: u32) -> Result<QueuingResult> {
    QueuingEvaluator.evaluate(&QueuingRequest {
        arrival_rate,
        service_rate,
        server_count,
    })
}

/// Stateless evaluator; every call is independent and side-effect free
#[derive(Debug, Clone, Copy, Default)]
pub struct QueuingEvaluator;

impl QueuingEvaluator {
    /// Evaluate a request, picking the model from its server count
    pub fn evaluate(&self, request: &QueuingRequest) -> Result<QueuingResult> {
        validate(request)?;
        check_stability(request)?;

        let model = request.model();
        debug!(
            model = %model,
            arrival_rate = request.arrival_rate,
            service_rate = request.service_rate,
            "Evaluating queuing model"
        );

        let result = match model {
            QueuingModel::SingleServer => single_server(request),
            QueuingModel::MultiServer { servers } => multi_server(request, servers),
        };

        ensure_finite(&result)?;
        trace!(?result, "Evaluation complete");
        Ok(result)
    }
}

impl QueuingRequest {
    /// Shorthand for [`QueuingEvaluator::evaluate`]
    pub fn evaluate(&self) -> Result<QueuingResult> {
        QueuingEvaluator.evaluate(self)
    }
}

fn validate(request: &QueuingRequest) -> Result<()> {
    if !(request.arrival_rate.is_finite() && request.arrival_rate > 0.0) {
        return Err(QueuingError::invalid(format!(
            "arrival_rate must be a positive finite number, got {}",
            request.arrival_rate
        )));
    }
    if !(request.service_rate.is_finite() && request.service_rate > 0.0) {
        return Err(QueuingError::invalid(format!(
            "service_rate must be a positive finite number, got {}",
            request.service_rate
        )));
    }
    if request.server_count == 0 {
        return Err(QueuingError::invalid("server_count must be at least 1"));
    }
    if request.server_count > MAX_SERVERS {
        return Err(QueuingError::invalid(format!(
            "server_count must be at most {MAX_SERVERS}, got {}",
            request.server_count
        )));
    }
    if !request.capacity().is_finite() {
        return Err(QueuingError::invalid(format!(
            "capacity cμ overflows: {} servers at service_rate {}",
            request.server_count, request.service_rate
        )));
    }
    Ok(())
}

/// Rejects results whose metrics left the f64 range
fn ensure_finite(result: &QueuingResult) -> Result<()> {
    let metrics = [
        ("p0", result.p0),
        ("l", result.l),
        ("lq", result.lq),
        ("w", result.w),
        ("wq", result.wq),
        ("pw", result.pw),
        ("rho", result.rho),
    ];
    match metrics.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(QueuingError::invalid(format!(
            "{} for {} is not finite ({value}); rates are outside the representable range",
            name, result.model
        ))),
        None => Ok(()),
    }
}

/// λ ≥ cμ means the queue grows without bound
fn check_stability(request: &QueuingRequest) -> Result<()> {
    let capacity = request.capacity();
    if request.arrival_rate >= capacity {
        warn!(
            arrival_rate = request.arrival_rate,
            capacity,
            server_count = request.server_count,
            "Unstable queuing system"
        );
        return Err(QueuingError::Unstable {
            arrival_rate: request.arrival_rate,
            capacity,
            server_count: request.server_count,
        });
    }
    Ok(())
}

/// M/M/1 metrics; requires λ < μ
fn single_server(request: &QueuingRequest) -> QueuingResult {
    let lambda = request.arrival_rate;
    let mu = request.service_rate;
    let rho = lambda / mu;

    QueuingResult {
        model: QueuingModel::SingleServer,
        p0: 1.0 - rho,
        l: lambda / (mu - lambda),
        lq: lambda.powi(2) / (mu * (mu - lambda)),
        w: 1.0 / (mu - lambda),
        wq: lambda / (mu * (mu - lambda)),
        // Pw equals utilization for a single server
        pw: rho,
        rho,
    }
}

/// M/M/c metrics; requires λ < cμ and 2 ≤ c ≤ MAX_SERVERS
fn multi_server(request: &QueuingRequest, servers: u32) -> QueuingResult {
    let lambda = request.arrival_rate;
    let mu = request.service_rate;
    let c = servers as f64;
    let a = request.offered_load();
    let rho = lambda / (c * mu);
    let headroom = c * mu - lambda;

    let terms = poisson_terms(a, servers);
    let last = servers as usize;

    // n runs over 0..=c-2 (see module docs)
    let sum_part: f64 = terms[..last - 1].iter().sum();

    // a^c/c! × cμ/(cμ − λ)
    let erlang_term = terms[last] * (c * mu) / headroom;
    let p0 = 1.0 / (sum_part + erlang_term);
    trace!(sum_part, erlang_term, p0, "Erlang-C normalization");

    let pw = erlang_term * p0;
    // a^c/(c−1)! × λμ/(cμ − λ)², the rate product split to stay in range
    let lq = terms[last] * c * (lambda / headroom) * (mu / headroom) * p0;
    let l = lq + a;
    let wq = lq / lambda;
    let w = wq + 1.0 / mu;

    QueuingResult {
        model: QueuingModel::MultiServer { servers },
        p0,
        l,
        lq,
        w,
        wq,
        pw,
        rho,
    }
}

/// aⁿ/n! for n = 0..=servers, built as a running product of a/k.
///
/// Each term peaks near n ≈ a at roughly eᵃ, so the sequence stays finite for
/// every a < MAX_SERVERS even where aⁿ or n! alone would overflow.
fn poisson_terms(a: f64, servers: u32) -> Vec<f64> {
    let mut terms = Vec::with_capacity(servers as usize + 1);
    let mut term = 1.0;
    terms.push(term);
    for k in 1..=servers {
        term *= a / f64::from(k);
        terms.push(term);
    }
    terms
}
