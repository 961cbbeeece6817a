//! Batch evaluation of named scenarios and their text/JSON rendering

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{QueuingRequest, QueuingResult};

/// A named request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub request: QueuingRequest,
}

impl Scenario {
    /// Create a scenario from a label and a request
    pub fn new(label: impl Into<String>, request: QueuingRequest) -> Self {
        Scenario {
            label: label.into(),
            request,
        }
    }
}

/// Outcome of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Stable { result: QueuingResult },
    Unstable { error: String },
    Invalid { error: String },
}

/// A scenario together with its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub label: String,
    pub request: QueuingRequest,
    pub outcome: Outcome,
}

impl ScenarioReport {
    /// Metrics of a stable scenario, `None` otherwise
    pub fn result(&self) -> Option<&QueuingResult> {
        match &self.outcome {
            Outcome::Stable { result } => Some(result),
            _ => None,
        }
    }
}

/// The two demonstration scenarios: M/M/1 (λ=2, μ=3) and M/M/2 (λ=4, μ=3)
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("M/M/1 Example", QueuingRequest::new(2.0, 3.0)),
        Scenario::new(
            "M/M/2 Example",
            QueuingRequest::new(4.0, 3.0).with_servers(2),
        ),
    ]
}

/// Evaluate every scenario; a failing scenario never aborts the batch
pub fn evaluate_all(scenarios: &[Scenario]) -> Vec<ScenarioReport> {
    scenarios
        .iter()
        .map(|scenario| {
            let outcome = match scenario.request.evaluate() {
                Ok(result) => Outcome::Stable { result },
                Err(err) if err.is_unstable() => Outcome::Unstable {
                    error: err.to_string(),
                },
                Err(err) => Outcome::Invalid {
                    error: err.to_string(),
                },
            };
            info!(scenario = %scenario.label, status = outcome_status(&outcome), "Scenario evaluated");

            ScenarioReport {
                label: scenario.label.clone(),
                request: scenario.request,
                outcome,
            }
        })
        .collect()
}

fn outcome_status(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Stable { .. } => "stable",
        Outcome::Unstable { .. } => "unstable",
        Outcome::Invalid { .. } => "invalid",
    }
}

/// Fixed-width table, one row per report, metrics to 4 decimal places
pub fn render_table(reports: &[ScenarioReport]) -> String {
    let mut out = format!(
        "{:<20} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
        "Scenario", "Model", "rho", "P0", "L", "Lq", "W", "Wq", "Pw"
    );
    out.push_str(&"-".repeat(92));
    out.push('\n');

    for report in reports {
        let row = match &report.outcome {
            Outcome::Stable { result } => format!(
                "{:<20} {:>8} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
                report.label,
                result.model.to_string(),
                result.rho,
                result.p0,
                result.l,
                result.lq,
                result.w,
                result.wq,
                result.pw,
            ),
            Outcome::Unstable { error } | Outcome::Invalid { error } => format!(
                "{:<20} {:>8} {}",
                report.label,
                report.request.model().to_string(),
                error
            ),
        };
        out.push_str(&row);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenarios() {
        let scenarios = reference_scenarios();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].request, QueuingRequest::new(2.0, 3.0));
        assert_eq!(scenarios[1].request.server_count, 2);
    }

    #[test]
    fn test_evaluate_all_keeps_going_after_failures() {
        let scenarios = vec![
            Scenario::new("saturated", QueuingRequest::new(3.0, 3.0)),
            Scenario::new("broken", QueuingRequest::new(2.0, 3.0).with_servers(0)),
            Scenario::new("light", QueuingRequest::new(1.0, 3.0)),
        ];

        let reports = evaluate_all(&scenarios);
        assert_eq!(reports.len(), 3);
        assert!(matches!(reports[0].outcome, Outcome::Unstable { .. }));
        assert!(matches!(reports[1].outcome, Outcome::Invalid { .. }));
        assert!(reports[2].result().is_some());
    }

    #[test]
    fn test_report_json_shape() {
        let reports = evaluate_all(&[
            Scenario::new("ok", QueuingRequest::new(2.0, 3.0)),
            Scenario::new("saturated", QueuingRequest::new(10.0, 3.0).with_servers(3)),
        ]);
        let json = serde_json::to_value(&reports).unwrap();

        assert_eq!(json[0]["outcome"]["status"], "stable");
        assert_eq!(json[0]["outcome"]["result"]["model"], "M/M/1");
        assert_eq!(json[0]["outcome"]["result"]["l"], 2.0);
        assert_eq!(json[1]["outcome"]["status"], "unstable");
        assert_eq!(json[1]["outcome"]["error"], "Unstable system (λ ≥ 3μ)");
        assert!(json[1]["outcome"].get("result").is_none());
    }

    #[test]
    fn test_render_table() {
        let mut scenarios = reference_scenarios();
        scenarios.push(Scenario::new("saturated", QueuingRequest::new(3.0, 3.0)));
        let table = render_table(&evaluate_all(&scenarios));

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Scenario"));
        assert!(lines[2].contains("M/M/1"));
        assert!(lines[2].contains("0.6667"));
        assert!(lines[2].contains("2.0000"));
        assert!(lines[3].contains("M/M/2"));
        assert!(lines[4].contains("Unstable system (λ ≥ μ)"));
    }
}
