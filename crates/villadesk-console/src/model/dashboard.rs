//! Dashboard summary figures.

use serde::{Deserialize, Serialize};

/// How many recent interactions the estimate window considers at most.
pub const ESTIMATE_WINDOW_CAP: u64 = 100;

/// The four dashboard figures.
///
/// `active_properties` and `voice_calls_today` are real counts.
/// `avg_response_time` and `satisfaction_score` are estimates derived from
/// the last seven days of interaction volume; there is no latency or survey
/// telemetry behind them, so the response carries `metricsEstimated: true`
/// and the derivation is deterministic (same inputs, same figures).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_properties: u64,
    pub voice_calls_today: u64,
    pub avg_response_time: String,
    pub satisfaction_score: String,
    pub metrics_estimated: bool,
}

impl DashboardStats {
    pub fn from_counts(active_properties: u64, voice_calls_today: u64, recent_week: u64) -> Self {
        let window = recent_week.min(ESTIMATE_WINDOW_CAP);

        // Busier weeks shorten the estimated response time, floored at 1.0s;
        // a quiet week reports the neutral 2.1s baseline.
        let avg_response_time = if window == 0 {
            "2.1s".to_string()
        } else {
            format!("{:.1}s", 3.0 - window as f64 * 0.02)
        };

        let satisfaction_score = format!("{}%", (window * 2 + 85).min(100));

        Self {
            active_properties,
            voice_calls_today,
            avg_response_time,
            satisfaction_score,
            metrics_estimated: true,
        }
    }
}
