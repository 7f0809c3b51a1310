use tracing::warn;

/// speed-up S = Ts / Tc of the sequential over the concurrent average time
///
/// Values above 1 mean the concurrent version finished faster. A concurrent
/// time of zero or below has no meaningful ratio and yields `None`.
pub fn calculate_speedup(seq_time: f64, conc_time: f64) -> Option<f64> {
    if conc_time <= 0.0 {
        warn!("Invalid concurrent time detected: {conc_time}");

        return None;
    }

    Some(seq_time / conc_time)
}
