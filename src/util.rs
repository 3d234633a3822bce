use std::time::Duration;

/// Elapsed time in whole seconds, ties rounded to even
pub fn whole_seconds(elapsed: Duration) -> u64 {
    elapsed.as_secs_f64().round_ties_even() as u64
}

/// Share of `score` out of `total`, in percent.
/// An empty question set scores 0.
pub fn percentage(score: usize, total: usize) -> f64 {
    match total {
        0 => 0.0,
        total => score as f64 * 100.0 / total as f64,
    }
}
