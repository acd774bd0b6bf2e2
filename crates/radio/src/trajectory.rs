//! Range-rate lookup over a precomputed pass

use std::time::{Duration, SystemTime};

/// Source of the satellite's range rate as seen from the ground station.
pub trait TrajectoryProvider: Send + Sync {
    /// Range rate in km/s of the sample closest to `at`.
    fn nearest_range_rate(&self, at: SystemTime) -> f64;
}

/// Time series of `(timestamp, range_rate_km_s)` samples, in any order.
#[derive(Debug, Clone, Default)]
pub struct SampledTrajectory {
    samples: Vec<(SystemTime, f64)>,
}

impl SampledTrajectory {
    pub fn new(samples: Vec<(SystemTime, f64)>) -> Self {
        Self { samples }
    }

    /// `points` samples one second apart starting 6 s from now, all at zero range rate.
    pub fn stationary(points: usize) -> Self {
        let start = SystemTime::now() + Duration::from_secs(6);
        Self::new(
            (0..points)
                .map(|i| (start + Duration::from_secs(i as u64), 0.0))
                .collect(),
        )
    }

    /// Samples `step` apart starting at `start`, ramping linearly from
    /// `from_km_s` to `to_km_s` (a receding-to-approaching pass is negative to positive).
    pub fn linear(start: SystemTime, step: Duration, points: usize, from_km_s: f64, to_km_s: f64) -> Self {
        let span = points.saturating_sub(1).max(1) as f64;
        Self::new(
            (0..points)
                .map(|i| {
                    let rate = from_km_s + (to_km_s - from_km_s) * i as f64 / span;
                    (start + step * i as u32, rate)
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn distance(a: SystemTime, b: SystemTime) -> Duration {
    a.duration_since(b).or_else(|_| b.duration_since(a)).unwrap_or(Duration::ZERO)
}

impl TrajectoryProvider for SampledTrajectory {
    fn nearest_range_rate(&self, at: SystemTime) -> f64 {
        self.samples
            .iter()
            .min_by_key(|(t, _)| distance(*t, at))
            .map(|(_, rate)| *rate)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn test_nearest_sample() {
        let t0 = UNIX_EPOCH + Duration::from_secs(1_000);
        let pass = SampledTrajectory::new(vec![
            (t0, -7.0),
            (t0 + Duration::from_secs(10), 0.5),
            (t0 + Duration::from_secs(20), 7.0),
        ]);
        assert_eq!(pass.nearest_range_rate(t0 - Duration::from_secs(100)), -7.0);
        assert_eq!(pass.nearest_range_rate(t0 + Duration::from_secs(12)), 0.5);
        assert_eq!(pass.nearest_range_rate(t0 + Duration::from_secs(16)), 7.0);
        assert_eq!(pass.nearest_range_rate(t0 + Duration::from_secs(900)), 7.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(SampledTrajectory::default().nearest_range_rate(SystemTime::now()), 0.0);
    }

    #[test]
    fn test_linear_pass() {
        let t0 = UNIX_EPOCH;
        let pass = SampledTrajectory::linear(t0, Duration::from_secs(1), 5, -4.0, 4.0);
        assert_eq!(pass.len(), 5);
        assert_eq!(pass.nearest_range_rate(t0), -4.0);
        assert_eq!(pass.nearest_range_rate(t0 + Duration::from_secs(2)), 0.0);
        assert_eq!(pass.nearest_range_rate(t0 + Duration::from_secs(4)), 4.0);
    }

    #[test]
    fn test_stationary() {
        let pass = SampledTrajectory::stationary(45);
        assert_eq!(pass.len(), 45);
        assert_eq!(pass.nearest_range_rate(SystemTime::now()), 0.0);
    }
}
