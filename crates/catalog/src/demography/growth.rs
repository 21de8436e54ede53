//! Time conversion and exponential growth helpers.
//!
//! Coalescent time runs backwards from the present (time 0). A population
//! with size `N0` and growth rate `r` at time `t0` has size
//! `N0 * exp(-r * (t - t0))` at an older time `t`, so a positive rate means
//! the population has been growing towards the present.

/// Convert a duration in years to generations.
pub fn years_to_generations(years: f64, generation_time: f64) -> f64 {
    years / generation_time
}

/// Size at the recent (present-facing) end of an epoch of exponential
/// growth, given the size at the older end.
///
/// `size_start = size_end / exp(-rate * duration)`
///
/// ```rust
/// # use popcat_catalog::demography::size_at_epoch_start;
/// // No growth, no change.
/// assert_eq!(size_at_epoch_start(1000.0, 0.0, 848.0), 1000.0);
/// // Growth towards the present gives a larger present-day size.
/// assert!(size_at_epoch_start(1000.0, 0.004, 848.0) > 1000.0);
/// ```
pub fn size_at_epoch_start(size_end: f64, rate: f64, duration: f64) -> f64 {
    size_end / (-rate * duration).exp()
}

/// Size `elapsed` generations into an epoch that started at `start_size`.
///
/// A zero rate keeps the size constant even over an infinite interval.
pub fn size_after(start_size: f64, rate: f64, elapsed: f64) -> f64 {
    if rate == 0.0 {
        start_size
    } else {
        start_size * (-rate * elapsed).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_years_to_generations() {
        assert_eq!(years_to_generations(21.2e3, 25.0), 848.0);
        assert_eq!(years_to_generations(5115.0, 25.0), 204.6);
    }

    #[test]
    fn test_size_at_epoch_start_inverts_size_after() {
        let start = size_at_epoch_start(510.0, 0.0055, 848.0);
        assert_relative_eq!(size_after(start, 0.0055, 848.0), 510.0, max_relative = 1e-12);
    }

    #[test]
    fn test_size_after_infinite_elapsed() {
        assert_eq!(size_after(100.0, 0.0, f64::INFINITY), 100.0);
        assert_eq!(size_after(100.0, 0.01, f64::INFINITY), 0.0);
        assert_eq!(size_after(100.0, -0.01, f64::INFINITY), f64::INFINITY);
    }
}
