/// Statistical baseline over a historical discharge series.
///
/// Produces the median, the 95th-index "high water mark", and the maximum
/// of the lookback window. The classifier compares today's discharge
/// against these to flag statistical anomalies without any official
/// confirmation.

use crate::model::{DischargeBaseline, DischargeSeries};

/// Computes summary statistics from a historical discharge series.
///
/// Days with absent values are filtered out first. Returns `None` when no
/// values remain — callers must treat that as "insufficient data", never
/// as a baseline of zeros.
///
/// The high water mark is the sorted value at index `floor(n * 0.95)`.
/// This is a deliberate direct index pick rather than an interpolated
/// percentile; the anomaly thresholds downstream are calibrated to it,
/// so upgrading it to a standard percentile algorithm would silently
/// move classification boundaries.
pub fn compute_baseline(series: &DischargeSeries) -> Option<DischargeBaseline> {
    let mut values: Vec<f64> = series.points.iter().filter_map(|p| p.discharge).collect();
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len();
    let mid = n / 2;
    let median = if n % 2 != 0 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    };

    // floor(n * 0.95) is always < n for n >= 1, so the index is in bounds.
    let p95_index = (n as f64 * 0.95).floor() as usize;
    let high_water_mark = values[p95_index];

    let max = values[n - 1];

    Some(DischargeBaseline {
        median,
        high_water_mark,
        max,
        sample_size: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Builds a contiguous daily series starting 2024-01-01.
    fn series(values: Vec<Option<f64>>) -> DischargeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..values.len())
            .map(|i| start + chrono::Days::new(i as u64))
            .collect();
        DischargeSeries::from_daily(dates, values).unwrap()
    }

    #[test]
    fn test_all_absent_series_yields_no_baseline() {
        let result = compute_baseline(&series(vec![None, None, None]));
        assert_eq!(result, None, "gaps only must signal insufficient data");
    }

    #[test]
    fn test_empty_series_yields_no_baseline() {
        assert_eq!(compute_baseline(&series(vec![])), None);
    }

    #[test]
    fn test_single_value_baseline() {
        let baseline = compute_baseline(&series(vec![Some(42.0)])).unwrap();
        assert_eq!(baseline.median, 42.0);
        assert_eq!(baseline.high_water_mark, 42.0);
        assert_eq!(baseline.max, 42.0);
        assert_eq!(baseline.sample_size, 1);
    }

    #[test]
    fn test_median_odd_count_is_middle_element() {
        let baseline = compute_baseline(&series(vec![Some(30.0), Some(10.0), Some(20.0)])).unwrap();
        assert_eq!(baseline.median, 20.0);
    }

    #[test]
    fn test_median_even_count_averages_two_middles() {
        let baseline =
            compute_baseline(&series(vec![Some(40.0), Some(10.0), Some(20.0), Some(30.0)]))
                .unwrap();
        assert_eq!(baseline.median, 25.0);
    }

    #[test]
    fn test_gaps_excluded_from_sample_size() {
        let baseline =
            compute_baseline(&series(vec![Some(10.0), None, Some(20.0), None, Some(30.0)]))
                .unwrap();
        assert_eq!(baseline.sample_size, 3);
        assert_eq!(baseline.median, 20.0);
    }

    #[test]
    fn test_uniform_history_with_single_outlier() {
        // 89 days at 10 m³/s plus one 100 m³/s outlier. The 95th-index pick
        // lands on 10 (index floor(90*0.95)=85, still inside the uniform
        // run), while max captures the outlier.
        let mut values: Vec<Option<f64>> = vec![Some(10.0); 89];
        values.push(Some(100.0));
        let baseline = compute_baseline(&series(values)).unwrap();

        assert_eq!(baseline.median, 10.0);
        assert_eq!(baseline.high_water_mark, 10.0);
        assert_eq!(baseline.max, 100.0);
        assert_eq!(baseline.sample_size, 90);
    }

    #[test]
    fn test_ordering_invariant_median_hwm_max() {
        let values: Vec<Option<f64>> = (1..=60).map(|i| Some(i as f64 * 3.7)).collect();
        let baseline = compute_baseline(&series(values)).unwrap();
        assert!(baseline.median <= baseline.high_water_mark);
        assert!(baseline.high_water_mark <= baseline.max);
    }

    #[test]
    fn test_p95_index_on_twenty_values() {
        // n=20: floor(20*0.95) = 19, the last element.
        let values: Vec<Option<f64>> = (1..=20).map(|i| Some(i as f64)).collect();
        let baseline = compute_baseline(&series(values)).unwrap();
        assert_eq!(baseline.high_water_mark, 20.0);
        assert_eq!(baseline.max, 20.0);
    }

    #[test]
    fn test_p95_index_on_hundred_values() {
        // n=100: floor(100*0.95) = 95, i.e. the 96th smallest value.
        let values: Vec<Option<f64>> = (1..=100).map(|i| Some(i as f64)).collect();
        let baseline = compute_baseline(&series(values)).unwrap();
        assert_eq!(baseline.high_water_mark, 96.0);
        assert_eq!(baseline.max, 100.0);
        assert_eq!(baseline.median, 50.5);
    }
}
