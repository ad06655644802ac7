//! Daily forecast types consumed by the advisory evaluator

use serde::{Deserialize, Serialize};

/// Temperature extremes for one calendar day, in degrees Celsius
///
/// `max_temp_c >= min_temp_c` is expected but not enforced; malformed
/// values (including NaN) pass through arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Daily maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Daily minimum temperature in Celsius
    pub min_temp_c: f64,
}

impl ForecastDay {
    /// Create a forecast day from its temperature extremes
    #[must_use]
    pub const fn new(max_temp_c: f64, min_temp_c: f64) -> Self {
        Self {
            max_temp_c,
            min_temp_c,
        }
    }

    /// Midpoint of the daily extremes
    #[must_use]
    pub fn mean_temp_c(&self) -> f64 {
        (self.max_temp_c + self.min_temp_c) / 2.0
    }
}

/// An ordered sequence of daily forecasts, indexed from day 0 (today)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    days: Vec<ForecastDay>,
}

impl ForecastSeries {
    /// Create a series from a vector of days
    #[must_use]
    pub const fn new(days: Vec<ForecastDay>) -> Self {
        Self { days }
    }

    /// Build a series from parallel max/min sequences
    ///
    /// The sequences are zipped; if the lengths differ, the series is
    /// truncated to the shorter one.
    #[must_use]
    pub fn from_extremes(max_temps_c: &[f64], min_temps_c: &[f64]) -> Self {
        let days = max_temps_c
            .iter()
            .zip(min_temps_c.iter())
            .map(|(&max, &min)| ForecastDay::new(max, min))
            .collect();
        Self { days }
    }

    /// The days in chronological order
    #[must_use]
    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    /// Number of days in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the series is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<ForecastDay> for ForecastSeries {
    fn from_iter<I: IntoIterator<Item = ForecastDay>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_midpoint_of_extremes() {
        let day = ForecastDay::new(12.0, 6.0);
        assert!((day.mean_temp_c() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_of_nan_is_nan() {
        let day = ForecastDay::new(f64::NAN, 6.0);
        assert!(day.mean_temp_c().is_nan());
    }

    #[test]
    fn from_extremes_zips_in_order() {
        let series = ForecastSeries::from_extremes(&[10.0, 12.0], &[4.0, 6.0]);
        assert_eq!(series.len(), 2);
        assert!((series.days()[0].max_temp_c - 10.0).abs() < f64::EPSILON);
        assert!((series.days()[1].min_temp_c - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_extremes_truncates_to_shorter_sequence() {
        let series = ForecastSeries::from_extremes(&[10.0, 12.0, 14.0], &[4.0]);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn empty_series() {
        let series = ForecastSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn serialization_round_trip() {
        let series = ForecastSeries::from_extremes(&[10.0], &[4.0]);
        let json = serde_json::to_string(&series).expect("serialize");
        let deserialized: ForecastSeries = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(series, deserialized);
    }
}
