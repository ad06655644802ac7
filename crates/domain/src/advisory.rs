//! Sowing advisory evaluator
//!
//! Classifies a daily forecast series into a Go/No-Go recommendation and a
//! qualitative rating using fixed temperature thresholds. The evaluator is a
//! pure function: total over any finite series, deterministic, and it never
//! raises. Malformed values (NaN) compare false against every threshold and
//! so count as neither warm nor frost days.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::forecast::ForecastSeries;

/// Number of leading days examined; days beyond this never affect the result
pub const EVALUATION_WINDOW_DAYS: usize = 14;

/// A day is warm when its mean temperature is at or above this, in Celsius
pub const WARM_DAY_MEAN_C: f64 = 8.0;

/// A day is a frost day when its minimum is strictly below this, in Celsius
pub const FROST_MIN_C: f64 = 2.0;

/// Warm days required for a Go recommendation (and the Good rating)
pub const REQUIRED_WARM_DAYS: u32 = 10;

/// Frost days tolerated by a Go recommendation (and the Good rating)
pub const MAX_FROST_DAYS: u32 = 2;

/// Warm days required for the Excellent rating
pub const EXCELLENT_WARM_DAYS: u32 = 12;

/// Frost days tolerated by the Excellent rating
pub const EXCELLENT_MAX_FROST_DAYS: u32 = 1;

/// Warm days required for the Marginal rating
pub const MARGINAL_WARM_DAYS: u32 = 5;

/// Binary sowing advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Conditions favor sowing
    Go,
    /// Wait for a better window
    NoGo,
}

impl Recommendation {
    /// Human-readable advisory label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Go => "Go (Good/Excellent)",
            Self::NoGo => "No-Go (Wait)",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Qualitative rating of the sowing window
///
/// Variants are declared worst-first so the derived ordering matches the
/// ladder: Poor < Marginal < Good < Excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Fewer than five warm days
    Poor,
    /// At least five warm days, regardless of frost
    Marginal,
    /// Enough warm days with tolerable frost
    Good,
    /// Plenty of warm days and at most one frost day
    Excellent,
}

impl Rating {
    /// Human-readable rating label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Marginal => "Marginal",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of evaluating a forecast series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Days in the window whose mean temperature reached the warm threshold
    pub warm_days: u32,
    /// Days in the window whose minimum fell below the frost threshold
    pub frost_days: u32,
    /// Binary sowing advisory
    pub recommendation: Recommendation,
    /// Qualitative rating
    pub rating: Rating,
}

/// Evaluate a forecast series against the sowing thresholds
///
/// Only the first `EVALUATION_WINDOW_DAYS` days are examined; shorter series
/// are evaluated over whatever is available, and an empty series yields
/// zero counts, `NoGo`, and `Poor`.
#[must_use]
pub fn evaluate(series: &ForecastSeries) -> Evaluation {
    let mut warm_days: u32 = 0;
    let mut frost_days: u32 = 0;

    for day in series.days().iter().take(EVALUATION_WINDOW_DAYS) {
        if day.mean_temp_c() >= WARM_DAY_MEAN_C {
            warm_days += 1;
        }
        if day.min_temp_c < FROST_MIN_C {
            frost_days += 1;
        }
    }

    let recommendation = if warm_days >= REQUIRED_WARM_DAYS && frost_days <= MAX_FROST_DAYS {
        Recommendation::Go
    } else {
        Recommendation::NoGo
    };

    // Ordered ladder, first match wins. The Marginal rung takes no frost
    // condition: a window with five warm days and daily frost still rates
    // Marginal, while the recommendation independently rejects it.
    let rating = if warm_days >= EXCELLENT_WARM_DAYS && frost_days <= EXCELLENT_MAX_FROST_DAYS {
        Rating::Excellent
    } else if warm_days >= REQUIRED_WARM_DAYS && frost_days <= MAX_FROST_DAYS {
        Rating::Good
    } else if warm_days >= MARGINAL_WARM_DAYS {
        Rating::Marginal
    } else {
        Rating::Poor
    };

    Evaluation {
        warm_days,
        frost_days,
        recommendation,
        rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::ForecastDay;

    // A warm day that is not a frost day: mean 9.0, min 6.0
    const WARM: ForecastDay = ForecastDay::new(12.0, 6.0);
    // A frost day that is not warm: mean 2.0, min 0.0
    const FROST: ForecastDay = ForecastDay::new(4.0, 0.0);
    // Both warm and frosty: mean 10.5, min 1.0
    const WARM_FROST: ForecastDay = ForecastDay::new(20.0, 1.0);
    // Neither: mean 7.0, min 4.0
    const MILD: ForecastDay = ForecastDay::new(10.0, 4.0);

    /// Build a 14-day window with the given day counts, padded with mild days
    fn window(warm: usize, frost: usize) -> ForecastSeries {
        assert!(warm + frost <= EVALUATION_WINDOW_DAYS);
        std::iter::repeat_n(WARM, warm)
            .chain(std::iter::repeat_n(FROST, frost))
            .chain(std::iter::repeat_n(
                MILD,
                EVALUATION_WINDOW_DAYS - warm - frost,
            ))
            .collect()
    }

    #[test]
    fn empty_series_is_no_go_poor() {
        let result = evaluate(&ForecastSeries::default());
        assert_eq!(result.warm_days, 0);
        assert_eq!(result.frost_days, 0);
        assert_eq!(result.recommendation, Recommendation::NoGo);
        assert_eq!(result.rating, Rating::Poor);
    }

    #[test]
    fn cold_fortnight_is_no_go_poor() {
        // 14 days of max=10, min=4: mean 7 < 8, min >= 2
        let series: ForecastSeries = std::iter::repeat_n(MILD, 14).collect();
        let result = evaluate(&series);
        assert_eq!(result.warm_days, 0);
        assert_eq!(result.frost_days, 0);
        assert_eq!(result.recommendation, Recommendation::NoGo);
        assert_eq!(result.rating, Rating::Poor);
    }

    #[test]
    fn warm_frost_free_fortnight_is_go_excellent() {
        // 14 days of max=12, min=6: mean 9 >= 8, min >= 2
        let series: ForecastSeries = std::iter::repeat_n(WARM, 14).collect();
        let result = evaluate(&series);
        assert_eq!(result.warm_days, 14);
        assert_eq!(result.frost_days, 0);
        assert_eq!(result.recommendation, Recommendation::Go);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn mean_threshold_is_inclusive() {
        // mean exactly 8.0 counts as warm
        let series = ForecastSeries::new(vec![ForecastDay::new(10.0, 6.0)]);
        assert_eq!(evaluate(&series).warm_days, 1);
    }

    #[test]
    fn frost_threshold_is_exclusive() {
        // min exactly 2.0 is not a frost day
        let series = ForecastSeries::new(vec![ForecastDay::new(10.0, 2.0)]);
        assert_eq!(evaluate(&series).frost_days, 0);

        let series = ForecastSeries::new(vec![ForecastDay::new(10.0, 1.9)]);
        assert_eq!(evaluate(&series).frost_days, 1);
    }

    #[test]
    fn boundary_ten_warm_two_frost_is_go_good() {
        let result = evaluate(&window(10, 2));
        assert_eq!(result.warm_days, 10);
        assert_eq!(result.frost_days, 2);
        assert_eq!(result.recommendation, Recommendation::Go);
        assert_eq!(result.rating, Rating::Good);
    }

    #[test]
    fn boundary_twelve_warm_two_frost_is_good_not_excellent() {
        let result = evaluate(&window(12, 2));
        assert_eq!(result.rating, Rating::Good);
        assert_eq!(result.recommendation, Recommendation::Go);
    }

    #[test]
    fn twelve_warm_one_frost_is_excellent() {
        let result = evaluate(&window(12, 1));
        assert_eq!(result.rating, Rating::Excellent);
        assert_eq!(result.recommendation, Recommendation::Go);
    }

    #[test]
    fn marginal_rung_ignores_frost() {
        // Every day below the frost threshold, five of them also warm:
        // the ladder still lands on Marginal while the recommendation
        // rejects on frost.
        let series: ForecastSeries = std::iter::repeat_n(WARM_FROST, 5)
            .chain(std::iter::repeat_n(ForecastDay::new(0.0, 1.0), 9))
            .collect();
        let result = evaluate(&series);
        assert_eq!(result.warm_days, 5);
        assert_eq!(result.frost_days, 14);
        assert_eq!(result.rating, Rating::Marginal);
        assert_eq!(result.recommendation, Recommendation::NoGo);
    }

    #[test]
    fn days_beyond_window_are_ignored() {
        let mut days = vec![WARM; 14];
        let base = evaluate(&ForecastSeries::new(days.clone()));

        // Append two frosty, cold days past index 13
        days.push(FROST);
        days.push(FROST);
        let extended = evaluate(&ForecastSeries::new(days));

        assert_eq!(base, extended);
    }

    #[test]
    fn short_series_evaluates_available_subset() {
        let series: ForecastSeries = std::iter::repeat_n(WARM, 3).collect();
        let result = evaluate(&series);
        assert_eq!(result.warm_days, 3);
        assert_eq!(result.frost_days, 0);
        assert_eq!(result.recommendation, Recommendation::NoGo);
        assert_eq!(result.rating, Rating::Poor);
    }

    #[test]
    fn nan_counts_as_neither_warm_nor_frost() {
        let series = ForecastSeries::new(vec![
            ForecastDay::new(f64::NAN, f64::NAN),
            ForecastDay::new(f64::NAN, 6.0),
            ForecastDay::new(12.0, f64::NAN),
        ]);
        let result = evaluate(&series);
        assert_eq!(result.warm_days, 0);
        assert_eq!(result.frost_days, 0);
        assert_eq!(result.recommendation, Recommendation::NoGo);
        assert_eq!(result.rating, Rating::Poor);
    }

    #[test]
    fn rating_order_matches_ladder() {
        assert!(Rating::Poor < Rating::Marginal);
        assert!(Rating::Marginal < Rating::Good);
        assert!(Rating::Good < Rating::Excellent);
    }

    #[test]
    fn labels_match_advisory_strings() {
        assert_eq!(Recommendation::Go.label(), "Go (Good/Excellent)");
        assert_eq!(Recommendation::NoGo.label(), "No-Go (Wait)");
        assert_eq!(Rating::Excellent.label(), "Excellent");
        assert_eq!(Rating::Poor.label(), "Poor");
    }

    #[test]
    fn evaluation_serializes_with_snake_case_enums() {
        let result = evaluate(&window(10, 2));
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(json.contains("\"go\""));
        assert!(json.contains("\"good\""));
    }
}
