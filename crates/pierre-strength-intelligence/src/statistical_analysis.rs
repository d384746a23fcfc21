// ABOUTME: Ordinary least squares fit of e1RM against session index
// ABOUTME: Total function with degenerate-input rules plus R-squared for diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_strength_core::models::E1rmHistoryPoint;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Result of a simple linear regression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Change in e1RM per session
    pub slope: f64,
    /// e1RM at session index zero
    pub intercept: f64,
    /// Coefficient of determination (0-1); `0.0` when undefined
    pub r_squared: f64,
    /// Number of points fitted
    pub sample_size: usize,
}

impl RegressionResult {
    /// Evaluate the fitted line at a session index
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn value_at(&self, session_index: f64) -> f64 {
        self.intercept + self.slope * session_index
    }
}

/// Linear regression over e1RM history
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit `e1rm = intercept + slope × session_index`
    ///
    /// Never fails:
    /// - no points: slope `0`, intercept `0`
    /// - one point: slope `0`, intercept is that point's e1RM
    /// - all points share one session index: slope `0`, intercept is the mean e1RM
    ///
    /// The fit is unfused: projections are rounded to one decimal and must
    /// match values computed with plain products and sums.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn linear_regression(points: &[E1rmHistoryPoint]) -> RegressionResult {
        let sample_size = points.len();
        if sample_size < 2 {
            return RegressionResult {
                slope: 0.0,
                intercept: points.first().map_or(0.0, |point| point.e1rm),
                r_squared: 0.0,
                sample_size,
            };
        }

        let n = sample_size as f64;
        let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
            (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64),
            |(sx, sy, sxy, sxx), point| {
                let x = f64::from(point.session_index);
                let y = point.e1rm;
                (sx + x, sy + y, sxy + x * y, sxx + x * x)
            },
        );

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator.abs() < f64::EPSILON {
            trace!(sample_size, "Zero variance in session index, flat fit");
            return RegressionResult {
                slope: 0.0,
                intercept: sum_y / n,
                r_squared: 0.0,
                sample_size,
            };
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;
        let r_squared = Self::r_squared(points, slope, intercept, sum_y / n);

        trace!(slope, intercept, r_squared, sample_size, "OLS fit");
        RegressionResult {
            slope,
            intercept,
            r_squared,
            sample_size,
        }
    }

    fn r_squared(points: &[E1rmHistoryPoint], slope: f64, intercept: f64, mean_y: f64) -> f64 {
        let (ss_res, ss_tot) = points.iter().fold((0.0_f64, 0.0_f64), |(res, tot), point| {
            let predicted = slope.mul_add(f64::from(point.session_index), intercept);
            let residual = point.e1rm - predicted;
            let deviation = point.e1rm - mean_y;
            (residual.mul_add(residual, res), deviation.mul_add(deviation, tot))
        });

        if ss_tot.abs() < f64::EPSILON {
            // Constant series: the flat line explains it entirely
            return if ss_res.abs() < f64::EPSILON { 1.0 } else { 0.0 };
        }
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    }
}
