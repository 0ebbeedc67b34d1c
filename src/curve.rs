//! Target curve shapes for playlist reordering.
//!
//! Each curve maps a normalized playlist position `t ∈ (0, 1]` to the
//! relative "intensity" a track at that position should have. Only the rank
//! order of the values matters to the reorderer, not their magnitude.
//!
//! | # | Name                 | f(t)                          |
//! |---|----------------------|-------------------------------|
//! | 1 | `positive-linear`    | `t`                           |
//! | 2 | `negative-linear`    | `1 - t`                       |
//! | 3 | `positive-quadratic` | `4t² - 4t + 1`                |
//! | 4 | `negative-quadratic` | `-4t² + 4t`                   |
//! | 5 | `positive-cubic`     | `9t³ - 13.5t² + 5.5t`         |
//! | 6 | `negative-cubic`     | `-9t³ + 13.5t² - 5.5t + 1`    |

use crate::error::ReorderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six supported target shapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveSelector {
    /// Steady climb from quiet to intense
    #[default]
    PositiveLinear,
    /// Steady wind-down
    NegativeLinear,
    /// Intense at both ends, calm in the middle
    PositiveQuadratic,
    /// Calm at both ends, peak in the middle
    NegativeQuadratic,
    /// Rise, dip, then rise again
    PositiveCubic,
    /// Fall, recover, then fall again
    NegativeCubic,
}

impl CurveSelector {
    /// All curves in menu order (1-6)
    pub const ALL: [Self; 6] = [
        Self::PositiveLinear,
        Self::NegativeLinear,
        Self::PositiveQuadratic,
        Self::NegativeQuadratic,
        Self::PositiveCubic,
        Self::NegativeCubic,
    ];

    /// Look up a curve by its menu number (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`ReorderError::InvalidSelector`] for anything outside `1..=6`.
    pub fn from_number(number: u8) -> Result<Self, ReorderError> {
        match number {
            1..=6 => Ok(Self::ALL[usize::from(number - 1)]),
            other => Err(ReorderError::InvalidSelector(other.to_string())),
        }
    }

    /// Menu number of this curve (1-based)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::PositiveLinear => 1,
            Self::NegativeLinear => 2,
            Self::PositiveQuadratic => 3,
            Self::NegativeQuadratic => 4,
            Self::PositiveCubic => 5,
            Self::NegativeCubic => 6,
        }
    }

    /// Kebab-case name, as accepted on the command line and in config files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PositiveLinear => "positive-linear",
            Self::NegativeLinear => "negative-linear",
            Self::PositiveQuadratic => "positive-quadratic",
            Self::NegativeQuadratic => "negative-quadratic",
            Self::PositiveCubic => "positive-cubic",
            Self::NegativeCubic => "negative-cubic",
        }
    }

    /// Closed form, for display
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::PositiveLinear => "t",
            Self::NegativeLinear => "1 - t",
            Self::PositiveQuadratic => "4t^2 - 4t + 1",
            Self::NegativeQuadratic => "-4t^2 + 4t",
            Self::PositiveCubic => "9t^3 - 13.5t^2 + 5.5t",
            Self::NegativeCubic => "-9t^3 + 13.5t^2 - 5.5t + 1",
        }
    }

    /// Evaluate the curve at normalized position `t`.
    ///
    /// Defined for any real `t`; the reorderer only ever asks for
    /// `t ∈ (0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use upcurve::curve::CurveSelector;
    ///
    /// assert_eq!(CurveSelector::PositiveQuadratic.evaluate(0.5), 0.0);
    /// assert_eq!(CurveSelector::NegativeCubic.evaluate(1.0), 0.0);
    /// ```
    #[must_use]
    pub fn evaluate(self, t: f64) -> f64 {
        match self {
            Self::PositiveLinear => t,
            Self::NegativeLinear => 1.0 - t,
            Self::PositiveQuadratic => 4.0 * t * t - 4.0 * t + 1.0,
            Self::NegativeQuadratic => -4.0 * t * t + 4.0 * t,
            Self::PositiveCubic => 9.0 * t.powi(3) - 13.5 * t * t + 5.5 * t,
            Self::NegativeCubic => -9.0 * t.powi(3) + 13.5 * t * t - 5.5 * t + 1.0,
        }
    }

    /// Exact ordering keys for every position of an `n`-track playlist.
    ///
    /// Key `x` equals `f((x + 1) / n) * 2n³`, which is an integer for all six
    /// curves. Comparing these instead of [`target_values`](Self::target_values)
    /// keeps mathematically equal targets (the mirrored positions of the
    /// quadratics) equal, so ties fall back to position order rather than
    /// floating-point rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// use upcurve::curve::CurveSelector;
    ///
    /// // t = 1/6 and t = 5/6 both map to 5/9
    /// let keys = CurveSelector::NegativeQuadratic.rank_keys(6);
    /// assert_eq!(keys[0], keys[4]);
    /// ```
    #[must_use]
    pub fn rank_keys(self, n: usize) -> Vec<i128> {
        let n = n as i128;
        (1..=n)
            .map(|k| match self {
                Self::PositiveLinear => 2 * k * n * n,
                Self::NegativeLinear => 2 * n * n * n - 2 * k * n * n,
                Self::PositiveQuadratic => (4 * k * k - 4 * k * n + n * n) * 2 * n,
                Self::NegativeQuadratic => (-4 * k * k + 4 * k * n) * 2 * n,
                Self::PositiveCubic => 18 * k * k * k - 27 * k * k * n + 11 * k * n * n,
                Self::NegativeCubic => {
                    -18 * k * k * k + 27 * k * k * n - 11 * k * n * n + 2 * n * n * n
                }
            })
            .collect()
    }

    /// Target value for every position of an `n`-track playlist.
    ///
    /// Position `x` (0-based) is evaluated at `t = (x + 1) / n`, so the last
    /// track always sits at `t = 1`. Returns an empty vector for `n == 0`.
    #[must_use]
    pub fn target_values(self, n: usize) -> Vec<f64> {
        #[allow(clippy::cast_precision_loss)]
        let total = n as f64;
        (0..n)
            .map(|x| {
                #[allow(clippy::cast_precision_loss)]
                let t = (x + 1) as f64 / total;
                self.evaluate(t)
            })
            .collect()
    }
}

impl fmt::Display for CurveSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for CurveSelector {
    type Error = ReorderError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

/// Accepts either the kebab-case name or the menu number.
impl FromStr for CurveSelector {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number)
                .map_err(|_| ReorderError::InvalidSelector(trimmed.to_string()));
        }

        let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|curve| curve.name() == normalized)
            .ok_or_else(|| ReorderError::InvalidSelector(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert_eq!(CurveSelector::PositiveQuadratic.evaluate(0.5), 0.0);
        assert_eq!(CurveSelector::NegativeCubic.evaluate(1.0), 0.0);
        assert_eq!(CurveSelector::PositiveLinear.evaluate(1.0), 1.0);
        assert_eq!(CurveSelector::NegativeLinear.evaluate(1.0), 0.0);
        assert_eq!(CurveSelector::NegativeQuadratic.evaluate(0.5), 1.0);
        assert_eq!(CurveSelector::PositiveCubic.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        for curve in CurveSelector::ALL {
            for step in 1..=20 {
                let t = f64::from(step) / 20.0;
                assert_eq!(curve.evaluate(t).to_bits(), curve.evaluate(t).to_bits());
            }
        }
    }

    #[test]
    fn test_linear_curves_are_strictly_monotonic() {
        let samples: Vec<f64> = (1..=100).map(|i| f64::from(i) / 100.0).collect();

        for pair in samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(CurveSelector::PositiveLinear.evaluate(a) < CurveSelector::PositiveLinear.evaluate(b));
            assert!(CurveSelector::NegativeLinear.evaluate(a) > CurveSelector::NegativeLinear.evaluate(b));
        }
    }

    #[test]
    fn test_target_values_sample_one_based_positions() {
        let values = CurveSelector::PositiveLinear.target_values(4);
        assert_eq!(values, vec![0.25, 0.5, 0.75, 1.0]);

        let values = CurveSelector::NegativeLinear.target_values(2);
        assert_eq!(values, vec![0.5, 0.0]);

        assert!(CurveSelector::PositiveCubic.target_values(0).is_empty());
    }

    #[test]
    fn test_rank_keys_match_scaled_targets() {
        for curve in CurveSelector::ALL {
            for n in 1..30_usize {
                let scale = 2.0 * (n as f64).powi(3);
                let keys = curve.rank_keys(n);
                let targets = curve.target_values(n);
                for (key, target) in keys.iter().zip(&targets) {
                    assert!(
                        (*key as f64 - target * scale).abs() < 1e-6 * scale.max(1.0),
                        "{curve} n={n}: key {key} vs target {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_quadratic_mirror_positions_tie_exactly() {
        for curve in [CurveSelector::PositiveQuadratic, CurveSelector::NegativeQuadratic] {
            for n in 3..60_usize {
                let keys = curve.rank_keys(n);
                // t = (x+1)/n mirrors t' = 1 - t at x' = n - 2 - x
                for x in 0..n - 1 {
                    assert_eq!(keys[x], keys[n - 2 - x], "{curve} n={n} x={x}");
                }
            }
        }
    }

    #[test]
    fn test_menu_numbers_round_trip() {
        for curve in CurveSelector::ALL {
            assert_eq!(CurveSelector::from_number(curve.number()), Ok(curve));
        }
        assert_eq!(CurveSelector::try_from(3), Ok(CurveSelector::PositiveQuadratic));
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        assert_eq!(
            CurveSelector::from_number(0),
            Err(ReorderError::InvalidSelector("0".to_string()))
        );
        assert!(CurveSelector::from_number(7).is_err());
        assert!("42".parse::<CurveSelector>().is_err());
    }

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("negative-cubic".parse::<CurveSelector>(), Ok(CurveSelector::NegativeCubic));
        assert_eq!(" Positive_Quadratic ".parse::<CurveSelector>(), Ok(CurveSelector::PositiveQuadratic));
        assert_eq!("2".parse::<CurveSelector>(), Ok(CurveSelector::NegativeLinear));
        assert_eq!(
            "sideways".parse::<CurveSelector>(),
            Err(ReorderError::InvalidSelector("sideways".to_string()))
        );
    }

    #[test]
    fn test_display_matches_serde_name() {
        for curve in CurveSelector::ALL {
            let json = serde_json::to_string(&curve).unwrap();
            assert_eq!(json, format!("\"{curve}\""));
        }
    }
}
