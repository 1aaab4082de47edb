use serde::{Deserialize, Serialize};

/// Number of tick intervals on the value axis (yielding one more tick mark).
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Numeric `[min, max]` range a value axis is scaled against.
///
/// A domain built from no finite values keeps `max == -inf`; callers must check
/// [`Domain::is_empty`] before mapping values through it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scans every finite value of every series.
    ///
    /// A positive minimum is forced to zero so all-positive data starts at the
    /// baseline. Negative minimums are kept as observed.
    pub fn from_series<'a, I>(series: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for values in series {
            for &value in values.iter().filter(|v| v.is_finite()) {
                if value > max {
                    max = value;
                }
                if value < min {
                    min = value;
                }
            }
        }
        if min > 0.0 {
            min = 0.0;
        }
        Self { min, max }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.max == f64::NEG_INFINITY
    }

    /// Divisor used when mapping values; floored to `1` for flat domains.
    #[must_use]
    pub fn span(self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 { 1.0 } else { span }
    }

    /// Fractional position of `value` inside the domain (`0` at the baseline).
    ///
    /// Domains wider than `f64::MAX` are mapped at half scale so finite input
    /// always yields a finite position.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if (self.max - self.min).is_finite() {
            (value - self.min) / self.span()
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }

    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        compute_ticks(self.min, self.max, tick_count)
    }
}

/// Shared domain over a list of series.
#[must_use]
pub fn compute_domain(series: &[&[f64]]) -> Domain {
    Domain::from_series(series.iter().copied())
}

/// Evenly spaced tick values from `min` to `max`, `tick_count + 1` entries.
///
/// The last tick is pinned to `max` so accumulated rounding never moves it.
#[must_use]
pub fn compute_ticks(min: f64, max: f64, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return vec![min];
    }
    let count = tick_count as f64;
    let mut step = (max - min) / count;
    if !step.is_finite() {
        step = max / count - min / count;
    }
    (0..=tick_count)
        .map(|i| {
            if i == tick_count {
                max
            } else {
                min + step * i as f64
            }
        })
        .collect()
}

/// Free-function form of [`Domain::normalize`].
#[must_use]
pub fn normalize(value: f64, domain: Domain) -> f64 {
    domain.normalize(value)
}
