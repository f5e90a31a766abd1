use rust_decimal::prelude::{Decimal, FromPrimitive, RoundingStrategy};

use crate::engine::Chance;
use crate::error::{ChanceError, Result};

const DEFAULT_LIKELIHOOD: f64 = 50.0;
const DEFAULT_FIXED: u32 = 4;
/// `10^9` scaled `i32` bounds still fit an `i64`.
const MAX_FIXED: u32 = 9;

/// Bounds for [`Chance::natural`], both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalRange {
    /// `[0, max]`.
    UpTo(i32),
    Between { min: i32, max: i32 },
}

/// Options for [`Chance::floating`].
///
/// A missing `max` derives `i32::MAX / 10^fixed`; a missing `min` derives
/// `-max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatOptions {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub fixed: u32,
}

impl FloatOptions {
    pub fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn with_fixed(mut self, fixed: u32) -> Self {
        self.fixed = fixed;
        self
    }
}

impl Default for FloatOptions {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            fixed: DEFAULT_FIXED,
        }
    }
}

impl Chance {
    /// Random integer in `[min, max]`.
    pub fn integer(&mut self, min: i32, max: i32) -> Result<i32> {
        if min > max {
            return Err(ChanceError::Range(format!(
                "integer min ({min}) must be <= max ({max})"
            )));
        }
        Ok(self.source.uniform_int(min, max))
    }

    /// Random integer over the whole `i32` range.
    pub fn any_integer(&mut self) -> i32 {
        self.source.uniform_int(i32::MIN, i32::MAX)
    }

    /// Random non-negative integer; both bounds are inclusive.
    pub fn natural(&mut self, range: NaturalRange) -> Result<i32> {
        let (min, max) = match range {
            NaturalRange::UpTo(max) => (0, max),
            NaturalRange::Between { min, max } => (min, max),
        };
        if min < 0 {
            return Err(ChanceError::Range(format!(
                "natural min ({min}) cannot be negative"
            )));
        }
        if max <= 0 {
            return Err(ChanceError::Range(format!(
                "natural max ({max}) must be greater than zero"
            )));
        }
        if max < min {
            return Err(ChanceError::Range(format!(
                "natural max ({max}) must be >= min ({min})"
            )));
        }
        Ok(self.source.uniform_int(min, max))
    }

    /// Random natural in `[0, i32::MAX]`.
    pub fn any_natural(&mut self) -> i32 {
        self.source.uniform_int(0, i32::MAX)
    }

    /// `true` with `likelihood` percent probability.
    pub fn bool(&mut self, likelihood: f64) -> Result<bool> {
        if !(0.0..=100.0).contains(&likelihood) {
            return Err(ChanceError::Range(format!(
                "likelihood ({likelihood}) must be within [0, 100]"
            )));
        }
        Ok(self.bool_unchecked(likelihood))
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.bool_unchecked(DEFAULT_LIKELIHOOD)
    }

    fn bool_unchecked(&mut self, likelihood: f64) -> bool {
        self.source.uniform_real(0.0, 100.0) < likelihood
    }

    /// Random real with exactly `options.fixed` decimal places.
    ///
    /// The bounds are scaled by `10^fixed`, an integer is drawn in the scaled
    /// range, and the quotient is rounded half-up (ties away from zero).
    pub fn floating(&mut self, options: FloatOptions) -> Result<f64> {
        if options.fixed > MAX_FIXED {
            return Err(ChanceError::Range(format!(
                "fixed ({}) must be <= {MAX_FIXED}",
                options.fixed
            )));
        }
        let (min, max) = float_bounds(options);
        if min > max {
            return Err(ChanceError::Range(format!(
                "floating min ({min}) must be <= max ({max})"
            )));
        }
        Ok(self.floating_unchecked(min, max, options.fixed))
    }

    /// Random real over the derived default range with four decimals.
    pub fn any_floating(&mut self) -> f64 {
        let (min, max) = float_bounds(FloatOptions::default());
        self.floating_unchecked(min, max, DEFAULT_FIXED)
    }

    fn floating_unchecked(&mut self, min: i64, max: i64, fixed: u32) -> f64 {
        let scale = 10_i64.pow(fixed);
        let scaled = self.source.uniform_int(min * scale, max * scale);
        round_half_up(scaled as f64 / scale as f64, fixed)
    }
}

fn float_bounds(options: FloatOptions) -> (i64, i64) {
    let scale = 10_i64.pow(options.fixed);
    let max = options
        .max
        .map(i64::from)
        .unwrap_or(i64::from(i32::MAX) / scale);
    let min = options.min.map(i64::from).unwrap_or(-max);
    (min, max)
}

/// Round to `places` decimals, ties away from zero.
///
/// Values `rust_decimal` cannot represent (NaN, infinities, out of range) are
/// returned unchanged.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64(value) else {
        return value;
    };
    decimal
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::{FloatOptions, float_bounds};

    #[test]
    fn derived_bounds_are_symmetric() {
        let (min, max) = float_bounds(FloatOptions::default());
        assert_eq!(max, 214_748);
        assert_eq!(min, -214_748);
    }

    #[test]
    fn missing_min_mirrors_explicit_max() {
        let options = FloatOptions {
            min: None,
            max: Some(10),
            fixed: 2,
        };
        assert_eq!(float_bounds(options), (-10, 10));
    }

    #[test]
    fn missing_max_is_derived_from_precision() {
        let options = FloatOptions {
            min: Some(5),
            max: None,
            fixed: 9,
        };
        assert_eq!(float_bounds(options), (5, 2));
    }
}
