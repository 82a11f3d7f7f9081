// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recoverable failures of the interval engine.
//!
//! Violations of the interval invariant in trusted code paths are reported with `assert!`. The types below are returned where a caller can reasonably recover: switching the floating-point rounding mode, and building an interval from untrusted bounds.

use crate::rounding::RoundingMode;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The floating-point environment refused to switch to the requested rounding mode.
///
/// This is fatal to the enclosing computation: code relying on the hardware rounding register cannot give any enclosure guarantee without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundingModeError {
  pub requested: RoundingMode,
  /// Value returned by `fesetround`, or `-1` if the platform encoding of the mode is unknown.
  pub code: i32,
}

impl Display for RoundingModeError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "switching the rounding mode to {} failed with code {}", self.requested, self.code)
  }
}

impl Error for RoundingModeError {}

/// Bounds that do not describe a non-empty closed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntervalError {
  /// One of the bounds is NaN.
  NotANumber,
  /// The lower bound is greater than the upper bound.
  ReversedBounds { lower: f64, upper: f64 },
  /// Both bounds are the same infinity.
  InfinitePoint(f64),
}

impl Display for IntervalError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match *self {
      IntervalError::NotANumber =>
        f.write_str("interval bound is NaN"),
      IntervalError::ReversedBounds { lower, upper } =>
        write!(f, "lower bound {} is greater than upper bound {}", lower, upper),
      IntervalError::InfinitePoint(x) =>
        write!(f, "point interval at {} is not finite", x),
    }
  }
}

impl Error for IntervalError {}
