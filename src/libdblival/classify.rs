// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sign classification and scalar queries (magnitude, midpoint, radius, width).

use crate::bound::*;
use crate::interval::Interval;
use crate::ops::*;

/// Position of an interval with respect to zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntervalSign {
  /// Every point is strictly negative.
  Negative,
  /// The point interval `[0]`.
  Zero,
  /// Every point is strictly positive.
  Positive,
  /// Contains zero, possibly as an endpoint, and at least another point.
  OverlapsZero,
}

impl Interval
{
  pub fn sign(&self) -> IntervalSign {
    if self.lo() > 0.0 {
      IntervalSign::Positive
    }
    else if self.hi() < 0.0 {
      IntervalSign::Negative
    }
    else if self.is_point() {
      IntervalSign::Zero
    }
    else {
      IntervalSign::OverlapsZero
    }
  }

  /// Largest absolute value of the points.
  pub fn mag(&self) -> f64 {
    self.lo().abs().max(self.hi().abs())
  }

  /// Smallest absolute value of the points.
  pub fn mig(&self) -> f64 {
    if self.lo() >= 0.0 { self.lo() }
    else if self.hi() <= 0.0 { -self.hi() }
    else { 0.0 }
  }

  /// A point of the interval close to its center.
  ///
  /// Unbounded intervals saturate to the finite extreme on their infinite side, and the entire interval has midpoint `0`.
  pub fn mid(&self) -> f64 {
    let (lo, hi) = (self.lo(), self.hi());
    if self.is_entire() { 0.0 }
    else if lo == f64::NEG_INFINITY { -f64::MAX }
    else if hi == f64::INFINITY { f64::MAX }
    else if lo == hi { lo }
    else {
      add_down(div_down(lo, 2.0), div_down(hi, 2.0)).max(lo).min(hi)
    }
  }

  /// Upper bound of half the width, infinite for unbounded intervals.
  pub fn rad(&self) -> f64 {
    if self.is_bounded() {
      -div_down(add_down(self.hi_neg(), self.lo()), 2.0)
    }
    else {
      f64::INFINITY
    }
  }

  /// Upper bound of the width, infinite for unbounded intervals.
  pub fn wid(&self) -> f64 {
    add_up(self.hi(), -self.lo())
  }

  /// Encloses the exact midpoint `(lower + upper) / 2`.
  pub fn mid_enclosure(&self) -> Interval {
    if !self.is_bounded() {
      return Interval::whole();
    }
    let (lp, hn) = (self.lo(), self.hi_neg());
    Interval::from_raw(
      div_down(add_down(lp, -hn), 2.0),
      div_down(add_down(hn, -lp), 2.0))
  }

  /// Encloses the exact width `upper - lower`.
  pub fn wid_enclosure(&self) -> Interval {
    if !self.is_bounded() {
      return Interval::whole();
    }
    let (lp, hn) = (self.lo(), self.hi_neg());
    Interval::from_raw(add_down(-hn, -lp), add_down(hn, lp))
  }

  /// Encloses the exact radius `(upper - lower) / 2`.
  pub fn rad_enclosure(&self) -> Interval {
    if !self.is_bounded() {
      return Interval::whole();
    }
    let (lp, hn) = (self.lo(), self.hi_neg());
    Interval::from_raw(
      div_down(add_down(-hn, -lp), 2.0),
      div_down(add_down(hn, lp), 2.0))
  }

  /// `{max(x, s) | x in self}`.
  pub fn max_scalar(&self, s: f64) -> Interval {
    Interval::from_raw(self.lo().max(s), -(self.hi().max(s)))
  }

  /// `{min(x, s) | x in self}`.
  pub fn min_scalar(&self, s: f64) -> Interval {
    Interval::from_raw(self.lo().min(s), -(self.hi().min(s)))
  }
}
