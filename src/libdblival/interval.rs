// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed and non-empty interval with double-precision bounds.
//!
//! An interval `[l..u]` with `l <= u` denotes every real `x` such that `l <= x <= u`. Bounds are finite or infinite, never NaN, and a point interval `[x..x]` is always finite. There is no empty interval: operations that could produce one (such as the intersection of disjoint intervals) require the caller to check beforehand, for example with `checked_intersection` or `Interval::compare`.
//!
//! Every operation returns an *enclosure*: the exact mathematical result on the reals is contained in the computed interval, even after floating-point rounding. Inexact bounds are rounded outward by one ulp at most.
//!
//! # Examples
//!
//! ```rust
//! use dblival::Interval;
//! use dblival::ops::*;
//! use gcollections::ops::*;
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//!
//! let a = Interval::new(1.0, 2.0);
//! let b = Interval::new(-3.0, -1.0);
//! assert_eq!(a * b, Interval::new(-6.0, -1.0));
//! assert_eq!(Interval::from(3) + Interval::from(4), Interval::singleton(7.0));
//!
//! // 1/10 is not a double: the enclosure is one ulp wide.
//! let tenth = Interval::from(BigRational::new(BigInt::from(1), BigInt::from(10)));
//! assert_eq!(tenth.upper(), 0.1);
//! assert_eq!(tenth.lower(), 0.1f64.next_down());
//! assert_eq!(format!("{}", a.hull(&Interval::singleton(5.0))), "[1,5]");
//! ```
//!
//! # Representation
//!
//! The upper bound is stored negated. Rounding both stored fields toward negative infinity then moves the lower bound down and the upper bound up, so a single rounding direction serves both ends.

use crate::bound::*;
use crate::error::IntervalError;
use crate::exact::{self, ExactValue};
use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::*;
use num_bigint::BigInt;
use num_rational::BigRational;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Error, Formatter};

#[derive(Copy, Clone, PartialEq)]
pub struct Interval {
  lo_pos: f64,
  hi_neg: f64,
}

impl Interval
{
  /// Builds an interval from its stored fields. Invariant: `lo_pos <= -hi_neg`.
  pub(crate) fn from_raw(lo_pos: f64, hi_neg: f64) -> Interval {
    debug_assert!(!lo_pos.is_nan() && !hi_neg.is_nan(), "Interval bound is NaN.");
    debug_assert!(lo_pos <= -hi_neg,
      "Interval lower bound {} is greater than its upper bound {}.", lo_pos, -hi_neg);
    Interval { lo_pos, hi_neg }
  }

  #[inline]
  pub(crate) fn lo(&self) -> f64 {
    self.lo_pos
  }

  #[inline]
  pub(crate) fn hi(&self) -> f64 {
    -self.hi_neg
  }

  #[inline]
  pub(crate) fn hi_neg(&self) -> f64 {
    self.hi_neg
  }

  /// Checked version of `Range::new`.
  pub fn try_new(lower: f64, upper: f64) -> Result<Interval, IntervalError> {
    if lower.is_nan() || upper.is_nan() {
      Err(IntervalError::NotANumber)
    }
    else if lower > upper {
      Err(IntervalError::ReversedBounds { lower, upper })
    }
    else if lower == upper && lower.is_infinite() {
      Err(IntervalError::InfinitePoint(lower))
    }
    else {
      Ok(Interval::from_raw(lower, -upper))
    }
  }

  /// `[center - radius..center + radius]`, rounded outward.
  ///
  /// It does not depend on the ambient rounding mode, so values already rounded conservatively by the caller can be passed directly.
  pub fn from_center_radius(center: f64, radius: f64) -> Interval {
    assert!(radius >= 0.0, "Radius {} of an interval must be non-negative.", radius);
    Interval::from_raw(add_down(center, -radius), add_down(-center, -radius))
  }

  /// Smallest interval with double bounds containing `v`.
  ///
  /// `v` is returned as a point if it is a double. Otherwise the double nearest to `v` toward zero is taken and the interval is widened by one ulp away from zero, which is enough since `v` lies strictly between that double and its successor in magnitude.
  pub fn from_exact<V: ExactValue + ?Sized>(v: &V) -> Interval {
    if exact::is_exactly_representable(v) {
      return Interval::singleton(v.to_f64_nearest());
    }
    let d = v.to_f64_toward_zero();
    match v.cmp_zero() {
      Ordering::Less => Interval::from_raw(d.next_down(), -d),
      Ordering::Greater => Interval::from_raw(d, -d.next_up()),
      Ordering::Equal => Interval::singleton(0.0),
    }
  }

  /// `Some(self ∩ other)`, or `None` if the intervals are disjoint.
  pub fn checked_intersection(&self, other: &Interval) -> Option<Interval> {
    if self.overlap(other) { Some(self.intersection(other)) }
    else { None }
  }

  pub fn is_point(&self) -> bool {
    self.lo().is_finite() && self.lo() == self.hi()
  }

  /// Both bounds are infinite.
  pub fn is_entire(&self) -> bool {
    self.lo_pos == f64::NEG_INFINITY && self.hi_neg == f64::NEG_INFINITY
  }

  pub fn is_bounded(&self) -> bool {
    self.lo().is_finite() && self.hi().is_finite()
  }
}

impl Collection for Interval
{
  type Item = f64;
}

impl Range for Interval
{
  fn new(lb: f64, ub: f64) -> Interval {
    match Interval::try_new(lb, ub) {
      Ok(i) => i,
      Err(e) => panic!("Cannot build the interval [{}..{}]: {}.", lb, ub, e),
    }
  }
}

impl Bounded for Interval
{
  fn lower(&self) -> f64 {
    self.lo()
  }

  fn upper(&self) -> f64 {
    self.hi()
  }
}

impl Singleton for Interval
{
  fn singleton(x: f64) -> Interval {
    assert!(x.is_finite(), "Point interval {} must be finite.", x);
    Interval::from_raw(x, -x)
  }
}

impl Whole for Interval
{
  fn whole() -> Interval {
    Interval::from_raw(f64::NEG_INFINITY, f64::NEG_INFINITY)
  }
}

impl From<f64> for Interval
{
  fn from(x: f64) -> Interval {
    Interval::singleton(x)
  }
}

macro_rules! from_exact_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl From<$t> for Interval
    {
      fn from(v: $t) -> Interval {
        Interval::from_exact(&v)
      }
    }

    impl<'a> From<&'a $t> for Interval
    {
      fn from(v: &'a $t) -> Interval {
        Interval::from_exact(v)
      }
    }
  )*}
}

from_exact_impl!(i32, i64, u32, u64, BigInt, BigRational);

impl Contains for Interval
{
  fn contains(&self, value: &f64) -> bool {
    self.lo() <= *value && *value <= self.hi()
  }
}

impl Subset for Interval
{
  fn is_subset(&self, other: &Interval) -> bool {
    other.lo() <= self.lo() && self.hi() <= other.hi()
  }
}

impl ProperSubset for Interval
{
  fn is_proper_subset(&self, other: &Interval) -> bool {
    self.is_subset(other) && self != other
  }
}

impl Overlap for Interval
{
  fn overlap(&self, other: &Interval) -> bool {
    self.hi() >= other.lo() && self.lo() <= other.hi()
  }
}

impl Disjoint for Interval
{
  fn is_disjoint(&self, other: &Interval) -> bool {
    !self.overlap(other)
  }
}

impl Intersection for Interval
{
  type Output = Interval;

  /// Requires the intervals to overlap, see `checked_intersection`.
  fn intersection(&self, other: &Interval) -> Interval {
    Interval::from_raw(
      self.lo_pos.max(other.lo_pos),
      self.hi_neg.max(other.hi_neg))
  }
}

impl Hull for Interval
{
  type Output = Interval;

  fn hull(&self, other: &Interval) -> Interval {
    Interval::from_raw(
      self.lo_pos.min(other.lo_pos),
      self.hi_neg.min(other.hi_neg))
  }
}

impl Display for Interval
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    let positive_zero = |x: f64| if x == 0.0 { 0.0 } else { x };
    let (lo, hi) = (positive_zero(self.lo()), positive_zero(self.hi()));
    if lo > hi {
      formatter.write_str("[]")
    }
    else if self.is_point() {
      write!(formatter, "[{}]", lo)
    }
    else {
      if lo.is_infinite() { formatter.write_str("(-infty")?; }
      else { write!(formatter, "[{}", lo)?; }
      formatter.write_str(",")?;
      if hi.is_infinite() { formatter.write_str("infty)") }
      else { write!(formatter, "{}]", hi) }
    }
  }
}

impl Debug for Interval
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.debug_struct("Interval")
      .field("lower", &self.lo())
      .field("upper", &self.hi())
      .finish()
  }
}

impl Serialize for Interval
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut tuple = serializer.serialize_tuple(2)?;
    tuple.serialize_element(&self.lo())?;
    tuple.serialize_element(&self.hi())?;
    tuple.end()
  }
}

impl<'de> Deserialize<'de> for Interval
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct IntervalVisitor;

    impl<'de> Visitor<'de> for IntervalVisitor
    {
      type Value = Interval;

      fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("tuple of two ordered numbers")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
      where
        A: SeqAccess<'de>,
      {
        let lower = seq.next_element::<f64>()?
          .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let upper = seq.next_element::<f64>()?
          .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let mut extra_elements = 0;
        while seq.next_element::<de::IgnoredAny>()?.is_some() {
          extra_elements += 1;
        }
        if extra_elements > 0 {
          return Err(de::Error::invalid_length(2 + extra_elements, &self));
        }
        Interval::try_new(lower, upper).map_err(de::Error::custom)
      }
    }

    deserializer.deserialize_tuple(2, IntervalVisitor)
  }
}

pub trait ToInterval {
  fn to_interval(self) -> Interval;
}

impl ToInterval for Interval {
  fn to_interval(self) -> Interval { self }
}

impl ToInterval for (f64, f64) {
  fn to_interval(self) -> Interval {
    let (a, b) = self;
    Interval::new(a, b)
  }
}

impl ToInterval for f64 {
  fn to_interval(self) -> Interval {
    Interval::singleton(self)
  }
}
