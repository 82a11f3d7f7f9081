// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordering and positional relations between intervals.
//!
//! `compare` is a coarse ordering where intervals sharing a point are equal. `relation` classifies the position of two intervals in one of the relations of Allen's interval algebra, extended with the empty cases of IEEE-1788 (only reachable through `IntervalRelation::between` since an `Interval` is never empty).
//!
//! ```
//! use dblival::*;
//! use dblival::ops::*;
//! use std::cmp::Ordering;
//!
//! let a = Interval::new(1.0, 2.0);
//! let b = Interval::new(3.0, 4.0);
//! assert_eq!(a.compare(&b), Ordering::Less);
//! assert_eq!(a.relation(&b), IntervalRelation::Before);
//! assert_eq!(Interval::new(1.0, 5.0).relation(&Interval::new(5.0, 9.0)), IntervalRelation::Meets);
//! ```

use crate::interval::Interval;
use std::cmp::Ordering;
use trilean::SKleene;

/// Position of a first interval `a` relative to a second interval `b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntervalRelation {
  /// `a` ends strictly before `b` starts.
  Before,
  /// `a` ends where `b` starts and both are wider than a point.
  Meets,
  /// `a` starts before `b` and ends inside `b`.
  Overlaps,
  /// Same lower bound, `a` ends before `b`.
  Starts,
  /// `a` lies strictly inside `b`.
  ContainedBy,
  /// Same upper bound, `a` starts after `b`.
  Finishes,
  Equals,
  FinishedBy,
  Contains,
  StartedBy,
  OverlappedBy,
  MetBy,
  After,
  BothEmpty,
  FirstEmpty,
  SecondEmpty,
}

impl IntervalRelation
{
  /// Relation of `b` relative to `a` when `self` is the relation of `a` relative to `b`.
  pub fn converse(self) -> IntervalRelation {
    use self::IntervalRelation::*;
    match self {
      Before => After,
      Meets => MetBy,
      Overlaps => OverlappedBy,
      Starts => StartedBy,
      ContainedBy => Contains,
      Finishes => FinishedBy,
      Equals => Equals,
      FinishedBy => Finishes,
      Contains => ContainedBy,
      StartedBy => Starts,
      OverlappedBy => Overlaps,
      MetBy => Meets,
      After => Before,
      BothEmpty => BothEmpty,
      FirstEmpty => SecondEmpty,
      SecondEmpty => FirstEmpty,
    }
  }

  /// Relation between two possibly empty intervals, `None` standing for the empty set.
  pub fn between(a: Option<&Interval>, b: Option<&Interval>) -> IntervalRelation {
    match (a, b) {
      (Some(a), Some(b)) => a.relation(b),
      (None, None) => IntervalRelation::BothEmpty,
      (None, Some(_)) => IntervalRelation::FirstEmpty,
      (Some(_), None) => IntervalRelation::SecondEmpty,
    }
  }
}

fn cmp_bound(a: f64, b: f64) -> Ordering {
  a.partial_cmp(&b).expect("interval bounds are never NaN")
}

impl Interval
{
  /// `Less` if every point of `self` is smaller than every point of `other`, `Greater` in the opposite case, and `Equal` if they share a point.
  pub fn compare(&self, other: &Interval) -> Ordering {
    if self.hi() < other.lo() { Ordering::Less }
    else if self.lo() > other.hi() { Ordering::Greater }
    else { Ordering::Equal }
  }

  pub fn relation(&self, other: &Interval) -> IntervalRelation {
    use std::cmp::Ordering::*;
    use self::IntervalRelation::*;
    let ll = cmp_bound(self.lo(), other.lo());
    let hl = cmp_bound(self.hi(), other.lo());
    let lh = cmp_bound(self.lo(), other.hi());
    let hh = cmp_bound(self.hi(), other.hi());
    if hl == Less {
      return Before;
    }
    if lh == Greater {
      return After;
    }
    match (ll, hh) {
      (Less, Less) => if hl == Equal { Meets } else { Overlaps },
      (Greater, Greater) => if lh == Equal { MetBy } else { OverlappedBy },
      (Equal, Equal) => Equals,
      (Equal, Less) => Starts,
      (Greater, Less) => ContainedBy,
      (Greater, Equal) => Finishes,
      (Equal, Greater) => StartedBy,
      (Less, Greater) => Contains,
      (Less, Equal) => FinishedBy,
    }
  }

  /// Is `x < y` for the points `x` of `self` and `y` of `other`?
  pub fn less(&self, other: &Interval) -> SKleene {
    if self.hi() < other.lo() { SKleene::True }
    else if self.lo() >= other.hi() { SKleene::False }
    else { SKleene::Unknown }
  }

  pub fn less_eq(&self, other: &Interval) -> SKleene {
    if self.hi() <= other.lo() { SKleene::True }
    else if self.lo() > other.hi() { SKleene::False }
    else { SKleene::Unknown }
  }

  pub fn greater(&self, other: &Interval) -> SKleene {
    other.less(self)
  }

  pub fn greater_eq(&self, other: &Interval) -> SKleene {
    other.less_eq(self)
  }
}
