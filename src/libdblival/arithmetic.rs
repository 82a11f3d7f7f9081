// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Enclosure-preserving arithmetic.
//!
//! Bounds are computed on the stored fields `(l, -u)` with the round-down primitives of `bound`, so the lower bound is rounded down and the upper bound up.
//!
//! Division by an interval containing zero, even as an endpoint, returns the entire interval. The exact result is unbounded and possibly made of two pieces; callers needing the pieces must test the divisor before dividing.

use crate::bound::*;
use crate::classify::IntervalSign;
use crate::interval::Interval;
use crate::ops::{AddMul, Square, Whole};
use gcollections::ops::Singleton;
use log::trace;
use num_traits::{One, Zero};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Neg for Interval
{
  type Output = Interval;

  fn neg(self) -> Interval {
    Interval::from_raw(self.hi_neg(), self.lo())
  }
}

impl<'a> Neg for &'a Interval
{
  type Output = Interval;

  fn neg(self) -> Interval {
    -*self
  }
}

impl Add for Interval
{
  type Output = Interval;

  fn add(self, other: Interval) -> Interval {
    Interval::from_raw(
      add_down(self.lo(), other.lo()),
      add_down(self.hi_neg(), other.hi_neg()))
  }
}

impl Sub for Interval
{
  type Output = Interval;

  fn sub(self, other: Interval) -> Interval {
    self + (-other)
  }
}

impl Mul for Interval
{
  type Output = Interval;

  fn mul(self, other: Interval) -> Interval {
    let (a, b) = (self, other);
    let (alp, ahn) = (a.lo(), a.hi_neg());
    let (blp, bhn) = (b.lo(), b.hi_neg());
    if a.lo() >= 0.0 && b.lo() >= 0.0 {
      Interval::from_raw(mul_down(alp, blp), mul_down(-ahn, bhn))
    }
    else if a.hi() <= 0.0 && b.hi() <= 0.0 {
      Interval::from_raw(mul_down(ahn, bhn), mul_down(-alp, blp))
    }
    else if a.hi() <= 0.0 && b.lo() >= 0.0 {
      Interval::from_raw(mul_down(alp, -bhn), mul_down(ahn, blp))
    }
    else if a.lo() >= 0.0 && b.hi() <= 0.0 {
      Interval::from_raw(mul_down(-ahn, blp), mul_down(alp, bhn))
    }
    else {
      // At least one operand straddles zero.
      Interval::from_raw(
        mul_down(-ahn, blp).min(mul_down(alp, -bhn)),
        mul_down(-ahn, bhn).min(mul_down(alp, -blp)))
    }
  }
}

impl Div for Interval
{
  type Output = Interval;

  fn div(self, other: Interval) -> Interval {
    let (a, b) = (self, other);
    let (alp, ahn) = (a.lo(), a.hi_neg());
    let (blp, bhn) = (b.lo(), b.hi_neg());
    if blp > 0.0 {
      if alp > 0.0 {
        Interval::from_raw(div_down(alp, -bhn), div_down(ahn, blp))
      }
      else if ahn > 0.0 {
        Interval::from_raw(div_down(alp, blp), div_down(ahn, -bhn))
      }
      else {
        Interval::from_raw(div_down(alp, blp), div_down(ahn, blp))
      }
    }
    else if bhn > 0.0 {
      if alp > 0.0 {
        Interval::from_raw(div_down(ahn, bhn), div_down(-alp, blp))
      }
      else if ahn > 0.0 {
        Interval::from_raw(div_down(-ahn, blp), div_down(alp, bhn))
      }
      else {
        Interval::from_raw(div_down(ahn, bhn), div_down(alp, bhn))
      }
    }
    else {
      trace!("division by {} containing zero gives the entire interval", b);
      Interval::whole()
    }
  }
}

impl Add<f64> for Interval
{
  type Output = Interval;

  fn add(self, other: f64) -> Interval {
    Interval::from_raw(add_down(self.lo(), other), add_down(self.hi_neg(), -other))
  }
}

impl Sub<f64> for Interval
{
  type Output = Interval;

  fn sub(self, other: f64) -> Interval {
    self + (-other)
  }
}

impl Mul<f64> for Interval
{
  type Output = Interval;

  fn mul(self, other: f64) -> Interval {
    if other >= 0.0 {
      Interval::from_raw(mul_down(other, self.lo()), mul_down(other, self.hi_neg()))
    }
    else {
      Interval::from_raw(mul_down(-other, self.hi_neg()), mul_down(-other, self.lo()))
    }
  }
}

impl Mul<Interval> for f64
{
  type Output = Interval;

  fn mul(self, other: Interval) -> Interval {
    other * self
  }
}

forward_ref_binop!(impl Add for Interval, add, Interval);
forward_ref_binop!(impl Sub for Interval, sub, Interval);
forward_ref_binop!(impl Mul for Interval, mul, Interval);
forward_ref_binop!(impl Div for Interval, div, Interval);
forward_ref_binop!(impl Add for Interval, add, f64);
forward_ref_binop!(impl Sub for Interval, sub, f64);
forward_ref_binop!(impl Mul for Interval, mul, f64);

forward_op_assign!(impl AddAssign for Interval, add_assign, add, Interval);
forward_op_assign!(impl SubAssign for Interval, sub_assign, sub, Interval);
forward_op_assign!(impl MulAssign for Interval, mul_assign, mul, Interval);
forward_op_assign!(impl DivAssign for Interval, div_assign, div, Interval);
forward_op_assign!(impl AddAssign for Interval, add_assign, add, f64);
forward_op_assign!(impl SubAssign for Interval, sub_assign, sub, f64);
forward_op_assign!(impl MulAssign for Interval, mul_assign, mul, f64);

impl Square for Interval
{
  fn square(&self) -> Interval {
    let (lp, hn) = (self.lo(), self.hi_neg());
    match self.sign() {
      IntervalSign::Positive => Interval::from_raw(mul_down(lp, lp), mul_down(-hn, hn)),
      IntervalSign::Negative => Interval::from_raw(mul_down(hn, hn), mul_down(-lp, lp)),
      IntervalSign::Zero => *self,
      IntervalSign::OverlapsZero => Interval::from_raw(0.0, mul_down(-lp, lp).min(mul_down(-hn, hn))),
    }
  }
}

impl AddMul for Interval
{
  fn add_mul(&mut self, a: Interval, b: Interval) {
    *self += a * b;
  }
}

impl Zero for Interval
{
  fn zero() -> Interval {
    Interval::singleton(0.0)
  }

  fn is_zero(&self) -> bool {
    self.sign() == IntervalSign::Zero
  }
}

impl One for Interval
{
  fn one() -> Interval {
    Interval::singleton(1.0)
  }
}

impl Sum for Interval
{
  fn sum<I: Iterator<Item = Interval>>(iter: I) -> Interval {
    iter.fold(Interval::zero(), |acc, x| acc + x)
  }
}

impl<'a> Sum<&'a Interval> for Interval
{
  fn sum<I: Iterator<Item = &'a Interval>>(iter: I) -> Interval {
    iter.fold(Interval::zero(), |acc, x| acc + x)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::ops::Range;
  use crate::rounding::RoundingScope;
  use gcollections::ops::{Bounded, Contains};
  use num_bigint::BigInt;
  use num_rational::BigRational;
  use quickcheck::TestResult;
  use quickcheck_macros::quickcheck;

  fn i(l: f64, u: f64) -> Interval {
    Interval::new(l, u)
  }

  fn exact(x: f64) -> BigRational {
    BigRational::from_float(x).unwrap()
  }

  fn encloses(i: &Interval, v: &BigRational) -> bool {
    (i.lower() == f64::NEG_INFINITY || &exact(i.lower()) <= v) &&
    (i.upper() == f64::INFINITY || v <= &exact(i.upper()))
  }

  fn bounded(l: f64, u: f64) -> Option<Interval> {
    if !l.is_finite() || !u.is_finite() { None }
    else { Some(Interval::new(l.min(u), l.max(u))) }
  }

  /// Exact points of `i`: both bounds, the midpoint and a point at one third.
  fn samples(i: &Interval) -> Vec<BigRational> {
    let (l, u) = (exact(i.lower()), exact(i.upper()));
    let third = BigRational::new(BigInt::from(1), BigInt::from(3));
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));
    vec![
      l.clone(),
      u.clone(),
      &l + (&u - &l) * &half,
      &l + (&u - &l) * &third,
    ]
  }

  fn check_binary<F, G>(l1: f64, u1: f64, l2: f64, u2: f64, op: F, exact_op: G) -> TestResult where
    F: Fn(Interval, Interval) -> Interval,
    G: Fn(&BigRational, &BigRational) -> Option<BigRational>
  {
    let (a, b) = match (bounded(l1, u1), bounded(l2, u2)) {
      (Some(a), Some(b)) => (a, b),
      _ => return TestResult::discard(),
    };
    let r = op(a, b);
    for x in samples(&a) {
      for y in samples(&b) {
        if let Some(v) = exact_op(&x, &y) {
          if !encloses(&r, &v) {
            return TestResult::error(format!("{:?} does not enclose {} for {:?} and {:?}", r, v, a, b));
          }
        }
      }
    }
    TestResult::passed()
  }

  #[test]
  fn concrete_scenarios() {
    let _scope = RoundingScope::downward().ok();
    assert_eq!(Interval::from(3) + Interval::from(4), Interval::singleton(7.0));
    assert_eq!(i(1.0, 2.0) * i(-3.0, -1.0), i(-6.0, -1.0));
    assert_eq!(-(-i(1.0, 2.0)), i(1.0, 2.0));
    assert_eq!(-i(1.0, 2.0), i(-2.0, -1.0));
    assert_eq!(i(1.0, 2.0) - i(0.5, 4.0), i(-3.0, 1.5));
  }

  #[test]
  fn multiplication_sign_cases() {
    let cases = vec![
      (1, i(1.0, 2.0), i(3.0, 4.0), i(3.0, 8.0)),
      (2, i(-2.0, -1.0), i(-4.0, -3.0), i(3.0, 8.0)),
      (3, i(-2.0, -1.0), i(3.0, 4.0), i(-8.0, -3.0)),
      (4, i(1.0, 2.0), i(-4.0, -3.0), i(-8.0, -3.0)),
      (5, i(-1.0, 2.0), i(3.0, 4.0), i(-4.0, 8.0)),
      (6, i(-1.0, 2.0), i(-4.0, 3.0), i(-8.0, 6.0)),
      (7, i(-2.0, -1.0), i(-1.0, 3.0), i(-6.0, 2.0)),
      (8, i(0.0, 0.0), Interval::whole(), Interval::singleton(0.0)),
      (9, i(1.0, 2.0), i(1.0, f64::INFINITY), i(1.0, f64::INFINITY)),
      (10, i(0.0, 2.0), i(-1.0, 0.0), i(-2.0, 0.0)),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a * b, expected, "test #{} of multiplication", id);
      assert_eq!(b * a, expected, "test #{} of commuted multiplication", id);
    }
  }

  #[test]
  fn division_cases() {
    let cases = vec![
      (1, i(2.0, 4.0), i(1.0, 2.0), i(1.0, 4.0)),
      (2, i(-4.0, -2.0), i(1.0, 2.0), i(-4.0, -1.0)),
      (3, i(-4.0, 2.0), i(1.0, 2.0), i(-4.0, 2.0)),
      (4, i(2.0, 4.0), i(-2.0, -1.0), i(-4.0, -1.0)),
      (5, i(-4.0, -2.0), i(-2.0, -1.0), i(1.0, 4.0)),
      (6, i(-4.0, 2.0), i(-2.0, -1.0), i(-2.0, 4.0)),
      (7, i(1.0, 2.0), i(1.0, f64::INFINITY), i(0.0, 2.0)),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a / b, expected, "test #{} of division", id);
    }
    let third = Interval::from(1) / Interval::from(3);
    assert!(encloses(&third, &BigRational::new(BigInt::from(1), BigInt::from(3))));
    assert_eq!(third.upper(), third.lower().next_up());
  }

  #[test]
  fn division_by_zero_containing_interval() {
    for a in &[i(1.0, 2.0), i(-5.0, 3.0), Interval::singleton(0.0), Interval::whole()] {
      assert_eq!(*a / i(-1.0, 1.0), Interval::whole());
      assert_eq!(*a / i(0.0, 1.0), Interval::whole());
      assert_eq!(*a / i(-1.0, 0.0), Interval::whole());
      assert_eq!(*a / Interval::singleton(0.0), Interval::whole());
    }
  }

  #[test]
  fn scalar_operations() {
    assert_eq!(i(1.0, 2.0) * 3.0, i(3.0, 6.0));
    assert_eq!(i(1.0, 2.0) * -3.0, i(-6.0, -3.0));
    assert_eq!(-3.0 * i(1.0, 2.0), i(-6.0, -3.0));
    assert_eq!(Interval::whole() * 0.0, Interval::singleton(0.0));
    assert_eq!(i(1.0, 2.0) + 0.5, i(1.5, 2.5));
    assert_eq!(i(1.0, 2.0) - 0.5, i(0.5, 1.5));
    let r = i(1.0, 1.0) + 1e-20;
    assert_eq!(r, i(1.0, 1.0f64.next_up()));
  }

  #[test]
  fn squaring() {
    assert_eq!(i(2.0, 3.0).square(), i(4.0, 9.0));
    assert_eq!(i(-3.0, -2.0).square(), i(4.0, 9.0));
    assert_eq!(i(-2.0, 3.0).square(), i(0.0, 9.0));
    assert_eq!(i(-3.0, 2.0).square(), i(0.0, 9.0));
    assert_eq!(Interval::zero().square(), Interval::zero());
    assert_eq!(i(-2.0, 3.0) * i(-2.0, 3.0), i(-6.0, 9.0));
    assert_eq!(Interval::whole().square(), i(0.0, f64::INFINITY));
  }

  #[test]
  fn compound_assignment_and_sum() {
    let mut r = Interval::from(1);
    r += i(1.0, 2.0);
    assert_eq!(r, i(2.0, 3.0));
    r *= &i(-1.0, -1.0);
    assert_eq!(r, i(-3.0, -2.0));
    r /= Interval::from(2);
    assert_eq!(r, i(-1.5, -1.0));
    r -= 1.0;
    assert_eq!(r, i(-2.5, -2.0));
    r.add_mul(i(1.0, 2.0), i(3.0, 4.0));
    assert_eq!(r, i(0.5, 6.0));
    let total: Interval = vec![i(1.0, 2.0), i(3.0, 4.0), Interval::one()].into_iter().sum();
    assert_eq!(total, i(5.0, 7.0));
    assert_eq!(&i(1.0, 2.0) + &i(1.0, 1.0), i(2.0, 3.0));
    assert!(Interval::zero().is_zero());
  }

  #[test]
  fn rounding_of_repeated_sum() {
    let tenth = Interval::from(BigRational::new(BigInt::from(1), BigInt::from(10)));
    let total: Interval = std::iter::repeat(tenth).take(10).sum();
    assert!(total.contains(&1.0));
    assert!(total.lower() < 1.0 && total.upper() > 1.0);
  }

  #[quickcheck]
  fn addition_encloses(l1: f64, u1: f64, l2: f64, u2: f64) -> TestResult {
    check_binary(l1, u1, l2, u2, |a, b| a + b, |x, y| Some(x + y))
  }

  #[quickcheck]
  fn subtraction_encloses(l1: f64, u1: f64, l2: f64, u2: f64) -> TestResult {
    check_binary(l1, u1, l2, u2, |a, b| a - b, |x, y| Some(x - y))
  }

  #[quickcheck]
  fn multiplication_encloses(l1: f64, u1: f64, l2: f64, u2: f64) -> TestResult {
    check_binary(l1, u1, l2, u2, |a, b| a * b, |x, y| Some(x * y))
  }

  #[quickcheck]
  fn division_encloses(l1: f64, u1: f64, l2: f64, u2: f64) -> TestResult {
    check_binary(l1, u1, l2, u2, |a, b| a / b,
      |x, y| if y.is_zero() { None } else { Some(x / y) })
  }

  #[quickcheck]
  fn square_encloses(l: f64, u: f64) -> TestResult {
    let a = match bounded(l, u) {
      Some(a) => a,
      None => return TestResult::discard(),
    };
    let r = a.square();
    TestResult::from_bool(r.lower() >= 0.0 && samples(&a).iter().all(|x| encloses(&r, &(x * x))))
  }
}
