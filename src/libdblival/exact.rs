// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Boundary with exact integer and rational arithmetic.
//!
//! An interval is built from an exact value through the few queries of `ExactValue`. It is implemented for the machine integers, for `BigInt` and for `BigRational`.

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;

/// Number of significant bits of a double.
pub const F64_MANTISSA_DIGITS: u64 = f64::MANTISSA_DIGITS as u64;

pub trait ExactValue {
  /// Sign of the value, as the ordering of the value against zero.
  fn cmp_zero(&self) -> Ordering;

  /// Number of bits between the most and the least significant set bits, both included. `None` if the value has no finite binary expansion. Zero has a precision of `0`.
  fn precision(&self) -> Option<u64>;

  /// Nearest double, possibly infinite.
  fn to_f64_nearest(&self) -> f64;

  /// Exact comparison with a finite double.
  fn cmp_f64(&self, d: f64) -> Ordering;

  /// Nearest double in the direction of zero.
  fn to_f64_toward_zero(&self) -> f64 {
    let d = self.to_f64_nearest();
    if d.is_infinite() {
      return f64::MAX.copysign(d);
    }
    match (self.cmp_zero(), self.cmp_f64(d)) {
      (Ordering::Greater, Ordering::Less) => d.next_down(),
      (Ordering::Less, Ordering::Greater) => d.next_up(),
      _ => d,
    }
  }
}

/// `true` if `v` is a finite double, subnormals included.
pub fn is_exactly_representable<V: ExactValue + ?Sized>(v: &V) -> bool {
  match v.precision() {
    Some(0) => true,
    Some(p) if p <= F64_MANTISSA_DIGITS => {
      let d = v.to_f64_nearest();
      d.is_finite() && v.cmp_f64(d) == Ordering::Equal
    }
    _ => false,
  }
}

fn u128_precision(v: u128) -> u64 {
  if v == 0 { 0 }
  else { (128 - v.leading_zeros() - v.trailing_zeros()) as u64 }
}

fn cmp_i128_f64(v: i128, d: f64) -> Ordering {
  debug_assert!(d.is_finite());
  const LIMIT: f64 = 170141183460469231731687303715884105728.0; // 2^127
  if d >= LIMIT {
    return Ordering::Less;
  }
  if d < -LIMIT {
    return Ordering::Greater;
  }
  let t = d.trunc();
  match v.cmp(&(t as i128)) {
    Ordering::Equal => {
      let frac = d - t;
      if frac > 0.0 { Ordering::Less }
      else if frac < 0.0 { Ordering::Greater }
      else { Ordering::Equal }
    }
    ord => ord,
  }
}

macro_rules! machine_integer_exact_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl ExactValue for $t
    {
      fn cmp_zero(&self) -> Ordering {
        (*self as i128).cmp(&0)
      }

      fn precision(&self) -> Option<u64> {
        Some(u128_precision((*self as i128).unsigned_abs()))
      }

      fn to_f64_nearest(&self) -> f64 {
        *self as f64
      }

      fn cmp_f64(&self, d: f64) -> Ordering {
        cmp_i128_f64(*self as i128, d)
      }
    }
  )*}
}

machine_integer_exact_impl!(i32, i64, u32, u64);

fn sign_ordering(sign: Sign) -> Ordering {
  match sign {
    Sign::Minus => Ordering::Less,
    Sign::NoSign => Ordering::Equal,
    Sign::Plus => Ordering::Greater,
  }
}

fn big_precision(v: &BigInt) -> u64 {
  v.trailing_zeros().map_or(0, |tz| v.bits() - tz)
}

fn exact_f64(d: f64) -> BigRational {
  BigRational::from_float(d).expect("comparison with a non-finite double")
}

impl ExactValue for BigInt
{
  fn cmp_zero(&self) -> Ordering {
    sign_ordering(self.sign())
  }

  fn precision(&self) -> Option<u64> {
    Some(big_precision(self))
  }

  fn to_f64_nearest(&self) -> f64 {
    self.to_f64().unwrap_or_else(|| f64::INFINITY.copysign(sign_f64(self.sign())))
  }

  fn cmp_f64(&self, d: f64) -> Ordering {
    BigRational::from_integer(self.clone()).cmp(&exact_f64(d))
  }
}

impl ExactValue for BigRational
{
  fn cmp_zero(&self) -> Ordering {
    self.cmp(&BigRational::zero())
  }

  /// Rationals are kept normalized: the value has a finite binary expansion iff the denominator is a power of two.
  fn precision(&self) -> Option<u64> {
    let denom = self.denom();
    if denom.trailing_zeros().map_or(false, |tz| tz + 1 == denom.bits()) {
      Some(big_precision(self.numer()))
    } else {
      None
    }
  }

  fn to_f64_nearest(&self) -> f64 {
    self.to_f64().unwrap_or_else(|| f64::INFINITY.copysign(sign_f64(self.numer().sign())))
  }

  fn cmp_f64(&self, d: f64) -> Ordering {
    self.cmp(&exact_f64(d))
  }
}

fn sign_f64(sign: Sign) -> f64 {
  if sign == Sign::Minus { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
  use super::*;
  use num_bigint::BigInt;

  fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
  }

  #[test]
  fn machine_integer_precision() {
    assert_eq!(0i64.precision(), Some(0));
    assert_eq!(1i64.precision(), Some(1));
    assert_eq!((-12i64).precision(), Some(2));
    assert_eq!(i64::MIN.precision(), Some(1));
    assert_eq!(i64::MAX.precision(), Some(63));
    assert_eq!(u64::MAX.precision(), Some(64));
    assert_eq!(((1i64 << 53) + 1).precision(), Some(54));
  }

  #[test]
  fn representability() {
    assert!(is_exactly_representable(&0i64));
    assert!(is_exactly_representable(&((1i64 << 53) - 1)));
    assert!(!is_exactly_representable(&((1i64 << 53) + 1)));
    assert!(is_exactly_representable(&(1i64 << 62)));
    assert!(is_exactly_representable(&rat(3, 4)));
    assert!(!is_exactly_representable(&rat(1, 10)));
    assert!(!is_exactly_representable(&(BigInt::from(1) << 1024u32)));
    let below_min_positive = BigRational::new(BigInt::from((1i64 << 53) - 1), BigInt::from(1) << 1075u32);
    assert!(!is_exactly_representable(&below_min_positive));
    assert!(is_exactly_representable(&BigRational::from_float(f64::MIN_POSITIVE / 4.0).unwrap()));
    assert!(is_exactly_representable(&BigRational::from_float(5e-324).unwrap()));
  }

  #[test]
  fn comparison_with_doubles() {
    assert_eq!(3i64.cmp_f64(3.0), Ordering::Equal);
    assert_eq!(3i64.cmp_f64(3.5), Ordering::Less);
    assert_eq!((-3i64).cmp_f64(-3.5), Ordering::Greater);
    assert_eq!(i64::MAX.cmp_f64(9223372036854775808.0), Ordering::Less);
    assert_eq!(rat(1, 10).cmp_f64(0.1), Ordering::Less);
    assert_eq!(BigInt::from(7).cmp_f64(6.999), Ordering::Greater);
  }

  #[test]
  fn truncation() {
    assert!(rat(1, 10).to_f64_toward_zero() < 0.1);
    assert_eq!(rat(1, 10).to_f64_toward_zero(), 0.1f64.next_down());
    assert_eq!(rat(-1, 10).to_f64_toward_zero(), -(0.1f64.next_down()));
    assert_eq!(rat(1, 3).to_f64_toward_zero(), 1.0 / 3.0);
    assert_eq!(((1i64 << 53) + 1).to_f64_toward_zero(), 9007199254740992.0);
    assert_eq!((BigInt::from(1) << 1100u32).to_f64_toward_zero(), f64::MAX);
    assert_eq!((-(BigInt::from(1) << 1100u32)).to_f64_toward_zero(), -f64::MAX);
  }
}
