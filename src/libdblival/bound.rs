// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bound operations rounded toward negative infinity.
//!
//! Each function returns a double lower or equal to the exact result of the operation, whatever rounding direction the hardware currently applies. The result of the hardware operation is computed first, then its exact error is recovered with an error-free transformation; when the error shows the result lies above the exact value, it steps one ulp down. Exact results are therefore returned unchanged.
//!
//! Intervals store their upper bound negated, so rounding down is the only direction ever needed.

/// Below this magnitude the error terms are no longer exactly representable.
const EXACT_ERROR_THRESHOLD: f64 = f64::MIN_POSITIVE * 9007199254740992.0;

pub(crate) fn add_down(a: f64, b: f64) -> f64 {
  let sum = a + b;
  if sum.is_nan() {
    return f64::NEG_INFINITY;
  }
  if sum.is_infinite() {
    return overflow_down(sum, a.is_finite() && b.is_finite());
  }
  // Fast2Sum: `sum - big` is exact when |big| >= |small|.
  let (big, small) = if a.abs() >= b.abs() { (a, b) } else { (b, a) };
  let err = small - (sum - big);
  if err < 0.0 { sum.next_down() } else { sum }
}

pub(crate) fn mul_down(a: f64, b: f64) -> f64 {
  if a == 0.0 || b == 0.0 {
    return 0.0;
  }
  let product = a * b;
  if product.is_infinite() {
    return overflow_down(product, a.is_finite() && b.is_finite());
  }
  if product.abs() < EXACT_ERROR_THRESHOLD {
    return product.next_down();
  }
  let err = a.mul_add(b, -product);
  if err < 0.0 { product.next_down() } else { product }
}

/// Requires `b != 0`.
pub(crate) fn div_down(a: f64, b: f64) -> f64 {
  debug_assert!(b != 0.0, "Division of a bound by zero.");
  if a == 0.0 || (a.is_finite() && b.is_infinite()) {
    return 0.0;
  }
  let quotient = a / b;
  if quotient.is_nan() {
    return f64::NEG_INFINITY;
  }
  if quotient.is_infinite() {
    return overflow_down(quotient, a.is_finite());
  }
  if quotient.abs() < EXACT_ERROR_THRESHOLD || a.abs() < EXACT_ERROR_THRESHOLD {
    return quotient.next_down();
  }
  // The exact quotient is `quotient + rem / b`.
  let rem = (-quotient).mul_add(b, a);
  if rem != 0.0 && (rem < 0.0) != (b < 0.0) { quotient.next_down() } else { quotient }
}

fn overflow_down(inf: f64, from_finite: bool) -> f64 {
  if inf > 0.0 && from_finite { f64::MAX } else { inf }
}

/// Rounds `-(-a - b)` up: the upper bound of `a + b` computed from negated bounds.
pub(crate) fn add_up(a: f64, b: f64) -> f64 {
  -add_down(-a, -b)
}
