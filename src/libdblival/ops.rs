// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval specific operations.
//!
//! Set operations shared with other collections (`Intersection`, `Subset`, `Overlap`, ...) come from `gcollections::ops`.

use gcollections::kind::*;

/// Smallest interval containing both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Range : Collection
{
  fn new(lb: Self::Item, ub: Self::Item) -> Self;
}

pub trait Whole
{
  fn whole() -> Self;
}

/// `x * x` for every point `x`, tighter than the product of an interval with itself.
pub trait Square
{
  fn square(&self) -> Self;
}

/// `self += a * b`.
pub trait AddMul<A = Self, B = Self>
{
  fn add_mul(&mut self, a: A, b: B);
}
