// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides intervals with double-precision bounds whose arithmetic guarantees enclosure: the exact result of an operation on reals is always contained in the computed interval. Intervals are built from doubles, machine integers and the exact integers and rationals of `num-bigint` and `num-rational`.
//!
//! The set operations are shared with other collections through the traits of `gcollections`, and the operations specific to intervals are in the [ops module](ops/index.html).
//!
//! # Examples
//!
//! For examples see the [interval module](interval/index.html), the [relation module](relation/index.html) or the [rounding module](rounding/index.html).
//!
//! # References
//! * [IEEE 1788-2015 Standard for Interval Arithmetic](https://standards.ieee.org/standard/1788-2015.html)
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)

mod macros;
mod bound;
pub mod error;
pub mod exact;
pub mod rounding;
pub mod interval;
pub mod arithmetic;
pub mod classify;
pub mod relation;
pub mod ops;

pub use crate::classify::IntervalSign;
pub use crate::error::{IntervalError, RoundingModeError};
pub use crate::exact::ExactValue;
pub use crate::interval::Interval;
pub use crate::relation::IntervalRelation;
pub use crate::rounding::{RoundingMode, RoundingScope};
