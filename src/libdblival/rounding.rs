// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scoped control of the floating-point rounding direction.
//!
//! The rounding direction is a per-thread register shared by every floating-point operation. A `RoundingScope` switches it for the lifetime of a value and restores the previous direction when dropped, including during unwinding.
//!
//! ```rust
//! use dblival::rounding::{RoundingMode, RoundingScope};
//!
//! let before = RoundingMode::current();
//! {
//!   let scope = RoundingScope::downward().expect("rounding mode is supported");
//!   assert_eq!(scope.mode(), RoundingMode::Downward);
//!   assert_eq!(RoundingMode::current(), Some(RoundingMode::Downward));
//! }
//! assert_eq!(RoundingMode::current(), before);
//! ```
//!
//! Interval operations of this crate compute their own directed rounding and stay correct under any mode; a scope is what a caller needs when it mixes raw `f64` arithmetic with intervals.

use crate::error::RoundingModeError;
use log::{debug, error};
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;
use std::os::raw::c_int;

#[cfg_attr(all(unix, not(any(target_os = "macos", target_os = "ios"))), link(name = "m"))]
extern "C" {
  fn fegetround() -> c_int;
  fn fesetround(mode: c_int) -> c_int;
}

// Encodings of the C `FE_*` macros.
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(target_env = "msvc")))]
mod fe {
  use std::os::raw::c_int;
  pub const TONEAREST: Option<c_int> = Some(0x000);
  pub const DOWNWARD: Option<c_int> = Some(0x400);
  pub const UPWARD: Option<c_int> = Some(0x800);
  pub const TOWARDZERO: Option<c_int> = Some(0xc00);
}

#[cfg(all(any(target_arch = "arm", target_arch = "aarch64"), not(target_env = "msvc")))]
mod fe {
  use std::os::raw::c_int;
  pub const TONEAREST: Option<c_int> = Some(0x000000);
  pub const UPWARD: Option<c_int> = Some(0x400000);
  pub const DOWNWARD: Option<c_int> = Some(0x800000);
  pub const TOWARDZERO: Option<c_int> = Some(0xc00000);
}

#[cfg(target_env = "msvc")]
mod fe {
  use std::os::raw::c_int;
  pub const TONEAREST: Option<c_int> = Some(0x000);
  pub const UPWARD: Option<c_int> = Some(0x100);
  pub const DOWNWARD: Option<c_int> = Some(0x200);
  pub const TOWARDZERO: Option<c_int> = Some(0x300);
}

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
mod fe {
  use std::os::raw::c_int;
  pub const TONEAREST: Option<c_int> = Some(0);
  pub const TOWARDZERO: Option<c_int> = Some(1);
  pub const DOWNWARD: Option<c_int> = Some(2);
  pub const UPWARD: Option<c_int> = Some(3);
}

#[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
mod fe {
  use std::os::raw::c_int;
  pub const TONEAREST: Option<c_int> = Some(0);
  pub const TOWARDZERO: Option<c_int> = Some(1);
  pub const UPWARD: Option<c_int> = Some(2);
  pub const DOWNWARD: Option<c_int> = Some(3);
}

#[cfg(not(any(
  target_arch = "x86", target_arch = "x86_64",
  target_arch = "arm", target_arch = "aarch64",
  target_env = "msvc",
  target_arch = "riscv32", target_arch = "riscv64",
  target_arch = "powerpc", target_arch = "powerpc64")))]
mod fe {
  use std::os::raw::c_int;
  pub const TONEAREST: Option<c_int> = None;
  pub const DOWNWARD: Option<c_int> = None;
  pub const UPWARD: Option<c_int> = None;
  pub const TOWARDZERO: Option<c_int> = None;
}

/// Direction in which inexact floating-point results are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
  ToNearest,
  Downward,
  Upward,
  TowardZero,
}

impl RoundingMode {
  /// Rounding direction currently active on this thread, `None` if the platform reports a value this crate does not know.
  pub fn current() -> Option<RoundingMode> {
    RoundingMode::from_raw(unsafe { fegetround() })
  }

  fn raw(self) -> Option<c_int> {
    match self {
      RoundingMode::ToNearest => fe::TONEAREST,
      RoundingMode::Downward => fe::DOWNWARD,
      RoundingMode::Upward => fe::UPWARD,
      RoundingMode::TowardZero => fe::TOWARDZERO,
    }
  }

  fn from_raw(raw: c_int) -> Option<RoundingMode> {
    [RoundingMode::ToNearest, RoundingMode::Downward, RoundingMode::Upward, RoundingMode::TowardZero]
      .iter()
      .cloned()
      .find(|mode| mode.raw() == Some(raw))
  }
}

impl Display for RoundingMode {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(match *self {
      RoundingMode::ToNearest => "to-nearest",
      RoundingMode::Downward => "downward",
      RoundingMode::Upward => "upward",
      RoundingMode::TowardZero => "toward-zero",
    })
  }
}

/// Guard making a rounding mode active until it is dropped.
///
/// Acquiring the mode that is already active performs no switch, and dropping such a guard performs no restore, so scopes nest freely. Guards are bound to the thread that created them.
#[must_use = "the previous rounding mode is restored as soon as the scope is dropped"]
pub struct RoundingScope {
  mode: RoundingMode,
  previous: c_int,
  changed: bool,
  _thread_bound: PhantomData<*const ()>,
}

impl RoundingScope {
  pub fn acquire(mode: RoundingMode) -> Result<RoundingScope, RoundingModeError> {
    let requested = mode.raw().ok_or(RoundingModeError { requested: mode, code: -1 })?;
    let previous = unsafe { fegetround() };
    let changed = previous != requested;
    if changed {
      let code = unsafe { fesetround(requested) };
      if code != 0 {
        error!("fesetround({}) failed with code {}", requested, code);
        return Err(RoundingModeError { requested: mode, code: code as i32 });
      }
      debug!("rounding mode switched to {}", mode);
    }
    Ok(RoundingScope {
      mode,
      previous,
      changed,
      _thread_bound: PhantomData,
    })
  }

  /// Makes rounding toward negative infinity active.
  pub fn downward() -> Result<RoundingScope, RoundingModeError> {
    RoundingScope::acquire(RoundingMode::Downward)
  }

  pub fn mode(&self) -> RoundingMode {
    self.mode
  }

  /// `true` if the acquisition switched the rounding register.
  pub fn changed(&self) -> bool {
    self.changed
  }
}

impl Drop for RoundingScope {
  fn drop(&mut self) {
    if self.changed {
      let code = unsafe { fesetround(self.previous) };
      if code != 0 {
        error!("fesetround({}) failed with code {} while releasing {}", self.previous, code, self.mode);
      }
      else {
        debug!("rounding mode {} released", self.mode);
      }
    }
  }
}

#[cfg(all(test, any(target_arch = "x86_64", target_arch = "aarch64")))]
mod tests {
  use super::*;

  #[test]
  fn scope_restores_previous_mode() {
    let before = RoundingMode::current();
    {
      let scope = RoundingScope::downward().unwrap();
      assert_eq!(scope.mode(), RoundingMode::Downward);
      assert_eq!(RoundingMode::current(), Some(RoundingMode::Downward));
    }
    assert_eq!(RoundingMode::current(), before);
  }

  #[test]
  fn nested_scope_is_noop() {
    let outer = RoundingScope::acquire(RoundingMode::Upward).unwrap();
    assert!(outer.changed());
    {
      let inner = RoundingScope::acquire(RoundingMode::Upward).unwrap();
      assert!(!inner.changed());
    }
    assert_eq!(RoundingMode::current(), Some(RoundingMode::Upward));
    drop(outer);
    assert_eq!(RoundingMode::current(), Some(RoundingMode::ToNearest));
  }

  #[test]
  fn scope_is_restored_on_unwind() {
    let result = std::panic::catch_unwind(|| {
      let _scope = RoundingScope::acquire(RoundingMode::TowardZero).unwrap();
      panic!("leaving the scope abnormally");
    });
    assert!(result.is_err());
    assert_eq!(RoundingMode::current(), Some(RoundingMode::ToNearest));
  }

  #[test]
  fn failed_restore_leaves_mode_untouched() {
    let before = RoundingMode::current();
    let scope = RoundingScope {
      mode: RoundingMode::Downward,
      previous: -1,
      changed: true,
      _thread_bound: PhantomData,
    };
    drop(scope);
    assert_eq!(RoundingMode::current(), before);
  }

  #[test]
  fn raw_round_trip() {
    for mode in [RoundingMode::ToNearest, RoundingMode::Downward, RoundingMode::Upward, RoundingMode::TowardZero].iter() {
      assert_eq!(RoundingMode::from_raw(mode.raw().unwrap()), Some(*mode));
    }
  }
}
