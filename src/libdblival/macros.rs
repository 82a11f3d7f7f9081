// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Inspired by the macros from the BigUint impl. The operand types are `Copy`, so references are simply dereferenced.
macro_rules! forward_ref_binop {
  (impl $imp:ident for $res:ty, $method:ident, $arg:ty) => {
    impl<'a> $imp<$arg> for &'a $res {
      type Output = $res;

      fn $method(self, other: $arg) -> $res {
        (*self).$method(other)
      }
    }

    impl<'b> $imp<&'b $arg> for $res {
      type Output = $res;

      fn $method(self, other: &$arg) -> $res {
        self.$method(*other)
      }
    }

    impl<'a, 'b> $imp<&'b $arg> for &'a $res {
      type Output = $res;

      fn $method(self, other: &$arg) -> $res {
        (*self).$method(*other)
      }
    }
  };
}

macro_rules! forward_op_assign {
  (impl $imp:ident for $res:ty, $method:ident, $op:ident, $arg:ty) => {
    impl $imp<$arg> for $res {
      fn $method(&mut self, other: $arg) {
        *self = (*self).$op(other);
      }
    }

    impl<'b> $imp<&'b $arg> for $res {
      fn $method(&mut self, other: &$arg) {
        *self = (*self).$op(*other);
      }
    }
  };
}
