//! Macros to write nodes by hand.
//!
//! A `struct` built with these macros simulates a synchronous dataflow
//! node by
//! - deriving the `Default` trait (or providing a constructor when it owns
//!   resources such as a random generator),
//! - having a `__clock` field of type `usize`,
//! - having a `__trace` boolean field that enables tracing of each step,
//! - having one `Pre<_>` register per stream whose previous value it reads,
//! - implementing the trait `stepping::Step`, of signature
//!   `(&mut self, ty!(...)) -> ty!(...)` that takes the node inputs,
//!   applies one step of computation, and returns the outputs.
//!
//! ### Simple integer counter
//!
//! In dataflow notation, a counter is written
//! ```ml
//! node counter() returns (n : int);
//! let
//!   n = 0 -> pre n + 1;
//! tel;
//! ```
//! and by hand it becomes
//!
//! ```
//! use clockgate_sem::macros::*;
//! use clockgate_sem::registers::Pre;
//! use clockgate_sem::traits::*;
//!
//! #[allow(non_camel_case_types)]
//! #[derive(Default)]
//! pub struct counter {
//!     __clock: usize,
//!     __trace: bool,
//!     n: Pre<i64>,
//! }
//!
//! impl Step for counter {
//!     type Input = ();
//!     type Output = i64;
//!     fn step(&mut self, _: ty!()) -> ty!(int) {
//!         node_trace!(self, "() => counter(n={})", self.n);
//!         let n = later!(self <~ 0; lit!(0), pre!(self; n) + lit!(1));
//!         update!(self, n);
//!         tick!(self);
//!         n
//!     }
//! }
//!
//! let mut c = counter::default();
//! for i in 0..10 {
//!     assert_eq!(c.step(()).trusted(), Some(i));
//! }
//! ```
//! Every stream read through `pre!` must be stored with `update!` before
//! the end of the step, and `tick!` must be invoked exactly once, after
//! all computations.

/// Convert type names of nodes to their internal Rust representation.
/// ```ignore
/// ty_mapping!(int) ~ i64
/// ty_mapping!(bool) ~ bool
/// ty_mapping!(count) ~ usize
/// ty_mapping!(T) ~ T
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! ty_mapping {
    ( int ) => {
        i64
    };
    ( bool ) => {
        bool
    };
    ( count ) => {
        usize
    };
    ( $other:ident ) => {
        $other
    };
}

/// Convert a node type into its internal Rust representation.
///
/// ```ignore
/// ty!() ~ ()
/// ty!(bool) ~ Nillable<bool>
/// ty!(bool, count) ~ (Nillable<bool>, Nillable<usize>)
/// ```
#[macro_export]
macro_rules! ty {
    () => { () };
    ( $t:ident ) => { $crate::nillable::Nillable<$crate::ty_mapping!($t)> };
    ( $( $t:ident ),+ ) => { ( $( $crate::ty!($t), )+ ) };
}

/// Conditional tracing. [pure]
///
/// Usage: `node_trace!(self, "debugging at step {}", self.__clock);` (statement)
/// Assumption: `self` has a field `__trace: bool`.
///
/// If the trace is enabled by means of `self.__trace`, pass all the
/// remaining arguments to a `trace` level event.
#[macro_export]
macro_rules! node_trace {
    ($this:ident, $($fmt:tt)+) => {
        if $this.__trace {
            $crate::__tracing::trace!(target: "clockgate::node", $($fmt)+);
        }
    };
}

/// Remember a variable for the next iteration.
///
/// Usage: `update!(self, $foo)` (statement)
/// Assumption: `self` has a `Pre` field `$foo` AND `$foo` exists as a local variable.
#[macro_export]
macro_rules! update {
    ($this:ident, $var:ident) => {
        $this.$var.set($var)
    };
}

/// The `pre` operator: value of a stream at the previous cycle. [pure]
///
/// Usage: `pre!(self; $var)` (expression)
/// Assumption: `self` has a `Pre` field `$var`.
///
/// This is `Nil` during the first cycle.
#[macro_export]
macro_rules! pre {
    ($this:ident ; $field:ident) => {
        $this.$field.get()
    };
}

/// Wrap a value as a `Nillable`. [pure]
///
/// Usage: `lit!(true)`, `lit!(42)` (expression)
#[macro_export]
macro_rules! lit {
    ($lit:expr) => {
        $crate::nillable::Defined($lit)
    };
}

/// The uninitialized value. [pure]
///
/// Usage: `nil!()` (expression)
#[macro_export]
macro_rules! nil {
    () => {
        $crate::nillable::Nil
    };
}

/// Increment the internal clock. [side-effects: only call once at the end]
///
/// Usage: `tick!(self)` (statement)
/// Assumption: `self` has a field `__clock: usize`.
#[macro_export]
macro_rules! tick {
    ($this:ident) => {
        $this.__clock += 1
    };
}

/// The `->` operator. [pure]
///
/// Usage: `later!(self <~ $dt; $lhs, $rhs)` (expression)
/// Assumption: `self` has a field `__clock: usize`
///
/// For instants before `$dt` (inclusive) it will return the left value,
/// and for instants after `$dt` it will return the right value.
#[macro_export]
macro_rules! later {
    ($this:ident <~ $dt:expr ; $lhs:expr, $rhs:expr) => {
        if $this.__clock > $dt {
            $rhs
        } else {
            $lhs
        }
    };
}

/// Conditional on `Nillable`s. [pure]
///
/// Usage: `ifx!(($b) then { $yes } else { $no })` (expression)
///
/// Will return `$yes` if `$b` holds (`true` and not `Nil`),
/// and `$no` if `$b` does not hold (`false` and not `Nil`).
/// A `Nil` test condition contaminates the entire expression.
#[macro_export]
macro_rules! ifx {
    ( ( $b:expr ) then { $yes:expr } else { $no:expr }) => {
        match $b {
            $crate::nillable::Defined(true) => $yes,
            $crate::nillable::Defined(false) => $no,
            $crate::nillable::Nil => $crate::nil!(),
        }
    };
}
