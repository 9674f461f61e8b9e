//! Possibly uninitialized values.
//!
//! This modules defines the `Nillable<T>` datatype which implements
//! values of type `T` with an extra element `Nil` that contaminates any
//! expression it is a part of.
//! Unlike `Option<T>`, `Nillable<T>` implements the binary operators
//! that the nodes of the suite apply to their samples.
//!
//! E.g.
//! - `Defined(true) ^ Defined(false)` is `Defined(true)`
//! - `Defined(5) + Nil` is `Nil`
//! - `!Nil` is `Nil`
//!
//! `Nil` is what a stream holds before it has been defined, typically
//! `pre x` during the very first cycle.

use std::fmt;

/// Values of `T` or `Nil`.
#[derive(Debug, Clone, Copy)]
pub enum Nillable<T> {
    /// An actual sample.
    Defined(T),
    /// No sample yet.
    Nil,
}

pub use Nillable::{Defined, Nil};

/// The default value of a `Nillable` is always `Nil`.
impl<T> Default for Nillable<T> {
    #[inline]
    fn default() -> Self {
        Nil
    }
}

impl<T: fmt::Display> fmt::Display for Nillable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Nil => write!(f, "nil"),
            Defined(t) => write!(f, "{t}"),
        }
    }
}

impl<T> Nillable<T> {
    /// This function is the identity, but its type constraints
    /// can help the compiler determine the associated type `T` for `Nil`.
    #[must_use]
    pub fn with_type_of(self, _other: Self) -> Self {
        self
    }

    /// Apply the given function to the inner value.
    #[inline]
    pub fn map<F, U>(self, f: F) -> Nillable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Defined(t) => Defined(f(t)),
            Nil => Nil,
        }
    }

    /// Forget the distinction between `Nil` and `None`.
    #[inline]
    pub fn defined(self) -> Option<T> {
        match self {
            Defined(t) => Some(t),
            Nil => None,
        }
    }
}

/// `Nillable` implements the standard binary operators (not comparison
/// operators though) by mapping them to the inner value if it exists.
macro_rules! nillable_impl_ops_binary {
    ($trait:ident, $func:ident) => {
        impl<T> std::ops::$trait for Nillable<T>
        where
            T: std::ops::$trait<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn $func(self, other: Self) -> Self {
                match (self, other) {
                    (Defined(lhs), Defined(rhs)) => Defined(lhs.$func(rhs)),
                    _ => Nil,
                }
            }
        }
    };
}

nillable_impl_ops_binary!(Add, add);
nillable_impl_ops_binary!(BitOr, bitor);
nillable_impl_ops_binary!(BitXor, bitxor);
nillable_impl_ops_binary!(BitAnd, bitand);

/// `Nillable` implements logical negation by mapping it to the
/// inner value if it exists.
impl<T> std::ops::Not for Nillable<T>
where
    T: std::ops::Not<Output = T>,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|t| !t)
    }
}

impl<T> Nillable<T>
where
    T: PartialEq,
{
    /// Equality test for `Nillable`.
    ///
    /// `Nillable` does not implement equality, because `Nil` contaminates
    /// all expressions it is a part of.
    /// The function `eq` implements only a partial equality that
    /// is not reflexive where `Nil` is not comparable to itself.
    #[inline]
    pub fn eq(self, other: Self) -> Option<bool> {
        match (self, other) {
            (Defined(this), Defined(other)) => Some(this == other),
            _ => None,
        }
    }

    /// Identity test for `Nillable`.
    ///
    /// Determines whether `self` and `other` are identical.
    /// `Nil` is identical to itself, and two `Defined(_)` are
    /// identical if their inner values are `PartialEq`.
    #[inline]
    pub fn is(&self, other: Self) -> bool {
        match (self, other) {
            (Defined(this), Defined(other)) => this == &other,
            (Nil, Nil) => true,
            _ => false,
        }
    }
}

impl Nillable<bool> {
    /// Whether the value holds: `Nil` is not true.
    #[inline]
    pub fn truth(self) -> bool {
        matches!(self, Defined(true))
    }
}

/// Identity assertion.
///
/// Since `Nillable<T>` does not implement `PartialEq`,
/// the canonical way to perform equality assertions is
/// `assert_is!(a, b)` that panics if `a` and `b` are not identical.
#[macro_export]
macro_rules! assert_is {
    ($lhs:expr, $rhs:expr) => {
        if !$lhs.is($rhs) {
            panic!("{} is not identical to {}", $lhs, $rhs.with_type_of($lhs));
        }
    };
}
