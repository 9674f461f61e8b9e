//! Conversions at the boundary of nodes, and the trait of all nodes.
//!
//! We define two traits that are opposite in intent. `Embed` and
//! `Trusted` describe conversions to and from `Nillable` types, with
//! tuple unpacking.
//!
//! `Step` is the general trait for all nodes, and the inputs
//! and outputs of the node are described in terms of embed.

use crate::nillable::{Defined, Nillable};

/// Scalars that streams are allowed to carry.
mod sealed {
    /// Sample types of streams.
    pub trait Sealed: Copy {}
    impl Sealed for bool {}
    impl Sealed for i64 {}
    impl Sealed for usize {}
}

/// Lift plain values (and tuples of them) into the world of streams.
pub trait Embed {
    /// Nillable counterpart of `Self`.
    type Target;
    /// Wrap as defined values.
    fn embed(self) -> Self::Target;
}

/// Get plain values (and tuples of them) back out of streams.
pub trait Trusted {
    /// Plain counterpart of `Self`.
    type Target;
    /// `None` if any component is `Nil`.
    fn trusted(self) -> Option<Self::Target>;
}

impl<T> Embed for T
where
    T: sealed::Sealed,
{
    type Target = Nillable<T>;
    fn embed(self) -> Nillable<T> {
        Defined(self)
    }
}

impl<T> Trusted for Nillable<T> {
    type Target = T;
    fn trusted(self) -> Option<T> {
        self.defined()
    }
}

macro_rules! embed_trusted_for_tuple {
    ( ( $( $i:tt : $T:ident ),* ) ) => {
        impl< $( $T ),* > Embed for ( $( $T, )* )
        where $( $T : Embed ),*
        {
            type Target = ( $( <$T>::Target, )* );
            #[allow(clippy::unused_unit, reason = "macro also covers the empty tuple")]
            fn embed(self) -> Self::Target {
                ( $( self.$i.embed(), )* )
            }
        }

        impl< $( $T ),* > Trusted for ( $( $T, )* )
        where $( $T : Trusted ),*
        {
            type Target = ( $( <$T>::Target, )* );
            #[allow(clippy::unused_unit, reason = "macro also covers the empty tuple")]
            fn trusted(self) -> Option<Self::Target> {
                Some(( $( self.$i.trusted()?, )* ))
            }
        }
    }
}

embed_trusted_for_tuple!(());
embed_trusted_for_tuple!((0: T0));
embed_trusted_for_tuple!((0: T0, 1: T1));
embed_trusted_for_tuple!((0: T0, 1: T1, 2: T2));
embed_trusted_for_tuple!((0: T0, 1: T1, 2: T2, 3: T3));

/// A node: a stream function that advances by one cycle at each call.
///
/// Inputs and outputs are described by their plain types, and `step`
/// exchanges their `Nillable` counterparts.
pub trait Step {
    /// Plain type of the inputs.
    type Input: Embed;
    /// Plain type of the outputs.
    type Output: Embed;
    /// Consume the inputs of the current cycle and produce its outputs.
    fn step(&mut self, input: <Self::Input as Embed>::Target) -> <Self::Output as Embed>::Target;
}
