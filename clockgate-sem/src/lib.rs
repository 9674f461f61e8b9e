//! Semantics of clocked streams.
//!
//! A stream is a sequence of samples, one per clock cycle. Nodes are
//! `struct`s implementing [`traits::Step`] that consume the samples of
//! their inputs for one cycle and produce those of their outputs.
//!
//! - [`nillable`] provides the `Nillable` values that streams carry,
//! - [`registers`] provides the memory that implements `pre`,
//! - [`stepping`] provides the `Step` trait and conversions at node boundaries,
//! - [`dsl`] documents the macros to write nodes by hand.

#![warn(
    missing_docs,
    unused_crate_dependencies,
    unused_macro_rules,
    variant_size_differences,
    clippy::allow_attributes_without_reason,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::missing_docs_in_private_items,
    clippy::panic,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unwrap_used,
    clippy::use_debug
)]

pub mod dsl;
pub mod nillable;
pub mod registers;
pub mod stepping;

#[cfg(test)]
mod sanity;

#[doc(hidden)]
pub use tracing as __tracing;

/// Traits that nodes implement and that their users call.
pub mod traits {
    pub use crate::stepping::{Embed, Step, Trusted};
}

/// Macros to write nodes.
pub mod macros {
    pub use crate::{
        assert_is, ifx, later, lit, nil, node_trace, pre, tick, ty, ty_mapping, update,
    };
}
