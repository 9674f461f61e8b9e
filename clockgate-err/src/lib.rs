//! Error handling of the clockgate suite.
//!
//! Every fallible operation of the workspace returns [`Result`], and every
//! [`Error`] is built through one of the prebuilt constructors of [`error`]
//! so that messages stay uniform across crates.

#![warn(
    missing_docs,
    unused_crate_dependencies,
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

pub mod error;

pub use error::{config, inconsistent, io, render, Error, Result};
