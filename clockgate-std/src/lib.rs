//! "Standard library" of clockgate nodes.
//!
//! Node names follow the dataflow convention of lowercase identifiers.

#![allow(non_camel_case_types, reason = "dataflow naming convention")]
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

pub mod clock;
pub mod rand;
pub mod toggles;

pub use crate::clock::{alternating_clock, gate};
pub use crate::rand::random_enable;
pub use crate::toggles::toggle_counter;
