//! Rewriting LaTeX-flavoured mathematics into Lurch notation

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod acid;
pub mod config;
pub mod document;
pub mod error;
pub mod rule;
pub mod syntax;
pub mod table;

pub use table::{latex_to_lurch, RuleTable};
