//! Purpose: Define the stable public Rust API boundary for jsonmin.
//! Exports: Minify types and operations needed by embedders and the CLI.
//! Role: Public, additive-only surface; hides internal document modules.
//! Invariants: This module is the only public path to document primitives.
//! Invariants: Internal modules remain private and are not directly exposed.

mod minify;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use minify::{
    ApiResult, MinifyOutcome, MinifyRequest, WriteReceipt, minify, minify_document,
    suggest_destination,
};
