//! Purpose: Shared library crate used by the `jsonmin` CLI and tests.
//! Exports: `api` (minify requests, outcomes, errors, exit-code mapping).
//! Role: Library backing the binary; `api` is the supported embedding surface.
//! Invariants: Internal modules stay private; everything public routes via `api`.
//! Invariants: Minify operations prefer explicit inputs/outputs over hidden state.
pub mod api;
mod core;
mod json;
